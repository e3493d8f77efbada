use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::build_parameters::BUILD_PROPERTIES_FILE_ENV;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    /// Build properties file written by the TeamCity agent. Without it the tool runs standalone.
    #[arg(short = 'f', long, env = BUILD_PROPERTIES_FILE_ENV)]
    properties_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the value of a parameter
    Get { key: String },
    /// Set a parameter and report it to TeamCity
    Set { key: String, value: String },
    /// Print every parameter as key=value
    List,
}

impl Cli {
    /// Parses command line arguments
    pub fn init_build_params_cli() -> Self {
        Self::parse()
    }

    pub fn properties_file(&self) -> Option<PathBuf> {
        self.properties_file.clone()
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from([
            "teamcity-build-params",
            "--properties-file",
            "/tmp/teamcity.build.properties",
            "get",
            "agent.name",
        ])
        .unwrap();

        assert_eq!(
            cli.properties_file(),
            Some(PathBuf::from("/tmp/teamcity.build.properties"))
        );
        assert_eq!(
            cli.command(),
            &Command::Get {
                key: "agent.name".to_string()
            }
        );
    }

    #[test]
    fn test_parse_set() {
        let cli =
            Cli::try_parse_from(["teamcity-build-params", "-f", "a.properties", "set", "k", "v"])
                .unwrap();

        assert_eq!(
            cli.command(),
            &Command::Set {
                key: "k".to_string(),
                value: "v".to_string()
            }
        );
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["teamcity-build-params"]).is_err());
    }
}
