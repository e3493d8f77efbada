use std::error::Error;
use std::process;

use fs::LocalFile;
use tracing::debug;

use teamcity_build_params::{
    cli::{Cli, Command},
    logging::Logging,
    writer::service_message::StdoutWriterFactory,
    BuildParameterError, BuildParameters, ParameterLookup,
};

fn main() -> Result<(), Box<dyn Error>> {
    // init logging singleton
    Logging::try_init()?;

    let cli = Cli::init_build_params_cli();
    debug!("CLI: {:?}", cli);

    let mut build_parameters: BuildParameters = BuildParameters::from_file(
        cli.properties_file().as_deref(),
        &LocalFile,
        StdoutWriterFactory,
    );

    if let Err(err) = run(cli.command(), &mut build_parameters) {
        eprintln!("{}", err);
        process::exit(1);
    }
    Ok(())
}

fn run(
    command: &Command,
    build_parameters: &mut BuildParameters,
) -> Result<(), BuildParameterError> {
    match command {
        Command::Get { key } => println!("{}", build_parameters.get_parameter_value(key)?),
        Command::Set { key, value } => build_parameters.set_parameter_value(key, value)?,
        Command::List => {
            for (key, value) in build_parameters.iter() {
                println!("{}={}", key, value);
            }
        }
    }
    Ok(())
}
