use std::env;
use std::path::{Path, PathBuf};

use fs::file_reader::FileReader;
use tracing::{debug, info, info_span, warn};

use crate::parameters::error::BuildParameterError;
use crate::parameters::store::ParameterStore;
use crate::parameters::ParameterLookup;
use crate::properties::{parse, ParameterMap};
use crate::writer::service_message::StdoutWriterFactory;
use crate::writer::{TeamCityWriter, TeamCityWriterFactory};

/// Environment variable the build agent sets to the location of the build properties file.
pub const BUILD_PROPERTIES_FILE_ENV: &str = "TEAMCITY_BUILD_PROPERTIES_FILE";

/// Parameters of the running build.
///
/// Built either from the properties file written by the build agent, in which case parameters
/// set at runtime are reported back to TeamCity, or standalone for local runs where nothing
/// can be reported. The mode is decided at construction and never changes.
pub struct BuildParameters<F: TeamCityWriterFactory = StdoutWriterFactory> {
    store: ParameterStore,
    mode: Mode<F>,
}

enum Mode<F: TeamCityWriterFactory> {
    Standalone,
    TeamCity(Reporter<F>),
}

/// Holds the writer factory until the first parameter is reported, then the single writer
/// it created.
struct Reporter<F: TeamCityWriterFactory> {
    writer_factory: F,
    writer: Option<F::Writer>,
}

impl<F: TeamCityWriterFactory> Reporter<F> {
    fn new(writer_factory: F) -> Self {
        Self {
            writer_factory,
            writer: None,
        }
    }

    fn writer(&mut self) -> &mut F::Writer {
        let writer_factory = &self.writer_factory;
        self.writer.get_or_insert_with(|| {
            debug!("creating TeamCity service message writer");
            writer_factory.create_teamcity_writer()
        })
    }
}

impl<F: TeamCityWriterFactory> BuildParameters<F> {
    /// Parameters for a run outside TeamCity: nothing is defined and nothing can be set.
    pub fn standalone() -> Self {
        info!("no build properties file provided, running standalone");
        Self {
            store: ParameterStore::default(),
            mode: Mode::Standalone,
        }
    }

    /// Reads the build properties file at `path`.
    ///
    /// A missing or empty path yields [`BuildParameters::standalone`]. A file that does not
    /// exist or cannot be read is not an error: the parameters start empty but reporting is
    /// still enabled.
    pub fn from_file<R: FileReader>(
        path: Option<&Path>,
        file_reader: &R,
        writer_factory: F,
    ) -> Self {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            return Self::standalone();
        };

        let _span = info_span!("build_properties", path = %path.display()).entered();
        info!("loading build properties");
        Self {
            store: ParameterStore::new(load_parameters(path, file_reader)),
            mode: Mode::TeamCity(Reporter::new(writer_factory)),
        }
    }

    /// Same as [`BuildParameters::from_file`] with the path taken from the
    /// `TEAMCITY_BUILD_PROPERTIES_FILE` environment variable.
    pub fn from_env<R: FileReader>(file_reader: &R, writer_factory: F) -> Self {
        let path = env::var_os(BUILD_PROPERTIES_FILE_ENV).map(PathBuf::from);
        Self::from_file(path.as_deref(), file_reader, writer_factory)
    }

    pub fn is_teamcity_mode(&self) -> bool {
        matches!(self.mode, Mode::TeamCity(_))
    }

    pub fn try_get_parameter_value(&self, key: &str) -> Option<&str> {
        self.store.try_get_parameter_value(key)
    }

    /// Sets a parameter for the rest of the build and reports it to TeamCity.
    ///
    /// Fails with [`BuildParameterError::MissingBuildParameter`] when running standalone.
    pub fn set_parameter_value(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), BuildParameterError> {
        match &mut self.mode {
            Mode::Standalone => Err(BuildParameterError::MissingBuildParameter(key.to_string())),
            Mode::TeamCity(reporter) => {
                reporter.writer().write_build_parameter(key, value)?;
                self.store.set_parameter_value(key, value);
                Ok(())
            }
        }
    }

    /// Every defined parameter ordered by key, runtime values included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.store.iter()
    }
}

impl<F: TeamCityWriterFactory> ParameterLookup for BuildParameters<F> {
    fn get_parameter_value(&self, key: &str) -> Result<&str, BuildParameterError> {
        self.store.get_parameter_value(key)
    }
}

fn load_parameters<R: FileReader>(path: &Path, file_reader: &R) -> ParameterMap {
    if !file_reader.exists(path) {
        warn!(
            "build properties file {} does not exist, no parameters loaded",
            path.display()
        );
        return ParameterMap::default();
    }

    match file_reader.read(path) {
        Ok(content) => {
            let parameters = parse(&content);
            debug!("{} build parameters loaded", parameters.len());
            parameters
        }
        Err(err) => {
            warn!(
                "unable to read build properties file {}: {}",
                path.display(),
                err
            );
            ParameterMap::default()
        }
    }
}
