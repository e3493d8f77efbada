pub mod service_message;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("error writing service message: `{0}`")]
    Io(#[from] io::Error),
}

/// Reports build parameters to the TeamCity server.
pub trait TeamCityWriter {
    fn write_build_parameter(&mut self, key: &str, value: &str) -> Result<(), WriterError>;
}

pub trait TeamCityWriterFactory {
    type Writer: TeamCityWriter;

    fn create_teamcity_writer(&self) -> Self::Writer;
}
