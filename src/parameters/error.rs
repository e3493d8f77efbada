use thiserror::Error;

use crate::writer::WriterError;

#[derive(Error, Debug)]
pub enum BuildParameterError {
    #[error("parameter `{0}` is not defined")]
    MissingParameter(String),

    #[error("cannot set build parameter `{0}` outside a TeamCity build")]
    MissingBuildParameter(String),

    #[error("error reporting build parameter: `{0}`")]
    Report(#[from] WriterError),
}
