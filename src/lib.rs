//! Typed access to the build properties a TeamCity agent hands to a build, and reporting of
//! build parameters back to the server through service messages.

pub mod build_parameters;
pub mod cli;
pub mod logging;
pub mod parameters;
pub mod properties;
pub mod writer;

pub use build_parameters::BuildParameters;
pub use parameters::error::BuildParameterError;
pub use parameters::ParameterLookup;
