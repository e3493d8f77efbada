use std::collections::BTreeMap;

use super::error::BuildParameterError;
use super::ParameterLookup;
use crate::properties::ParameterMap;

// Values set at runtime, they shadow the parsed ones.
type OverrideMap = BTreeMap<String, String>;

/// Parameters read from the properties file plus the ones set while the build runs.
#[derive(Debug, Default)]
pub struct ParameterStore {
    parameters: ParameterMap,
    overrides: OverrideMap,
}

impl ParameterStore {
    pub fn new(parameters: ParameterMap) -> Self {
        Self {
            parameters,
            overrides: OverrideMap::default(),
        }
    }

    pub fn try_get_parameter_value(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| self.parameters.get(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.overrides.contains_key(key) || self.parameters.contains_key(key)
    }

    pub fn set_parameter_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(key.into(), value.into());
    }

    /// The parameters exactly as parsed, without overrides.
    pub fn file_parameters(&self) -> &ParameterMap {
        &self.parameters
    }

    /// Iterates over every defined parameter, ordered by key, with overrides applied.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut merged: BTreeMap<&str, &str> = self.parameters.iter().collect();
        merged.extend(
            self.overrides
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        merged.into_iter()
    }
}

impl ParameterLookup for ParameterStore {
    fn get_parameter_value(&self, key: &str) -> Result<&str, BuildParameterError> {
        self.try_get_parameter_value(key)
            .ok_or_else(|| BuildParameterError::MissingParameter(key.to_string()))
    }
}
