pub mod parser;

use std::collections::BTreeMap;

pub use parser::parse;

/// The parameters as the build agent wrote them to the properties file.
///
/// Keys are case sensitive and unique. Once parsed the map is never mutated,
/// runtime changes live in the [`ParameterStore`](crate::parameters::store::ParameterStore)
/// override map instead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParameterMap(BTreeMap<String, String>);

impl ParameterMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // later occurrences of a key replace earlier ones
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
