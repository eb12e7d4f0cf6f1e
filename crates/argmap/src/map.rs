//! Parse results and typed accessors.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::AccessError;

/// A parsed value, shaped by the kind of argument that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Positional argument.
    Str(String),
    /// String flag or list flag values.
    List(Vec<String>),
    /// Boolean flag; only ever stored as `true`.
    Bool(bool),
    /// Arguments parsed inside an invoked command.
    Command(ArgMap),
}

/// Parsed arguments keyed by argument id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgMap {
    values: IndexMap<String, ArgValue>,
}

impl ArgMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `key` received a value.
    pub fn is_present(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Values of a string flag or list flag.
    pub fn list(&self, key: &str) -> Result<&[String], AccessError> {
        match self.lookup(key)? {
            ArgValue::List(values) => Ok(values),
            _ => Err(wrong_shape(key, "a list")),
        }
    }

    /// The value at `index` of a string flag or list flag.
    pub fn list_value(&self, key: &str, index: usize) -> Result<&str, AccessError> {
        let values = self.list(key)?;
        values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| AccessError::IndexOutOfBounds {
                key: key.to_string(),
                index,
                len: values.len(),
            })
    }

    /// Boolean flag state. Absent (or non-boolean) keys read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(ArgValue::Bool(true)))
    }

    /// Value of a positional argument.
    pub fn positional(&self, key: &str) -> Result<&str, AccessError> {
        match self.lookup(key)? {
            ArgValue::Str(value) => Ok(value),
            _ => Err(wrong_shape(key, "a string")),
        }
    }

    /// Arguments parsed inside the command `key`.
    pub fn command(&self, key: &str) -> Result<&ArgMap, AccessError> {
        match self.lookup(key)? {
            ArgValue::Command(map) => Ok(map),
            _ => Err(wrong_shape(key, "a command")),
        }
    }

    /// The command invoked in this scope, if any.
    ///
    /// A command consumes the rest of the input, so a scope holds at most one.
    pub fn invoked_command(&self) -> Option<(&str, &ArgMap)> {
        self.values.iter().find_map(|(k, v)| match v {
            ArgValue::Command(map) => Some((k.as_str(), map)),
            _ => None,
        })
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: ArgValue) {
        self.values.insert(key.into(), value);
    }

    fn lookup(&self, key: &str) -> Result<&ArgValue, AccessError> {
        self.values
            .get(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.to_string()))
    }
}

fn wrong_shape(key: &str, expected: &'static str) -> AccessError {
    AccessError::WrongShape {
        key: key.to_string(),
        expected,
    }
}

impl<K: Into<String>> FromIterator<(K, ArgValue)> for ArgMap {
    fn from_iter<T: IntoIterator<Item = (K, ArgValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
