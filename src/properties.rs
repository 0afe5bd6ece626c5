//! Build metadata passed explicitly to whoever needs it.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("Property argument {0} is missing an assignment. Use the form key=value.")]
    MissingAssignment(String),
}

/// Paths and extra key/value settings describing one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub output_directory: String,
    pub file_path: String,
    pub project_directory: String,
    pub command_line: String,
    other_properties: IndexMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_directory(mut self, dir: impl Into<String>) -> Self {
        self.output_directory = dir.into();
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    pub fn with_project_directory(mut self, dir: impl Into<String>) -> Self {
        self.project_directory = dir.into();
        self
    }

    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    /// Parse `key=value` arguments. The key ends at the first `=`; a key
    /// given twice keeps the later value.
    pub fn set_other_properties<I, S>(&mut self, args: I) -> Result<(), PropertyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                return Err(PropertyError::MissingAssignment(arg.to_string()));
            };
            self.other_properties.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.other_properties.get(key).map(String::as_str)
    }

    /// Extra settings in first-seen key order
    pub fn other_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.other_properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
