//! The crate error type

use std::path::PathBuf;

use thiserror::Error;

use super::kind::ErrorKind;
use crate::base::DocumentLine;

pub type IonResult<T> = Result<T, IonError>;

/// Errors that can occur while reading an ION document.
#[derive(Debug, Error)]
pub enum IonError {
    #[error("Root node {root} could not be found in document.")]
    RootNodeNotFound { root: String },

    #[error("{message}")]
    InvalidRootNode { message: String },

    #[error("{message} At document line {line}.")]
    TextFileParser { line: DocumentLine, message: String },

    #[error("{message} At document line {line}.")]
    InvalidNode { line: DocumentLine, message: String },

    #[error("{message} At document line {line}.")]
    InvalidAttribute { line: DocumentLine, message: String },

    #[error("{message} At document line {line}.")]
    DuplicateAttribute { line: DocumentLine, message: String },

    #[error("{message} At document line {line}.")]
    RequiredFieldNotFound { line: DocumentLine, message: String },

    #[error("{message} At document line {line}.")]
    AttributeCast { line: DocumentLine, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot convert field {field} of {type_name}: {message}")]
    SchemaMismatch {
        type_name: String,
        field: String,
        message: String,
    },
}

impl IonError {
    pub fn root_not_found(root: impl Into<String>) -> Self {
        Self::RootNodeNotFound { root: root.into() }
    }

    pub fn invalid_root(message: impl Into<String>) -> Self {
        Self::InvalidRootNode {
            message: message.into(),
        }
    }

    pub fn text_file_parser(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::TextFileParser {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_node(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_attribute(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            line,
            message: message.into(),
        }
    }

    pub fn duplicate_attribute(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::DuplicateAttribute {
            line,
            message: message.into(),
        }
    }

    pub fn required_field(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::RequiredFieldNotFound {
            line,
            message: message.into(),
        }
    }

    pub fn attribute_cast(line: DocumentLine, message: impl Into<String>) -> Self {
        Self::AttributeCast {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn schema_mismatch(
        type_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            type_name: type_name.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RootNodeNotFound { .. } => ErrorKind::RootNodeNotFound,
            Self::InvalidRootNode { .. } => ErrorKind::InvalidRootNode,
            Self::TextFileParser { .. } => ErrorKind::TextFileParser,
            Self::InvalidNode { .. } => ErrorKind::InvalidNode,
            Self::InvalidAttribute { .. } => ErrorKind::InvalidAttribute,
            Self::DuplicateAttribute { .. } => ErrorKind::DuplicateAttribute,
            Self::RequiredFieldNotFound { .. } => ErrorKind::RequiredFieldNotFound,
            Self::AttributeCast { .. } => ErrorKind::AttributeCast,
            Self::Io { .. } => ErrorKind::Io,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
        }
    }

    /// The offending document line, for line-scoped errors
    pub fn line(&self) -> Option<DocumentLine> {
        match self {
            Self::TextFileParser { line, .. }
            | Self::InvalidNode { line, .. }
            | Self::InvalidAttribute { line, .. }
            | Self::DuplicateAttribute { line, .. }
            | Self::RequiredFieldNotFound { line, .. }
            | Self::AttributeCast { line, .. } => Some(*line),
            _ => None,
        }
    }
}
