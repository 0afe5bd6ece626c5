//! Error kind discriminants

use std::fmt;

/// Kind of an [`IonError`](super::IonError)
///
/// Copyable tag for matching on failures without destructuring the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The root type line is absent from the whole document
    RootNodeNotFound,
    /// The schema root disagrees with the requested root type
    InvalidRootNode,
    /// Structural or lexical violation in the text
    TextFileParser,
    /// A node has no corresponding schema type or property
    InvalidNode,
    /// An attribute matches no declared property
    InvalidAttribute,
    /// An attribute name occurs more than once on a node
    DuplicateAttribute,
    /// A required property is missing from attributes and children
    RequiredFieldNotFound,
    /// An attribute value cannot be converted to its property type
    AttributeCast,
    /// The document could not be read
    Io,
    /// A typed model disagrees with the materialized value
    SchemaMismatch,
}

impl ErrorKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RootNodeNotFound => "RootNodeNotFound",
            Self::InvalidRootNode => "InvalidRootNode",
            Self::TextFileParser => "TextFileParserError",
            Self::InvalidNode => "InvalidNodeError",
            Self::InvalidAttribute => "InvalidAttributeError",
            Self::DuplicateAttribute => "DuplicateAttributeError",
            Self::RequiredFieldNotFound => "RequiredFieldNotFoundError",
            Self::AttributeCast => "AttributeCastError",
            Self::Io => "IoError",
            Self::SchemaMismatch => "SchemaMismatch",
        }
    }

    /// Whether errors of this kind point at a document line
    pub fn is_line_scoped(&self) -> bool {
        !matches!(
            self,
            Self::RootNodeNotFound | Self::InvalidRootNode | Self::Io | Self::SchemaMismatch
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
