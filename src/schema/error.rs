//! Error types for schema construction.

use thiserror::Error;

/// Errors detected while building a [`SchemaRegistry`](super::SchemaRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two types or enums share a name.
    #[error("Type {0} is declared more than once")]
    DuplicateType(String),

    /// A property refers to a type or enum that is not registered.
    #[error("Property {property} of {type_name} refers to unknown type {target}")]
    UnknownType {
        type_name: String,
        property: String,
        target: String,
    },

    /// A type derives from a base that is not registered.
    #[error("Type {type_name} derives from unknown base type {base}")]
    UnknownBase { type_name: String, base: String },

    /// A base chain leads back to the type itself.
    #[error("Base type chain of {0} is cyclic")]
    CyclicBase(String),

    /// A declared default does not fit the property type.
    #[error("Default value of {type_name}.{property} does not match its type: {message}")]
    InvalidDefault {
        type_name: String,
        property: String,
        message: String,
    },

    /// An enum declares no members.
    #[error("Enum {0} declares no members")]
    EmptyEnum(String),
}
