//! # ion-reader
//!
//! Reader for ION documents: an indentation-sensitive node format whose
//! trees are materialized into object graphs through a schema registry.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! reader       → IonReader facade (open, parse, check root presence)
//!   ↓
//! materialize  → validation and schema-driven binding
//!   ↓
//! schema       → SchemaRegistry, descriptors, Value/Object, FromIon
//!   ↓
//! parser       → root discovery, line lexer, tree assembly
//!   ↓
//! syntax       → IonNode, NodeTree arena, NodeRef
//!   ↓
//! errors/base  → IonError, ErrorKind, DocumentLine, format constants
//! ```
//!
//! ## Example
//!
//! ```
//! use ion::{IonReader, PropertyDescriptor, SchemaRegistry, TypeDescriptor, Value};
//!
//! let registry = SchemaRegistry::builder()
//!     .object_type(TypeDescriptor::root("Plugin").with_property(PropertyDescriptor::string("Name")))
//!     .build()
//!     .unwrap();
//!
//! let reader = IonReader::from_source("Plugin: Name=Demo", "Plugin");
//! let plugin = reader.parse(&registry).unwrap();
//! assert_eq!(plugin.get("Name"), Some(&Value::from("Demo")));
//! ```

/// Foundation types: DocumentLine, format constants
pub mod base;

/// Error types: IonError, ErrorKind
pub mod errors;

/// Node model: IonNode, NodeTree, NodeRef
pub mod syntax;

/// Parser: root discovery, lexer, tree builder
pub mod parser;

/// Schema registry and materialized values
pub mod schema;

/// Validation and binding of node trees to schema types
pub mod materialize;

/// Build metadata passed to collaborators
pub mod properties;

mod reader;

pub use base::DocumentLine;
pub use errors::{ErrorKind, IonError, IonResult};
pub use properties::{Properties, PropertyError};
pub use reader::IonReader;
pub use schema::{
    EnumDescriptor, FromIon, Object, PropertyDescriptor, PropertyType, SchemaBuilder, SchemaError,
    SchemaRegistry, TypeDescriptor, Value,
};
pub use syntax::{IonAttribute, IonNode, NodeId, NodeRef, NodeTree};
