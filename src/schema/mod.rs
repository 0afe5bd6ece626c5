//! Schema registry: the explicit description of the types a document may
//! materialize into.
//!
//! The registry is built once, up front, and is read-only afterwards. It
//! replaces runtime type discovery: every type, property, enum and
//! derivation the binder may use is declared here.
//!
//! ```text
//! SchemaRegistry
//! ├── types: IndexMap<String, TypeEntry>   (registration order)
//! │   ├── descriptor  (own properties, base, root/abstract flags)
//! │   ├── properties  (effective: base chain first, then own)
//! │   └── bases       (nearest first)
//! └── enums: IndexMap<String, EnumDescriptor>
//! ```

mod descriptor;
mod error;
mod registry;
mod value;

pub use descriptor::{EnumDescriptor, PropertyDescriptor, PropertyType, TypeDescriptor};
pub use error::SchemaError;
pub use registry::{SchemaBuilder, SchemaRegistry};
pub use value::{FromIon, Object, Value};
