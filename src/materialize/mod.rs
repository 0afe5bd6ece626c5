//! Materialization: turn a parsed node tree into an object graph using a
//! [`SchemaRegistry`].
//!
//! Every node is resolved to a schema type, validated, instantiated with
//! zero values, then bound: attributes first, children next in document
//! order, defaults last. The first failure aborts the whole graph.

mod binder;
mod convert;
mod validator;

pub use validator::validate_schema_root;

use tracing::debug;

use crate::errors::IonResult;
use crate::schema::{Object, SchemaRegistry};
use crate::syntax::NodeTree;

/// Materialize the root of `tree` and everything below it.
pub fn materialize(tree: &NodeTree, registry: &SchemaRegistry) -> IonResult<Object> {
    let root = tree.root();
    let object = binder::Binder::new(registry).bind_root(root)?;
    debug!(root = root.name(), nodes = tree.len(), "materialized document");
    Ok(object)
}
