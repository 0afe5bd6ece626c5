//! Node model: the transient tree produced by the lexer and consumed by
//! the binder.
//!
//! Nodes live in an arena ([`NodeTree`]) and refer to their parent and
//! children by [`NodeId`], so the tree can be linked bottom-up without
//! aliased mutable references.

mod node;

pub use node::{IonAttribute, IonNode, NodeId, NodeRef, NodeTree};
