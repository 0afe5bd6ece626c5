//! Line-based lexer and tree builder for the ION format
//!
//! ## Pipeline
//!
//! ```text
//! Document lines
//!     ↓
//! Root discovery → line of the requested root node
//!     ↓
//! Flat parse     → ordered nodes with attributes and levels
//!     ↓
//! Tree assembly  → NodeTree linked by level
//! ```
//!
//! Only one node structure is parsed per call: a second node at level 0
//! ends the flat parse without an error.

mod lexer;
mod root;
mod scan;
mod tree;

pub use root::{find_root_line, root_node_exists};

use crate::errors::IonResult;
use crate::syntax::NodeTree;

/// Discover the root line, parse the structure it opens and link it into
/// a tree.
pub fn parse_document<S: AsRef<str>>(lines: &[S], root_name: &str) -> IonResult<NodeTree> {
    let root_line = find_root_line(lines, root_name)?;
    let nodes = lexer::parse_flat(lines, root_line)?;
    tree::build_tree(nodes)
}
