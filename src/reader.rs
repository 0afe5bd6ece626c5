//! Reader facade: one document, one expected root type.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{IonError, IonResult};
use crate::materialize::{materialize, validate_schema_root};
use crate::parser::{self, parse_document};
use crate::schema::{FromIon, Object, SchemaRegistry};
use crate::syntax::NodeTree;

/// Reads an ION document held in memory.
///
/// The whole file is read once at construction; every operation after
/// that works on the in-memory lines and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct IonReader {
    path: Option<PathBuf>,
    root: String,
    lines: Vec<String>,
}

impl IonReader {
    /// Read the document at `path`.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read.
    pub fn open(path: impl AsRef<Path>, root: impl Into<String>) -> IonResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| IonError::io(path, source))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::from_source(&text, root)
        })
    }

    pub fn from_source(text: &str, root: impl Into<String>) -> Self {
        Self {
            path: None,
            root: root.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Validate the schema root, parse the document and materialize it.
    pub fn parse(&self, registry: &SchemaRegistry) -> IonResult<Object> {
        validate_schema_root(registry, &self.root)?;
        let tree = self.parse_tree()?;
        materialize(&tree, registry)
    }

    /// [`parse`](Self::parse), then convert into a typed model.
    pub fn parse_into<T: FromIon>(&self, registry: &SchemaRegistry) -> IonResult<T> {
        T::from_object(&self.parse(registry)?)
    }

    /// Parse the node tree without materializing it.
    pub fn parse_tree(&self) -> IonResult<NodeTree> {
        parse_document(&self.lines, &self.root)
    }

    /// Whether the root node line is present. Lexical errors met while
    /// scanning for it still propagate.
    pub fn root_node_exists(&self) -> IonResult<bool> {
        parser::root_node_exists(&self.lines, &self.root)
    }
}
