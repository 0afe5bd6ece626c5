/// Position tracking for parsed nodes
///
/// Every node and every line-scoped error remembers the document line it
/// came from. Lines are stored 0-indexed and displayed 1-indexed, the way
/// text editors number them.
use std::fmt;

/// A 0-based line index into the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DocumentLine(usize);

impl DocumentLine {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// 0-based index into the document lines
    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based line number as shown to users
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for DocumentLine {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for DocumentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
