//! Root discovery: locate the line that opens the requested root node.

use tracing::debug;

use super::scan::{self, ScanState};
use crate::base::DocumentLine;
use crate::base::constants::NODE_SIGN;
use crate::errors::{ErrorKind, IonError, IonResult};

/// Find the first line, outside quoted strings and text blocks, whose
/// node name equals `root_name`.
///
/// # Errors
///
/// - `RootNodeNotFound` when the end of the document is reached first
/// - `TextFileParser` when a scanned node name ends with a full stop
pub fn find_root_line<S: AsRef<str>>(lines: &[S], root_name: &str) -> IonResult<DocumentLine> {
    let mut state = ScanState::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim_start();
        let lnum = DocumentLine::new(index);
        if !state.is_suppressed() && scan::is_comment(line) {
            continue;
        }
        state.skim(line);

        if state.is_suppressed() || !scan::contains_node_name(line) {
            continue;
        }

        let Some(colon) = line.find(NODE_SIGN) else {
            continue;
        };
        let name = scan::strip_qualifier(line[..colon].trim_end(), lnum)?;
        if name == root_name {
            debug!(root = root_name, line = lnum.number(), "found root node");
            return Ok(lnum);
        }
    }

    Err(IonError::root_not_found(root_name))
}

/// Report whether the root node line exists.
///
/// Only the not-found case is turned into `false`; other lexical errors
/// still propagate.
pub fn root_node_exists<S: AsRef<str>>(lines: &[S], root_name: &str) -> IonResult<bool> {
    match find_root_line(lines, root_name) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::RootNodeNotFound => Ok(false),
        Err(err) => Err(err),
    }
}
