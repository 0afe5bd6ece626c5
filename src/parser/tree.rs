//! Tree assembly: link flat nodes to their parents by nesting level.

use crate::errors::{IonError, IonResult};
use crate::syntax::{IonNode, NodeId, NodeTree};

/// Attach every non-root node to the nearest earlier node one level up.
pub(crate) fn build_tree(nodes: Vec<IonNode>) -> IonResult<NodeTree> {
    let mut tree = NodeTree::from_flat(nodes);

    for id in tree.ids() {
        let node = tree.node(id);
        if node.is_root {
            continue;
        }
        let level = node.level;

        let parent = level.checked_sub(1).and_then(|parent_level| {
            (0..id.index())
                .rev()
                .map(NodeId::new)
                .find(|&candidate| tree.node(candidate).level == parent_level)
        });

        match parent {
            Some(parent) => tree.attach(id, parent),
            None => {
                let node = tree.node(id);
                return Err(IonError::text_file_parser(
                    node.document_line,
                    format!(
                        "Node {} has no parent node. Verify that it is indented exactly once from the parent in the document.",
                        node.name
                    ),
                ));
            }
        }
    }

    Ok(tree)
}
