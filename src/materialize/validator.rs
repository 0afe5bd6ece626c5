//! Schema-root and per-node validation.

use indexmap::IndexMap;

use super::binder::NodeType;
use crate::errors::{IonError, IonResult};
use crate::schema::{PropertyDescriptor, SchemaRegistry};
use crate::syntax::NodeRef;

/// Check that the registry declares exactly one root type and that it is
/// named `root_name`. Independent of any document content.
pub fn validate_schema_root(registry: &SchemaRegistry, root_name: &str) -> IonResult<()> {
    let mut count = 0;
    for root in registry.root_types() {
        count += 1;
        if root.name != root_name {
            return Err(IonError::invalid_root(format!(
                "Provided root node type {root_name} does not match the root node of the schema. Expected root node type is {}.",
                root.name
            )));
        }
    }

    if count != 1 {
        return Err(IonError::invalid_root(format!(
            "A schema must have exactly 1 root node. {count} root nodes were found in the schema."
        )));
    }
    Ok(())
}

/// Run the per-node checks in order: required fields, duplicate
/// attributes, unknown children, unknown attributes.
pub(super) fn validate_node(
    registry: &SchemaRegistry,
    node: NodeRef<'_>,
    node_type: NodeType<'_>,
) -> IonResult<()> {
    let properties: Vec<&PropertyDescriptor> = match node_type {
        NodeType::Object(ty) => registry.properties(&ty.name).collect(),
        NodeType::List(_) | NodeType::Scalar(_) => Vec::new(),
    };
    let declares = |name: &str| properties.iter().any(|p| p.name == name);

    for property in properties.iter().filter(|p| p.required) {
        let in_attributes = node.attributes().iter().any(|a| a.name == property.name);
        let in_children = node.children().any(|c| c.name() == property.name);
        if !in_attributes && !in_children {
            return Err(IonError::required_field(
                node.document_line(),
                format!(
                    "Field or child node {} is required but missing in node {}.",
                    property.name,
                    node.name()
                ),
            ));
        }
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for attribute in node.attributes() {
        *counts.entry(attribute.name.as_str()).or_default() += 1;
    }
    let duplicates: Vec<&str> = counts
        .into_iter()
        .filter_map(|(name, count)| (count > 1).then_some(name))
        .collect();
    if !duplicates.is_empty() {
        return Err(IonError::duplicate_attribute(
            node.document_line(),
            format!(
                "Attributes {} exist more than once in node {}.",
                duplicates.join(", "),
                node.name()
            ),
        ));
    }

    if !node_type.is_list() {
        if let Some(child) = node.children().find(|c| !declares(c.name())) {
            return Err(IonError::invalid_node(
                node.document_line(),
                format!(
                    "Node {} has a child {} but there is no corresponding property of type {}.",
                    node.name(),
                    child.name(),
                    node_type.label()
                ),
            ));
        }
    }

    if let Some(attribute) = node.attributes().iter().find(|a| !declares(&a.name)) {
        return Err(IonError::invalid_attribute(
            node.document_line(),
            format!(
                "Attribute {} in {} is not a property of type {}.",
                attribute.name,
                node.name(),
                node_type.label()
            ),
        ));
    }

    Ok(())
}
