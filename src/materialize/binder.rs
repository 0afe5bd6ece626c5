//! Recursive binding of nodes to schema types.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::convert::convert_attribute;
use super::validator::validate_node;
use crate::errors::{IonError, IonResult};
use crate::schema::{Object, PropertyDescriptor, PropertyType, SchemaRegistry, TypeDescriptor, Value};
use crate::syntax::NodeRef;

/// The schema type a node resolved to.
#[derive(Debug, Clone, Copy)]
pub(super) enum NodeType<'r> {
    Object(&'r TypeDescriptor),
    /// A list property; holds the element type
    List(&'r PropertyType),
    /// A scalar property, which cannot carry a node of its own
    Scalar(&'r PropertyType),
}

impl NodeType<'_> {
    pub(super) fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub(super) fn label(&self) -> String {
        match self {
            Self::Object(ty) => ty.name.clone(),
            Self::List(element) => format!("List<{}>", element.name()),
            Self::Scalar(ty) => ty.name().to_string(),
        }
    }
}

pub(super) struct Binder<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> Binder<'r> {
    pub(super) fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// The root node resolves directly by its own name.
    pub(super) fn bind_root(&self, root: NodeRef<'_>) -> IonResult<Object> {
        let ty = self.registry.get_type(root.name()).ok_or_else(|| {
            IonError::invalid_node(
                root.document_line(),
                format!(
                    "Node {} in document does not have a corresponding type in the schema.",
                    root.name()
                ),
            )
        })?;
        validate_node(self.registry, root, NodeType::Object(ty))?;
        self.bind_object(root, ty)
    }

    fn bind(&self, node: NodeRef<'_>, parent: NodeType<'r>) -> IonResult<Value> {
        let node_type = self.resolve(node, parent)?;
        validate_node(self.registry, node, node_type)?;

        match node_type {
            NodeType::Object(ty) => self.bind_object(node, ty).map(Value::Object),
            NodeType::List(_) => node
                .children()
                .map(|child| self.bind(child, node_type))
                .collect::<IonResult<Vec<_>>>()
                .map(Value::List),
            NodeType::Scalar(ty) => Err(IonError::invalid_node(
                node.document_line(),
                format!(
                    "Cannot instantiate node {}. Type {} is not an object type.",
                    node.name(),
                    ty.name()
                ),
            )),
        }
    }

    fn resolve(&self, node: NodeRef<'_>, parent: NodeType<'r>) -> IonResult<NodeType<'r>> {
        match parent {
            NodeType::List(element) => {
                let found = element.object_name().and_then(|element_name| {
                    if element_name == node.name() {
                        self.registry.get_type(element_name)
                    } else {
                        self.registry
                            .derived_types(element_name)
                            .into_iter()
                            .find(|t| t.name == node.name())
                    }
                });
                found.map(NodeType::Object).ok_or_else(|| {
                    IonError::invalid_node(
                        node.document_line(),
                        format!(
                            "Found no type containing a property with name {0} or a list type containing elements of type {0}. Search occurred in type {1}.",
                            node.name(),
                            parent.label()
                        ),
                    )
                })
            }
            NodeType::Object(ty) => {
                let property = self.registry.property(&ty.name, node.name()).ok_or_else(|| {
                    IonError::invalid_node(
                        node.document_line(),
                        format!(
                            "Cannot resolve property of type {} for node {}.",
                            ty.name,
                            node.name()
                        ),
                    )
                })?;
                Ok(self.property_node_type(property))
            }
            NodeType::Scalar(ty) => Err(IonError::invalid_node(
                node.document_line(),
                format!(
                    "A type to search must be provided for node {}. Type {} has no properties.",
                    node.name(),
                    ty.name()
                ),
            )),
        }
    }

    fn property_node_type(&self, property: &'r PropertyDescriptor) -> NodeType<'r> {
        if property.list {
            return NodeType::List(&property.ty);
        }
        match property.ty.object_name().and_then(|name| self.registry.get_type(name)) {
            Some(ty) => NodeType::Object(ty),
            None => NodeType::Scalar(&property.ty),
        }
    }

    fn bind_object(&self, node: NodeRef<'_>, ty: &'r TypeDescriptor) -> IonResult<Object> {
        if ty.is_abstract {
            return Err(IonError::invalid_node(
                node.document_line(),
                format!("Cannot instantiate node {}. Type {} is abstract.", node.name(), ty.name),
            ));
        }
        trace!(node = node.name(), ty = %ty.name, line = node.document_line().number(), "binding node");

        let mut object = Object::new(&ty.name);
        for property in self.registry.properties(&ty.name) {
            object.set(&property.name, self.zero_value(property));
        }
        let mut supplied: FxHashSet<&str> = FxHashSet::default();

        for attribute in node.attributes() {
            if let Some(property) = self.registry.property(&ty.name, &attribute.name) {
                let value = convert_attribute(self.registry, property, &attribute.value, node.document_line())?;
                trace!(ty = %ty.name, property = %property.name, "bound attribute");
                object.set(&property.name, value);
                supplied.insert(property.name.as_str());
            }
        }

        for child in node.children() {
            let value = self.bind(child, NodeType::Object(ty))?;
            let bases = value
                .as_object()
                .map(|o| self.registry.base_types(o.type_name()))
                .unwrap_or_default();

            for property in self.registry.properties(&ty.name) {
                if property.name != child.name() && !bases.contains(&property.name) {
                    continue;
                }
                let value = match (property.list, object.get(&property.name), &value) {
                    (true, Some(Value::List(existing)), Value::List(items))
                        if supplied.contains(property.name.as_str()) =>
                    {
                        let mut merged = existing.clone();
                        merged.extend(items.iter().cloned());
                        Value::List(merged)
                    }
                    _ => value.clone(),
                };
                trace!(ty = %ty.name, property = %property.name, "bound child");
                object.set(&property.name, value);
                supplied.insert(property.name.as_str());
            }
        }

        for property in self.registry.properties(&ty.name) {
            if supplied.contains(property.name.as_str()) || property.list {
                continue;
            }
            if let Some(default) = &property.default {
                object.set(&property.name, default.clone());
            }
        }

        Ok(object)
    }

    /// Value of a property before anything is bound to it.
    fn zero_value(&self, property: &PropertyDescriptor) -> Value {
        if property.list {
            return Value::List(Vec::new());
        }
        if property.nullable {
            return Value::Null;
        }
        match &property.ty {
            PropertyType::String | PropertyType::Object(_) => Value::Null,
            PropertyType::Bool => Value::Bool(false),
            PropertyType::Int32 | PropertyType::Int64 => Value::Int(0),
            PropertyType::UInt32 | PropertyType::UInt64 => Value::UInt(0),
            PropertyType::Float64 => Value::Float(0.0),
            PropertyType::Enum(name) => self
                .registry
                .get_enum(name)
                .and_then(|e| e.first())
                .map(Value::enum_member)
                .unwrap_or(Value::Null),
        }
    }
}
