//! Schema registry construction and lookup.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxHashSet;

use super::descriptor::{EnumDescriptor, PropertyDescriptor, PropertyType, TypeDescriptor};
use super::error::SchemaError;
use super::value::Value;

#[derive(Debug, Clone)]
struct TypeEntry {
    descriptor: TypeDescriptor,
    /// Effective properties: inherited ones first, in base-chain order
    properties: IndexMap<String, PropertyDescriptor>,
    /// Base chain, nearest first
    bases: Vec<String>,
}

/// Read-only set of registered types and enums.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    types: IndexMap<String, TypeEntry>,
    enums: IndexMap<String, EnumDescriptor>,
}

/// Collects descriptors and validates them into a [`SchemaRegistry`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: Vec<TypeDescriptor>,
    enums: Vec<EnumDescriptor>,
}

impl SchemaBuilder {
    pub fn object_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    pub fn enum_type(mut self, descriptor: EnumDescriptor) -> Self {
        self.enums.push(descriptor);
        self
    }

    /// Validate the collected descriptors.
    ///
    /// # Errors
    ///
    /// Duplicate names, unknown base or target types, cyclic base chains,
    /// empty enums and defaults that do not fit their property type.
    pub fn build(self) -> Result<SchemaRegistry, SchemaError> {
        let mut enums = IndexMap::new();
        for descriptor in self.enums {
            if descriptor.members.is_empty() {
                return Err(SchemaError::EmptyEnum(descriptor.name));
            }
            match enums.entry(descriptor.name.clone()) {
                Entry::Occupied(_) => return Err(SchemaError::DuplicateType(descriptor.name)),
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }

        let mut declared: IndexMap<String, TypeDescriptor> = IndexMap::new();
        for descriptor in self.types {
            if enums.contains_key(&descriptor.name) || declared.contains_key(&descriptor.name) {
                return Err(SchemaError::DuplicateType(descriptor.name));
            }
            declared.insert(descriptor.name.clone(), descriptor);
        }

        let mut types = IndexMap::with_capacity(declared.len());
        for descriptor in declared.values() {
            let bases = base_chain(&declared, descriptor)?;

            let mut properties = IndexMap::new();
            for base in bases.iter().rev() {
                if let Some(base) = declared.get(base) {
                    for property in base.own_properties() {
                        properties.insert(property.name.clone(), property.clone());
                    }
                }
            }
            for property in descriptor.own_properties() {
                check_property(&declared, &enums, &descriptor.name, property)?;
                properties.insert(property.name.clone(), property.clone());
            }

            types.insert(
                descriptor.name.clone(),
                TypeEntry {
                    descriptor: descriptor.clone(),
                    properties,
                    bases,
                },
            );
        }

        Ok(SchemaRegistry { types, enums })
    }
}

fn base_chain(
    declared: &IndexMap<String, TypeDescriptor>,
    descriptor: &TypeDescriptor,
) -> Result<Vec<String>, SchemaError> {
    let mut bases = Vec::new();
    let mut seen = FxHashSet::default();
    seen.insert(descriptor.name.as_str());

    let mut current = descriptor;
    while let Some(base) = current.base.as_deref() {
        if !seen.insert(base) {
            return Err(SchemaError::CyclicBase(descriptor.name.clone()));
        }
        current = declared.get(base).ok_or_else(|| SchemaError::UnknownBase {
            type_name: current.name.clone(),
            base: base.to_string(),
        })?;
        bases.push(base.to_string());
    }

    Ok(bases)
}

fn check_property(
    declared: &IndexMap<String, TypeDescriptor>,
    enums: &IndexMap<String, EnumDescriptor>,
    type_name: &str,
    property: &PropertyDescriptor,
) -> Result<(), SchemaError> {
    let unknown = |target: &str| SchemaError::UnknownType {
        type_name: type_name.to_string(),
        property: property.name.clone(),
        target: target.to_string(),
    };
    match &property.ty {
        PropertyType::Enum(name) if !enums.contains_key(name) => return Err(unknown(name)),
        PropertyType::Object(name) if !declared.contains_key(name) => return Err(unknown(name)),
        _ => {}
    }

    let Some(default) = &property.default else {
        return Ok(());
    };
    let invalid = |message: String| SchemaError::InvalidDefault {
        type_name: type_name.to_string(),
        property: property.name.clone(),
        message,
    };
    if property.list {
        return Err(invalid("list properties default to an empty list".to_string()));
    }

    let fits = match (&property.ty, default) {
        (_, Value::Null) => property.nullable || matches!(property.ty, PropertyType::String),
        (PropertyType::String, Value::String(_)) => true,
        (PropertyType::Bool, Value::Bool(_)) => true,
        (PropertyType::Int32, Value::Int(i)) => i32::try_from(*i).is_ok(),
        (PropertyType::Int64, Value::Int(_)) => true,
        (PropertyType::UInt32, Value::UInt(u)) => u32::try_from(*u).is_ok(),
        (PropertyType::UInt64, Value::UInt(_)) => true,
        (PropertyType::Float64, Value::Float(_)) => true,
        (PropertyType::Enum(name), Value::Enum(member)) => {
            if !enums.get(name).is_some_and(|e| e.contains(member)) {
                return Err(invalid(format!("{member} is not a member of {name}")));
            }
            true
        }
        _ => false,
    };

    if fits {
        Ok(())
    } else {
        Err(invalid(format!(
            "{} is not a {} value",
            default.kind_name(),
            property.ty.name()
        )))
    }
}

impl SchemaRegistry {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name).map(|entry| &entry.descriptor)
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.get(name)
    }

    /// Effective properties of `type_name`, inherited ones first
    pub fn properties(&self, type_name: &str) -> impl Iterator<Item = &PropertyDescriptor> {
        self.types
            .get(type_name)
            .into_iter()
            .flat_map(|entry| entry.properties.values())
    }

    pub fn property(&self, type_name: &str, property: &str) -> Option<&PropertyDescriptor> {
        self.types.get(type_name)?.properties.get(property)
    }

    /// Base chain of `type_name`, nearest first
    pub fn base_types(&self, type_name: &str) -> &[String] {
        self.types
            .get(type_name)
            .map(|entry| entry.bases.as_slice())
            .unwrap_or_default()
    }

    /// Transitively derived types, breadth first: direct subtypes in
    /// registration order, then their subtypes, and so on.
    pub fn derived_types(&self, type_name: &str) -> Vec<&TypeDescriptor> {
        let mut found: Vec<&TypeDescriptor> = Vec::new();
        let mut frontier = vec![type_name];

        while !frontier.is_empty() {
            let level: Vec<&TypeDescriptor> = self
                .types
                .values()
                .map(|entry| &entry.descriptor)
                .filter(|t| t.base.as_deref().is_some_and(|b| frontier.contains(&b)))
                .collect();
            frontier = level.iter().map(|t| t.name.as_str()).collect();
            found.extend(level);
        }

        found
    }

    /// Types flagged as document roots, in registration order
    pub fn root_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types
            .values()
            .map(|entry| &entry.descriptor)
            .filter(|t| t.is_root)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values().map(|entry| &entry.descriptor)
    }
}
