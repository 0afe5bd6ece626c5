//! Type, property and enum descriptors.

use indexmap::IndexMap;

use super::value::Value;

/// Semantic type of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    String,
    Bool,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float64,
    /// Member of a registered enum
    Enum(String),
    /// Instance of a registered object type
    Object(String),
}

impl PropertyType {
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    /// Name used in diagnostics
    pub fn name(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Bool => "Boolean",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float64 => "Double",
            Self::Enum(name) | Self::Object(name) => name,
        }
    }

    /// Object target type, if any
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Self::Object(name) => Some(name),
            _ => None,
        }
    }
}

/// A declared property of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Scalar type, or element type for list properties
    pub ty: PropertyType,
    pub list: bool,
    pub required: bool,
    pub nullable: bool,
    pub default: Option<Value>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            list: false,
            required: false,
            nullable: false,
            default: None,
        }
    }

    /// A list property holding elements of `element`
    pub fn list(name: impl Into<String>, element: PropertyType) -> Self {
        Self {
            list: true,
            ..Self::new(name, element)
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Bool)
    }

    pub fn object(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::object(type_name))
    }

    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::enumeration(enum_name))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Zero value becomes `Null` instead of the type's own zero
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A declared object type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub name: String,
    pub base: Option<String>,
    pub is_abstract: bool,
    pub is_root: bool,
    properties: IndexMap<String, PropertyDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            is_abstract: false,
            is_root: false,
            properties: IndexMap::new(),
        }
    }

    /// The type receiving the document root node
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            is_root: true,
            ..Self::new(name)
        }
    }

    pub fn derives_from(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Abstract types are only reachable through their derived types
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Declare a property; a later declaration with the same name replaces
    /// the earlier one.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Properties declared on this type itself, without inherited ones
    pub fn own_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }
}

/// A declared enum with its member names in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumDescriptor {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive member lookup
    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// The zero member
    pub fn first(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }
}
