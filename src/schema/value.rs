//! Dynamic values produced by materialization, and the typed conversion
//! seam into caller-defined structs.

use std::fmt;

use indexmap::IndexMap;

use crate::errors::{IonError, IonResult};

/// A materialized value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    /// Enum member name
    Enum(String),
    List(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn enum_member(member: impl Into<String>) -> Self {
        Self::Enum(member.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(u) => Some(*u),
            Self::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short shape name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

/// A materialized instance of a registered object type.
///
/// Fields keep the declaration order of the effective properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    type_name: String,
    fields: IndexMap<String, Value>,
}

impl Object {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Concrete type name, which may be a derived type of the declared one
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field that must be present on a materialized object.
    pub fn field(&self, field: &str) -> IonResult<&Value> {
        self.get(field)
            .ok_or_else(|| IonError::schema_mismatch(&self.type_name, field, "field is not present"))
    }

    fn mismatch(&self, field: &str, expected: &str, found: &Value) -> IonError {
        IonError::schema_mismatch(
            &self.type_name,
            field,
            format!("expected {expected}, found {}", found.kind_name()),
        )
    }

    pub fn string(&self, field: &str) -> IonResult<String> {
        match self.field(field)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.mismatch(field, "string", other)),
        }
    }

    /// A string field that may be `Null`
    pub fn opt_string(&self, field: &str) -> IonResult<Option<String>> {
        match self.field(field)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(self.mismatch(field, "string or null", other)),
        }
    }

    pub fn bool(&self, field: &str) -> IonResult<bool> {
        let value = self.field(field)?;
        value.as_bool().ok_or_else(|| self.mismatch(field, "bool", value))
    }

    pub fn i32(&self, field: &str) -> IonResult<i32> {
        let value = self.field(field)?;
        value
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .ok_or_else(|| self.mismatch(field, "32-bit integer", value))
    }

    pub fn i64(&self, field: &str) -> IonResult<i64> {
        let value = self.field(field)?;
        value.as_i64().ok_or_else(|| self.mismatch(field, "64-bit integer", value))
    }

    pub fn u32(&self, field: &str) -> IonResult<u32> {
        let value = self.field(field)?;
        value
            .as_u64()
            .and_then(|u| u32::try_from(u).ok())
            .ok_or_else(|| self.mismatch(field, "32-bit unsigned integer", value))
    }

    pub fn f64(&self, field: &str) -> IonResult<f64> {
        let value = self.field(field)?;
        value.as_f64().ok_or_else(|| self.mismatch(field, "float", value))
    }

    /// An enum field converted through `parse`, which maps a member name
    /// to the caller's own enum.
    pub fn enum_member<T>(&self, field: &str, parse: impl FnOnce(&str) -> Option<T>) -> IonResult<T> {
        match self.field(field)? {
            Value::Enum(member) => parse(member).ok_or_else(|| {
                IonError::schema_mismatch(
                    &self.type_name,
                    field,
                    format!("unknown enum member {member}"),
                )
            }),
            other => Err(self.mismatch(field, "enum", other)),
        }
    }

    /// A list field converted element by element
    pub fn list<T: FromIon>(&self, field: &str) -> IonResult<Vec<T>> {
        match self.field(field)? {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            other => Err(self.mismatch(field, "list", other)),
        }
    }

    /// An object field that may be `Null`
    pub fn opt_object<T: FromIon>(&self, field: &str) -> IonResult<Option<T>> {
        match self.field(field)? {
            Value::Null => Ok(None),
            value @ Value::Object(_) => T::from_value(value).map(Some),
            other => Err(self.mismatch(field, "object or null", other)),
        }
    }

    pub fn object<T: FromIon>(&self, field: &str) -> IonResult<T> {
        let value = self.field(field)?;
        match value {
            Value::Object(_) => T::from_value(value),
            other => Err(self.mismatch(field, "object", other)),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.type_name)?;
        for (i, name) in self.fields.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, " }}")
    }
}

/// Conversion from a materialized value into a caller-defined type.
///
/// Implementations read fields through the [`Object`] accessors, which
/// report shape problems as `SchemaMismatch` errors.
pub trait FromIon: Sized {
    fn from_object(object: &Object) -> IonResult<Self>;

    fn from_value(value: &Value) -> IonResult<Self> {
        match value {
            Value::Object(object) => Self::from_object(object),
            other => Err(IonError::schema_mismatch(
                std::any::type_name::<Self>(),
                "",
                format!("expected object, found {}", other.kind_name()),
            )),
        }
    }
}

impl FromIon for Object {
    fn from_object(object: &Object) -> IonResult<Self> {
        Ok(object.clone())
    }
}
