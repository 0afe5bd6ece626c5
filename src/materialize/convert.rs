//! Attribute value conversion.

use std::str::FromStr;

use crate::base::DocumentLine;
use crate::errors::{IonError, IonResult};
use crate::schema::{PropertyDescriptor, PropertyType, SchemaRegistry, Value};

/// Convert the raw text of an attribute into a value of the property type.
pub(super) fn convert_attribute(
    registry: &SchemaRegistry,
    property: &PropertyDescriptor,
    raw: &str,
    line: DocumentLine,
) -> IonResult<Value> {
    if property.list {
        return Err(no_parse_routine(&format!("List<{}>", property.ty.name()), line));
    }

    match &property.ty {
        PropertyType::String => Ok(Value::String(raw.to_string())),
        PropertyType::Bool => {
            if raw.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if raw.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(IonError::attribute_cast(
                    line,
                    format!(
                        "Value {raw} is of type bool but cannot be parsed. Valid values are true or false (case insensitive)."
                    ),
                ))
            }
        }
        PropertyType::Enum(name) => match registry.get_enum(name) {
            Some(descriptor) if descriptor.contains(raw) => Ok(Value::enum_member(raw)),
            _ => Err(IonError::attribute_cast(
                line,
                format!("Enumeration value {raw} is not a member of {name}."),
            )),
        },
        PropertyType::Int32 => parse_number::<i32>(raw, &property.ty, line).map(Value::from),
        PropertyType::Int64 => parse_number::<i64>(raw, &property.ty, line).map(Value::from),
        PropertyType::UInt32 => parse_number::<u32>(raw, &property.ty, line).map(Value::from),
        PropertyType::UInt64 => parse_number::<u64>(raw, &property.ty, line).map(Value::from),
        PropertyType::Float64 => parse_number::<f64>(raw, &property.ty, line).map(Value::from),
        PropertyType::Object(name) => Err(no_parse_routine(name, line)),
    }
}

fn parse_number<T: FromStr>(raw: &str, ty: &PropertyType, line: DocumentLine) -> IonResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        IonError::attribute_cast(
            line,
            format!("Value {raw} cannot be parsed as {}.", ty.name()),
        )
    })
}

fn no_parse_routine(type_name: &str, line: DocumentLine) -> IonError {
    IonError::attribute_cast(
        line,
        format!("Type {type_name} does not specify a parse routine for casting string to value."),
    )
}
