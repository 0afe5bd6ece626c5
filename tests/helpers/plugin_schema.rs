//! Schema registry for the integration test plugin.

use ion::{EnumDescriptor, PropertyDescriptor as Prop, PropertyType, SchemaRegistry, TypeDescriptor, Value};

use super::plugin_model::*;

fn enum_of(name: &'static str, members: &'static [&'static str]) -> EnumDescriptor {
    EnumDescriptor::new(name, members.iter().copied())
}

fn int(name: &str, default: i32) -> Prop {
    Prop::new(name, PropertyType::Int32).with_default(default)
}

fn uint(name: &str, default: u32) -> Prop {
    Prop::new(name, PropertyType::UInt32).with_default(default)
}

fn flag(name: &str, default: bool) -> Prop {
    Prop::boolean(name).with_default(default)
}

fn member(prop: &str, enum_name: &str, default: &str) -> Prop {
    Prop::enumeration(prop, enum_name).with_default(Value::enum_member(default))
}

fn list_of(name: &str, element: &str) -> Prop {
    Prop::list(name, PropertyType::object(element))
}

pub fn plugin_registry() -> SchemaRegistry {
    plugin_schema().build().expect("plugin schema is valid")
}

pub fn plugin_schema() -> ion::SchemaBuilder {
    SchemaRegistry::builder()
        .enum_type(enum_of(ExecuteSqlTypeConversionMode::NAME, ExecuteSqlTypeConversionMode::MEMBERS))
        .enum_type(enum_of(ExecuteSqlResultSet::NAME, ExecuteSqlResultSet::MEMBERS))
        .enum_type(enum_of(ParameterDirection::NAME, ParameterDirection::MEMBERS))
        .enum_type(enum_of(TaskEvaluationOperationType::NAME, TaskEvaluationOperationType::MEMBERS))
        .enum_type(enum_of(TaskEvaluationOperationValue::NAME, TaskEvaluationOperationValue::MEMBERS))
        .enum_type(enum_of(LogicalOperation::NAME, LogicalOperation::MEMBERS))
        .enum_type(enum_of(FlatFileFormat::NAME, FlatFileFormat::MEMBERS))
        .enum_type(enum_of(DatabaseType::NAME, DatabaseType::MEMBERS))
        .object_type(TypeDescriptor::root("IntegrationTestPlugin").with_property(list_of("SsisProjects", "SsisProject")))
        .object_type(TypeDescriptor::new("SsisProject").with_property(list_of("Packages", "Package")))
        .object_type(
            TypeDescriptor::new("Package")
                .with_property(list_of("Connections", "Connection"))
                .with_property(list_of("Tasks", "Task"))
                .with_property(Prop::string("Name"))
                .with_property(int("LocaleId", 0))
                .with_property(flag("DelayValidation", false)),
        )
        .object_type(
            TypeDescriptor::new("Task")
                .abstract_type()
                .with_property(Prop::object("PrecedenceConstraints", "PrecedenceConstraintList"))
                .with_property(Prop::string("Name"))
                .with_property(flag("DelayValidation", false))
                .with_property(flag("PropagateErrors", true)),
        )
        .object_type(
            TypeDescriptor::new("PrecedenceConstraintList")
                .with_property(list_of("Inputs", "InputPath"))
                .with_property(member("LogicalType", LogicalOperation::NAME, "And")),
        )
        .object_type(
            TypeDescriptor::new("InputPath")
                .with_property(Prop::string("OutputPathName"))
                .with_property(member("EvaluationOperation", TaskEvaluationOperationType::NAME, "Constraint"))
                .with_property(member("EvaluationValue", TaskEvaluationOperationValue::NAME, "Success"))
                .with_property(Prop::string("Expression")),
        )
        .object_type(
            TypeDescriptor::new("Connection")
                .with_property(Prop::string("ConnectionString"))
                .with_property(Prop::string("Name"))
                .with_property(Prop::string("ConnectionGuid"))
                .with_property(flag("DelayValidation", false)),
        )
        .object_type(
            TypeDescriptor::new("CustomConnection")
                .derives_from("Connection")
                .with_property(Prop::string("CreationName")),
        )
        .object_type(TypeDescriptor::new("OleDbConnection").derives_from("Connection"))
        .object_type(
            TypeDescriptor::new("FlatFileConnection")
                .derives_from("Connection")
                .with_property(list_of("FlatFileColumns", "FlatFileColumn"))
                .with_property(member("Format", FlatFileFormat::NAME, "Delimited"))
                .with_property(flag("ColumnNamesInFirstDataRow", true))
                .with_property(int("HeaderRowsToSkip", 0))
                .with_property(flag("Unicode", true))
                .with_property(int("CodePage", 65001))
                .with_property(int("LocaleId", 0))
                .with_property(Prop::string("TextQualifier")),
        )
        .object_type(
            TypeDescriptor::new("FlatFileColumn")
                .with_property(Prop::string("Name"))
                .with_property(member("DataType", DatabaseType::NAME, "Int32"))
                .with_property(int("InputWidth", 0))
                .with_property(int("OutputWidth", 0))
                .with_property(int("Precision", 0))
                .with_property(int("Scale", 0))
                .with_property(Prop::string("Delimiter").with_default(","))
                .with_property(int("CodePage", 0))
                .with_property(flag("TextQualified", false))
                .with_property(flag("FastParse", false)),
        )
        .object_type(
            TypeDescriptor::new("SequenceContainer")
                .derives_from("Task")
                .with_property(list_of("Tasks", "Task")),
        )
        .object_type(
            TypeDescriptor::new("ExecuteSql")
                .derives_from("Task")
                .with_property(Prop::object("SqlStatement", "SqlStatement"))
                .with_property(list_of("Results", "Result"))
                .with_property(list_of("SqlParameters", "SqlParameter"))
                .with_property(Prop::string("ConnectionName"))
                .with_property(member("ResultSet", ExecuteSqlResultSet::NAME, "None"))
                .with_property(member("TypeConversionMode", ExecuteSqlTypeConversionMode::NAME, "Allowed"))
                .with_property(flag("BypassPrepare", true))
                .with_property(uint("TimeOut", 0))
                .with_property(uint("CodePage", 1252)),
        )
        .object_type(
            TypeDescriptor::new("Result")
                .with_property(Prop::string("ResultName"))
                .with_property(Prop::string("VariableName")),
        )
        .object_type(TypeDescriptor::new("SqlStatement").with_property(Prop::string("Value")))
        .object_type(
            TypeDescriptor::new("SqlParameter")
                .with_property(Prop::string("VariableName"))
                .with_property(Prop::string("ParameterName"))
                .with_property(Prop::enumeration("DataType", DatabaseType::NAME))
                .with_property(member("Direction", ParameterDirection::NAME, "Input"))
                .with_property(Prop::string("Size").with_default("0")),
        )
        .object_type(
            TypeDescriptor::new("Expression")
                .derives_from("Task")
                .with_property(Prop::string("ExpressionValue").required()),
        )
}
