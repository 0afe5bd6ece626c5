//! Reader Tests - ad-hoc documents written to disk

use std::fs;
use std::path::PathBuf;

use ion::{ErrorKind, IonReader, Value};
use tempfile::TempDir;

use crate::helpers::{ROOT, expected, fixture_path};
use crate::helpers::plugin_model::{
    Connection, DatabaseType, ExecuteSql, FlatFileColumn, IntegrationTestPlugin, LogicalOperation,
    PrecedenceConstraintList, Task, TaskCommon,
};
use crate::helpers::plugin_schema::plugin_registry;

fn write_document(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("Failed to write document");
    path
}

fn parse_lines(lines: &[&str]) -> ion::IonResult<IntegrationTestPlugin> {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir, "document.ion", lines);
    IonReader::open(&path, ROOT)?.parse_into(&plugin_registry())
}

fn single_package_tasks(plugin: &IntegrationTestPlugin) -> &[Task] {
    &plugin.ssis_projects[0].packages[0].tasks
}

#[test]
fn test_second_root_level_structure_is_ignored() {
    let plugin = parse_lines(&[
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
        "\t\tSsisProject:",
        "Garbage: that would not validate",
    ])
    .unwrap();
    assert_eq!(plugin.ssis_projects.len(), 1);
}

#[test]
fn test_root_after_unrelated_structure() {
    let plugin = parse_lines(&[
        "# other content comes first",
        "Settings: Mode=fast",
        "\tEntry: Key=a",
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
    ])
    .unwrap();
    assert_eq!(plugin.ssis_projects.len(), 1);
    assert!(plugin.ssis_projects[0].packages.is_empty());
}

#[test]
fn test_unmentioned_properties_take_defaults() {
    let plugin = parse_lines(&[
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
        "\t\t\tPackages:",
        "\t\t\t\tPackage: Name=Defaults",
        "\t\t\t\t\tConnections:",
        "\t\t\t\t\t\tFlatFileConnection: Name=File",
        "\t\t\t\t\t\t\tFlatFileColumns:",
        "\t\t\t\t\t\t\t\tFlatFileColumn: Name=Col",
        "\t\t\t\t\tTasks:",
        "\t\t\t\t\t\tExecuteSql: Name=Sql",
        "\t\t\t\t\t\t\tPrecedenceConstraints:",
    ])
    .unwrap();

    let package = &plugin.ssis_projects[0].packages[0];
    assert_eq!(package.name.as_deref(), Some("Defaults"));
    assert_eq!(package.locale_id, 0);

    let Connection::FlatFile(file) = &package.connections[0] else {
        panic!("expected a flat file connection, got {:?}", package.connections[0]);
    };
    assert_eq!(file.code_page, 65001);
    assert!(file.unicode);
    assert_eq!(file.text_qualifier, None);
    assert_eq!(
        file.flat_file_columns,
        vec![FlatFileColumn::named("Col", DatabaseType::Int32)]
    );

    let Task::ExecuteSql(sql) = &package.tasks[0] else {
        panic!("expected an ExecuteSql task");
    };
    assert_eq!(
        sql.common.precedence_constraints,
        Some(PrecedenceConstraintList {
            inputs: Vec::new(),
            logical_type: LogicalOperation::And,
        })
    );
    assert_eq!(
        ExecuteSql {
            common: TaskCommon {
                precedence_constraints: None,
                ..sql.common.clone()
            },
            ..sql.clone()
        },
        ExecuteSql::named("Sql")
    );
}

#[test]
fn test_multiline_text_block_statement() {
    let plugin = parse_lines(&[
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
        "\t\t\tPackages:",
        "\t\t\t\tPackage:",
        "\t\t\t\t\tTasks:",
        "\t\t\t\t\t\tExecuteSql: Name=Sql",
        "\t\t\t\t\t\t\tSqlStatement: Value=<!SELECT a",
        "FROM t -- Fake: colon",
        "  # not a comment",
        "WHERE b = \"x\"!>",
        "\t\t\t\t\t\tExpression: Name=After ExpressionValue=1",
    ])
    .unwrap();

    let tasks = single_package_tasks(&plugin);
    let Task::ExecuteSql(sql) = &tasks[0] else {
        panic!("expected an ExecuteSql task");
    };
    let statement = sql.sql_statement.as_ref().and_then(|s| s.value.as_deref());
    assert_eq!(
        statement,
        Some("SELECT a\nFROM t -- Fake: colon\n  # not a comment\nWHERE b = \"x\"")
    );
    assert_eq!(tasks.len(), 2);
}

#[test]
fn test_crlf_document_matches_normal() {
    let normal = fs::read_to_string(fixture_path("Normal.ion")).unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("crlf.ion");
    fs::write(&path, normal.replace('\n', "\r\n")).expect("Failed to write document");

    let plugin: IntegrationTestPlugin = IonReader::open(&path, ROOT)
        .unwrap()
        .parse_into(&plugin_registry())
        .unwrap();
    assert_eq!(plugin, expected::normal());
}

#[test]
fn test_unknown_enum_member() {
    let err = parse_lines(&[
        "IntegrationTestPlugin:",
        "\tSsisProjects:",
        "\t\tSsisProject:",
        "\t\t\tPackages:",
        "\t\t\t\tPackage:",
        "\t\t\t\t\tConnections:",
        "\t\t\t\t\t\tFlatFileConnection: Format=delimited",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeCast);
    assert!(err.to_string().contains("FlatFileFormat"));
}

#[test]
fn test_over_indented_node() {
    let err = parse_lines(&["IntegrationTestPlugin:", "\t\tSsisProjects:"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TextFileParser);
    assert!(err.to_string().contains("has no parent node"));
}

#[test]
fn test_unbalanced_indentation_pop() {
    let err = parse_lines(&["IntegrationTestPlugin:", "\t--- IndentationPop ---"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TextFileParser);
    assert_eq!(err.line().map(|l| l.number()), Some(2));
}

#[test]
fn test_parse_tree_exposes_nodes() {
    let reader = IonReader::open(fixture_path("Normal.ion"), ROOT).unwrap();
    let tree = reader.parse_tree().unwrap();
    let root = tree.root();
    assert_eq!(root.to_string(), "IntegrationTestPlugin: parent=none, children=1");

    for node in tree.iter() {
        if let Some(parent) = node.parent() {
            assert_eq!(node.level(), parent.level() + 1, "{node}");
        }
    }
    let attribute = tree
        .iter()
        .find(|n| n.name() == "SqlStatement")
        .and_then(|n| n.attribute("Value"));
    assert_eq!(attribute, Some(r#"SELECT A, B, C FROM "test"."TestTable""#));
}

#[test]
fn test_dynamic_value_for_empty_plugin() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_document(&temp_dir, "empty.ion", &["IntegrationTestPlugin:"]);
    let plugin = IonReader::open(&path, ROOT).unwrap().parse(&plugin_registry()).unwrap();
    assert_eq!(plugin.get("SsisProjects"), Some(&Value::List(Vec::new())));
}
