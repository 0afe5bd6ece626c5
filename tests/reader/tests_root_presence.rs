//! Reader Tests - root node probing

use ion::{ErrorKind, IonReader};

use crate::helpers::fixture_reader;

#[test]
fn test_root_exists_in_normal_file() {
    assert!(fixture_reader("Normal.ion").root_node_exists().unwrap());
}

#[test]
fn test_root_missing_in_file_without_root() {
    assert!(!fixture_reader("NoRootNode.ion").root_node_exists().unwrap());
}

#[test]
fn test_presence_check_does_not_validate_body() {
    assert!(fixture_reader("InvalidIndentation.ion").root_node_exists().unwrap());
}

#[test]
fn test_presence_check_propagates_lexical_errors_before_root() {
    let reader = IonReader::from_source("Broken.:\nIntegrationTestPlugin:", "IntegrationTestPlugin");
    let err = reader.root_node_exists().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TextFileParser);
}
