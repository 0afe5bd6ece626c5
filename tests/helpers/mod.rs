//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod plugin_schema;

use std::path::PathBuf;

use ion::IonReader;

/// Root type of the integration test plugin
pub const ROOT: &str = "IntegrationTestPlugin";

/// Path of a document under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Reader over a fixture document, expecting the plugin root
pub fn fixture_reader(name: &str) -> IonReader {
    IonReader::open(fixture_path(name), ROOT).expect("fixture is readable")
}
