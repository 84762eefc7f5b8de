//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;

use tictactoe::AppConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = \"Alice\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.player_x(), "Alice");
    assert_eq!(config.player_o(), "");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = ").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_wrong_type_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = 7").unwrap();

    assert!(AppConfig::from_file(file.path()).is_err());
}
