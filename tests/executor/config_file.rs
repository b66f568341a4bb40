//! Configuration file tests

use memkv::{Command, MismatchPolicy, Store, StoreConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn store_from_default_config_file_migrates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    StoreConfig::write_default_if_missing(&path).unwrap();

    let config = StoreConfig::from_file(&path).unwrap();
    let mut store = Store::with_config(&config).unwrap();
    store.execute(Command::set("k", "v"));
    assert!(store.try_execute(Command::sadd("k", "m")).is_ok());
}

#[test]
fn store_from_reject_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "type_mismatch = \"reject\"\ninitial_capacity = 8\n").unwrap();

    let config = StoreConfig::from_file(&path).unwrap();
    assert_eq!(config.mismatch_policy().unwrap(), MismatchPolicy::Reject);
    let mut store = Store::with_config(&config).unwrap();
    store.execute(Command::set("k", "v"));
    assert!(store.try_execute(Command::sadd("k", "m")).is_err());
}

#[test]
fn malformed_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "type_mismatch = [").unwrap();
    let err = StoreConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}
