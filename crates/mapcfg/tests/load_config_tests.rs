//! Configuration file loading tests

use std::io::Write;

use mapcfg::enums::TimeZoneStorageType;
use mapcfg::error::Error;
use mapcfg::value::RawValue;
use mapcfg::{MappingOptions, SettingsService, keys, load_config_file};
use tempfile::{NamedTempFile, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
	let path = dir.path().join(name);
	std::fs::write(&path, content).expect("Failed to write config file");
	path
}

#[test]
fn test_load_properties_file() {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let path = write_file(
		&dir,
		"hibernate.properties",
		"hibernate.default_schema=app\nhibernate.timezone.default_storage=column\n",
	);

	let config = load_config_file(&path).expect("Failed to load config");
	assert_eq!(config.get(keys::DEFAULT_SCHEMA), Some(&RawValue::from("app")));

	let service = SettingsService::new(config);
	assert_eq!(
		service.get_enum::<TimeZoneStorageType>(keys::TIMEZONE_DEFAULT_STORAGE).unwrap(),
		TimeZoneStorageType::Column
	);
}

#[test]
fn test_load_json_file() {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let path = write_file(
		&dir,
		"mapping.JSON",
		r#"{
			"hibernate": {
				"validate_xml": false,
				"type": { "preferred_uuid_jdbc_type": "CHAR" },
				"mapping": { "precedence": ["class", "hbm"] }
			}
		}"#,
	);

	let config = load_config_file(&path).expect("Failed to load config");
	assert_eq!(config.get(keys::VALIDATE_XML), Some(&RawValue::Bool(false)));

	let options = MappingOptions::from_service(&SettingsService::new(config)).unwrap();
	assert!(!options.validate_xml);
	assert_eq!(options.preferred_uuid_jdbc_type, mapcfg::enums::SqlType::Char);
	assert_eq!(
		options.processing_order,
		vec![mapcfg::enums::MetadataSourceType::Class, mapcfg::enums::MetadataSourceType::Hbm]
	);
}

#[test]
fn test_extensionless_file_is_properties() {
	let mut file = NamedTempFile::new().expect("Failed to create temp file");
	writeln!(file, "hibernate.default_catalog : main").expect("Failed to write");

	let config = load_config_file(file.path()).expect("Failed to load config");
	assert_eq!(config.get(keys::DEFAULT_CATALOG), Some(&RawValue::from("main")));
}

#[test]
fn test_missing_file() {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let result = load_config_file(dir.path().join("absent.properties"));
	assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_json_file() {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let path = write_file(&dir, "broken.json", "{ \"hibernate.validate_xml\": ");
	assert!(matches!(load_config_file(&path), Err(Error::Json(_))));
}

// vim: ts=4
