//! mapcfg is a typed registry of ORM mapping settings.
//!
//! # Features
//!
//! - Compiled catalog of every mapping setting
//!     - value domain, default, deprecation and incubation status per key
//! - Validated resolution of raw configuration
//!     - booleans, strings, enumerations, lists of enumerations
//!     - strategy classes by short name, class name or instance
//! - Configuration loading from properties and JSON files
//! - Command line inspector (`mapcfg list`, `mapcfg describe`, `mapcfg check`)

use std::path::Path;

// Re-export shared types and the registry
pub use mapcfg_types::enum_type;
pub use mapcfg_types::error;
pub use mapcfg_types::value;
pub use mapcfg_types::{RawConfig, setting_enum};

pub use mapcfg_core::enums;
pub use mapcfg_core::keys;
pub use mapcfg_core::options;
pub use mapcfg_core::settings;
pub use mapcfg_core::strategy;
pub use mapcfg_core::{
	MappingOptions, NoStrategySelector, Resolved, SettingDefinition, SettingsRegistry,
	SettingsService, StaticStrategySelector, StrategyRef, StrategySelector, registry,
};

use mapcfg_types::error::McResult;

/// Load a configuration file
///
/// Files with a `.json` extension are parsed as JSON, anything else as
/// properties text.
pub fn load_config_file(path: impl AsRef<Path>) -> McResult<RawConfig> {
	let path = path.as_ref();
	let text = std::fs::read_to_string(path)?;

	let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
	let config =
		if is_json { RawConfig::from_json_str(&text)? } else { RawConfig::from_properties(&text)? };

	tracing::debug!("Loaded {} settings from {}", config.len(), path.display());
	Ok(config)
}

/// Install the log subscriber; filtering follows `RUST_LOG`
pub fn init_logging() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

// vim: ts=4
