//! Settings service: typed access to one application configuration

use std::fmt;
use std::sync::Arc;
use tracing::warn;

use super::types::{Resolved, SettingsRegistry};
use crate::prelude::*;
use crate::strategy::{NoStrategySelector, StrategyRef, StrategySelector};
use mapcfg_types::enum_type::SettingEnum;

/// Settings service - main interface for consumers resolving their settings
///
/// Binds the registry to one raw configuration and a strategy selector. It
/// holds no mutable state and can be shared freely between threads.
pub struct SettingsService {
	registry: &'static SettingsRegistry,
	config: RawConfig,
	selector: Arc<dyn StrategySelector>,
}

impl SettingsService {
	pub fn new(config: RawConfig) -> Self {
		Self::with_selector(config, Arc::new(NoStrategySelector))
	}

	pub fn with_selector(config: RawConfig, selector: Arc<dyn StrategySelector>) -> Self {
		Self { registry: crate::registry(), config, selector }
	}

	pub fn config(&self) -> &RawConfig {
		&self.config
	}

	/// Get reference to registry (for listing all settings)
	pub fn registry(&self) -> &'static SettingsRegistry {
		self.registry
	}

	/// Get setting value with default resolution
	pub fn get(&self, key: &str) -> McResult<Resolved<SettingValue>> {
		self.registry.resolve_with(key, &self.config, self.selector.as_ref())
	}

	/// Type-safe getters (required - returns error if neither configured nor defaulted)
	pub fn get_bool(&self, key: &str) -> McResult<bool> {
		let value = self.get(key)?.require(key)?;
		value.as_bool().ok_or_else(|| mismatch(key, "a boolean", &value))
	}

	pub fn get_string(&self, key: &str) -> McResult<String> {
		match self.get(key)?.require(key)? {
			SettingValue::String(s) => Ok(s),
			v => Err(mismatch(key, "a string", &v)),
		}
	}

	pub fn get_enum<E: SettingEnum>(&self, key: &str) -> McResult<E> {
		self.registry.resolve_enum_with(key, &self.config, self.selector.as_ref())?.require(key)
	}

	pub fn get_enum_list<E: SettingEnum>(&self, key: &str) -> McResult<Vec<E>> {
		self.registry.resolve_enum_list_with(key, &self.config, self.selector.as_ref())?.require(key)
	}

	pub fn get_class(&self, key: &str) -> McResult<StrategyRef> {
		let value = self.get(key)?.require(key)?;
		StrategyRef::try_from(value).map_err(|v| mismatch(key, "a strategy", &v))
	}

	/// Type-safe optional getters (returns None if not configured and without default)
	/// Still returns error if the configured value is invalid or of the wrong type
	pub fn get_bool_opt(&self, key: &str) -> McResult<Option<bool>> {
		optional(self.get_bool(key))
	}

	pub fn get_string_opt(&self, key: &str) -> McResult<Option<String>> {
		optional(self.get_string(key))
	}

	pub fn get_enum_opt<E: SettingEnum>(&self, key: &str) -> McResult<Option<E>> {
		optional(self.get_enum(key))
	}

	pub fn get_class_opt(&self, key: &str) -> McResult<Option<StrategyRef>> {
		optional(self.get_class(key))
	}

	/// Log a warning for every deprecated setting present in the configuration
	///
	/// Returns the number of warnings emitted.
	pub fn report_deprecations(&self) -> usize {
		let deprecated = self.registry.deprecated_in(&self.config);
		for (def, deprecation) in &deprecated {
			warn!("Setting '{}' is {}", def.key, deprecation);
		}
		deprecated.len()
	}

	/// Validate every supplied setting the registry knows
	pub fn validate(&self) -> Vec<Error> {
		self.registry.validate(&self.config, self.selector.as_ref())
	}
}

impl fmt::Debug for SettingsService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingsService")
			.field("registry", &self.registry)
			.field("config", &self.config)
			.field("selector_active", &self.selector.is_active())
			.finish()
	}
}

fn mismatch(key: &str, expected: &str, got: &SettingValue) -> Error {
	Error::domain_mismatch(key, format!("{} (got {})", expected, got.type_name()))
}

fn optional<T>(result: McResult<T>) -> McResult<Option<T>> {
	match result {
		Ok(value) => Ok(Some(value)),
		Err(Error::NoDefault(_)) => Ok(None),
		Err(e) => Err(e),
	}
}

// vim: ts=4
