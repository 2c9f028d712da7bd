//! Resolution of raw configuration against the registry
//!
//! Resolution is pure: the registry is never modified and nothing is cached,
//! so resolving the same key against the same configuration always yields the
//! same result.

use tracing::debug;

use super::coerce::coerce;
use super::types::{Resolved, SettingsRegistry, ValueDomain};
use crate::prelude::*;
use crate::strategy::{NoStrategySelector, StrategySelector};
use mapcfg_types::enum_type::SettingEnum;

impl SettingsRegistry {
	/// Resolve `key` against `config` without a strategy selector
	pub fn resolve(&self, key: &str, config: &RawConfig) -> McResult<Resolved<SettingValue>> {
		self.resolve_with(key, config, &NoStrategySelector)
	}

	/// Resolve `key` against `config`
	///
	/// A present value is coerced into the setting's domain; an absent one
	/// falls back to the declared default, or to `Resolved::NoDefault`.
	pub fn resolve_with(
		&self,
		key: &str,
		config: &RawConfig,
		selector: &dyn StrategySelector,
	) -> McResult<Resolved<SettingValue>> {
		let def = self.lookup(key)?;

		match config.get(key) {
			Some(raw) => {
				let value = coerce(def, raw, selector)?;
				debug!("Setting resolved: {} = {}", key, value);
				Ok(Resolved::Configured(value))
			}
			None => Ok(match def.default {
				Some(default) => Resolved::Default(default.to_value()),
				None => Resolved::NoDefault,
			}),
		}
	}

	/// Resolve an enum-valued setting to its Rust type
	pub fn resolve_enum<E: SettingEnum>(
		&self,
		key: &str,
		config: &RawConfig,
	) -> McResult<Resolved<E>> {
		self.resolve_enum_with(key, config, &NoStrategySelector)
	}

	pub fn resolve_enum_with<E: SettingEnum>(
		&self,
		key: &str,
		config: &RawConfig,
		selector: &dyn StrategySelector,
	) -> McResult<Resolved<E>> {
		let def = self.lookup(key)?;
		match def.domain {
			ValueDomain::Enum(domain) if domain.type_name == E::DOMAIN.type_name => {}
			_ => return Err(Error::domain_mismatch(key, format!("an enum of {}", E::DOMAIN.type_name))),
		}

		self.resolve_with(key, config, selector)?.try_map(|value| {
			value
				.as_enum()
				.and_then(E::from_constant)
				.ok_or_else(|| Error::domain_mismatch(key, format!("an enum of {}", E::DOMAIN.type_name)))
		})
	}

	/// Resolve a list-of-enum setting to its Rust type
	pub fn resolve_enum_list<E: SettingEnum>(
		&self,
		key: &str,
		config: &RawConfig,
	) -> McResult<Resolved<Vec<E>>> {
		self.resolve_enum_list_with(key, config, &NoStrategySelector)
	}

	pub fn resolve_enum_list_with<E: SettingEnum>(
		&self,
		key: &str,
		config: &RawConfig,
		selector: &dyn StrategySelector,
	) -> McResult<Resolved<Vec<E>>> {
		let def = self.lookup(key)?;
		match def.domain {
			ValueDomain::EnumList { domain, .. } if domain.type_name == E::DOMAIN.type_name => {}
			_ => return Err(Error::domain_mismatch(key, format!("a list of {}", E::DOMAIN.type_name))),
		}

		self.resolve_with(key, config, selector)?.try_map(|value| {
			value
				.as_enum_list()
				.unwrap_or_default()
				.iter()
				.map(|c| {
					E::from_constant(*c).ok_or_else(|| {
						Error::domain_mismatch(key, format!("a list of {}", E::DOMAIN.type_name))
					})
				})
				.collect()
		})
	}

	/// Check every supplied key that the registry knows, collecting all failures
	///
	/// Keys unknown to the registry are ignored: they belong to other subsystems.
	pub fn validate(&self, config: &RawConfig, selector: &dyn StrategySelector) -> Vec<Error> {
		let mut keys: Vec<&str> = config.keys().filter(|key| self.contains(key)).collect();
		keys.sort_unstable();
		keys.into_iter().filter_map(|key| self.resolve_with(key, config, selector).err()).collect()
	}
}

// vim: ts=4
