//! Settings types and definitions
//!
//! Core types for the settings subsystem: value domains, definitions, and the
//! registry that holds them.

use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Debug};

use super::coerce::is_qualified_class_name;
use crate::prelude::*;
use mapcfg_types::enum_type::EnumDomain;

/// Strategy-style setting: the value names an implementation of `role`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDomain {
	/// Contract the implementation has to fulfil
	pub role: &'static str,
	/// (short name, implementation class) pairs
	pub short_names: &'static [(&'static str, &'static str)],
}

impl ClassDomain {
	/// Expand a short name (case-insensitive) to its implementation class
	pub fn expand(&self, name: &str) -> Option<&'static str> {
		let name = name.trim();
		self.short_names
			.iter()
			.find(|(short, _)| short.eq_ignore_ascii_case(name))
			.map(|(_, class)| *class)
	}

	/// Check whether `class` is one of the known implementation classes
	pub fn is_known_class(&self, class: &str) -> bool {
		self.short_names.iter().any(|(_, known)| *known == class)
	}
}

/// The set of values a setting accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
	String,
	Bool,
	Enum(&'static EnumDomain),
	Class(&'static ClassDomain),
	EnumList { domain: &'static EnumDomain, delimiter: char },
}

impl ValueDomain {
	/// Short kind name for messages and listings
	pub fn kind(&self) -> &'static str {
		match self {
			ValueDomain::String => "string",
			ValueDomain::Bool => "bool",
			ValueDomain::Enum(_) => "enum",
			ValueDomain::Class(_) => "class",
			ValueDomain::EnumList { .. } => "enum list",
		}
	}

	/// Human-readable description of the accepted values
	pub fn describe(&self) -> String {
		match self {
			ValueDomain::String => "any string".into(),
			ValueDomain::Bool => "true | false".into(),
			ValueDomain::Enum(domain) => domain.names().join(" | "),
			ValueDomain::Class(domain) => {
				if domain.short_names.is_empty() {
					format!("class implementing {}", domain.role)
				} else {
					format!(
						"{} | class implementing {}",
						domain.short_names.iter().map(|(short, _)| short).join(" | "),
						domain.role
					)
				}
			}
			ValueDomain::EnumList { domain, delimiter } => {
				format!("'{}'-separated list of {}", delimiter, domain.names().join(" | "))
			}
		}
	}
}

/// Compile-time form of a default value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
	Bool(bool),
	String(&'static str),
	Enum(EnumConstant),
	EnumList(&'static [EnumConstant]),
	Class(&'static str),
}

impl DefaultValue {
	pub fn to_value(self) -> SettingValue {
		match self {
			DefaultValue::Bool(b) => SettingValue::Bool(b),
			DefaultValue::String(s) => SettingValue::String(s.to_owned()),
			DefaultValue::Enum(c) => SettingValue::Enum(c),
			DefaultValue::EnumList(list) => SettingValue::EnumList(list.to_vec()),
			DefaultValue::Class(class) => SettingValue::Class(class.to_owned()),
		}
	}

	/// Check that the default is a member of `domain`
	pub fn fits(&self, domain: &ValueDomain) -> bool {
		match (self, domain) {
			(DefaultValue::Bool(_), ValueDomain::Bool)
			| (DefaultValue::String(_), ValueDomain::String) => true,
			(DefaultValue::Enum(c), ValueDomain::Enum(d)) => d.contains(*c),
			(DefaultValue::EnumList(list), ValueDomain::EnumList { domain, .. }) => {
				!list.is_empty() && list.iter().all(|c| domain.contains(*c))
			}
			(DefaultValue::Class(class), ValueDomain::Class(d)) => {
				d.is_known_class(class) || is_qualified_class_name(class)
			}
			_ => false,
		}
	}
}

/// Deprecation status of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deprecation {
	/// Version in which the setting was deprecated
	pub since: &'static str,
	/// Scheduled for removal in a future version
	pub for_removal: bool,
	/// Key to use instead, if any
	pub replacement: Option<&'static str>,
	pub note: Option<&'static str>,
}

impl Deprecation {
	pub const fn since(since: &'static str) -> Self {
		Self { since, for_removal: false, replacement: None, note: None }
	}

	pub const fn for_removal(mut self) -> Self {
		self.for_removal = true;
		self
	}

	pub const fn replacement(mut self, key: &'static str) -> Self {
		self.replacement = Some(key);
		self
	}

	pub const fn note(mut self, note: &'static str) -> Self {
		self.note = Some(note);
		self
	}
}

impl fmt::Display for Deprecation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "deprecated since {}", self.since)?;
		if self.for_removal {
			f.write_str(", scheduled for removal")?;
		}
		if let Some(replacement) = self.replacement {
			write!(f, "; use '{}' instead", replacement)?;
		}
		if let Some(note) = self.note {
			write!(f, " ({})", note)?;
		}
		Ok(())
	}
}

/// Setting definition - defines metadata for each setting
///
/// Definitions are built in const context with the fluent methods below and
/// collected into static tables per settings area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefinition {
	/// Dot-separated key (e.g., "hibernate.default_catalog")
	pub key: &'static str,

	/// Human-readable description
	pub description: &'static str,

	pub domain: ValueDomain,

	/// Applied when the key is absent from the configuration.
	/// If None, the consumer has to supply its own fallback.
	pub default: Option<DefaultValue>,

	pub deprecation: Option<Deprecation>,

	/// Subject to change in a future version. Informational only.
	pub incubating: bool,

	/// Version that introduced the setting
	pub since: Option<&'static str>,
}

impl SettingDefinition {
	pub const fn new(key: &'static str, domain: ValueDomain) -> Self {
		Self {
			key,
			description: "",
			domain,
			default: None,
			deprecation: None,
			incubating: false,
			since: None,
		}
	}

	pub const fn description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	pub const fn default(mut self, value: DefaultValue) -> Self {
		self.default = Some(value);
		self
	}

	pub const fn deprecated(mut self, deprecation: Deprecation) -> Self {
		self.deprecation = Some(deprecation);
		self
	}

	pub const fn incubating(mut self) -> Self {
		self.incubating = true;
		self
	}

	pub const fn since(mut self, version: &'static str) -> Self {
		self.since = Some(version);
		self
	}

	pub fn is_deprecated(&self) -> bool {
		self.deprecation.is_some()
	}
}

/// Serializable view of a definition, used for listings
#[derive(Debug, Clone, Serialize)]
pub struct SettingDescriptor {
	pub key: &'static str,
	pub description: &'static str,
	pub kind: &'static str,
	pub accepts: String,
	pub default: Option<SettingValue>,
	pub deprecation: Option<Deprecation>,
	pub incubating: bool,
	pub since: Option<&'static str>,
}

impl From<&SettingDefinition> for SettingDescriptor {
	fn from(def: &SettingDefinition) -> Self {
		SettingDescriptor {
			key: def.key,
			description: def.description,
			kind: def.domain.kind(),
			accepts: def.domain.describe(),
			default: def.default.map(DefaultValue::to_value),
			deprecation: def.deprecation,
			incubating: def.incubating,
			since: def.since,
		}
	}
}

/// Outcome of resolving one setting
///
/// `NoDefault` is a signal, not an error: the key was not configured and the
/// setting declares no default, so the consumer applies its own fallback.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
	/// Taken from the supplied configuration
	Configured(T),
	/// Not configured, declared default applied
	Default(T),
	NoDefault,
}

impl<T> Resolved<T> {
	pub fn value(&self) -> Option<&T> {
		match self {
			Resolved::Configured(v) | Resolved::Default(v) => Some(v),
			Resolved::NoDefault => None,
		}
	}

	pub fn into_option(self) -> Option<T> {
		match self {
			Resolved::Configured(v) | Resolved::Default(v) => Some(v),
			Resolved::NoDefault => None,
		}
	}

	pub fn is_configured(&self) -> bool {
		matches!(self, Resolved::Configured(_))
	}

	pub fn is_no_default(&self) -> bool {
		matches!(self, Resolved::NoDefault)
	}

	/// Where the value came from, for logs and listings
	pub fn source(&self) -> &'static str {
		match self {
			Resolved::Configured(_) => "configured",
			Resolved::Default(_) => "default",
			Resolved::NoDefault => "unset",
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
		match self {
			Resolved::Configured(v) => Resolved::Configured(f(v)),
			Resolved::Default(v) => Resolved::Default(f(v)),
			Resolved::NoDefault => Resolved::NoDefault,
		}
	}

	pub fn try_map<U>(self, f: impl FnOnce(T) -> McResult<U>) -> McResult<Resolved<U>> {
		Ok(match self {
			Resolved::Configured(v) => Resolved::Configured(f(v)?),
			Resolved::Default(v) => Resolved::Default(f(v)?),
			Resolved::NoDefault => Resolved::NoDefault,
		})
	}

	/// Apply the consumer's fallback when there is neither a value nor a default
	pub fn unwrap_or(self, fallback: T) -> T {
		self.into_option().unwrap_or(fallback)
	}

	pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
		self.into_option().unwrap_or_else(fallback)
	}

	/// Turn the no-default signal into `Error::NoDefault` for settings the caller requires
	pub fn require(self, key: &str) -> McResult<T> {
		self.into_option().ok_or_else(|| Error::NoDefault(key.to_owned()))
	}
}

/// Mutable registry used while the catalog is loaded
pub(crate) struct RegistryBuilder {
	definitions: HashMap<&'static str, &'static SettingDefinition>,
}

impl RegistryBuilder {
	pub(crate) fn new() -> Self {
		Self { definitions: HashMap::new() }
	}

	/// Register a new setting definition
	pub(crate) fn register(&mut self, def: &'static SettingDefinition) -> McResult<()> {
		if self.definitions.contains_key(def.key) {
			return Err(Error::Config(format!("Setting '{}' is already registered", def.key)));
		}
		if let Some(default) = &def.default {
			if !default.fits(&def.domain) {
				return Err(Error::Config(format!(
					"Default of setting '{}' is outside its {} domain",
					def.key,
					def.domain.kind()
				)));
			}
		}

		tracing::debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key, def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub(crate) fn freeze(self) -> SettingsRegistry {
		tracing::info!("Freezing settings registry with {} definitions", self.definitions.len());
		SettingsRegistry { definitions: self.definitions }
	}
}

/// Immutable catalog of setting definitions
///
/// Built once per process (see [`crate::registry`]) and shared read-only afterwards.
pub struct SettingsRegistry {
	definitions: HashMap<&'static str, &'static SettingDefinition>,
}

impl SettingsRegistry {
	/// Get a setting definition by key
	pub fn get(&self, key: &str) -> Option<&'static SettingDefinition> {
		self.definitions.get(key).copied()
	}

	/// Get a setting definition by key, failing with `NotFound` for unknown keys
	pub fn lookup(&self, key: &str) -> McResult<&'static SettingDefinition> {
		self.get(key).ok_or_else(|| Error::NotFound(key.to_owned()))
	}

	pub fn contains(&self, key: &str) -> bool {
		self.definitions.contains_key(key)
	}

	/// List all registered settings, ordered by key
	pub fn list(&self) -> impl Iterator<Item = &'static SettingDefinition> + '_ {
		self.definitions.values().copied().sorted_by_key(|def| def.key)
	}

	/// List settings with a specific prefix, ordered by key
	pub fn list_by_prefix<'a>(
		&'a self,
		prefix: &'a str,
	) -> impl Iterator<Item = &'static SettingDefinition> + 'a {
		self.list().filter(move |def| def.key.starts_with(prefix))
	}

	pub fn is_deprecated(&self, key: &str) -> bool {
		self.get(key).is_some_and(SettingDefinition::is_deprecated)
	}

	pub fn deprecation_info(&self, key: &str) -> Option<&'static Deprecation> {
		self.get(key).and_then(|def| def.deprecation.as_ref())
	}

	/// Deprecated settings present in `config`, ordered by key
	pub fn deprecated_in(
		&self,
		config: &RawConfig,
	) -> Vec<(&'static SettingDefinition, &'static Deprecation)> {
		config
			.keys()
			.filter_map(|key| self.get(key))
			.filter_map(|def| def.deprecation.as_ref().map(|dep| (def, dep)))
			.sorted_by_key(|(def, _)| def.key)
			.collect()
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Debug for SettingsRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingsRegistry").field("len", &self.definitions.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::enums::TimeZoneStorageType;
	use mapcfg_types::enum_type::SettingEnum;

	static FLAG: SettingDefinition = SettingDefinition::new("test.flag", ValueDomain::Bool)
		.description("A flag")
		.default(DefaultValue::Bool(false));

	static BAD_DEFAULT: SettingDefinition =
		SettingDefinition::new("test.storage", ValueDomain::Enum(TimeZoneStorageType::DOMAIN))
			.default(DefaultValue::Bool(true));

	#[test]
	fn test_register_rejects_duplicates() {
		let mut builder = RegistryBuilder::new();
		builder.register(&FLAG).unwrap();
		let err = builder.register(&FLAG).unwrap_err();
		assert!(matches!(err, Error::Config(msg) if msg.contains("already registered")));
	}

	#[test]
	fn test_register_rejects_default_outside_domain() {
		let mut builder = RegistryBuilder::new();
		assert!(matches!(builder.register(&BAD_DEFAULT), Err(Error::Config(_))));
		assert!(builder.freeze().is_empty());
	}

	#[test]
	fn test_frozen_lookup() {
		let mut builder = RegistryBuilder::new();
		builder.register(&FLAG).unwrap();
		let registry = builder.freeze();

		assert_eq!(registry.lookup("test.flag").unwrap().key, "test.flag");
		assert!(matches!(registry.lookup("test.other"), Err(Error::NotFound(k)) if k == "test.other"));
		assert!(!registry.is_deprecated("test.flag"));
		assert!(!registry.is_deprecated("test.other"));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn test_resolved_helpers() {
		let configured = Resolved::Configured(3);
		assert_eq!(configured.value(), Some(&3));
		assert_eq!(configured.clone().map(|v| v * 2), Resolved::Configured(6));
		assert_eq!(configured.source(), "configured");

		let unset: Resolved<i32> = Resolved::NoDefault;
		assert_eq!(unset.clone().unwrap_or(9), 9);
		assert!(matches!(unset.require("k"), Err(Error::NoDefault(k)) if k == "k"));
	}

	#[test]
	fn test_descriptor_serialization() {
		let descriptor = SettingDescriptor::from(&FLAG);
		let json = serde_json::to_value(&descriptor).unwrap();
		assert_eq!(json["key"], "test.flag");
		assert_eq!(json["kind"], "bool");
		assert_eq!(json["default"], false);
		assert!(json["deprecation"].is_null());
	}

	#[test]
	fn test_deprecation_display() {
		let dep = Deprecation::since("6.2").for_removal().replacement("test.new");
		assert_eq!(dep.to_string(), "deprecated since 6.2, scheduled for removal; use 'test.new' instead");
	}
}

// vim: ts=4
