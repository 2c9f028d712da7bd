//! Strategy selection seam
//!
//! Strategy-style settings name an implementation, either by a short name or by
//! class name. Turning a class name into something runnable belongs to the
//! hosting framework, which plugs in through [`StrategySelector`].

use std::collections::HashMap;

use crate::prelude::*;
use mapcfg_types::value::StrategyInstance;

/// Resolves names of implementations for a given role
pub trait StrategySelector: Send + Sync {
	/// Resolve `name` (a short name or class name) registered for `role`.
	/// For enum-typed settings `role` is the enum type name and the answer is a constant name.
	fn select(&self, role: &str, name: &str) -> Option<String>;

	/// An inactive selector knows nothing; class names are then accepted unverified
	fn is_active(&self) -> bool {
		true
	}
}

/// The default selector: knows no implementations
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStrategySelector;

impl StrategySelector for NoStrategySelector {
	fn select(&self, _role: &str, _name: &str) -> Option<String> {
		None
	}

	fn is_active(&self) -> bool {
		false
	}
}

/// In-memory table of known implementations
#[derive(Debug, Default, Clone)]
pub struct StaticStrategySelector {
	entries: HashMap<String, HashMap<String, String>>,
}

impl StaticStrategySelector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `name` for `role`, resolving to `resolved`
	pub fn register(
		&mut self,
		role: impl Into<String>,
		name: impl Into<String>,
		resolved: impl Into<String>,
	) -> &mut Self {
		self.entries.entry(role.into()).or_default().insert(name.into(), resolved.into());
		self
	}

	/// Builder-style register
	pub fn with(
		mut self,
		role: impl Into<String>,
		name: impl Into<String>,
		resolved: impl Into<String>,
	) -> Self {
		self.register(role, name, resolved);
		self
	}

	pub fn len(&self) -> usize {
		self.entries.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl StrategySelector for StaticStrategySelector {
	fn select(&self, role: &str, name: &str) -> Option<String> {
		self.entries.get(role)?.get(name).cloned()
	}
}

impl<F> StrategySelector for F
where
	F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
	fn select(&self, role: &str, name: &str) -> Option<String> {
		self(role, name)
	}
}

/// Resolved value of a strategy-style setting
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyRef {
	/// Fully qualified implementation class
	Class(String),
	/// Instance supplied by the application
	Instance(StrategyInstance),
}

impl StrategyRef {
	pub fn class_name(&self) -> Option<&str> {
		match self {
			StrategyRef::Class(name) => Some(name),
			StrategyRef::Instance(_) => None,
		}
	}
}

impl TryFrom<SettingValue> for StrategyRef {
	type Error = SettingValue;

	fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
		match value {
			SettingValue::Class(name) => Ok(StrategyRef::Class(name)),
			SettingValue::Instance(instance) => Ok(StrategyRef::Instance(instance)),
			other => Err(other),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_selector() {
		let mut selector = StaticStrategySelector::new();
		selector.register("role.A", "short", "com.acme.Impl");

		assert_eq!(selector.select("role.A", "short").as_deref(), Some("com.acme.Impl"));
		assert_eq!(selector.select("role.B", "short"), None);
		assert!(selector.is_active());
		assert_eq!(selector.len(), 1);
	}

	#[test]
	fn test_closure_selector() {
		let selector = |role: &str, name: &str| {
			(role == "role.A" && name.starts_with("com.acme.")).then(|| name.to_owned())
		};
		assert_eq!(selector.select("role.A", "com.acme.X").as_deref(), Some("com.acme.X"));
		assert_eq!(selector.select("role.A", "org.other.X"), None);
		assert!(!NoStrategySelector.is_active());
	}

	#[test]
	fn test_strategy_ref_from_value() {
		assert_eq!(
			StrategyRef::try_from(SettingValue::Class("com.acme.X".into())),
			Ok(StrategyRef::Class("com.acme.X".into()))
		);
		assert!(StrategyRef::try_from(SettingValue::Bool(true)).is_err());
	}
}

// vim: ts=4
