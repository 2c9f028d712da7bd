//! Mapping settings registry.
//!
//! This crate holds the compiled catalog of mapping settings: every key, its
//! accepted values, its default and its deprecation status. Applications hand
//! in a raw configuration and get typed, validated values back, either one
//! setting at a time through the registry or the [`SettingsService`], or all at
//! once as [`MappingOptions`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod catalog;
pub mod enums;
pub mod keys;
pub mod options;
pub mod prelude;
pub mod settings;
pub mod strategy;

use std::sync::LazyLock;

// Re-export commonly used types
pub use options::MappingOptions;
pub use settings::{Resolved, SettingDefinition, SettingsRegistry, SettingsService};
pub use strategy::{NoStrategySelector, StaticStrategySelector, StrategyRef, StrategySelector};

static REGISTRY: LazyLock<SettingsRegistry> = LazyLock::new(catalog::load);

/// The process-wide settings registry, built on first use
pub fn registry() -> &'static SettingsRegistry {
	&REGISTRY
}

// vim: ts=4
