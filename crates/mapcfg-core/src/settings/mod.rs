//! Settings subsystem: definitions, the registry, resolution and the service

mod coerce;
mod resolve;
pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{
	ClassDomain, DefaultValue, Deprecation, Resolved, SettingDefinition, SettingDescriptor,
	SettingsRegistry, ValueDomain,
};

pub(crate) use types::RegistryBuilder;

// vim: ts=4
