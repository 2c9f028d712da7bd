//! Shared types for the mapcfg settings registry.
//!
//! This crate holds the values that travel between the application and the
//! registry: raw configuration input, resolved setting values, enumerated
//! setting types, and the error type. It has no knowledge of the settings
//! catalog itself.

pub mod enum_type;
pub mod error;
pub mod prelude;
pub mod raw_config;
pub mod value;

pub use raw_config::RawConfig;

// vim: ts=4
