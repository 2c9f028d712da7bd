//! Error types shared by the registry, the resolver and configuration loading

use thiserror::Error;

pub type McResult<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// The key is not part of the compiled settings catalog
	#[error("unknown setting: {0}")]
	NotFound(String),

	/// The key was supplied, but its value does not fit the setting's value domain
	#[error("invalid value for setting '{key}': {reason}")]
	InvalidValue { key: String, reason: String },

	/// Raised only by required getters. Plain resolution reports a missing
	/// default as `Resolved::NoDefault` instead.
	#[error("setting '{0}' has no default and must be configured")]
	NoDefault(String),

	/// The caller asked for a typed view that the setting does not have
	#[error("setting '{key}' is not {expected}")]
	DomainMismatch { key: String, expected: String },

	/// Malformed configuration input or an inconsistent catalog
	#[error("configuration error: {0}")]
	Config(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidValue { key: key.into(), reason: reason.into() }
	}

	pub fn domain_mismatch(key: impl Into<String>, expected: impl Into<String>) -> Self {
		Self::DomainMismatch { key: key.into(), expected: expected.into() }
	}
}

// vim: ts=4
