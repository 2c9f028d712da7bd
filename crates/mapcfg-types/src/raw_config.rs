//! Raw configuration supplied by the application
//!
//! A `RawConfig` is a plain key → value map. It can be built programmatically,
//! parsed from Java-style properties text, or read from JSON. No validation
//! happens here; values are checked when a consumer resolves a key.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
	values: HashMap<String, RawValue>,
}

impl RawConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert
	pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Insert or replace a value, returning the previous one
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
		self.values.insert(key.into(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<RawValue> {
		self.values.remove(key)
	}

	pub fn get(&self, key: &str) -> Option<&RawValue> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Overlay `other` on top of this configuration (values in `other` win)
	pub fn merge(&mut self, other: RawConfig) {
		self.values.extend(other.values);
	}

	/// Parse Java-style properties text
	///
	/// Supports `key=value`, `key: value` and `key value` lines, `#` and `!`
	/// comments, continuation lines ending in a backslash, and backslash
	/// escapes (`\\`, `\t`, `\n`, `\uXXXX`, escaped separators in keys).
	/// Every value is read as a string.
	pub fn from_properties(text: &str) -> McResult<Self> {
		let mut config = RawConfig::new();
		let mut pending = String::new();
		let mut start_line = 0;

		for (idx, line) in text.lines().enumerate() {
			let line = if pending.is_empty() { line.trim() } else { line.trim_start() };
			if pending.is_empty() {
				if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
					continue;
				}
				start_line = idx + 1;
			}

			if let Some(stripped) = continued(line) {
				pending.push_str(stripped);
				continue;
			}
			pending.push_str(line);

			let (key, value) = split_property(&pending, start_line)?;
			tracing::trace!("property {} = {}", key, value);
			config.insert(key, value);
			pending.clear();
		}

		if !pending.is_empty() {
			let (key, value) = split_property(&pending, start_line)?;
			config.insert(key, value);
		}

		Ok(config)
	}

	/// Read configuration from a JSON object
	///
	/// Nested objects are flattened into dotted keys, so `{"hibernate": {"validate_xml": false}}`
	/// yields the key `hibernate.validate_xml`. Nulls are skipped.
	pub fn from_json(value: &serde_json::Value) -> McResult<Self> {
		let serde_json::Value::Object(map) = value else {
			return Err(Error::Config("JSON configuration must be an object".into()));
		};
		let mut config = RawConfig::new();
		flatten_json(&mut config, None, map)?;
		Ok(config)
	}

	pub fn from_json_str(text: &str) -> McResult<Self> {
		let value: serde_json::Value = serde_json::from_str(text)?;
		Self::from_json(&value)
	}
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawConfig {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}
}

impl<'de> Deserialize<'de> for RawConfig {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = serde_json::Value::deserialize(deserializer)?;
		RawConfig::from_json(&value).map_err(serde::de::Error::custom)
	}
}

/// Strip a trailing continuation backslash (an odd number of trailing backslashes)
fn continued(line: &str) -> Option<&str> {
	let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
	if trailing % 2 == 1 { Some(&line[..line.len() - 1]) } else { None }
}

/// Split at the first unescaped separator, then unescape key and value
fn split_property(line: &str, line_no: usize) -> McResult<(String, String)> {
	let mut escaped = false;
	let pos = line.char_indices().find_map(|(i, c)| {
		if escaped {
			escaped = false;
			None
		} else if c == '\\' {
			escaped = true;
			None
		} else {
			matches!(c, '=' | ':' | ' ' | '\t').then_some(i)
		}
	});

	let (key, value) = match pos {
		Some(pos) => {
			let rest = line[pos..].trim_start();
			let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
			(&line[..pos], rest.trim())
		}
		None => (line.trim(), ""),
	};
	if key.is_empty() {
		return Err(Error::Config(format!("missing key on properties line {}", line_no)));
	}

	let malformed = || Error::Config(format!("malformed \\uXXXX escape on properties line {}", line_no));
	Ok((unescape(key).ok_or_else(malformed)?, unescape(value).ok_or_else(malformed)?))
}

/// Resolve backslash escapes; `None` on a malformed `\uXXXX`
fn unescape(text: &str) -> Option<String> {
	if !text.contains('\\') {
		return Some(text.to_owned());
	}

	let mut out = String::with_capacity(text.len());
	let mut chars = text.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('t') => out.push('\t'),
			Some('n') => out.push('\n'),
			Some('r') => out.push('\r'),
			Some('f') => out.push('\u{c}'),
			Some('u') => {
				let hex: String = chars.by_ref().take(4).collect();
				if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
					return None;
				}
				out.push(u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)?);
			}
			Some(other) => out.push(other),
			None => {}
		}
	}
	Some(out)
}

fn flatten_json(
	config: &mut RawConfig,
	prefix: Option<&str>,
	map: &serde_json::Map<String, serde_json::Value>,
) -> McResult<()> {
	for (name, value) in map {
		let key = match prefix {
			Some(prefix) => format!("{}.{}", prefix, name),
			None => name.clone(),
		};
		match value {
			serde_json::Value::Null => {}
			serde_json::Value::Object(inner) => flatten_json(config, Some(&key), inner)?,
			other => {
				let raw = json_to_raw(&key, other)?;
				config.insert(key, raw);
			}
		}
	}
	Ok(())
}

fn json_to_raw(key: &str, value: &serde_json::Value) -> McResult<RawValue> {
	match value {
		serde_json::Value::String(s) => Ok(RawValue::String(s.clone())),
		serde_json::Value::Bool(b) => Ok(RawValue::Bool(*b)),
		serde_json::Value::Number(n) => {
			Ok(n.as_i64().map_or_else(|| RawValue::String(n.to_string()), RawValue::Int))
		}
		serde_json::Value::Array(items) => {
			items.iter().map(|item| json_to_raw(key, item)).collect::<McResult<Vec<_>>>().map(RawValue::List)
		}
		serde_json::Value::Null | serde_json::Value::Object(_) => {
			Err(Error::Config(format!("unsupported JSON value in list for '{}'", key)))
		}
	}
}


// vim: ts=4
