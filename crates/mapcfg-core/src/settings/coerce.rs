//! Coercion of raw values into value domains
//!
//! Enum-like values are matched in a fixed order and the first match wins:
//! an already typed constant, then a case-insensitive name (or spelling, or
//! numeric code), then a class name, which may be handed to the strategy
//! selector. There is no partial matching.

use itertools::Itertools;

use super::types::{ClassDomain, DefaultValue, SettingDefinition, ValueDomain};
use crate::prelude::*;
use crate::strategy::StrategySelector;
use mapcfg_types::enum_type::EnumDomain;

/// Coerce `raw` into the value domain of `def`
pub(crate) fn coerce(
	def: &SettingDefinition,
	raw: &RawValue,
	selector: &dyn StrategySelector,
) -> McResult<SettingValue> {
	match def.domain {
		ValueDomain::Bool => coerce_bool(def.key, raw).map(SettingValue::Bool),
		ValueDomain::String => coerce_string(def.key, raw).map(SettingValue::String),
		ValueDomain::Enum(domain) => {
			coerce_enum(def.key, domain, raw, selector).map(SettingValue::Enum)
		}
		ValueDomain::EnumList { domain, delimiter } => {
			coerce_enum_list(def.key, domain, delimiter, raw, selector).map(SettingValue::EnumList)
		}
		ValueDomain::Class(domain) => {
			let default = match def.default {
				Some(DefaultValue::Class(class)) => Some(class),
				_ => None,
			};
			coerce_class(def.key, domain, default, raw, selector)
		}
	}
}

fn coerce_bool(key: &str, raw: &RawValue) -> McResult<bool> {
	match raw {
		RawValue::Bool(b) => Ok(*b),
		RawValue::String(s) => {
			let s = s.trim();
			if s.eq_ignore_ascii_case("true") {
				Ok(true)
			} else if s.eq_ignore_ascii_case("false") {
				Ok(false)
			} else {
				Err(Error::invalid_value(
					key,
					format!("'{}' is not a boolean, expected true or false", s),
				))
			}
		}
		other => Err(Error::invalid_value(key, format!("expected a boolean, got {}", other.kind()))),
	}
}

fn coerce_string(key: &str, raw: &RawValue) -> McResult<String> {
	match raw {
		RawValue::String(s) => Ok(s.clone()),
		RawValue::Int(i) => Ok(i.to_string()),
		RawValue::Bool(b) => Ok(b.to_string()),
		other => Err(Error::invalid_value(key, format!("expected a string, got {}", other.kind()))),
	}
}

fn coerce_enum(
	key: &str,
	domain: &'static EnumDomain,
	raw: &RawValue,
	selector: &dyn StrategySelector,
) -> McResult<EnumConstant> {
	match raw {
		RawValue::Enum(constant) => {
			if domain.contains(*constant) {
				Ok(*constant)
			} else {
				Err(Error::invalid_value(
					key,
					format!(
						"{}.{} is not a constant of {}",
						constant.type_name, constant.name, domain.type_name
					),
				))
			}
		}
		RawValue::String(token) => coerce_enum_token(key, domain, token, selector),
		RawValue::Int(code) => domain.match_code(*code).ok_or_else(|| {
			Error::invalid_value(key, format!("{} is not a known {} code", code, domain.type_name))
		}),
		RawValue::Class(class) => enum_from_class(key, domain, class, selector),
		other => Err(Error::invalid_value(
			key,
			format!("cannot convert {} to {}", other.kind(), domain.type_name),
		)),
	}
}

fn coerce_enum_token(
	key: &str,
	domain: &'static EnumDomain,
	token: &str,
	selector: &dyn StrategySelector,
) -> McResult<EnumConstant> {
	if let Some(constant) = domain.match_name(token) {
		return Ok(constant);
	}
	if let Ok(code) = token.trim().parse::<i64>() {
		if let Some(constant) = domain.match_code(code) {
			return Ok(constant);
		}
	}
	if is_qualified_class_name(token.trim()) {
		return enum_from_class(key, domain, token, selector);
	}
	Err(Error::invalid_value(
		key,
		format!("'{}' is not one of {}", token.trim(), domain.names().join(", ")),
	))
}

fn enum_from_class(
	key: &str,
	domain: &'static EnumDomain,
	class: &str,
	selector: &dyn StrategySelector,
) -> McResult<EnumConstant> {
	let class = class.trim();
	if let Some(constant) = domain.match_class(class) {
		return Ok(constant);
	}
	selector
		.select(domain.type_name, class)
		.and_then(|selected| domain.match_name(&selected))
		.ok_or_else(|| {
			Error::invalid_value(
				key,
				format!("class '{}' does not resolve to a {} constant", class, domain.type_name),
			)
		})
}

fn coerce_enum_list(
	key: &str,
	domain: &'static EnumDomain,
	delimiter: char,
	raw: &RawValue,
	selector: &dyn StrategySelector,
) -> McResult<Vec<EnumConstant>> {
	let mut list = Vec::new();
	let mut push = |constant: EnumConstant| {
		if !list.contains(&constant) {
			list.push(constant);
		}
	};

	match raw {
		RawValue::String(s) => {
			for token in s.split(delimiter).map(str::trim).filter(|t| !t.is_empty()) {
				push(coerce_enum_token(key, domain, token, selector)?);
			}
		}
		RawValue::List(items) => {
			for item in items {
				push(coerce_enum(key, domain, item, selector)?);
			}
		}
		single @ (RawValue::Enum(_) | RawValue::Class(_) | RawValue::Int(_)) => {
			push(coerce_enum(key, domain, single, selector)?);
		}
		other => {
			return Err(Error::invalid_value(
				key,
				format!("expected a list of {}, got {}", domain.type_name, other.kind()),
			));
		}
	}

	if list.is_empty() {
		return Err(Error::invalid_value(key, "list is empty"));
	}
	Ok(list)
}

fn coerce_class(
	key: &str,
	domain: &'static ClassDomain,
	default: Option<&'static str>,
	raw: &RawValue,
	selector: &dyn StrategySelector,
) -> McResult<SettingValue> {
	let name = match raw {
		RawValue::Instance(instance) => return Ok(SettingValue::Instance(instance.clone())),
		RawValue::String(s) | RawValue::Class(s) => s.trim(),
		other => {
			return Err(Error::invalid_value(
				key,
				format!("expected a {} class or instance, got {}", domain.role, other.kind()),
			));
		}
	};

	if let Some(class) = domain.expand(name) {
		return Ok(SettingValue::Class(class.to_owned()));
	}

	// Built-in implementations never depend on the selector
	if domain.is_known_class(name) || default == Some(name) {
		return Ok(SettingValue::Class(name.to_owned()));
	}

	if selector.is_active() {
		return selector.select(domain.role, name).map(SettingValue::Class).ok_or_else(|| {
			Error::invalid_value(key, format!("'{}' does not name a {} implementation", name, domain.role))
		});
	}

	// Without a selector, existence of the class is checked by whoever loads it
	if is_qualified_class_name(name) {
		Ok(SettingValue::Class(name.to_owned()))
	} else if domain.short_names.is_empty() {
		Err(Error::invalid_value(key, format!("'{}' is not a qualified class name", name)))
	} else {
		Err(Error::invalid_value(
			key,
			format!(
				"'{}' is neither a short name ({}) nor a qualified class name",
				name,
				domain.short_names.iter().map(|(short, _)| short).join(", ")
			),
		))
	}
}

/// Dotted sequence of at least two identifiers, e.g. `com.acme.Naming$Inner`
pub(crate) fn is_qualified_class_name(name: &str) -> bool {
	let mut segments = 0;
	for segment in name.split('.') {
		let mut chars = segment.chars();
		let valid = match chars.next() {
			Some(first) => {
				(first.is_alphabetic() || first == '_' || first == '$')
					&& chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
			}
			None => false,
		};
		if !valid {
			return false;
		}
		segments += 1;
	}
	segments >= 2
}


// vim: ts=4
