//! Raw (caller supplied) and resolved (typed) setting values

use serde::{Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A constant of an enumerated setting type, identified by its type and canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumConstant {
	pub type_name: &'static str,
	pub name: &'static str,
}

impl EnumConstant {
	pub const fn new(type_name: &'static str, name: &'static str) -> Self {
		Self { type_name, name }
	}
}

impl fmt::Display for EnumConstant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl Serialize for EnumConstant {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name)
	}
}

/// An already constructed strategy object handed over by the application
///
/// Equality is identity: two instances are equal only if they share the same allocation.
#[derive(Clone)]
pub struct StrategyInstance {
	type_name: &'static str,
	inner: Arc<dyn Any + Send + Sync>,
}

impl StrategyInstance {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self { type_name: std::any::type_name::<T>(), inner: Arc::new(value) }
	}

	/// Type name of the wrapped value
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.downcast_ref::<T>()
	}
}

impl PartialEq for StrategyInstance {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for StrategyInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("StrategyInstance").field(&self.type_name).finish()
	}
}

/// Value as supplied by the application, before coercion into a value domain
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
	String(String),
	Bool(bool),
	Int(i64),
	/// An already typed enum constant
	Enum(EnumConstant),
	/// A reference to an implementation class, by fully qualified name
	Class(String),
	List(Vec<RawValue>),
	Instance(StrategyInstance),
}

impl RawValue {
	/// Wrap a typed enum value
	pub fn from_enum<E: crate::enum_type::SettingEnum>(value: E) -> Self {
		RawValue::Enum(value.constant())
	}

	pub fn class(name: impl Into<String>) -> Self {
		RawValue::Class(name.into())
	}

	pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
		RawValue::Instance(StrategyInstance::new(value))
	}

	/// Get the kind name for error messages
	pub fn kind(&self) -> &'static str {
		match self {
			RawValue::String(_) => "string",
			RawValue::Bool(_) => "bool",
			RawValue::Int(_) => "int",
			RawValue::Enum(_) => "enum constant",
			RawValue::Class(_) => "class reference",
			RawValue::List(_) => "list",
			RawValue::Instance(_) => "instance",
		}
	}
}

impl From<&str> for RawValue {
	fn from(value: &str) -> Self {
		RawValue::String(value.to_owned())
	}
}

impl From<String> for RawValue {
	fn from(value: String) -> Self {
		RawValue::String(value)
	}
}

impl From<bool> for RawValue {
	fn from(value: bool) -> Self {
		RawValue::Bool(value)
	}
}

impl From<i64> for RawValue {
	fn from(value: i64) -> Self {
		RawValue::Int(value)
	}
}

impl From<i32> for RawValue {
	fn from(value: i32) -> Self {
		RawValue::Int(i64::from(value))
	}
}

impl From<EnumConstant> for RawValue {
	fn from(value: EnumConstant) -> Self {
		RawValue::Enum(value)
	}
}

impl From<StrategyInstance> for RawValue {
	fn from(value: StrategyInstance) -> Self {
		RawValue::Instance(value)
	}
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
	fn from(values: Vec<T>) -> Self {
		RawValue::List(values.into_iter().map(Into::into).collect())
	}
}

/// Resolved setting value, always a member of the setting's value domain
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
	Bool(bool),
	String(String),
	Enum(EnumConstant),
	EnumList(Vec<EnumConstant>),
	/// Fully qualified implementation class name
	Class(String),
	Instance(StrategyInstance),
}

impl SettingValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Bool(_) => "bool",
			SettingValue::String(_) => "string",
			SettingValue::Enum(_) => "enum",
			SettingValue::EnumList(_) => "enum list",
			SettingValue::Class(_) => "class",
			SettingValue::Instance(_) => "instance",
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			SettingValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_enum(&self) -> Option<EnumConstant> {
		match self {
			SettingValue::Enum(c) => Some(*c),
			_ => None,
		}
	}

	pub fn as_enum_list(&self) -> Option<&[EnumConstant]> {
		match self {
			SettingValue::EnumList(list) => Some(list),
			_ => None,
		}
	}

	pub fn as_instance(&self) -> Option<&StrategyInstance> {
		match self {
			SettingValue::Instance(i) => Some(i),
			_ => None,
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SettingValue::Bool(b) => write!(f, "{}", b),
			SettingValue::String(s) | SettingValue::Class(s) => f.write_str(s),
			SettingValue::Enum(c) => f.write_str(c.name),
			SettingValue::EnumList(list) => {
				for (i, c) in list.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					f.write_str(c.name)?;
				}
				Ok(())
			}
			SettingValue::Instance(i) => write!(f, "<instance of {}>", i.type_name()),
		}
	}
}

impl Serialize for SettingValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			SettingValue::Bool(b) => serializer.serialize_bool(*b),
			SettingValue::EnumList(list) => list.serialize(serializer),
			other => serializer.collect_str(other),
		}
	}
}


// vim: ts=4
