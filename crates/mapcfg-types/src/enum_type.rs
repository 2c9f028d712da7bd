//! Enumerated setting types
//!
//! An enumerated setting accepts a closed set of constants. Each constant has a
//! canonical name and may carry alternate spellings, a numeric code, and class
//! names that stand for it. Matching of names and spellings is ASCII
//! case-insensitive; class names are matched exactly.
//!
//! Rust enums are bound to their domain with the [`setting_enum!`](crate::setting_enum) macro.

use crate::value::EnumConstant;

/// One constant of an enumerated setting type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
	/// Canonical name, e.g. "NORMALIZE"
	pub name: &'static str,
	/// Alternate accepted spellings, e.g. "ignoreUnsupported" or "pooled-lo"
	pub aliases: &'static [&'static str],
	/// Numeric code accepted in place of the name (SQL type codes)
	pub code: Option<i64>,
}

/// The closed value set of an enumerated setting type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDomain {
	pub type_name: &'static str,
	pub constants: &'static [EnumVariant],
	/// (class name, constant name) pairs
	pub class_aliases: &'static [(&'static str, &'static str)],
}

impl EnumDomain {
	fn constant(&'static self, variant: &'static EnumVariant) -> EnumConstant {
		EnumConstant::new(self.type_name, variant.name)
	}

	/// Match a token against constant names and their alternate spellings
	pub fn match_name(&'static self, token: &str) -> Option<EnumConstant> {
		let token = token.trim();
		self.constants
			.iter()
			.find(|v| {
				v.name.eq_ignore_ascii_case(token)
					|| v.aliases.iter().any(|a| a.eq_ignore_ascii_case(token))
			})
			.map(|v| self.constant(v))
	}

	pub fn match_code(&'static self, code: i64) -> Option<EnumConstant> {
		self.constants.iter().find(|v| v.code == Some(code)).map(|v| self.constant(v))
	}

	pub fn match_class(&'static self, class_name: &str) -> Option<EnumConstant> {
		let class_name = class_name.trim();
		self.class_aliases
			.iter()
			.find(|(class, _)| *class == class_name)
			.and_then(|(_, target)| self.constants.iter().find(|v| v.name == *target))
			.map(|v| self.constant(v))
	}

	/// Check whether a constant belongs to this domain (same type, declared name)
	pub fn contains(&self, constant: EnumConstant) -> bool {
		constant.type_name == self.type_name
			&& self.constants.iter().any(|v| v.name == constant.name)
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.constants.iter().map(|v| v.name)
	}
}

/// A Rust enum bound to an [`EnumDomain`]
pub trait SettingEnum: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
	const DOMAIN: &'static EnumDomain;
	const VARIANTS: &'static [Self];

	/// Canonical constant name
	fn name(self) -> &'static str;

	fn constant(self) -> EnumConstant {
		EnumConstant::new(Self::DOMAIN.type_name, self.name())
	}

	fn from_constant(constant: EnumConstant) -> Option<Self> {
		if constant.type_name != Self::DOMAIN.type_name {
			return None;
		}
		Self::VARIANTS.iter().copied().find(|v| v.name() == constant.name)
	}

	/// Parse a name or alternate spelling (case-insensitive)
	fn parse(token: &str) -> Option<Self> {
		Self::DOMAIN.match_name(token).and_then(Self::from_constant)
	}
}

/// Declare an enum together with its setting domain
///
/// ```
/// mapcfg_types::setting_enum! {
/// 	/// How to treat unsupported features
/// 	pub enum Handling : "Handling" {
/// 		Error = "ERROR";
/// 		Ignore = "IGNORE", aliases = ["skip"];
/// 	}
/// }
///
/// use mapcfg_types::enum_type::SettingEnum;
/// assert_eq!(Handling::parse("Skip"), Some(Handling::Ignore));
/// ```
#[macro_export]
macro_rules! setting_enum {
	(@code) => { ::core::option::Option::None };
	(@code $code:expr) => { ::core::option::Option::Some($code) };
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident : $type_name:literal {
			$(
				$(#[$vmeta:meta])*
				$variant:ident = $cname:literal
					$(, aliases = [$($alias:literal),* $(,)?])?
					$(, code = $code:expr)?
			);+ $(;)?
		}
		$(class_aliases = { $($class:literal => $target:literal),* $(,)? })?
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$($(#[$vmeta])* $variant,)+
		}

		impl $crate::enum_type::SettingEnum for $name {
			const DOMAIN: &'static $crate::enum_type::EnumDomain = &$crate::enum_type::EnumDomain {
				type_name: $type_name,
				constants: &[
					$($crate::enum_type::EnumVariant {
						name: $cname,
						aliases: &[$($($alias),*)?],
						code: $crate::setting_enum!(@code $($code)?),
					},)+
				],
				class_aliases: &[$($(($class, $target)),*)?],
			};
			const VARIANTS: &'static [Self] = &[$($name::$variant,)+];

			fn name(self) -> &'static str {
				match self {
					$($name::$variant => $cname,)+
				}
			}
		}

		impl $name {
			/// Constant form, usable in const contexts
			pub const fn as_constant(self) -> $crate::value::EnumConstant {
				$crate::value::EnumConstant::new($type_name, match self {
					$($name::$variant => $cname,)+
				})
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::enum_type::SettingEnum::name(*self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::error::Error;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				<$name as $crate::enum_type::SettingEnum>::parse(s).ok_or_else(|| {
					$crate::error::Error::invalid_value(
						$type_name,
						format!("'{}' is not a known constant", s),
					)
				})
			}
		}
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	crate::setting_enum! {
		enum Storage : "test.Storage" {
			Native = "NATIVE";
			NormalizeUtc = "NORMALIZE_UTC", aliases = ["normalize-utc"];
			Column = "COLUMN", code = 7;
		}
		class_aliases = { "org.example.ColumnStorage" => "COLUMN" }
	}

	#[test]
	fn test_match_name_is_case_insensitive() {
		assert_eq!(Storage::parse("native"), Some(Storage::Native));
		assert_eq!(Storage::parse(" Normalize_Utc "), Some(Storage::NormalizeUtc));
		assert_eq!(Storage::parse("NORMALIZE-utc"), Some(Storage::NormalizeUtc));
		assert_eq!(Storage::parse("normalize"), None);
		assert_eq!(Storage::parse(""), None);
	}

	#[test]
	fn test_match_code_and_class() {
		let domain = Storage::DOMAIN;
		assert_eq!(domain.match_code(7), Some(Storage::Column.constant()));
		assert_eq!(domain.match_code(8), None);
		assert_eq!(domain.match_class("org.example.ColumnStorage"), Some(Storage::Column.constant()));
		assert_eq!(domain.match_class("org.example.columnstorage"), None);
	}

	#[test]
	fn test_from_constant_checks_type() {
		assert_eq!(Storage::from_constant(Storage::Native.constant()), Some(Storage::Native));
		assert_eq!(Storage::from_constant(EnumConstant::new("other.Type", "NATIVE")), None);
		assert!(Storage::DOMAIN.contains(EnumConstant::new("test.Storage", "COLUMN")));
		assert!(!Storage::DOMAIN.contains(EnumConstant::new("test.Storage", "column")));
	}

	#[test]
	fn test_display_and_from_str() {
		assert_eq!(Storage::NormalizeUtc.to_string(), "NORMALIZE_UTC");
		assert_eq!("column".parse::<Storage>().ok(), Some(Storage::Column));
		assert!("sideways".parse::<Storage>().is_err());
	}
}

// vim: ts=4
