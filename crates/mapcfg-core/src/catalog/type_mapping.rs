//! Preferred JDBC types, format mappers and temporal storage

use crate::enums::{SqlType, TimeZoneStorageType, WrapperArrayHandling};
use crate::keys;
use crate::settings::{ClassDomain, DefaultValue, SettingDefinition, ValueDomain};
use mapcfg_types::enum_type::SettingEnum;

const JSON_FORMAT_MAPPER: ClassDomain = ClassDomain {
	role: "org.hibernate.type.format.FormatMapper",
	short_names: &[
		("jackson", "org.hibernate.type.format.jackson.JacksonJsonFormatMapper"),
		("jsonb", "org.hibernate.type.format.jakartajson.JsonBJsonFormatMapper"),
	],
};

const XML_FORMAT_MAPPER: ClassDomain = ClassDomain {
	role: "org.hibernate.type.format.FormatMapper",
	short_names: &[
		("jackson", "org.hibernate.type.format.jackson.JacksonXmlFormatMapper"),
		("jaxb", "org.hibernate.type.format.jaxb.JaxbXmlFormatMapper"),
	],
};

const fn sql_type(key: &'static str) -> SettingDefinition {
	SettingDefinition::new(key, ValueDomain::Enum(SqlType::DOMAIN)).incubating().since("6.0")
}

pub const SETTINGS: &[SettingDefinition] = &[
	// Falls back to the dialect's preferred type code
	sql_type(keys::PREFERRED_BOOLEAN_JDBC_TYPE)
		.description("Preferred JDBC type for boolean values, by type name or code"),
	sql_type(keys::PREFERRED_UUID_JDBC_TYPE)
		.description("Preferred JDBC type for UUID values, by type name or code")
		.default(DefaultValue::Enum(SqlType::Uuid.as_constant())),
	sql_type(keys::PREFERRED_DURATION_JDBC_TYPE)
		.description("Preferred JDBC type for duration values, by type name or code")
		.default(DefaultValue::Enum(SqlType::Numeric.as_constant())),
	sql_type(keys::PREFERRED_INSTANT_JDBC_TYPE)
		.description("Preferred JDBC type for instant values, by type name or code")
		.default(DefaultValue::Enum(SqlType::TimestampUtc.as_constant())),
	// Without a value the first format mapper found on the classpath is used
	SettingDefinition::new(keys::JSON_FORMAT_MAPPER, ValueDomain::Class(&JSON_FORMAT_MAPPER))
		.description("Format mapper for JSON serialization and deserialization")
		.incubating()
		.since("6.0"),
	SettingDefinition::new(keys::XML_FORMAT_MAPPER, ValueDomain::Class(&XML_FORMAT_MAPPER))
		.description("Format mapper for XML serialization and deserialization")
		.incubating()
		.since("6.0.1"),
	SettingDefinition::new(keys::WRAPPER_ARRAY_HANDLING, ValueDomain::Enum(WrapperArrayHandling::DOMAIN))
		.description("Treatment of Byte[] and Character[] attributes")
		.incubating()
		.since("6.2"),
	// NORMALIZE restores the behavior of older versions
	SettingDefinition::new(keys::TIMEZONE_DEFAULT_STORAGE, ValueDomain::Enum(TimeZoneStorageType::DOMAIN))
		.description("Default storage of the offset or zone of zoned date-time values")
		.default(DefaultValue::Enum(TimeZoneStorageType::Default.as_constant()))
		.since("6.0"),
	SettingDefinition::new(keys::USE_NATIONALIZED_CHARACTER_DATA, ValueDomain::Bool)
		.description("Use nationalized variants of character types everywhere")
		.default(DefaultValue::Bool(false)),
];

// vim: ts=4
