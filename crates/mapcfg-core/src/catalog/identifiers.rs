//! Default namespaces and identifier quoting

use crate::keys;
use crate::settings::{DefaultValue, SettingDefinition, ValueDomain};

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::DEFAULT_CATALOG, ValueDomain::String)
		.description("Catalog applied to unqualified database object names"),
	SettingDefinition::new(keys::DEFAULT_SCHEMA, ValueDomain::String)
		.description("Schema (owner) applied to unqualified database object names"),
	SettingDefinition::new(keys::GLOBALLY_QUOTED_IDENTIFIERS, ValueDomain::Bool)
		.description("Quote all database identifiers")
		.default(DefaultValue::Bool(false)),
	// Quoting column definitions breaks definitions like "INTEGER DEFAULT 20"
	SettingDefinition::new(keys::GLOBALLY_QUOTED_IDENTIFIERS_SKIP_COLUMN_DEFINITIONS, ValueDomain::Bool)
		.description("Exclude column definitions from global identifier quoting")
		.default(DefaultValue::Bool(false)),
	SettingDefinition::new(keys::KEYWORD_AUTO_QUOTING_ENABLED, ValueDomain::Bool)
		.description("Quote names that are keywords on the underlying database")
		.default(DefaultValue::Bool(false))
		.since("5.0"),
];

// vim: ts=4
