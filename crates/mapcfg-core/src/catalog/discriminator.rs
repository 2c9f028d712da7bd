//! Discriminator handling

use crate::keys;
use crate::settings::{DefaultValue, SettingDefinition, ValueDomain};

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::FORCE_DISCRIMINATOR_IN_SELECTS_BY_DEFAULT, ValueDomain::Bool)
		.description("Always restrict queries by the discriminator, also for the root type")
		.default(DefaultValue::Bool(false)),
	SettingDefinition::new(keys::IMPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS, ValueDomain::Bool)
		.description("Assume a discriminator column for joined inheritance without metadata")
		.default(DefaultValue::Bool(false)),
	// See IMPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS
	SettingDefinition::new(keys::IGNORE_EXPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS, ValueDomain::Bool)
		.description("Ignore explicit discriminator metadata on joined inheritance")
		.default(DefaultValue::Bool(false)),
];

// vim: ts=4
