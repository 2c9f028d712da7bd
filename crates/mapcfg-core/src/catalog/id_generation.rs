//! Identifier generation

use crate::enums::SequenceMismatchStrategy;
use crate::keys;
use crate::settings::{ClassDomain, DefaultValue, SettingDefinition, ValueDomain};
use mapcfg_types::enum_type::SettingEnum;

const POOLED_OPTIMIZER: ClassDomain = ClassDomain {
	role: "org.hibernate.id.enhanced.Optimizer",
	short_names: &[
		("none", "org.hibernate.id.enhanced.NoopOptimizer"),
		("hilo", "org.hibernate.id.enhanced.HiLoOptimizer"),
		("legacy-hilo", "org.hibernate.id.enhanced.LegacyHiLoAlgorithmOptimizer"),
		("pooled", "org.hibernate.id.enhanced.PooledOptimizer"),
		("pooled-lo", "org.hibernate.id.enhanced.PooledLoOptimizer"),
		("pooled-lotl", "org.hibernate.id.enhanced.PooledLoThreadLocalOptimizer"),
	],
};

const DB_STRUCTURE_NAMING: ClassDomain = ClassDomain {
	role: "org.hibernate.id.enhanced.ImplicitDatabaseObjectNamingStrategy",
	short_names: &[
		("single", "org.hibernate.id.enhanced.SingleNamingStrategy"),
		("legacy", "org.hibernate.id.enhanced.LegacyNamingStrategy"),
		("standard", "org.hibernate.id.enhanced.StandardNamingStrategy"),
	],
};

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::PREFERRED_POOLED_OPTIMIZER, ValueDomain::Class(&POOLED_OPTIMIZER))
		.description(
			"Pooled optimizer used when a generator sets an increment size but no optimizer",
		)
		.default(DefaultValue::Class("org.hibernate.id.enhanced.PooledOptimizer")),
	SettingDefinition::new(keys::TABLE_GENERATOR_STORE_LAST_USED, ValueDomain::Bool)
		.description("Table generators store the last value handed out rather than the next one")
		.default(DefaultValue::Bool(true))
		.since("5.3"),
	SettingDefinition::new(
		keys::SEQUENCE_INCREMENT_SIZE_MISMATCH_STRATEGY,
		ValueDomain::Enum(SequenceMismatchStrategy::DOMAIN),
	)
	.description("Reaction to a sequence whose increment size differs from the mapping")
	.default(DefaultValue::Enum(SequenceMismatchStrategy::Exception.as_constant()))
	.since("5.4"),
	SettingDefinition::new(
		keys::ID_DB_STRUCTURE_NAMING_STRATEGY,
		ValueDomain::Class(&DB_STRUCTURE_NAMING),
	)
	.description("Implicit naming of sequences and tables backing identifier generators")
	.default(DefaultValue::Class("org.hibernate.id.enhanced.StandardNamingStrategy"))
	.incubating()
	.since("6"),
];

// vim: ts=4
