//! Naming and column ordering strategies

use crate::keys;
use crate::settings::{ClassDomain, DefaultValue, SettingDefinition, ValueDomain};

const IMPLICIT_NAMING: ClassDomain = ClassDomain {
	role: "org.hibernate.boot.model.naming.ImplicitNamingStrategy",
	short_names: &[
		("default", "org.hibernate.boot.model.naming.ImplicitNamingStrategyJpaCompliantImpl"),
		("jpa", "org.hibernate.boot.model.naming.ImplicitNamingStrategyJpaCompliantImpl"),
		("legacy-jpa", "org.hibernate.boot.model.naming.ImplicitNamingStrategyLegacyJpaImpl"),
		("legacy-hbm", "org.hibernate.boot.model.naming.ImplicitNamingStrategyLegacyHbmImpl"),
		(
			"component-path",
			"org.hibernate.boot.model.naming.ImplicitNamingStrategyComponentPathImpl",
		),
	],
};

const PHYSICAL_NAMING: ClassDomain = ClassDomain {
	role: "org.hibernate.boot.model.naming.PhysicalNamingStrategy",
	short_names: &[],
};

const COLUMN_ORDERING: ClassDomain = ClassDomain {
	role: "org.hibernate.boot.model.relational.ColumnOrderingStrategy",
	short_names: &[
		("default", "org.hibernate.boot.model.relational.ColumnOrderingStrategyStandard"),
		("legacy", "org.hibernate.boot.model.relational.ColumnOrderingStrategyLegacy"),
	],
};

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::IMPLICIT_NAMING_STRATEGY, ValueDomain::Class(&IMPLICIT_NAMING))
		.description("Strategy deriving logical names the mapping does not state explicitly")
		.default(DefaultValue::Class(
			"org.hibernate.boot.model.naming.ImplicitNamingStrategyJpaCompliantImpl",
		))
		.since("5.0"),
	SettingDefinition::new(keys::PHYSICAL_NAMING_STRATEGY, ValueDomain::Class(&PHYSICAL_NAMING))
		.description("Strategy turning logical names into physical database names")
		.default(DefaultValue::Class(
			"org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl",
		))
		.since("5.0"),
	SettingDefinition::new(keys::COLUMN_ORDERING_STRATEGY, ValueDomain::Class(&COLUMN_ORDERING))
		.description("Strategy ordering the columns of generated tables")
		.default(DefaultValue::Class(
			"org.hibernate.boot.model.relational.ColumnOrderingStrategyStandard",
		))
		.since("6.2"),
];

// vim: ts=4
