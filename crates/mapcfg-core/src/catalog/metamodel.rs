//! Metamodel population and mapping semantics

use crate::enums::{
	CollectionClassification, JpaMetamodelPopulation, MetadataSourceType, StaticMetamodelPopulation,
};
use crate::keys;
use crate::prelude::*;
use crate::settings::{DefaultValue, Deprecation, SettingDefinition, ValueDomain};
use mapcfg_types::enum_type::SettingEnum;

const DEFAULT_PROCESSING_ORDER: &[EnumConstant] =
	&[MetadataSourceType::Hbm.as_constant(), MetadataSourceType::Class.as_constant()];

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::JPA_METAMODEL_POPULATION, ValueDomain::Enum(JpaMetamodelPopulation::DOMAIN))
		.description("Whether to build the JPA metamodel types")
		.default(DefaultValue::Enum(JpaMetamodelPopulation::IgnoreUnsupported.as_constant())),
	SettingDefinition::new(
		keys::STATIC_METAMODEL_POPULATION,
		ValueDomain::Enum(StaticMetamodelPopulation::DOMAIN),
	)
	.description("Whether to locate and populate JPA static metamodel classes")
	.default(DefaultValue::Enum(StaticMetamodelPopulation::SkipUnsupported.as_constant())),
	SettingDefinition::new(
		keys::ARTIFACT_PROCESSING_ORDER,
		ValueDomain::EnumList { domain: MetadataSourceType::DOMAIN, delimiter: ',' },
	)
	.description("Order in which the kinds of mapping sources are processed")
	.default(DefaultValue::EnumList(DEFAULT_PROCESSING_ORDER))
	.deprecated(
		Deprecation::since("6").for_removal().note("hbm.xml mappings are no longer supported"),
	),
	SettingDefinition::new(
		keys::DEFAULT_LIST_SEMANTICS,
		ValueDomain::Enum(CollectionClassification::DOMAIN),
	)
	.description("Classification of a List attribute that has no list index details")
	.default(DefaultValue::Enum(CollectionClassification::Bag.as_constant()))
	.since("6.0"),
	SettingDefinition::new(keys::CREATE_EMPTY_COMPOSITES_ENABLED, ValueDomain::Bool)
		.description("Instantiate embeddables whose attributes are all null")
		.default(DefaultValue::Bool(false))
		.deprecated(
			Deprecation::since("6").note("experimental with known unresolved issues"),
		)
		.incubating()
		.since("5.1"),
	SettingDefinition::new(keys::USE_ENTITY_WHERE_CLAUSE_FOR_COLLECTIONS, ValueDomain::Bool)
		.description("Apply an entity's where restriction to associations targeting the entity")
		.default(DefaultValue::Bool(true))
		.deprecated(Deprecation::since("6.2").for_removal().note("backwards compatibility flag")),
];

// vim: ts=4
