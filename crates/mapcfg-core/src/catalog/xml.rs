//! XML mapping processing

use crate::enums::UnsupportedFeatureHandling;
use crate::keys;
use crate::settings::{DefaultValue, SettingDefinition, ValueDomain};
use mapcfg_types::enum_type::SettingEnum;

pub const SETTINGS: &[SettingDefinition] = &[
	SettingDefinition::new(keys::XML_MAPPING_ENABLED, ValueDomain::Bool)
		.description("Process XML mapping files; disable when all mappings are annotations")
		.default(DefaultValue::Bool(true))
		.since("5.4.1"),
	SettingDefinition::new(keys::VALIDATE_XML, ValueDomain::Bool)
		.description("Validate XML mapping files against their schema while reading them")
		.default(DefaultValue::Bool(true))
		.since("6.1"),
	SettingDefinition::new(keys::TRANSFORM_HBM_XML, ValueDomain::Bool)
		.description("Transform hbm.xml mappings to mapping.xml and process the result")
		.default(DefaultValue::Bool(false))
		.since("6.1"),
	SettingDefinition::new(
		keys::TRANSFORM_HBM_XML_FEATURE_HANDLING,
		ValueDomain::Enum(UnsupportedFeatureHandling::DOMAIN),
	)
	.description("Handling of hbm.xml features that cannot be transformed")
	.default(DefaultValue::Enum(UnsupportedFeatureHandling::Error.as_constant()))
	.since("6.1"),
];

// vim: ts=4
