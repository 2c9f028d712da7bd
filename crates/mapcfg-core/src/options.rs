//! Mapping options snapshot
//!
//! Resolves every mapping setting once, so that model-building code works
//! with plain typed fields instead of repeated lookups.

use crate::enums::{
	CollectionClassification, JpaMetamodelPopulation, MetadataSourceType, SequenceMismatchStrategy,
	SqlType, StaticMetamodelPopulation, TimeZoneStorageType, UnsupportedFeatureHandling,
	WrapperArrayHandling,
};
use crate::keys;
use crate::prelude::*;
use crate::settings::SettingsService;
use crate::strategy::StrategyRef;

#[derive(Debug, Clone, PartialEq)]
pub struct MappingOptions {
	pub default_catalog: Option<String>,
	pub default_schema: Option<String>,

	pub jpa_metamodel_population: JpaMetamodelPopulation,
	pub static_metamodel_population: StaticMetamodelPopulation,

	pub globally_quoted_identifiers: bool,
	pub skip_column_definition_quoting: bool,
	pub auto_quote_keywords: bool,

	pub preferred_pooled_optimizer: StrategyRef,
	pub table_generator_store_last_used: bool,
	pub sequence_mismatch_strategy: SequenceMismatchStrategy,
	pub id_db_structure_naming_strategy: StrategyRef,

	/// None: use the dialect's preference
	pub preferred_boolean_jdbc_type: Option<SqlType>,
	pub preferred_uuid_jdbc_type: SqlType,
	pub preferred_duration_jdbc_type: SqlType,
	pub preferred_instant_jdbc_type: SqlType,
	/// None: use the first format mapper available
	pub json_format_mapper: Option<StrategyRef>,
	pub xml_format_mapper: Option<StrategyRef>,
	pub wrapper_array_handling: Option<WrapperArrayHandling>,
	pub timezone_default_storage: TimeZoneStorageType,
	pub use_nationalized_character_data: bool,

	pub implicit_naming_strategy: StrategyRef,
	pub physical_naming_strategy: StrategyRef,
	pub column_ordering_strategy: StrategyRef,

	pub processing_order: Vec<MetadataSourceType>,
	pub default_list_semantics: CollectionClassification,
	pub create_empty_composites: bool,
	pub use_entity_where_clause_for_collections: bool,

	pub xml_mapping_enabled: bool,
	pub validate_xml: bool,
	pub transform_hbm_xml: bool,
	pub unsupported_feature_handling: UnsupportedFeatureHandling,

	pub force_discriminator_in_select: bool,
	pub implicit_discriminator_for_joined: bool,
	pub ignore_explicit_discriminator_for_joined: bool,
}

impl MappingOptions {
	/// Resolve all mapping settings, failing on the first invalid value
	pub fn from_service(service: &SettingsService) -> McResult<Self> {
		Ok(Self {
			default_catalog: service.get_string_opt(keys::DEFAULT_CATALOG)?,
			default_schema: service.get_string_opt(keys::DEFAULT_SCHEMA)?,

			jpa_metamodel_population: service.get_enum(keys::JPA_METAMODEL_POPULATION)?,
			static_metamodel_population: service.get_enum(keys::STATIC_METAMODEL_POPULATION)?,

			globally_quoted_identifiers: service.get_bool(keys::GLOBALLY_QUOTED_IDENTIFIERS)?,
			skip_column_definition_quoting: service
				.get_bool(keys::GLOBALLY_QUOTED_IDENTIFIERS_SKIP_COLUMN_DEFINITIONS)?,
			auto_quote_keywords: service.get_bool(keys::KEYWORD_AUTO_QUOTING_ENABLED)?,

			preferred_pooled_optimizer: service.get_class(keys::PREFERRED_POOLED_OPTIMIZER)?,
			table_generator_store_last_used: service
				.get_bool(keys::TABLE_GENERATOR_STORE_LAST_USED)?,
			sequence_mismatch_strategy: service
				.get_enum(keys::SEQUENCE_INCREMENT_SIZE_MISMATCH_STRATEGY)?,
			id_db_structure_naming_strategy: service
				.get_class(keys::ID_DB_STRUCTURE_NAMING_STRATEGY)?,

			preferred_boolean_jdbc_type: service.get_enum_opt(keys::PREFERRED_BOOLEAN_JDBC_TYPE)?,
			preferred_uuid_jdbc_type: service.get_enum(keys::PREFERRED_UUID_JDBC_TYPE)?,
			preferred_duration_jdbc_type: service.get_enum(keys::PREFERRED_DURATION_JDBC_TYPE)?,
			preferred_instant_jdbc_type: service.get_enum(keys::PREFERRED_INSTANT_JDBC_TYPE)?,
			json_format_mapper: service.get_class_opt(keys::JSON_FORMAT_MAPPER)?,
			xml_format_mapper: service.get_class_opt(keys::XML_FORMAT_MAPPER)?,
			wrapper_array_handling: service.get_enum_opt(keys::WRAPPER_ARRAY_HANDLING)?,
			timezone_default_storage: service.get_enum(keys::TIMEZONE_DEFAULT_STORAGE)?,
			use_nationalized_character_data: service
				.get_bool(keys::USE_NATIONALIZED_CHARACTER_DATA)?,

			implicit_naming_strategy: service.get_class(keys::IMPLICIT_NAMING_STRATEGY)?,
			physical_naming_strategy: service.get_class(keys::PHYSICAL_NAMING_STRATEGY)?,
			column_ordering_strategy: service.get_class(keys::COLUMN_ORDERING_STRATEGY)?,

			processing_order: service.get_enum_list(keys::ARTIFACT_PROCESSING_ORDER)?,
			default_list_semantics: service.get_enum(keys::DEFAULT_LIST_SEMANTICS)?,
			create_empty_composites: service.get_bool(keys::CREATE_EMPTY_COMPOSITES_ENABLED)?,
			use_entity_where_clause_for_collections: service
				.get_bool(keys::USE_ENTITY_WHERE_CLAUSE_FOR_COLLECTIONS)?,

			xml_mapping_enabled: service.get_bool(keys::XML_MAPPING_ENABLED)?,
			validate_xml: service.get_bool(keys::VALIDATE_XML)?,
			transform_hbm_xml: service.get_bool(keys::TRANSFORM_HBM_XML)?,
			unsupported_feature_handling: service
				.get_enum(keys::TRANSFORM_HBM_XML_FEATURE_HANDLING)?,

			force_discriminator_in_select: service
				.get_bool(keys::FORCE_DISCRIMINATOR_IN_SELECTS_BY_DEFAULT)?,
			implicit_discriminator_for_joined: service
				.get_bool(keys::IMPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS)?,
			ignore_explicit_discriminator_for_joined: service
				.get_bool(keys::IGNORE_EXPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS)?,
		})
	}
}

// vim: ts=4
