//! Setting key names

pub const DEFAULT_CATALOG: &str = "hibernate.default_catalog";
pub const DEFAULT_SCHEMA: &str = "hibernate.default_schema";

pub const JPA_METAMODEL_POPULATION: &str = "hibernate.jpa.metamodel.population";
pub const STATIC_METAMODEL_POPULATION: &str = "hibernate.jpa.static_metamodel.population";

pub const GLOBALLY_QUOTED_IDENTIFIERS: &str = "hibernate.globally_quoted_identifiers";
pub const GLOBALLY_QUOTED_IDENTIFIERS_SKIP_COLUMN_DEFINITIONS: &str =
	"hibernate.globally_quoted_identifiers_skip_column_definitions";
pub const KEYWORD_AUTO_QUOTING_ENABLED: &str = "hibernate.auto_quote_keyword";

pub const PREFERRED_POOLED_OPTIMIZER: &str = "hibernate.id.optimizer.pooled.preferred";
pub const TABLE_GENERATOR_STORE_LAST_USED: &str = "hibernate.id.generator.stored_last_used";
pub const SEQUENCE_INCREMENT_SIZE_MISMATCH_STRATEGY: &str =
	"hibernate.id.sequence.increment_size_mismatch_strategy";
pub const ID_DB_STRUCTURE_NAMING_STRATEGY: &str = "hibernate.id.db_structure_naming_strategy";

pub const PREFERRED_BOOLEAN_JDBC_TYPE: &str = "hibernate.type.preferred_boolean_jdbc_type";
pub const PREFERRED_UUID_JDBC_TYPE: &str = "hibernate.type.preferred_uuid_jdbc_type";
pub const PREFERRED_DURATION_JDBC_TYPE: &str = "hibernate.type.preferred_duration_jdbc_type";
pub const PREFERRED_INSTANT_JDBC_TYPE: &str = "hibernate.type.preferred_instant_jdbc_type";
pub const JSON_FORMAT_MAPPER: &str = "hibernate.type.json_format_mapper";
pub const XML_FORMAT_MAPPER: &str = "hibernate.type.xml_format_mapper";
pub const WRAPPER_ARRAY_HANDLING: &str = "hibernate.type.wrapper_array_handling";
pub const TIMEZONE_DEFAULT_STORAGE: &str = "hibernate.timezone.default_storage";
pub const USE_NATIONALIZED_CHARACTER_DATA: &str = "hibernate.use_nationalized_character_data";

pub const IMPLICIT_NAMING_STRATEGY: &str = "hibernate.implicit_naming_strategy";
pub const PHYSICAL_NAMING_STRATEGY: &str = "hibernate.physical_naming_strategy";
pub const COLUMN_ORDERING_STRATEGY: &str = "hibernate.column_ordering_strategy";

pub const ARTIFACT_PROCESSING_ORDER: &str = "hibernate.mapping.precedence";
pub const DEFAULT_LIST_SEMANTICS: &str = "hibernate.mapping.default_list_semantics";
pub const CREATE_EMPTY_COMPOSITES_ENABLED: &str = "hibernate.create_empty_composites.enabled";
pub const USE_ENTITY_WHERE_CLAUSE_FOR_COLLECTIONS: &str =
	"hibernate.use_entity_where_clause_for_collections";

pub const XML_MAPPING_ENABLED: &str = "hibernate.xml_mapping_enabled";
pub const VALIDATE_XML: &str = "hibernate.validate_xml";
pub const TRANSFORM_HBM_XML: &str = "hibernate.transform_hbm_xml.enabled";
pub const TRANSFORM_HBM_XML_FEATURE_HANDLING: &str =
	"hibernate.transform_hbm_xml.unsupported_feature_handling";

pub const FORCE_DISCRIMINATOR_IN_SELECTS_BY_DEFAULT: &str = "hibernate.discriminator.force_in_select";
pub const IMPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS: &str =
	"hibernate.discriminator.implicit_for_joined";
pub const IGNORE_EXPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS: &str =
	"hibernate.discriminator.ignore_explicit_for_joined";

// vim: ts=4
