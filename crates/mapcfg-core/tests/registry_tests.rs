//! Registry and resolution tests against the compiled catalog

use mapcfg_core::enums::{MetadataSourceType, SqlType, TimeZoneStorageType};
use mapcfg_core::keys;
use mapcfg_core::prelude::*;
use mapcfg_core::settings::{DefaultValue, Resolved, ValueDomain};
use mapcfg_core::{StaticStrategySelector, registry};
use mapcfg_types::enum_type::SettingEnum;

fn config(key: &str, value: impl Into<RawValue>) -> RawConfig {
	RawConfig::new().with(key, value)
}

#[test]
fn test_catalog_is_complete() {
	let registry = registry();
	assert_eq!(registry.len(), 34);
	assert!(!registry.is_empty());

	for def in registry.list() {
		assert_eq!(registry.lookup(def.key).unwrap().key, def.key);
		assert!(registry.contains(def.key));
	}
}

#[test]
fn test_defaults_fit_their_domains() {
	for def in registry().list() {
		if let Some(default) = def.default {
			assert!(default.fits(&def.domain), "default of {} is outside its domain", def.key);
		}
	}
}

#[test]
fn test_list_is_sorted_and_filterable() {
	let listed: Vec<&str> = registry().list().map(|def| def.key).collect();
	let mut sorted = listed.clone();
	sorted.sort_unstable();
	assert_eq!(listed, sorted);

	let discriminator: Vec<&str> =
		registry().list_by_prefix("hibernate.discriminator.").map(|def| def.key).collect();
	assert_eq!(
		discriminator,
		vec![
			keys::FORCE_DISCRIMINATOR_IN_SELECTS_BY_DEFAULT,
			keys::IGNORE_EXPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS,
			keys::IMPLICIT_DISCRIMINATOR_COLUMNS_FOR_JOINED_SUBCLASS,
		]
	);
	assert_eq!(registry().list_by_prefix("hibernate.type.").count(), 7);
}

#[test]
fn test_unknown_key() {
	let result = registry().resolve("hibernate.no_such_setting", &RawConfig::new());
	assert!(matches!(result, Err(Error::NotFound(key)) if key == "hibernate.no_such_setting"));
	assert!(registry().get("hibernate.no_such_setting").is_none());
	assert!(!registry().is_deprecated("hibernate.no_such_setting"));
}

#[test]
fn test_enum_case_insensitive() {
	let lower = registry()
		.resolve_enum::<TimeZoneStorageType>(
			keys::TIMEZONE_DEFAULT_STORAGE,
			&config(keys::TIMEZONE_DEFAULT_STORAGE, "normalize"),
		)
		.unwrap();
	let upper = registry()
		.resolve_enum::<TimeZoneStorageType>(
			keys::TIMEZONE_DEFAULT_STORAGE,
			&config(keys::TIMEZONE_DEFAULT_STORAGE, "NORMALIZE"),
		)
		.unwrap();

	assert_eq!(lower, Resolved::Configured(TimeZoneStorageType::Normalize));
	assert_eq!(lower, upper);
}

#[test]
fn test_absent_keys_use_declared_default() {
	let empty = RawConfig::new();
	for def in registry().list() {
		let resolved = registry().resolve(def.key, &empty).unwrap();
		match def.default {
			Some(default) => assert_eq!(resolved, Resolved::Default(default.to_value())),
			None => assert!(resolved.is_no_default(), "{} should have no default", def.key),
		}
	}

	let storage = registry().resolve(keys::TIMEZONE_DEFAULT_STORAGE, &empty).unwrap();
	assert_eq!(storage, Resolved::Default(SettingValue::Enum(TimeZoneStorageType::Default.constant())));
}

#[test]
fn test_default_catalog_has_no_default() {
	let resolved = registry().resolve(keys::DEFAULT_CATALOG, &RawConfig::new()).unwrap();
	assert_eq!(resolved, Resolved::NoDefault);
	assert_eq!(resolved.source(), "unset");

	let configured = registry().resolve(keys::DEFAULT_CATALOG, &config(keys::DEFAULT_CATALOG, "main")).unwrap();
	assert_eq!(configured, Resolved::Configured(SettingValue::String("main".into())));
}

#[test]
fn test_boolean_rejects_yes() {
	let result = registry()
		.resolve(keys::GLOBALLY_QUOTED_IDENTIFIERS, &config(keys::GLOBALLY_QUOTED_IDENTIFIERS, "yes"));
	assert!(matches!(result, Err(Error::InvalidValue { key, .. }) if key == keys::GLOBALLY_QUOTED_IDENTIFIERS));

	let resolved = registry()
		.resolve(keys::GLOBALLY_QUOTED_IDENTIFIERS, &config(keys::GLOBALLY_QUOTED_IDENTIFIERS, " True "))
		.unwrap();
	assert_eq!(resolved, Resolved::Configured(SettingValue::Bool(true)));
}

#[test]
fn test_deprecated_setting_still_resolves() {
	let registry = registry();
	let raw = config(keys::CREATE_EMPTY_COMPOSITES_ENABLED, "true");

	let resolved = registry.resolve(keys::CREATE_EMPTY_COMPOSITES_ENABLED, &raw).unwrap();
	assert_eq!(resolved, Resolved::Configured(SettingValue::Bool(true)));

	assert!(registry.is_deprecated(keys::CREATE_EMPTY_COMPOSITES_ENABLED));
	let deprecation = registry.deprecation_info(keys::CREATE_EMPTY_COMPOSITES_ENABLED).unwrap();
	assert_eq!(deprecation.since, "6");
	assert!(!deprecation.for_removal);
	assert!(registry.lookup(keys::CREATE_EMPTY_COMPOSITES_ENABLED).unwrap().incubating);

	let removal = registry.deprecation_info(keys::USE_ENTITY_WHERE_CLAUSE_FOR_COLLECTIONS).unwrap();
	assert_eq!(removal.since, "6.2");
	assert!(removal.for_removal);
	assert!(registry.deprecation_info(keys::VALIDATE_XML).is_none());
}

#[test]
fn test_deprecated_in_reports_supplied_keys_only() {
	let raw = RawConfig::new()
		.with(keys::ARTIFACT_PROCESSING_ORDER, "class")
		.with(keys::CREATE_EMPTY_COMPOSITES_ENABLED, false)
		.with(keys::VALIDATE_XML, true)
		.with("hibernate.unrelated", "x");

	let deprecated: Vec<&str> =
		registry().deprecated_in(&raw).into_iter().map(|(def, _)| def.key).collect();
	assert_eq!(deprecated, vec![keys::CREATE_EMPTY_COMPOSITES_ENABLED, keys::ARTIFACT_PROCESSING_ORDER]);
}

#[test]
fn test_resolve_is_idempotent() {
	let raw = RawConfig::new()
		.with(keys::PREFERRED_UUID_JDBC_TYPE, "char")
		.with(keys::IMPLICIT_NAMING_STRATEGY, "legacy-hbm")
		.with(keys::ARTIFACT_PROCESSING_ORDER, "class, hbm");

	for def in registry().list() {
		let first = registry().resolve(def.key, &raw).unwrap();
		let second = registry().resolve(def.key, &raw).unwrap();
		assert_eq!(first, second);
	}
}

#[test]
fn test_sql_type_by_name_and_code() {
	let by_name = registry()
		.resolve_enum::<SqlType>(keys::PREFERRED_UUID_JDBC_TYPE, &config(keys::PREFERRED_UUID_JDBC_TYPE, "CHAR"))
		.unwrap();
	assert_eq!(by_name, Resolved::Configured(SqlType::Char));

	let by_code = registry()
		.resolve_enum::<SqlType>(keys::PREFERRED_BOOLEAN_JDBC_TYPE, &config(keys::PREFERRED_BOOLEAN_JDBC_TYPE, -7))
		.unwrap();
	assert_eq!(by_code, Resolved::Configured(SqlType::Bit));

	let by_code_text = registry()
		.resolve_enum::<SqlType>(keys::PREFERRED_DURATION_JDBC_TYPE, &config(keys::PREFERRED_DURATION_JDBC_TYPE, "3100"))
		.unwrap();
	assert_eq!(by_code_text, Resolved::Configured(SqlType::IntervalSecond));

	let unset = registry().resolve_enum::<SqlType>(keys::PREFERRED_BOOLEAN_JDBC_TYPE, &RawConfig::new()).unwrap();
	assert!(unset.is_no_default());
}

#[test]
fn test_enum_view_of_wrong_setting() {
	let result = registry().resolve_enum::<SqlType>(keys::TIMEZONE_DEFAULT_STORAGE, &RawConfig::new());
	assert!(matches!(result, Err(Error::DomainMismatch { .. })));

	let result = registry().resolve_enum::<SqlType>(keys::VALIDATE_XML, &RawConfig::new());
	assert!(matches!(result, Err(Error::DomainMismatch { .. })));
}

#[test]
fn test_processing_order_list() {
	let resolved = registry()
		.resolve_enum_list::<MetadataSourceType>(
			keys::ARTIFACT_PROCESSING_ORDER,
			&config(keys::ARTIFACT_PROCESSING_ORDER, "class,hbm,class"),
		)
		.unwrap();
	assert_eq!(resolved, Resolved::Configured(vec![MetadataSourceType::Class, MetadataSourceType::Hbm]));

	let default = registry()
		.resolve_enum_list::<MetadataSourceType>(keys::ARTIFACT_PROCESSING_ORDER, &RawConfig::new())
		.unwrap();
	assert_eq!(default, Resolved::Default(vec![MetadataSourceType::Hbm, MetadataSourceType::Class]));

	let empty = registry().resolve(keys::ARTIFACT_PROCESSING_ORDER, &config(keys::ARTIFACT_PROCESSING_ORDER, ""));
	assert!(matches!(empty, Err(Error::InvalidValue { .. })));
}

#[test]
fn test_class_settings() {
	let short = registry()
		.resolve(keys::PREFERRED_POOLED_OPTIMIZER, &config(keys::PREFERRED_POOLED_OPTIMIZER, "Pooled-LO"))
		.unwrap();
	assert_eq!(
		short,
		Resolved::Configured(SettingValue::Class("org.hibernate.id.enhanced.PooledLoOptimizer".into()))
	);

	let custom = RawConfig::new().with(keys::PHYSICAL_NAMING_STRATEGY, RawValue::class("com.acme.SnakeCaseNaming"));
	let lazy = registry().resolve(keys::PHYSICAL_NAMING_STRATEGY, &custom).unwrap();
	assert_eq!(lazy, Resolved::Configured(SettingValue::Class("com.acme.SnakeCaseNaming".into())));

	let selector = StaticStrategySelector::new().with(
		"org.hibernate.boot.model.naming.PhysicalNamingStrategy",
		"snake",
		"com.acme.SnakeCaseNaming",
	);
	let snake = config(keys::PHYSICAL_NAMING_STRATEGY, "snake");
	assert_eq!(
		registry().resolve_with(keys::PHYSICAL_NAMING_STRATEGY, &snake, &selector).unwrap(),
		Resolved::Configured(SettingValue::Class("com.acme.SnakeCaseNaming".into()))
	);
	assert!(registry().resolve_with(keys::PHYSICAL_NAMING_STRATEGY, &custom, &selector).is_err());
	assert!(registry().resolve(keys::PHYSICAL_NAMING_STRATEGY, &snake).is_err());
}

#[test]
fn test_processing_order_list_with_selector() {
	let selector =
		StaticStrategySelector::new().with(MetadataSourceType::DOMAIN.type_name, "com.acme.Annotations", "CLASS");
	let raw = config(keys::ARTIFACT_PROCESSING_ORDER, "com.acme.Annotations,hbm");

	let resolved = registry()
		.resolve_enum_list_with::<MetadataSourceType>(keys::ARTIFACT_PROCESSING_ORDER, &raw, &selector)
		.unwrap();
	assert_eq!(resolved, Resolved::Configured(vec![MetadataSourceType::Class, MetadataSourceType::Hbm]));
	assert!(registry().resolve_enum_list::<MetadataSourceType>(keys::ARTIFACT_PROCESSING_ORDER, &raw).is_err());
}

#[test]
fn test_builtin_classes_accepted_with_selector() {
	let selector = StaticStrategySelector::new().with(
		"org.hibernate.boot.model.naming.PhysicalNamingStrategy",
		"snake",
		"com.acme.SnakeCaseNaming",
	);
	let standard = "org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl";

	let absent = registry().resolve_with(keys::PHYSICAL_NAMING_STRATEGY, &RawConfig::new(), &selector).unwrap();
	let explicit = registry()
		.resolve_with(keys::PHYSICAL_NAMING_STRATEGY, &config(keys::PHYSICAL_NAMING_STRATEGY, standard), &selector)
		.unwrap();
	assert_eq!(absent.value(), explicit.value());
	assert_eq!(explicit, Resolved::Configured(SettingValue::Class(standard.into())));

	let jackson = "org.hibernate.type.format.jackson.JacksonJsonFormatMapper";
	assert_eq!(
		registry()
			.resolve_with(keys::JSON_FORMAT_MAPPER, &config(keys::JSON_FORMAT_MAPPER, jackson), &selector)
			.unwrap(),
		Resolved::Configured(SettingValue::Class(jackson.into()))
	);
}

#[test]
fn test_list_semantics_class_alias() {
	let resolved = registry()
		.resolve(keys::DEFAULT_LIST_SEMANTICS, &config(keys::DEFAULT_LIST_SEMANTICS, RawValue::class("java.util.List")))
		.unwrap();
	assert_eq!(resolved.value().and_then(SettingValue::as_enum).map(|c| c.name), Some("LIST"));
}

#[test]
fn test_validate_collects_all_failures() {
	let raw = RawConfig::new()
		.with(keys::VALIDATE_XML, "maybe")
		.with(keys::GLOBALLY_QUOTED_IDENTIFIERS, "yes")
		.with(keys::DEFAULT_SCHEMA, "app")
		.with("hibernate.connection.url", "jdbc:h2:mem:");

	let errors = registry().validate(&raw, &mapcfg_core::NoStrategySelector);
	let failed: Vec<String> = errors
		.into_iter()
		.map(|err| match err {
			Error::InvalidValue { key, .. } => key,
			other => panic!("unexpected error: {}", other),
		})
		.collect();
	assert_eq!(failed, vec![keys::GLOBALLY_QUOTED_IDENTIFIERS.to_owned(), keys::VALIDATE_XML.to_owned()]);
}

#[test]
fn test_domains_of_selected_settings() {
	let def = registry().lookup(keys::ARTIFACT_PROCESSING_ORDER).unwrap();
	assert!(matches!(def.domain, ValueDomain::EnumList { delimiter: ',', .. }));
	assert_eq!(def.domain.describe(), "','-separated list of HBM | CLASS");

	let def = registry().lookup(keys::TABLE_GENERATOR_STORE_LAST_USED).unwrap();
	assert_eq!(def.default, Some(DefaultValue::Bool(true)));
	assert_eq!(def.since, Some("5.3"));
}

// vim: ts=4
