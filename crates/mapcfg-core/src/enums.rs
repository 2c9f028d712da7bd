//! Enumerated value types accepted by mapping settings

use mapcfg_types::setting_enum;

setting_enum! {
	/// Whether to build the JPA metamodel types
	pub enum JpaMetamodelPopulation : "org.hibernate.metamodel.internal.JpaMetaModelPopulationSetting" {
		Enabled = "ENABLED";
		Disabled = "DISABLED";
		/// Build, but skip features that have no JPA representation
		IgnoreUnsupported = "IGNORE_UNSUPPORTED", aliases = ["ignoreUnsupported"];
	}
}

setting_enum! {
	/// Whether to populate JPA static metamodel classes
	pub enum StaticMetamodelPopulation : "org.hibernate.metamodel.internal.JpaStaticMetaModelPopulationSetting" {
		Enabled = "ENABLED";
		Disabled = "DISABLED";
		SkipUnsupported = "SKIP_UNSUPPORTED", aliases = ["skipUnsupported"];
	}
}

setting_enum! {
	/// Reaction to a sequence whose increment size differs from the mapping
	pub enum SequenceMismatchStrategy : "org.hibernate.id.SequenceMismatchStrategy" {
		Exception = "EXCEPTION";
		Log = "LOG";
		/// Adopt the database increment size
		Fix = "FIX";
		None = "NONE";
	}
}

setting_enum! {
	/// JDBC type codes, accepted by name or by numeric code
	pub enum SqlType : "org.hibernate.type.SqlTypes" {
		Bit = "BIT", code = -7;
		TinyInt = "TINYINT", code = -6;
		SmallInt = "SMALLINT", code = 5;
		Integer = "INTEGER", code = 4;
		BigInt = "BIGINT", code = -5;
		Float = "FLOAT", code = 6;
		Real = "REAL", code = 7;
		Double = "DOUBLE", code = 8;
		Numeric = "NUMERIC", code = 2;
		Decimal = "DECIMAL", code = 3;
		Char = "CHAR", code = 1;
		VarChar = "VARCHAR", code = 12;
		LongVarChar = "LONGVARCHAR", code = -1;
		NChar = "NCHAR", code = -15;
		NVarChar = "NVARCHAR", code = -9;
		Date = "DATE", code = 91;
		Time = "TIME", code = 92;
		Timestamp = "TIMESTAMP", code = 93;
		TimeWithTimezone = "TIME_WITH_TIMEZONE", code = 2013;
		TimestampWithTimezone = "TIMESTAMP_WITH_TIMEZONE", code = 2014;
		Binary = "BINARY", code = -2;
		VarBinary = "VARBINARY", code = -3;
		LongVarBinary = "LONGVARBINARY", code = -4;
		Boolean = "BOOLEAN", code = 16;
		Blob = "BLOB", code = 2004;
		Clob = "CLOB", code = 2005;
		NClob = "NCLOB", code = 2011;
		Uuid = "UUID", code = 3000;
		Json = "JSON", code = 3001;
		Inet = "INET", code = 3002;
		TimestampUtc = "TIMESTAMP_UTC", code = 3003;
		IntervalSecond = "INTERVAL_SECOND", code = 3100;
	}
}

setting_enum! {
	/// Treatment of `Byte[]` and `Character[]` attributes
	pub enum WrapperArrayHandling : "org.hibernate.type.WrapperArrayHandling" {
		Disallow = "DISALLOW";
		Allow = "ALLOW";
		Legacy = "LEGACY";
		Pick = "PICK";
	}
}

setting_enum! {
	/// Storage of the offset or zone of zoned date-time values
	pub enum TimeZoneStorageType : "org.hibernate.annotations.TimeZoneStorageType" {
		Native = "NATIVE";
		Normalize = "NORMALIZE";
		NormalizeUtc = "NORMALIZE_UTC";
		Column = "COLUMN";
		Auto = "AUTO";
		/// Preserve the instant, not necessarily the zone
		Default = "DEFAULT";
	}
}

setting_enum! {
	/// Kinds of mapping metadata sources
	pub enum MetadataSourceType : "org.hibernate.cfg.MetadataSourceType" {
		/// `hbm.xml` mapping files
		Hbm = "HBM";
		/// Annotated classes and `orm.xml`
		Class = "CLASS";
	}
}

setting_enum! {
	/// Semantics of a plural attribute
	pub enum CollectionClassification : "org.hibernate.metamodel.CollectionClassification" {
		Array = "ARRAY";
		Bag = "BAG";
		IdBag = "ID_BAG";
		List = "LIST";
		Set = "SET";
		OrderedSet = "ORDERED_SET";
		SortedSet = "SORTED_SET";
		Map = "MAP";
		OrderedMap = "ORDERED_MAP";
		SortedMap = "SORTED_MAP";
	}
	class_aliases = {
		"java.util.List" => "LIST",
		"java.util.Collection" => "BAG",
	}
}

setting_enum! {
	/// What to do with `hbm.xml` features that cannot be transformed
	pub enum UnsupportedFeatureHandling : "org.hibernate.boot.jaxb.hbm.transform.UnsupportedFeatureHandling" {
		Error = "ERROR";
		Ignore = "IGNORE";
		Pick = "PICK";
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mapcfg_types::enum_type::SettingEnum;

	#[test]
	fn test_alias_spellings() {
		assert_eq!(
			JpaMetamodelPopulation::parse("ignoreUnsupported"),
			Some(JpaMetamodelPopulation::IgnoreUnsupported)
		);
		assert_eq!(
			StaticMetamodelPopulation::parse("SKIPUNSUPPORTED"),
			Some(StaticMetamodelPopulation::SkipUnsupported)
		);
	}

	#[test]
	fn test_sql_type_codes_are_unique() {
		let codes: Vec<i64> = SqlType::DOMAIN.constants.iter().filter_map(|c| c.code).collect();
		let mut sorted = codes.clone();
		sorted.sort_unstable();
		sorted.dedup();
		assert_eq!(codes.len(), sorted.len());
		assert_eq!(codes.len(), SqlType::VARIANTS.len());
	}

	#[test]
	fn test_as_constant_matches_trait() {
		for v in TimeZoneStorageType::VARIANTS {
			assert_eq!(v.as_constant(), v.constant());
		}
	}
}

// vim: ts=4
