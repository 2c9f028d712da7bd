//! Compiled settings catalog
//!
//! Each settings area declares its definitions in a static table. Key
//! uniqueness across all areas is checked at compile time; the remaining
//! consistency checks run when the registry is loaded.

use tracing::error;

use crate::settings::{RegistryBuilder, SettingDefinition, SettingsRegistry};

mod discriminator;
mod id_generation;
mod identifiers;
mod metamodel;
mod naming;
mod type_mapping;
mod xml;

const AREAS: &[&[SettingDefinition]] = &[
	identifiers::SETTINGS,
	id_generation::SETTINGS,
	type_mapping::SETTINGS,
	naming::SETTINGS,
	metamodel::SETTINGS,
	xml::SETTINGS,
	discriminator::SETTINGS,
];

const fn str_eq(a: &str, b: &str) -> bool {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i] != b[i] {
			return false;
		}
		i += 1;
	}
	true
}

const fn keys_are_unique(areas: &[&[SettingDefinition]]) -> bool {
	let mut area = 0;
	while area < areas.len() {
		let mut idx = 0;
		while idx < areas[area].len() {
			let key = areas[area][idx].key;

			// Compare against every later definition
			let (mut other_area, mut other_idx) = (area, idx + 1);
			while other_area < areas.len() {
				while other_idx < areas[other_area].len() {
					if str_eq(key, areas[other_area][other_idx].key) {
						return false;
					}
					other_idx += 1;
				}
				other_area += 1;
				other_idx = 0;
			}
			idx += 1;
		}
		area += 1;
	}
	true
}

const _: () = assert!(keys_are_unique(AREAS), "duplicate setting key in the catalog");

/// All compiled definitions, in declaration order
pub(crate) fn definitions() -> impl Iterator<Item = &'static SettingDefinition> {
	AREAS.iter().flat_map(|area| area.iter())
}

/// Build the registry from the compiled catalog
///
/// A definition that fails registration is logged and left out; the unit
/// tests keep the catalog free of such definitions.
pub(crate) fn load() -> SettingsRegistry {
	let mut builder = RegistryBuilder::new();
	for def in definitions() {
		if let Err(err) = builder.register(def) {
			error!("Skipping setting '{}': {}", def.key, err);
		}
	}
	builder.freeze()
}


// vim: ts=4
