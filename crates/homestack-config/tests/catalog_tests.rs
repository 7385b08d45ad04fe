use std::collections::HashSet;

use homestack_config::catalog;
use homestack_config::schema::SchemaRegistry;
use homestack_types::validate_path;
use homestack_types::value::MetaValue;

fn schema() -> homestack_config::FrozenSchema {
	let mut registry = SchemaRegistry::new();
	catalog::register_all(&mut registry).unwrap();
	registry.freeze()
}

#[test]
fn all_paths_are_unique() {
	let schema = schema();
	let mut seen = HashSet::new();
	for def in schema.defs() {
		assert!(seen.insert(def.path.clone()), "duplicate path: {}", def.path);
	}
}

#[test]
fn all_paths_are_valid() {
	for def in schema().defs() {
		validate_path(&def.path).unwrap_or_else(|e| panic!("invalid path {:?}: {}", def.path, e));
	}
}

#[test]
fn all_defs_have_required_metadata() {
	for def in schema().defs() {
		assert!(!def.section.is_empty(), "path {:?} missing section", def.path);
		assert!(!def.display_name.is_empty(), "path {:?} missing display name", def.path);
		assert!(!def.description.is_empty(), "path {:?} missing description", def.path);
		assert!(!def.default.type_name().is_empty());
	}
}

#[test]
fn every_component_namespace_is_present() {
	let schema = schema();
	let prefixes: HashSet<&str> =
		schema.defs().iter().filter_map(|d| d.path.split('/').next()).collect();
	for component in
		["core", "pihole", "plex", "nextcloud", "mariadb", "redis", "nginx-proxy-manager"]
	{
		assert!(prefixes.contains(component), "no values registered for {component}");
	}
}

#[test]
fn derived_metadata_matches_definitions() {
	for def in schema().defs() {
		let value = def.to_value();
		assert_eq!(value.value, def.default);
		assert_eq!(
			value.metadata.get("ui.section"),
			Some(&MetaValue::String(def.section.clone()))
		);
		assert_eq!(
			value.metadata.get("core.type"),
			Some(&MetaValue::String(def.default.type_name().into()))
		);
		assert_eq!(value.metadata.contains_key("ui.placeholder"), def.placeholder.is_some());
		assert_eq!(value.metadata.contains_key("ui.password"), def.password);
		assert_eq!(value.metadata.contains_key("config.required"), def.required);
		assert_eq!(value.metadata.contains_key("ui.enum"), !def.select_from.is_empty());
	}
}

#[test]
fn eviction_policy_enum_is_ordered() {
	let schema = schema();
	let def = schema.get("redis/maxmemory-policy").unwrap();
	assert_eq!(
		def.select_from,
		["allkeys-lru", "volatile-lru", "allkeys-lfu", "volatile-lfu", "noeviction"]
	);
}

// vim: ts=4
