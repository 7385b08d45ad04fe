//! Current-value store, seeded from the frozen schema.
//!
//! Reads are concurrent, writes exclusive, behind one coarse lock -
//! the map is small and every critical section is a single-entry
//! update.

use std::collections::HashMap;

use parking_lot::RwLock;

use homestack_types::prelude::*;
use homestack_types::tree::ConfigTree;
use homestack_types::validate_path;

use crate::schema::FrozenSchema;

/// Path-to-value mapping holding the current configuration.
///
/// The path list is captured at construction in schema order and never
/// changes afterwards; values are overwritten in place, never deleted.
pub struct ValueStore {
	paths: Vec<Box<str>>,
	values: RwLock<HashMap<String, ConfigValue>>,
}

impl ValueStore {
	/// Seed the store with one derived value per schema definition.
	pub fn new(schema: &FrozenSchema) -> Self {
		let mut paths = Vec::with_capacity(schema.len());
		let mut values = HashMap::with_capacity(schema.len());
		for def in schema.defs() {
			paths.push(def.path.clone().into_boxed_str());
			values.insert(def.path.clone(), def.to_value());
		}
		Self { paths, values: RwLock::new(values) }
	}

	/// Every path known at construction time, in schema order.
	pub fn list(&self) -> &[Box<str>] {
		&self.paths
	}

	/// Current value at `path`, or `None` for an unknown path.
	pub fn get(&self, path: &str) -> Option<ConfigValue> {
		self.values.read().get(path).cloned()
	}

	/// Overwrite (or insert) the value at `path`.
	///
	/// The path is gated on the grammar first; on failure the store is
	/// left unmodified. Writes are not restricted to pre-registered
	/// paths, only to syntactically valid ones.
	pub fn set(&self, path: &str, value: ConfigValue) -> HsResult<()> {
		validate_path(path)?;
		debug!("Config value updated: {}", path);
		self.values.write().insert(path.to_string(), value);
		Ok(())
	}
}

impl ConfigTree for ValueStore {
	fn get(&self, path: &str) -> Option<ConfigValue> {
		ValueStore::get(self, path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog;
	use crate::schema::SchemaRegistry;

	fn store() -> ValueStore {
		let mut registry = SchemaRegistry::new();
		catalog::register_all(&mut registry).unwrap();
		ValueStore::new(&registry.freeze())
	}

	#[test]
	fn seeded_with_one_value_per_definition() {
		let store = store();
		for path in store.list() {
			let value = store.get(path).unwrap();
			assert!(value.metadata.contains_key("ui.section"), "{path} has no metadata");
		}
	}

	#[test]
	fn get_unknown_path_is_none() {
		assert!(store().get("nonexistent/path").is_none());
	}

	#[test]
	fn set_then_get_roundtrip() {
		let store = store();
		store.set("core/timezone", ConfigValue::new("UTC")).unwrap();
		assert_eq!(store.get("core/timezone").unwrap().value, ScalarValue::from("UTC"));
	}

	#[test]
	fn set_invalid_path_leaves_store_unmodified() {
		let store = store();
		let before = store.get("core/timezone").unwrap();
		let result = store.set("INVALID", ConfigValue::new("x"));
		assert!(matches!(result, Err(Error::InvalidPath(_))));
		assert!(store.get("INVALID").is_none());
		assert_eq!(store.get("core/timezone").unwrap(), before);
	}

	#[test]
	fn set_does_not_type_check_against_the_seeded_value() {
		// writes are gated on path syntax only; changing a value's
		// scalar type is allowed and surfaces later through validation
		let store = store();
		store.set("pihole/dns-port", ConfigValue::new("5353")).unwrap();
		assert_eq!(store.get("pihole/dns-port").unwrap().value, ScalarValue::from("5353"));
	}

	#[test]
	fn set_allows_unregistered_but_valid_path() {
		let store = store();
		store.set("jellyfin/web-port", ConfigValue::new(8096)).unwrap();
		assert!(store.get("jellyfin/web-port").is_some());
		// list() still reflects construction time only
		assert!(!store.list().iter().any(|p| p.as_ref() == "jellyfin/web-port"));
	}
}

// vim: ts=4
