//! Tree view: read-only lookup over a configuration snapshot.
//!
//! Cross-field validators read companion values through this trait.
//! The snapshot is assembled by the caller - typically from one store,
//! but possibly spanning several plugins - and is not required to
//! contain every registered path.

use std::collections::HashMap;

use crate::value::ConfigValue;

/// Read-only lookup from config path to current value.
pub trait ConfigTree: Send + Sync {
	/// Returns the value at `path`, or `None` if the snapshot does not
	/// contain it.
	fn get(&self, path: &str) -> Option<ConfigValue>;
}

/// Simple map-backed tree for assembling snapshots.
#[derive(Debug, Default)]
pub struct MemoryTree {
	values: HashMap<String, ConfigValue>,
}

impl MemoryTree {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, path: impl Into<String>, value: ConfigValue) {
		self.values.insert(path.into(), value);
	}
}

impl ConfigTree for MemoryTree {
	fn get(&self, path: &str) -> Option<ConfigValue> {
		self.values.get(path).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_tree_lookup() {
		let mut tree = MemoryTree::new();
		tree.insert("core/domain", ConfigValue::new("home.example.com"));

		assert!(tree.get("core/domain").is_some());
		assert!(tree.get("core/timezone").is_none());
	}
}

// vim: ts=4
