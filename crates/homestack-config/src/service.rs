//! Plugin service: the four-operation contract behind whatever
//! transport the host process speaks.

use std::sync::Arc;

use homestack_types::prelude::*;
use homestack_types::tree::{ConfigTree, MemoryTree};

use crate::catalog;
use crate::schema::{FrozenSchema, SchemaRegistry};
use crate::store::ValueStore;
use crate::validate::ValidatorRegistry;

/// Owns the frozen schema, the value store, and the validator table.
///
/// All operations are synchronous and non-blocking; the host calls
/// them from its own concurrency context.
pub struct ConfigService {
	schema: Arc<FrozenSchema>,
	store: ValueStore,
	validators: ValidatorRegistry,
}

impl ConfigService {
	/// Build the full catalog, freeze it, seed the store, and install
	/// the default validation rules.
	pub fn new() -> HsResult<Self> {
		let mut registry = SchemaRegistry::new();
		catalog::register_all(&mut registry)?;
		let schema = Arc::new(registry.freeze());
		let store = ValueStore::new(&schema);
		let validators = ValidatorRegistry::with_defaults()?;
		info!("Config plugin ready: {} values, {} validators", schema.len(), validators.paths().count());
		Ok(Self { schema, store, validators })
	}

	/// Service with an alternate validator table (test isolation).
	pub fn with_validators(validators: ValidatorRegistry) -> HsResult<Self> {
		let mut registry = SchemaRegistry::new();
		catalog::register_all(&mut registry)?;
		let schema = Arc::new(registry.freeze());
		let store = ValueStore::new(&schema);
		Ok(Self { schema, store, validators })
	}

	/// Every registered path, in catalog order.
	pub fn list(&self) -> &[Box<str>] {
		self.store.list()
	}

	/// Current value at `path`; `None` is "unknown", not an error.
	pub fn get(&self, path: &str) -> Option<ConfigValue> {
		self.store.get(path)
	}

	/// Overwrite the value at `path`. The only fallible operation;
	/// fails with `InvalidPath` on a grammar violation.
	pub fn set(&self, path: &str, value: ConfigValue) -> HsResult<()> {
		self.store.set(path, value)
	}

	/// Validate the value at `path` against the supplied snapshot.
	///
	/// The error slot belongs to the contract; the current rule set
	/// never fails.
	pub fn validate(
		&self,
		path: &str,
		tree: &dyn ConfigTree,
	) -> HsResult<Vec<ValidationResult>> {
		Ok(self.validators.validate(path, tree))
	}

	/// Snapshot of this store's own contents, for validating without
	/// an externally assembled tree.
	pub fn snapshot(&self) -> MemoryTree {
		let mut tree = MemoryTree::new();
		for path in self.store.list() {
			if let Some(value) = self.store.get(path) {
				tree.insert(path.to_string(), value);
			}
		}
		tree
	}

	/// The frozen schema (definition metadata for hosts that list it).
	pub fn schema(&self) -> &Arc<FrozenSchema> {
		&self.schema
	}
}

// vim: ts=4
