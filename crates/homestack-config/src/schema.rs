//! Value definitions and the schema registry.
//!
//! A `ValueDef` is the static schema entry for one configuration
//! value; the registry collects them in catalog order during startup
//! and is then frozen. Stored values are derived from definitions by
//! `ValueDef::to_value`, which populates the standard metadata keys.

use std::collections::HashMap;

use homestack_types::prelude::*;
use homestack_types::value::{MetaValue, Metadata};
use homestack_types::validate_path;

/// Static definition of one configuration value.
///
/// Definitions are immutable once built; the runtime value and its
/// metadata map are derived from them deterministically.
#[derive(Debug, Clone)]
pub struct ValueDef {
	/// Slash-delimited config path, e.g. `core/timezone`.
	pub path: String,
	/// Default value; its variant also determines the `core.type`
	/// metadata (`string`/`int`/`bool`).
	pub default: ScalarValue,
	/// UI section grouping (`ui.section`).
	pub section: String,
	/// Human-readable name (`ui.displayName`).
	pub display_name: String,
	/// Description shown alongside the field (`core.description`).
	pub description: String,

	// Optional fields - unset means the metadata key is omitted
	/// Placeholder text (`ui.placeholder`).
	pub placeholder: Option<String>,
	/// Render as a password input (`ui.password`).
	pub password: bool,
	/// Must be configured before deployment (`config.required`).
	pub required: bool,
	/// Ordered dropdown options (`ui.enum`).
	pub select_from: Vec<String>,
}

impl ValueDef {
	/// Create a builder for constructing a ValueDef.
	pub fn builder(path: impl Into<String>) -> ValueDefBuilder {
		ValueDefBuilder::new(path)
	}

	/// Derive the stored value for this definition.
	///
	/// Optional metadata keys are present in the map iff the
	/// corresponding field is set - omission, not an empty
	/// placeholder, signals "unset".
	pub fn to_value(&self) -> ConfigValue {
		let mut metadata = Metadata::new();
		metadata.insert("ui.section".into(), MetaValue::String(self.section.clone()));
		metadata.insert("ui.displayName".into(), MetaValue::String(self.display_name.clone()));
		metadata.insert("core.description".into(), MetaValue::String(self.description.clone()));
		metadata.insert("core.type".into(), MetaValue::String(self.default.type_name().into()));
		if let Some(placeholder) = &self.placeholder {
			metadata.insert("ui.placeholder".into(), MetaValue::String(placeholder.clone()));
		}
		if self.password {
			metadata.insert("ui.password".into(), MetaValue::Bool(true));
		}
		if self.required {
			metadata.insert("config.required".into(), MetaValue::Bool(true));
		}
		if !self.select_from.is_empty() {
			metadata.insert("ui.enum".into(), MetaValue::List(self.select_from.clone()));
		}
		ConfigValue { value: self.default.clone(), metadata }
	}
}

/// Builder for ValueDef with a fluent API.
#[derive(Debug)]
pub struct ValueDefBuilder {
	path: String,
	default: Option<ScalarValue>,
	section: Option<String>,
	display_name: Option<String>,
	description: Option<String>,
	placeholder: Option<String>,
	password: bool,
	required: bool,
	select_from: Vec<String>,
}

impl ValueDefBuilder {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			default: None,
			section: None,
			display_name: None,
			description: None,
			placeholder: None,
			password: false,
			required: false,
			select_from: Vec::new(),
		}
	}

	/// Set the default value (required; also fixes the value type).
	pub fn default(mut self, value: impl Into<ScalarValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Set the UI section (required).
	pub fn section(mut self, section: impl Into<String>) -> Self {
		self.section = Some(section.into());
		self
	}

	/// Set the display name (required).
	pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());
		self
	}

	/// Set the description (required).
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the placeholder text.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Render this value as a password input.
	pub fn password(mut self) -> Self {
		self.password = true;
		self
	}

	/// Mark this value as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Restrict the value to an ordered list of options.
	pub fn select_from<I, S>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.select_from = options.into_iter().map(Into::into).collect();
		self
	}

	/// Build the ValueDef, checking the definition invariants.
	pub fn build(self) -> HsResult<ValueDef> {
		validate_path(&self.path)?;
		let default = self
			.default
			.ok_or_else(|| Error::ConfigError(format!("value '{}' has no default", self.path)))?;
		let section = self
			.section
			.filter(|s| !s.is_empty())
			.ok_or_else(|| Error::ConfigError(format!("value '{}' has no section", self.path)))?;
		let display_name = self.display_name.filter(|s| !s.is_empty()).ok_or_else(|| {
			Error::ConfigError(format!("value '{}' has no display name", self.path))
		})?;
		let description = self.description.filter(|s| !s.is_empty()).ok_or_else(|| {
			Error::ConfigError(format!("value '{}' has no description", self.path))
		})?;

		Ok(ValueDef {
			path: self.path,
			default,
			section,
			display_name,
			description,
			placeholder: self.placeholder.filter(|s| !s.is_empty()),
			password: self.password,
			required: self.required,
			select_from: self.select_from,
		})
	}
}

/// Mutable registry used during startup; frozen before serving.
pub struct SchemaRegistry {
	defs: Vec<ValueDef>,
}

impl SchemaRegistry {
	pub fn new() -> Self {
		Self { defs: Vec::new() }
	}

	/// Register a new value definition. Paths must be unique.
	pub fn register(&mut self, def: ValueDef) -> HsResult<()> {
		if self.defs.iter().any(|d| d.path == def.path) {
			return Err(Error::ConfigError(format!("value '{}' is already registered", def.path)));
		}
		debug!("Registering config value: {}", def.path);
		self.defs.push(def);
		Ok(())
	}

	/// Freeze the registry (make it immutable).
	pub fn freeze(self) -> FrozenSchema {
		info!("Freezing config schema with {} definitions", self.defs.len());
		let index = self.defs.iter().enumerate().map(|(i, d)| (d.path.clone(), i)).collect();
		FrozenSchema { defs: self.defs, index }
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}

impl Default for SchemaRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable schema, preserving catalog order.
pub struct FrozenSchema {
	defs: Vec<ValueDef>,
	index: HashMap<String, usize>,
}

impl FrozenSchema {
	/// Get a definition by path.
	pub fn get(&self, path: &str) -> Option<&ValueDef> {
		self.index.get(path).map(|&i| &self.defs[i])
	}

	/// All definitions in registration order.
	pub fn defs(&self) -> &[ValueDef] {
		&self.defs
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn full_def() -> ValueDef {
		ValueDef::builder("test/value")
			.default("hello")
			.section("General")
			.display_name("Test")
			.description("A test value")
			.placeholder("enter value")
			.password()
			.required()
			.select_from(["a", "b"])
			.build()
			.unwrap()
	}

	#[test]
	fn to_value_populates_all_metadata() {
		let v = full_def().to_value();

		assert_eq!(v.value, ScalarValue::from("hello"));
		let md = &v.metadata;
		assert_eq!(md["ui.section"], MetaValue::String("General".into()));
		assert_eq!(md["ui.displayName"], MetaValue::String("Test".into()));
		assert_eq!(md["core.description"], MetaValue::String("A test value".into()));
		assert_eq!(md["core.type"], MetaValue::String("string".into()));
		assert_eq!(md["ui.placeholder"], MetaValue::String("enter value".into()));
		assert_eq!(md["ui.password"], MetaValue::Bool(true));
		assert_eq!(md["config.required"], MetaValue::Bool(true));
		assert_eq!(md["ui.enum"], MetaValue::List(vec!["a".into(), "b".into()]));
	}

	#[test]
	fn to_value_omits_unset_optionals() {
		let def = ValueDef::builder("test/minimal")
			.default(42)
			.section("S")
			.display_name("D")
			.description("Desc")
			.build()
			.unwrap();
		let v = def.to_value();

		assert_eq!(v.metadata["core.type"], MetaValue::String("int".into()));
		for key in ["ui.placeholder", "ui.password", "config.required", "ui.enum"] {
			assert!(!v.metadata.contains_key(key), "unexpected metadata key {key}");
		}
	}

	#[test]
	fn to_value_is_deterministic() {
		let def = full_def();
		assert_eq!(def.to_value(), def.to_value());
	}

	#[test]
	fn build_rejects_missing_fields() {
		assert!(ValueDef::builder("test/value").default("x").build().is_err());
		assert!(
			ValueDef::builder("test/value")
				.section("S")
				.display_name("D")
				.description("Desc")
				.build()
				.is_err()
		);
	}

	#[test]
	fn build_rejects_invalid_path() {
		let result = ValueDef::builder("INVALID")
			.default("x")
			.section("S")
			.display_name("D")
			.description("Desc")
			.build();
		assert!(matches!(result, Err(Error::InvalidPath(_))));
	}

	#[test]
	fn register_rejects_duplicate_paths() {
		let mut registry = SchemaRegistry::new();
		registry.register(full_def()).unwrap();
		assert!(registry.register(full_def()).is_err());
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn frozen_schema_preserves_order() {
		let mut registry = SchemaRegistry::new();
		for path in ["test/b", "test/a", "test/c"] {
			registry
				.register(
					ValueDef::builder(path)
						.default("x")
						.section("S")
						.display_name("D")
						.description("Desc")
						.build()
						.unwrap(),
				)
				.unwrap();
		}
		let schema = registry.freeze();
		let paths: Vec<&str> = schema.defs().iter().map(|d| d.path.as_str()).collect();
		assert_eq!(paths, ["test/b", "test/a", "test/c"]);
		assert!(schema.get("test/a").is_some());
		assert!(schema.get("test/missing").is_none());
	}
}

// vim: ts=4
