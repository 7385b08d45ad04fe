//! Value model: scalar configuration values, derived metadata, and
//! validation results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - the variant is inferred from the JSON shape
pub enum ScalarValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
}

impl ScalarValue {
	/// Type name as used in the `core.type` metadata key.
	pub fn type_name(&self) -> &'static str {
		match self {
			ScalarValue::Bool(_) => "bool",
			ScalarValue::Int(_) => "int",
			ScalarValue::String(_) => "string",
		}
	}

	/// Returns the string contents, or `None` for non-string scalars.
	///
	/// Validators use this to degrade gracefully when a value arrives
	/// with an unexpected type: a non-string is treated like an empty
	/// field rather than failing the call.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ScalarValue::String(s) => Some(s),
			_ => None,
		}
	}
}

impl From<&str> for ScalarValue {
	fn from(s: &str) -> Self {
		ScalarValue::String(s.to_string())
	}
}

impl From<String> for ScalarValue {
	fn from(s: String) -> Self {
		ScalarValue::String(s)
	}
}

impl From<i64> for ScalarValue {
	fn from(i: i64) -> Self {
		ScalarValue::Int(i)
	}
}

impl From<bool> for ScalarValue {
	fn from(b: bool) -> Self {
		ScalarValue::Bool(b)
	}
}

/// Metadata entry value: a scalar or an ordered list of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
	Bool(bool),
	String(String),
	List(Vec<String>),
}

/// Metadata map attached to every stored value.
///
/// Recognized keys: `ui.section`, `ui.displayName`, `core.description`,
/// `core.type`, and the optional `ui.placeholder`, `ui.password`,
/// `config.required`, `ui.enum`. Optional keys are present iff the
/// corresponding definition field is set - absence is the "unset"
/// signal, never an empty placeholder.
pub type Metadata = HashMap<String, MetaValue>;

/// A stored configuration value: the scalar plus its derived metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
	pub value: ScalarValue,
	pub metadata: Metadata,
}

impl ConfigValue {
	pub fn new(value: impl Into<ScalarValue>) -> Self {
		Self { value: value.into(), metadata: Metadata::new() }
	}
}

/// Diagnostic strength of a validation result.
///
/// `Blocking` is stricter than `Warning`; the derived ordering reflects
/// that (`Blocking > Warning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
	#[serde(rename = "warning")]
	Warning,
	#[serde(rename = "blocking")]
	Blocking,
}

/// A single validation diagnostic. Absence of any result means the
/// value is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
	pub message: String,
	pub severity: Severity,
}

impl ValidationResult {
	pub fn blocking(message: impl Into<String>) -> Self {
		Self { message: message.into(), severity: Severity::Blocking }
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self { message: message.into(), severity: Severity::Warning }
	}
}


// vim: ts=4
