//! Shared types for the Homestack configuration plugin.
//!
//! This crate contains the value model, path grammar, and the tree-view
//! trait that are shared between the plugin core and the host process.
//! Keeping them in their own crate lets alternative hosts compile
//! against the contract without pulling in the catalog.

pub mod error;
pub mod path;
pub mod prelude;
pub mod tree;
pub mod value;

pub use error::{Error, HsResult};
pub use path::validate_path;
pub use tree::{ConfigTree, MemoryTree};
pub use value::{ConfigValue, MetaValue, Metadata, ScalarValue, Severity, ValidationResult};

// vim: ts=4
