//! Homestack configuration plugin core.
//!
//! # Architecture
//!
//! - **Schema** (`schema.rs`): value definitions, builder, and the
//!   registry that is frozen after catalog registration
//! - **Catalog** (`catalog.rs`): the fixed set of configuration values
//!   for every managed service component
//! - **Store** (`store.rs`): concurrency-safe current values, seeded
//!   from the frozen schema
//! - **Validate** (`validate.rs`): path-keyed validation rules,
//!   including cross-field checks through a tree view
//! - **Service** (`service.rs`): the four-operation contract
//!   (list/get/set/validate) the host exposes over its transport
//!
//! The core is synchronous and non-blocking; whatever concurrency the
//! host transport uses, every operation here completes in microseconds
//! under a single read/write lock.

pub mod catalog;
pub mod schema;
pub mod service;
pub mod store;
pub mod validate;

pub use schema::{FrozenSchema, SchemaRegistry, ValueDef, ValueDefBuilder};
pub use service::ConfigService;
pub use store::ValueStore;
pub use validate::{Validate, ValidatorRegistry};

// vim: ts=4
