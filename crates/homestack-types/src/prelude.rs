pub use crate::error::{Error, HsResult};
pub use crate::value::{ConfigValue, ScalarValue, Severity, ValidationResult};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
