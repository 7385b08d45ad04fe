use std::fmt;

pub type HsResult<T> = std::result::Result<T, Error>;

/// Core error type for the configuration plugin.
///
/// Read-style operations are total and never produce an error; an
/// unknown path is reported as "not found", not as a failure.
#[derive(Debug)]
pub enum Error {
	/// A write was attempted with a syntactically invalid path.
	InvalidPath(String),
	/// A schema definition or registry invariant was violated at
	/// construction time.
	ConfigError(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::InvalidPath(path) => write!(f, "invalid path: {}", path),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
