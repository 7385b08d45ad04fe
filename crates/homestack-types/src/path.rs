//! Config path grammar.
//!
//! A path names one configuration value as slash-joined segments, e.g.
//! `core/domain` or `pihole/dns-port`. Segments are non-empty,
//! lowercase alphanumeric with hyphens. The catalog only uses two
//! segments per path, but the grammar accepts deeper nesting.

use crate::error::{Error, HsResult};

fn valid_segment(segment: &str) -> bool {
	!segment.is_empty()
		&& segment.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check the syntax of a config path.
///
/// Used as a gate before any write. Reads never re-validate: a path
/// that was never valid cannot be present to read.
pub fn validate_path(path: &str) -> HsResult<()> {
	let mut segments = 0;
	for segment in path.split('/') {
		if !valid_segment(segment) {
			return Err(Error::InvalidPath(path.to_string()));
		}
		segments += 1;
	}
	// A bare component name is not addressable - at least "component/key".
	if segments < 2 {
		return Err(Error::InvalidPath(path.to_string()));
	}
	Ok(())
}


// vim: ts=4
