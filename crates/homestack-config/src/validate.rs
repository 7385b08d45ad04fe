//! Semantic validation rules and their dispatch registry.
//!
//! Each rule is a stateless strategy object keyed by config path.
//! Rules are total: a value with an unexpected scalar type falls
//! through to the empty/missing branch instead of failing the call.
//! Cross-field rules read companion paths through the tree view and
//! must tolerate those paths being absent from the snapshot.

use std::collections::HashMap;

use homestack_types::prelude::*;
use homestack_types::tree::ConfigTree;

/// A single validation capability: value plus tree view in, zero or
/// more diagnostics out.
pub trait Validate: Send + Sync {
	fn validate(&self, value: &ConfigValue, tree: &dyn ConfigTree) -> Vec<ValidationResult>;
}

/// The value must be a non-empty string.
pub struct Required;

impl Validate for Required {
	fn validate(&self, value: &ConfigValue, _tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		match value.value.as_str() {
			Some(s) if !s.is_empty() => Vec::new(),
			_ => vec![ValidationResult::blocking("This field is required")],
		}
	}
}

/// The value must be an absolute filesystem path. With `optional`,
/// an empty string passes (the mount is simply not configured).
pub struct AbsolutePath {
	pub optional: bool,
}

impl Validate for AbsolutePath {
	fn validate(&self, value: &ConfigValue, _tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		let s = value.value.as_str().unwrap_or("");
		if self.optional && s.is_empty() {
			return Vec::new();
		}
		if s.starts_with('/') {
			return Vec::new();
		}
		let message = if self.optional { "Path must be absolute" } else { "Must be an absolute path" };
		vec![ValidationResult::blocking(message)]
	}
}

/// Host DNS port check: must be numeric, and port 53 collides with
/// systemd-resolved's stub listener on most distributions.
pub struct DnsPort;

impl Validate for DnsPort {
	fn validate(&self, value: &ConfigValue, _tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		let port = match &value.value {
			ScalarValue::Int(i) => *i as f64,
			ScalarValue::String(s) => match s.parse::<f64>() {
				Ok(p) => p,
				Err(_) => {
					return vec![ValidationResult::blocking("DNS port must be a number")];
				}
			},
			ScalarValue::Bool(_) => {
				return vec![ValidationResult::blocking("DNS port must be a number")];
			}
		};
		if port == 53.0 {
			return vec![ValidationResult::blocking(
				"Port 53 may conflict with systemd-resolved. Run: sudo mkdir -p /etc/systemd/resolved.conf.d && echo -e '[Resolve]\\nDNSStubListener=no' | sudo tee /etc/systemd/resolved.conf.d/no-stub.conf && sudo systemctl restart systemd-resolved",
			)];
		}
		Vec::new()
	}
}

/// Cross-field check: once a base domain is configured, the trusted
/// domains list should no longer be the `localhost` default.
pub struct TrustedDomains;

impl Validate for TrustedDomains {
	fn validate(&self, value: &ConfigValue, tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		let s = value.value.as_str().unwrap_or("");
		let domain = tree.get("core/domain");
		let domain = domain.as_ref().and_then(|v| v.value.as_str()).unwrap_or("");
		if !domain.is_empty() && s == "localhost" {
			return vec![ValidationResult::warning(format!(
				"Trusted domains is still 'localhost' but core/domain is set to '{}'. Add your domain to trusted domains to avoid access errors.",
				domain
			))];
		}
		Vec::new()
	}
}

/// An empty claim token is allowed, but the Plex server then starts
/// unclaimed and unreachable remotely.
pub struct ClaimToken;

impl Validate for ClaimToken {
	fn validate(&self, value: &ConfigValue, _tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		let s = value.value.as_str().unwrap_or("");
		if s.is_empty() {
			return vec![ValidationResult::warning(
				"Plex claim token is empty. Your server will start unclaimed and won't be accessible remotely. Get a token from https://plex.tv/claim (valid 4 minutes).",
			)];
		}
		Vec::new()
	}
}

/// Path-keyed validator table, built once at startup.
///
/// Only paths that need validation are listed; an unlisted path is
/// always valid.
pub struct ValidatorRegistry {
	rules: HashMap<String, Box<dyn Validate>>,
}

impl ValidatorRegistry {
	pub fn new() -> Self {
		Self { rules: HashMap::new() }
	}

	/// Registry with the standard rule set for the catalog.
	pub fn with_defaults() -> HsResult<Self> {
		let mut registry = Self::new();
		registry.register("core/domain", Box::new(Required))?;
		registry.register("core/data-root", Box::new(AbsolutePath { optional: false }))?;
		registry.register("pihole/dns-port", Box::new(DnsPort))?;
		registry.register("pihole/admin-password", Box::new(Required))?;
		registry.register("plex/media-movies", Box::new(AbsolutePath { optional: true }))?;
		registry.register("plex/media-tv", Box::new(AbsolutePath { optional: true }))?;
		registry.register("plex/media-music", Box::new(AbsolutePath { optional: true }))?;
		registry.register("plex/claim-token", Box::new(ClaimToken))?;
		registry.register("nextcloud/admin-password", Box::new(Required))?;
		registry.register("nextcloud/trusted-domains", Box::new(TrustedDomains))?;
		registry.register("mariadb/root-password", Box::new(Required))?;
		registry.register("mariadb/nextcloud-password", Box::new(Required))?;
		Ok(registry)
	}

	/// Register a rule for a path. At most one rule per path.
	pub fn register(&mut self, path: impl Into<String>, rule: Box<dyn Validate>) -> HsResult<()> {
		let path = path.into();
		if self.rules.contains_key(&path) {
			return Err(Error::ConfigError(format!(
				"validator for '{}' is already registered",
				path
			)));
		}
		self.rules.insert(path, rule);
		Ok(())
	}

	/// Registered paths (no particular order).
	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.rules.keys().map(String::as_str)
	}

	/// Run the rule registered for `path` against the supplied
	/// snapshot.
	///
	/// No rule, or a value missing from the snapshot, means "valid":
	/// an empty result list, never an error.
	pub fn validate(&self, path: &str, tree: &dyn ConfigTree) -> Vec<ValidationResult> {
		let Some(rule) = self.rules.get(path) else {
			return Vec::new();
		};
		let Some(value) = tree.get(path) else {
			return Vec::new();
		};
		rule.validate(&value, tree)
	}
}

impl Default for ValidatorRegistry {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
