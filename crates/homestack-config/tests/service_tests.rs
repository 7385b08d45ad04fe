use homestack_config::catalog;
use homestack_config::schema::SchemaRegistry;
use homestack_config::{ConfigService, ValidatorRegistry};
use homestack_types::tree::MemoryTree;
use homestack_types::value::{ConfigValue, ScalarValue, Severity};
use homestack_types::Error;

#[test]
fn list_returns_one_path_per_definition() {
	let service = ConfigService::new().unwrap();
	let mut registry = SchemaRegistry::new();
	catalog::register_all(&mut registry).unwrap();
	assert_eq!(service.list().len(), registry.len());
}

#[test]
fn get_returns_seeded_values() {
	let service = ConfigService::new().unwrap();
	for path in service.list() {
		let value = service.get(path).unwrap_or_else(|| panic!("{path} not found"));
		assert!(!value.metadata.is_empty(), "{path} has empty metadata");
	}
}

#[test]
fn get_missing_path_is_none() {
	let service = ConfigService::new().unwrap();
	assert!(service.get("nonexistent/path").is_none());
}

#[test]
fn set_then_get() {
	let service = ConfigService::new().unwrap();
	service.set("core/timezone", ConfigValue::new("UTC")).unwrap();
	let value = service.get("core/timezone").unwrap();
	assert_eq!(value.value, ScalarValue::from("UTC"));
}

#[test]
fn set_invalid_path_fails() {
	let service = ConfigService::new().unwrap();
	let result = service.set("INVALID", ConfigValue::new("x"));
	assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[test]
fn validators_only_reference_known_paths() {
	let service = ConfigService::new().unwrap();
	let validators = ValidatorRegistry::with_defaults().unwrap();
	for path in validators.paths() {
		assert!(service.schema().get(path).is_some(), "validator for unknown path {path}");
	}
}

#[test]
fn validate_dispatches_over_own_snapshot() {
	let service = ConfigService::new().unwrap();
	let tree = service.snapshot();

	// core/domain defaults to "" and is required - should block.
	let results = service.validate("core/domain", &tree).unwrap();
	assert!(!results.is_empty(), "expected blocking result for empty core/domain");
	assert_eq!(results[0].severity, Severity::Blocking);

	// core/timezone has no validator - always valid.
	let results = service.validate("core/timezone", &tree).unwrap();
	assert!(results.is_empty());
}

#[test]
fn validate_default_dns_port_blocks() {
	let service = ConfigService::new().unwrap();
	let results = service.validate("pihole/dns-port", &service.snapshot()).unwrap();
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].severity, Severity::Blocking);
}

#[test]
fn validate_uses_supplied_tree_not_the_store() {
	// The snapshot may come from another plugin's assembly; the store's
	// own contents must not leak into the check.
	let service = ConfigService::new().unwrap();
	let mut tree = MemoryTree::new();
	tree.insert("core/domain", ConfigValue::new("home.example.com"));
	tree.insert("nextcloud/trusted-domains", ConfigValue::new("localhost"));

	let results = service.validate("nextcloud/trusted-domains", &tree).unwrap();
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].severity, Severity::Warning);
	assert!(results[0].message.contains("home.example.com"));
}

#[test]
fn validate_with_alternate_registry() {
	let service = ConfigService::with_validators(ValidatorRegistry::new()).unwrap();
	// no rules installed at all - everything is valid
	let tree = service.snapshot();
	assert!(service.validate("core/domain", &tree).unwrap().is_empty());
}

// vim: ts=4
