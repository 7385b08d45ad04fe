//! HTTP handlers for the four-operation plugin contract.

use std::sync::Arc;

use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	routing::{get, post},
};
use serde::Serialize;

use homestack_config::ConfigService;
use homestack_types::value::{ConfigValue, ValidationResult};

use crate::error::{Error, Result};

/// GET /api/values - every registered path, in catalog order
pub async fn list_values(State(service): State<Arc<ConfigService>>) -> Json<Vec<String>> {
	Json(service.list().iter().map(ToString::to_string).collect())
}

/// Path response: the stored scalar plus its metadata map.
#[derive(Serialize)]
pub struct ValueResponse {
	pub path: String,
	#[serde(flatten)]
	pub value: ConfigValue,
}

/// GET /api/values/{path} - current value, 404 when unknown
pub async fn get_value(
	State(service): State<Arc<ConfigService>>,
	Path(path): Path<String>,
) -> Result<Json<ValueResponse>> {
	let value = service.get(&path).ok_or(Error::NotFound)?;
	Ok(Json(ValueResponse { path, value }))
}

/// PUT /api/values/{path} - overwrite the value, 400 on a bad path
pub async fn put_value(
	State(service): State<Arc<ConfigService>>,
	Path(path): Path<String>,
	Json(value): Json<ConfigValue>,
) -> Result<StatusCode> {
	service.set(&path, value)?;
	Ok(StatusCode::NO_CONTENT)
}

/// POST /api/validate/{path} - run the registered rule against a
/// snapshot of the store's current contents
pub async fn validate_value(
	State(service): State<Arc<ConfigService>>,
	Path(path): Path<String>,
) -> Result<Json<Vec<ValidationResult>>> {
	let tree = service.snapshot();
	let results = service.validate(&path, &tree)?;
	Ok(Json(results))
}

pub fn init(service: Arc<ConfigService>) -> Router {
	Router::new()
		.route("/api/values", get(list_values))
		.route("/api/values/{*path}", get(get_value).put(put_value))
		.route("/api/validate/{*path}", post(validate_value))
		.with_state(service)
}

// vim: ts=4
