use axum::{http::StatusCode, response::IntoResponse};

use homestack_types::Error as CoreError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	Core(CoreError),
}

impl From<CoreError> for Error {
	fn from(err: CoreError) -> Self {
		Self::Core(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Core(err) => write!(f, "{}", err),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::Core(CoreError::InvalidPath(path)) => {
				(StatusCode::BAD_REQUEST, format!("invalid path: {}", path)).into_response()
			}
			Error::Core(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4
