//! Homestack configuration plugin host.
//!
//! Serves the four-operation contract (list/get/set/validate) over
//! HTTP. The core never touches the transport; everything here is
//! plumbing: tracing setup, service construction, and the router.

use std::{env, sync::Arc};

use tower_http::trace::TraceLayer;
use tracing::info;

use homestack_config::ConfigService;
use homestack_server::handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let service = Arc::new(ConfigService::new()?);
	let router = handler::init(service).layer(TraceLayer::new_for_http());

	let listen = env::var("HOMESTACK_LISTEN").unwrap_or_else(|_| "127.0.0.1:8456".to_string());
	let listener = tokio::net::TcpListener::bind(&listen).await?;
	info!("Config plugin listening on {}", listen);
	axum::serve(listener, router).await?;
	Ok(())
}

// vim: ts=4
