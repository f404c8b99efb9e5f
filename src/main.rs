// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Log filter used when `RUST_LOG` isn't set
#[cfg(feature = "ssr")]
const DEFAULT_LOG_FILTER: &str = "info,starter_site=debug";

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use starter_site::config::parse_config;
	use starter_site::web::server::run_server;
	use std::sync::Arc;

	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let config = parse_config("config.kdl").await?;
	tracing::debug!(?config, "Loaded configuration");

	let server_result = run_server(Arc::new(config)).await;
	if let Err(error) = &server_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
	server_result
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side is started through the hydrate entry point in lib.rs
}
