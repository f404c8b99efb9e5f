// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = &config.web.bind_addr;
	let app = site_router(web_config.leptos_options);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

/// Builds the router for the site. Locations that match neither a page nor a file in the site root render the
/// not found page.
pub fn site_router(leptos_options: LeptosOptions) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.leptos_routes(&leptos_options, routes, {
			let leptos_options = leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.with_state(leptos_options)
}

async fn file_and_error_handler(State(options): State<LeptosOptions>, request: Request) -> Response {
	let (parts, body) = request.into_parts();
	let response = get_static_file(&parts, &options.site_root).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	// ServeDir answers 405 for anything but GET and HEAD
	if response.status() != StatusCode::NOT_FOUND && response.status() != StatusCode::METHOD_NOT_ALLOWED {
		response
	} else {
		tracing::debug!(uri = %parts.uri, "No static file; rendering app");
		let handler = render_app_to_stream(move || shell(options.clone()));
		handler(Request::from_parts(parts, body)).await.into_response()
	}
}

async fn get_static_file(parts: &Parts, root: &str) -> Result<Response, StatusCode> {
	let mut request = Request::new(Body::empty());
	*request.method_mut() = parts.method.clone();
	*request.uri_mut() = parts.uri.clone();
	*request.headers_mut() = parts.headers.clone();

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}
