// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::layout::Layout;
use leptos::prelude::*;

/// Fallback page for any location the router doesn't match.
#[component]
pub fn NotFoundPage() -> impl IntoView {
	tracing::debug!("Rendering fallback page for unmatched location");

	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<Layout>
			<h1>"Not found"</h1>
			<p>"You just hit a page that doesn't exist... the sadness."</p>
		</Layout>
	}
}
