// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::home::HomePage;
use super::layout::SITE_TITLE;
use super::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/starter-site.css" />
		<Title text=SITE_TITLE />

		<Router>
			<Routes fallback=|| view! { <NotFoundPage /> }>
				<Route path=path!("/") view=HomePage />
			</Routes>
		</Router>
	}
}
