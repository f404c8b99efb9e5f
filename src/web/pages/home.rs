// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::layout::Layout;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
	view! {
		<Layout>
			<h1>"Hi people"</h1>
			<p>"Welcome to your new site."</p>
		</Layout>
	}
}
