// © 2026 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

pub const SITE_TITLE: &str = "Starter Site";

/// Shared page chrome around the content of every page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
	view! {
		<div class="site_layout">
			<header id="site_header">
				<a id="site_title" href="/">{SITE_TITLE}</a>
			</header>
			<main>{children()}</main>
			<footer id="site_footer">"Built with Leptos"</footer>
		</div>
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;

	#[test]
	fn wraps_children_in_main() {
		let html = Owner::new().with(|| {
			view! {
				<Layout>
					<span id="child">"content"</span>
				</Layout>
			}
			.to_html()
		});

		let main_start = html.find("<main>").expect("layout should render a main element");
		let main_end = html.find("</main>").expect("main element should be closed");
		let child = html.find("id=\"child\"").expect("child should be rendered");
		assert!(main_start < child && child < main_end);
		assert_eq!(html.matches("<main>").count(), 1);
	}

	#[test]
	fn header_links_home() {
		let html = Owner::new().with(|| view! { <Layout>"x"</Layout> }.to_html());

		assert!(html.contains("href=\"/\""));
		assert!(html.contains(SITE_TITLE));
		assert!(!html.contains("<h1"));
		assert!(!html.contains("<p"));
	}
}
