// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::waitlist_form::WaitlistForm;
use sycamore::prelude::*;

const PAGE_TITLE: &str = "METISIUM";

#[component]
pub fn LandingView<G: Html>(ctx: Scope<'_>) -> View<G> {
	if let Some(document) = web_sys::window().and_then(|window| window.document()) {
		document.set_title(PAGE_TITLE);
	}
	log::info!("Rendering landing page");

	view! {
		ctx,
		div(id="landing") {
			div(class="landing_mandala landing_mandala_top") {}
			div(class="landing_mandala landing_mandala_bottom") {}
			div(class="landing_shimmer") {}
			main(id="landing_main") {
				h1(class="landing_title") { "METI" }
				h2(class="landing_title") { "SIUM" }
				div(class="landing_powered_by") {
					span(class="landing_powered_by_prefix") { "Powered by " }
					span(class="landing_powered_by_name") { "MORC" }
				}
				WaitlistForm {}
			}
		}
	}
}
