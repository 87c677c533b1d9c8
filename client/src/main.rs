// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod components;
mod config;
mod pages;
mod waitlist_client;
use config::WaitlistConfig;
use pages::error::{ErrorData, ErrorView};
use pages::landing::LandingView;
use waitlist_client::WaitlistClient;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = match WaitlistConfig::from_document() {
		Ok(config) => config,
		Err(error) => {
			log::error!("Failed to load waitlist configuration: {}", error);
			sycamore::render(|ctx| {
				let error = ErrorData::new_with_error("Unable to load: the waitlist isn't configured on this page", error);
				view! { ctx, ErrorView(error=error) }
			});
			return;
		}
	};

	let client = WaitlistClient::new(config);
	sycamore::render(|ctx| {
		provide_context(ctx, client);
		view! { ctx, LandingView {} }
	});
}
