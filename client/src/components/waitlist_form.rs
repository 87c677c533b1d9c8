// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::waitlist_client::WaitlistClient;
use gloo_timers::future::TimeoutFuture;
use metisium_shared::signup::{submit_signup_with_reset, FormHandle, SignupForm, SUCCESS_MESSAGE};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// Lets the signup flow drive the form through its reactive signal
struct FormSignal<'a>(&'a Signal<SignupForm>);

impl FormHandle for FormSignal<'_> {
	fn update<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> R {
		f(&mut self.0.modify())
	}
}

#[component]
pub fn WaitlistForm<G: Html>(ctx: Scope<'_>) -> View<G> {
	let form_signal = create_signal(ctx, SignupForm::new());
	let email_signal = create_memo(ctx, || form_signal.get().email().to_string());
	let submitting_signal = create_memo(ctx, || form_signal.get().is_submitting());
	let success_signal = create_memo(ctx, || form_signal.get().show_success());
	let error_signal = create_memo(ctx, || form_signal.get().error_message());

	let email_input_handler = move |event: WebEvent| {
		let Some(input) = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
		else {
			return;
		};
		form_signal.modify().set_email(input.value());
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Runs in this component's scope, so unmounting drops both the request and the success reset timer.
		spawn_local_scoped(ctx, async move {
			let client: &WaitlistClient = use_context(ctx);
			let form = FormSignal(form_signal);
			submit_signup_with_reset(&form, client, TimeoutFuture::new).await;
		});
	};

	view! {
		ctx,
		div(id="waitlist") {
			form(id="waitlist_form", on:submit=form_submission_handler) {
				label(for="waitlist_email", class="sr_only") {
					"Email address"
				}
				input(
					id="waitlist_email",
					type="email",
					placeholder="Enter your email",
					required=true,
					disabled=*submitting_signal.get(),
					prop:value=(*email_signal.get()).clone(),
					on:input=email_input_handler
				)
				button(type="submit", disabled=*submitting_signal.get()) {
					(if *submitting_signal.get() { "Joining..." } else { "Join Waitlist" })
				}
			}
			(
				if *success_signal.get() {
					view! {
						ctx,
						p(id="waitlist_success") { (SUCCESS_MESSAGE) }
					}
				} else {
					view! { ctx, }
				}
			)
			(
				if let Some(message) = (*error_signal.get()).clone() {
					view! {
						ctx,
						p(id="waitlist_error") { (message) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
