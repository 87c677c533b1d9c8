// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::{pin_mut, poll};
use metisium_shared::signup::{
	submit_signup, submit_signup_with_reset, SignupForm, SignupStatus, INVALID_EMAIL_MESSAGE,
};
use metisium_shared::sink::{InsertError, WaitlistSink};
use metisium_shared::waitlist::WaitlistEntry;
use metisium_shared::SUCCESS_RESET_DELAY_MS;
use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Answers every insert immediately with the same outcome
struct RecordingSink {
	inserts: RefCell<Vec<WaitlistEntry>>,
	outcome: Result<(), InsertError>,
}

impl RecordingSink {
	fn accepting() -> Self {
		Self {
			inserts: RefCell::new(Vec::new()),
			outcome: Ok(()),
		}
	}

	fn failing(message: &str) -> Self {
		Self {
			inserts: RefCell::new(Vec::new()),
			outcome: Err(InsertError::new(message)),
		}
	}
}

impl WaitlistSink for RecordingSink {
	async fn insert(&self, entry: &WaitlistEntry) -> Result<(), InsertError> {
		self.inserts.borrow_mut().push(entry.clone());
		self.outcome.clone()
	}
}

/// Holds each insert open until the test releases it
struct GatedSink {
	inserts: RefCell<Vec<WaitlistEntry>>,
	gates: RefCell<VecDeque<oneshot::Receiver<Result<(), InsertError>>>>,
}

impl GatedSink {
	fn new() -> (Self, oneshot::Sender<Result<(), InsertError>>) {
		let (sender, receiver) = oneshot::channel();
		let sink = Self {
			inserts: RefCell::new(Vec::new()),
			gates: RefCell::new(VecDeque::from([receiver])),
		};
		(sink, sender)
	}
}

impl WaitlistSink for GatedSink {
	async fn insert(&self, entry: &WaitlistEntry) -> Result<(), InsertError> {
		self.inserts.borrow_mut().push(entry.clone());
		let gate = self.gates.borrow_mut().pop_front();
		match gate {
			Some(gate) => gate.await.unwrap_or_else(|_| Err(InsertError::new("gate dropped"))),
			None => Err(InsertError::new("no gate left")),
		}
	}
}

fn form_with(email: &str) -> RefCell<SignupForm> {
	let mut form = SignupForm::new();
	form.set_email(email);
	RefCell::new(form)
}

#[test]
fn invalid_email_shows_message_and_skips_network() {
	let form = form_with("not-an-email");
	let sink = RecordingSink::accepting();

	let ticket = block_on(submit_signup(&form, &sink));

	assert_eq!(ticket, None);
	assert!(sink.inserts.borrow().is_empty());
	assert_eq!(form.borrow().error_message().as_deref(), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn successful_signup_clears_input_then_resets_after_delay() {
	let form = form_with("user@example.com");
	let sink = RecordingSink::accepting();
	let (timer_sender, timer_receiver) = oneshot::channel::<()>();
	let requested_delay = Cell::new(None);

	block_on(async {
		let flow = submit_signup_with_reset(&form, &sink, |millis| {
			requested_delay.set(Some(millis));
			async move {
				let _ = timer_receiver.await;
			}
		});
		pin_mut!(flow);

		assert!(poll!(flow.as_mut()).is_pending());
		assert_eq!(
			*sink.inserts.borrow(),
			vec![WaitlistEntry {
				email: String::from("user@example.com")
			}]
		);
		assert!(form.borrow().show_success());
		assert_eq!(form.borrow().email(), "");
		assert_eq!(requested_delay.get(), Some(SUCCESS_RESET_DELAY_MS));
		assert_eq!(requested_delay.get(), Some(5000));

		timer_sender.send(()).unwrap();
		flow.await;
	});

	assert_eq!(*form.borrow().status(), SignupStatus::Idle);
	assert_eq!(form.borrow().email(), "");
}

#[test]
fn remote_error_is_wrapped_and_email_kept() {
	let form = form_with("user@example.com");
	let sink = RecordingSink::failing("duplicate key");
	let delay_requested = Cell::new(false);

	block_on(submit_signup_with_reset(&form, &sink, |_| {
		delay_requested.set(true);
		async {}
	}));

	assert_eq!(sink.inserts.borrow().len(), 1);
	assert!(!delay_requested.get());
	let form = form.borrow();
	assert_eq!(
		form.error_message().as_deref(),
		Some("Error: duplicate key. Please try again.")
	);
	assert_eq!(form.email(), "user@example.com");
}

#[test]
fn submitting_twice_while_pending_issues_one_insert() {
	let form = form_with("user@example.com");
	let (sink, gate) = GatedSink::new();

	block_on(async {
		let first = submit_signup(&form, &sink);
		pin_mut!(first);
		assert!(poll!(first.as_mut()).is_pending());
		assert!(form.borrow().is_submitting());

		assert_eq!(submit_signup(&form, &sink).await, None);
		assert_eq!(sink.inserts.borrow().len(), 1);
		assert!(form.borrow().is_submitting());

		gate.send(Ok(())).unwrap();
		assert!(first.await.is_some());
	});

	assert_eq!(sink.inserts.borrow().len(), 1);
	assert!(form.borrow().show_success());
}

#[test]
fn dropping_the_flow_abandons_the_reset() {
	let form = form_with("user@example.com");
	let sink = RecordingSink::accepting();

	block_on(async {
		let flow = submit_signup_with_reset(&form, &sink, |_| futures::future::pending::<()>());
		pin_mut!(flow);
		assert!(poll!(flow.as_mut()).is_pending());
	});

	assert!(form.borrow().show_success());
	assert!(!form.borrow().is_submitting());
}

#[test]
fn reset_does_not_clobber_a_newer_failure() {
	let form = form_with("first@example.com");
	let sink = RecordingSink::accepting();
	let (timer_sender, timer_receiver) = oneshot::channel::<()>();

	block_on(async {
		let flow = submit_signup_with_reset(&form, &sink, |_| async move {
			let _ = timer_receiver.await;
		});
		pin_mut!(flow);
		assert!(poll!(flow.as_mut()).is_pending());

		form.borrow_mut().set_email("second@example.com");
		let failing = RecordingSink::failing("network down");
		assert_eq!(submit_signup(&form, &failing).await, None);

		timer_sender.send(()).unwrap();
		flow.await;
	});

	let form = form.borrow();
	assert_eq!(
		form.error_message().as_deref(),
		Some("Error: network down. Please try again.")
	);
	assert_eq!(form.email(), "second@example.com");
}

proptest! {
	#[test]
	fn valid_emails_are_inserted_exactly_once(email in "[a-z0-9._%+-]{1,16}@[a-z0-9-]{1,16}\\.[a-z]{2,8}") {
		let form = form_with(&email);
		let sink = RecordingSink::accepting();
		let ticket = block_on(submit_signup(&form, &sink));
		prop_assert!(ticket.is_some());
		prop_assert_eq!(sink.inserts.borrow().clone(), vec![WaitlistEntry { email }]);
	}

	#[test]
	fn malformed_emails_never_reach_the_sink(email in "[a-z0-9 ]{0,16}(@[a-z0-9 ]{0,16})?") {
		let form = form_with(&email);
		let sink = RecordingSink::accepting();
		let ticket = block_on(submit_signup(&form, &sink));
		prop_assert!(ticket.is_none());
		prop_assert!(sink.inserts.borrow().is_empty());
		prop_assert_eq!(form.borrow().error_message(), Some(String::from(INVALID_EMAIL_MESSAGE)));
	}
}
