// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::email::is_valid_email;
use crate::sink::{InsertError, WaitlistSink};
use crate::waitlist::WaitlistEntry;
use crate::SUCCESS_RESET_DELAY_MS;
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::future::Future;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUCCESS_MESSAGE: &str = "Thank you! You've been added to the waitlist.";

/// Reasons a signup attempt ended up failed, as shown to the user
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignupError {
	InvalidEmail,
	Remote(String),
}

impl fmt::Display for SignupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidEmail => write!(f, "{}", INVALID_EMAIL_MESSAGE),
			Self::Remote(message) => write!(f, "Error: {}. Please try again.", message),
		}
	}
}

impl Error for SignupError {}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SignupStatus {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed(SignupError),
}

/// Why a submit request didn't produce a remote insert
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitRejected {
	InFlight,
	InvalidEmail,
}

impl fmt::Display for SubmitRejected {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InFlight => write!(f, "a signup is already being submitted"),
			Self::InvalidEmail => write!(f, "the email address is malformed"),
		}
	}
}

impl Error for SubmitRejected {}

/// Permission to clear the success message of one particular submission
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResetTicket {
	generation: u64,
}

/// A validated submission waiting on the remote insert
#[derive(Debug)]
pub struct PendingSubmission {
	entry: WaitlistEntry,
	generation: u64,
}

impl PendingSubmission {
	pub fn entry(&self) -> &WaitlistEntry {
		&self.entry
	}
}

/// State of the waitlist signup form.
///
/// Every submission that passes validation starts a new generation. Completions and success resets carry the
/// generation they belong to and are ignored once the form has moved on.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupForm {
	email: String,
	status: SignupStatus,
	generation: u64,
}

impl SignupForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn set_email(&mut self, email: impl Into<String>) {
		self.email = email.into();
	}

	pub fn status(&self) -> &SignupStatus {
		&self.status
	}

	/// While this is true, the form's controls are disabled and further submits are rejected.
	pub fn is_submitting(&self) -> bool {
		self.status == SignupStatus::Submitting
	}

	pub fn show_success(&self) -> bool {
		self.status == SignupStatus::Succeeded
	}

	/// The error text to display, if the last attempt failed
	pub fn error_message(&self) -> Option<String> {
		match &self.status {
			SignupStatus::Failed(error) => Some(error.to_string()),
			_ => None,
		}
	}

	/// Starts a submission of the current email.
	///
	/// # Errors
	///
	/// Rejects the submission if one is already pending (leaving the state alone) or if the email is malformed
	/// (moving the form to the failed state with the validation message).
	pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
		if self.is_submitting() {
			return Err(SubmitRejected::InFlight);
		}
		if !is_valid_email(&self.email) {
			self.status = SignupStatus::Failed(SignupError::InvalidEmail);
			return Err(SubmitRejected::InvalidEmail);
		}

		self.generation += 1;
		self.status = SignupStatus::Submitting;
		Ok(PendingSubmission {
			entry: WaitlistEntry {
				email: self.email.clone(),
			},
			generation: self.generation,
		})
	}

	/// Applies the result of the remote insert. On success, returns the ticket for clearing the success message
	/// later.
	pub fn complete_submit(
		&mut self,
		pending: PendingSubmission,
		result: Result<(), InsertError>,
	) -> Option<ResetTicket> {
		if pending.generation != self.generation || !self.is_submitting() {
			log::debug!("Dropping result of stale signup submission {}", pending.generation);
			return None;
		}

		match result {
			Ok(()) => {
				self.status = SignupStatus::Succeeded;
				self.email.clear();
				Some(ResetTicket {
					generation: self.generation,
				})
			}
			Err(error) => {
				log::warn!("Waitlist insert failed: {}", error);
				self.status = SignupStatus::Failed(SignupError::Remote(error.message().to_string()));
				None
			}
		}
	}

	/// Clears the success message if it still belongs to the ticket's submission. Returns whether anything changed.
	pub fn expire_success(&mut self, ticket: ResetTicket) -> bool {
		if ticket.generation != self.generation || !self.show_success() {
			return false;
		}
		self.status = SignupStatus::Idle;
		true
	}
}

/// Shared access to a form that lives somewhere with interior mutability (a `RefCell`, a reactive signal, ...)
pub trait FormHandle {
	fn update<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> R;
}

impl FormHandle for RefCell<SignupForm> {
	fn update<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> R {
		f(&mut self.borrow_mut())
	}
}

/// Submits the form's email through the sink, returning the success ticket if the insert went through.
///
/// The form is never borrowed across the insert, so it stays readable (and renderable) while the request is out.
pub async fn submit_signup<F, S>(form: &F, sink: &S) -> Option<ResetTicket>
where
	F: FormHandle + ?Sized,
	S: WaitlistSink,
{
	let pending = match form.update(SignupForm::begin_submit) {
		Ok(pending) => pending,
		Err(rejection) => {
			log::debug!("Signup not submitted: {}", rejection);
			return None;
		}
	};

	log::debug!("Submitting waitlist signup {}", pending.generation);
	let result = sink.insert(pending.entry()).await;
	form.update(|form| form.complete_submit(pending, result))
}

/// Runs a full signup: the submission, then the delayed reset of the success message.
///
/// `delay` is handed [`SUCCESS_RESET_DELAY_MS`] and should resolve once that many milliseconds have passed.
/// Dropping the returned future cancels both the request and the pending reset.
pub async fn submit_signup_with_reset<F, S, D, Fut>(form: &F, sink: &S, delay: D)
where
	F: FormHandle + ?Sized,
	S: WaitlistSink,
	D: FnOnce(u32) -> Fut,
	Fut: Future<Output = ()>,
{
	let Some(ticket) = submit_signup(form, sink).await else { return; };
	delay(SUCCESS_RESET_DELAY_MS).await;
	if form.update(|form| form.expire_success(ticket)) {
		log::debug!("Cleared waitlist success message");
	}
}
