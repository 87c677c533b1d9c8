// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::waitlist::WaitlistEntry;
use std::error::Error;
use std::fmt;
use std::future::Future;

/// Something that can durably accept waitlist entries.
///
/// The front end hands one of these to the signup flow rather than reaching for a global client, so tests
/// can substitute their own.
pub trait WaitlistSink {
	/// Writes one entry. Resolving to `Ok` means the row was accepted.
	fn insert(&self, entry: &WaitlistEntry) -> impl Future<Output = Result<(), InsertError>>;
}

/// A failed insert, carrying whatever description the remote side gave
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsertError {
	message: String,
}

impl InsertError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for InsertError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl Error for InsertError {}
