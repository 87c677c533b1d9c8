// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Name of the remote table that receives signups
pub const WAITLIST_TABLE: &str = "waitlist";

/// A single row written to the waitlist table
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitlistEntry {
	pub email: String,
}
