// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod email;
pub mod signup;
pub mod sink;
pub mod waitlist;

/// How long the success message stays up after a signup goes through, in milliseconds
pub const SUCCESS_RESET_DELAY_MS: u32 = 5000;
