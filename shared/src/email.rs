// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Whether a character counts as whitespace the way a browser's `\s` regex class sees it.
fn is_pattern_whitespace(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}

/// Checks that an email address has the rough shape `local@domain.tld`.
///
/// This matches the same strings as `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`, no whitespace, a
/// non-empty local part, and a domain part with a `.` somewhere after its first character and before its
/// last. It's deliberately permissive; plenty of strings accepted here can't actually receive mail.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(is_pattern_whitespace) {
		return false;
	}

	let Some((local, domain)) = email.split_once('@') else { return false; };
	if local.is_empty() || domain.contains('@') {
		return false;
	}

	// The dot may be any one in the domain, so long as something sits on both sides of it.
	domain
		.char_indices()
		.any(|(index, c)| c == '.' && index > 0 && index + c.len_utf8() < domain.len())
}
