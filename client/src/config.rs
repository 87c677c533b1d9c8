// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use web_sys::Document;

/// Name of the meta tag holding the base URL of the hosted data service
pub const API_URL_META: &str = "waitlist-api-url";
/// Name of the meta tag holding the service's public (anonymous) API key
pub const API_KEY_META: &str = "waitlist-api-key";

#[derive(Debug)]
pub enum ConfigError {
	NoDocument,
	MissingMeta(&'static str),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoDocument => write!(f, "the browser document is unavailable"),
			Self::MissingMeta(name) => write!(f, "the page has no usable \"{}\" meta tag", name),
		}
	}
}

impl Error for ConfigError {}

/// Connection details for the waitlist table's hosted service
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WaitlistConfig {
	pub api_url: String,
	pub api_key: String,
}

impl WaitlistConfig {
	pub fn new(api_url: &str, api_key: impl Into<String>) -> Self {
		Self {
			api_url: api_url.trim_end_matches('/').to_string(),
			api_key: api_key.into(),
		}
	}

	/// Reads the configuration from the meta tags of the page hosting the application.
	///
	/// # Errors
	///
	/// Fails if the document can't be reached or either meta tag is missing or empty.
	pub fn from_document() -> Result<Self, ConfigError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or(ConfigError::NoDocument)?;
		let api_url = meta_content(&document, API_URL_META)?;
		let api_key = meta_content(&document, API_KEY_META)?;
		Ok(Self::new(&api_url, api_key))
	}
}

fn meta_content(document: &Document, name: &'static str) -> Result<String, ConfigError> {
	let selector = format!("meta[name=\"{}\"]", name);
	let Ok(Some(element)) = document.query_selector(&selector) else { return Err(ConfigError::MissingMeta(name)); };
	element
		.get_attribute("content")
		.map(|content| content.trim().to_string())
		.filter(|content| !content.is_empty())
		.ok_or(ConfigError::MissingMeta(name))
}
