// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::WaitlistConfig;
use gloo_net::http::{Request, Response};
use metisium_shared::sink::{InsertError, WaitlistSink};
use metisium_shared::waitlist::{WaitlistEntry, WAITLIST_TABLE};
use serde::Deserialize;

/// Error body returned by the hosted service's REST interface when it refuses a write
#[derive(Deserialize)]
struct RestErrorBody {
	message: Option<String>,
}

/// Writes waitlist entries to the hosted service over its REST interface.
pub struct WaitlistClient {
	insert_url: String,
	api_key: String,
}

impl WaitlistClient {
	pub fn new(config: WaitlistConfig) -> Self {
		Self {
			insert_url: insert_url(&config.api_url),
			api_key: config.api_key,
		}
	}

	async fn send_insert(&self, entry: &WaitlistEntry) -> Result<Response, gloo_net::Error> {
		Request::post(&self.insert_url)
			.header("apikey", &self.api_key)
			.header("Authorization", &format!("Bearer {}", self.api_key))
			.header("Prefer", "return=minimal")
			.json(entry)?
			.send()
			.await
	}
}

impl WaitlistSink for WaitlistClient {
	async fn insert(&self, entry: &WaitlistEntry) -> Result<(), InsertError> {
		let response = match self.send_insert(entry).await {
			Ok(response) => response,
			Err(error) => return Err(InsertError::new(error.to_string())),
		};
		if response.ok() {
			return Ok(());
		}

		let status = response.status();
		let status_text = response.status_text();
		let body_message = match response.json::<RestErrorBody>().await {
			Ok(body) => body.message,
			Err(error) => {
				log::debug!("Waitlist rejection had no readable error body: {}", error);
				None
			}
		};
		Err(rejection_error(status, &status_text, body_message))
	}
}

fn insert_url(api_url: &str) -> String {
	format!("{}/rest/v1/{}", api_url, WAITLIST_TABLE)
}

/// Picks the most descriptive message available for a refused insert.
fn rejection_error(status: u16, status_text: &str, body_message: Option<String>) -> InsertError {
	match body_message {
		Some(message) if !message.is_empty() => InsertError::new(message),
		_ if !status_text.is_empty() => InsertError::new(status_text),
		_ => InsertError::new(format!("request failed with status {}", status)),
	}
}
