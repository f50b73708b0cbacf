//! Dataset acquisition and the load generation guard.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::datasets::DatasetDescriptor;
use crate::engine::{CompatibilityMatrix, MatrixError, Result};

/// Progress of the current dataset load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// A request is in flight.
	Loading {
		/// Key of the requested dataset.
		dataset: String,
	},
	/// The dataset is on screen.
	Ready {
		/// Key of the loaded dataset.
		dataset: String,
	},
	/// The last request failed; the previous matrix is still shown.
	Failed {
		/// Key of the dataset that failed.
		dataset: String,
		/// Error text shown to the user.
		message: String,
	},
}

impl LoadState {
	/// True while a request is in flight.
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}
}

/// Proof that a load was started; only the newest ticket may commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
	generation: u64,
	/// Key of the dataset being loaded.
	pub dataset: String,
}

/// Hands out load tickets and decides which one settles.
///
/// A ticket settles at most once: the fetch result and the timeout race for
/// it, and anything belonging to an older generation is dropped.
#[derive(Debug, Default)]
pub struct LoadTracker {
	generation: u64,
	settled: bool,
}

impl LoadTracker {
	/// Start a new generation for `dataset`, invalidating older tickets.
	pub fn issue(&mut self, dataset: &str) -> LoadTicket {
		self.generation += 1;
		self.settled = false;
		LoadTicket {
			generation: self.generation,
			dataset: dataset.to_string(),
		}
	}

	/// Whether `ticket` belongs to the newest generation.
	pub fn is_current(&self, ticket: &LoadTicket) -> bool {
		ticket.generation == self.generation
	}

	/// Claim the right to publish `ticket`'s outcome.
	pub fn settle(&mut self, ticket: &LoadTicket) -> bool {
		if !self.is_current(ticket) || self.settled {
			return false;
		}
		self.settled = true;
		true
	}
}

fn js_error(context: &str, value: JsValue) -> MatrixError {
	let detail = value
		.as_string()
		.or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
		.unwrap_or_else(|| format!("{value:?}"));
	MatrixError::Fetch(format!("{context}: {detail}"))
}

async fn fetch_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or_else(|| MatrixError::Fetch("no window".to_string()))?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| js_error(url, e))?;
	let response: Response = response.dyn_into().map_err(|e| js_error(url, e))?;
	if !response.ok() {
		return Err(MatrixError::Fetch(format!(
			"{url}: HTTP {} {}",
			response.status(),
			response.status_text()
		)));
	}
	let body = response.text().map_err(|e| js_error(url, e))?;
	let text = JsFuture::from(body).await.map_err(|e| js_error(url, e))?;
	text.as_string()
		.ok_or_else(|| MatrixError::Fetch(format!("{url}: response body is not text")))
}

/// Fetch and parse a dataset's payload.
pub async fn fetch_matrix(
	dataset: &DatasetDescriptor,
	base_path: &str,
) -> Result<CompatibilityMatrix> {
	let url = dataset.locator(base_path);
	log::debug!("Fetching {url}");
	let text = fetch_text(&url).await?;
	CompatibilityMatrix::from_json(&text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_only_latest_ticket_settles() {
		let mut tracker = LoadTracker::default();
		let first = tracker.issue("gemini");
		let second = tracker.issue("manus");
		assert!(!tracker.is_current(&first));
		assert!(!tracker.settle(&first));
		assert!(tracker.settle(&second));
		assert_eq!(second.dataset, "manus");
	}

	#[test]
	fn test_ticket_settles_once() {
		let mut tracker = LoadTracker::default();
		let ticket = tracker.issue("perplexity");
		assert!(tracker.settle(&ticket));
		// the timeout firing after a successful load is ignored
		assert!(!tracker.settle(&ticket));
		let retry = tracker.issue("perplexity");
		assert!(tracker.settle(&retry));
	}

	#[test]
	fn test_load_state() {
		assert_eq!(LoadState::default(), LoadState::Idle);
		assert!(
			LoadState::Loading {
				dataset: "main".into()
			}
			.is_loading()
		);
	}
}
