//! Viewer settings and their `<meta>` tag override.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

use crate::datasets::DEFAULT_DATASET;
use crate::engine::Result;
use crate::engine::stats::DEFAULT_MIN_ASYMMETRY;
use crate::layout::circular::NETWORK_NODE_COUNT;
use crate::layout::heat::DEFAULT_MAJOR_COUNT;

/// Name of the `<meta>` tag whose `content` overrides the defaults.
pub const CONFIG_META_NAME: &str = "viewer-config";

/// Viewer settings. Every field has a default, so partial overrides work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Dataset shown on startup.
	pub default_dataset: String,

	/// Prefix joined with each dataset's file name.
	pub dataset_base_path: String,

	/// Milliseconds before a pending load is reported as failed.
	pub fetch_timeout_ms: u64,

	/// Languages kept by the "major" heat-map filter.
	pub major_language_count: usize,

	/// Languages placed on the network circle.
	pub network_node_count: usize,

	/// Pairs whose directions differ by no more than this are symmetric.
	pub asymmetry_threshold: u8,

	/// Entries per rankings list.
	pub ranking_limit: usize,

	/// Asymmetric pairs listed in the bidirectional view.
	pub bidirectional_limit: usize,

	/// Pivot recommendations listed per pair.
	pub recommendation_limit: usize,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			default_dataset: DEFAULT_DATASET.to_string(),
			dataset_base_path: "./datasets".to_string(),
			fetch_timeout_ms: 15_000,
			major_language_count: DEFAULT_MAJOR_COUNT,
			network_node_count: NETWORK_NODE_COUNT,
			asymmetry_threshold: DEFAULT_MIN_ASYMMETRY,
			ranking_limit: 20,
			bidirectional_limit: 30,
			recommendation_limit: 10,
		}
	}
}

impl ViewerConfig {
	/// Parse a (possibly partial) JSON override.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Defaults, overridden by the page's config meta tag when it parses.
	pub fn from_document() -> Self {
		let Some(content) = meta_content(CONFIG_META_NAME) else {
			return Self::default();
		};
		match Self::from_json(&content) {
			Ok(config) => {
				log::debug!("Loaded viewer config from <meta name=\"{CONFIG_META_NAME}\">");
				config
			}
			Err(err) => {
				log::warn!("Ignoring malformed viewer config: {err}");
				Self::default()
			}
		}
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document
		.query_selector(&format!("meta[name=\"{name}\"]"))
		.ok()??;
	element
		.dyn_into::<web_sys::HtmlMetaElement>()
		.ok()
		.map(|meta| meta.content())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_override_keeps_defaults() {
		let config = ViewerConfig::from_json(r#"{"default_dataset": "gemini", "fetch_timeout_ms": 500}"#)
			.unwrap();
		assert_eq!(config.default_dataset, "gemini");
		assert_eq!(config.fetch_timeout_ms, 500);
		assert_eq!(config.major_language_count, 40);
		assert_eq!(config.network_node_count, 20);
		assert_eq!(config.bidirectional_limit, 30);
	}

	#[test]
	fn test_empty_object_is_default() {
		assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
	}

	#[test]
	fn test_malformed_override_is_an_error() {
		assert!(ViewerConfig::from_json("{\"fetch_timeout_ms\": -1}").is_err());
		assert!(ViewerConfig::from_json("not json").is_err());
	}
}
