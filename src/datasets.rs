//! The registry of selectable datasets.

use crate::engine::{MatrixError, Result};

/// External documentation for a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetReference {
	/// Document title.
	pub title: &'static str,
	/// Link to the full documentation.
	pub url: &'static str,
	/// Short abstract shown in the reference panel.
	pub summary: &'static str,
}

/// A dataset the viewer can load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetDescriptor {
	/// Identifier used in the select box and the URL.
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Payload file name under the base path.
	pub file: &'static str,
	/// One-line description, shown as a tooltip.
	pub description: &'static str,
	/// Background documentation, when published.
	pub reference: Option<DatasetReference>,
}

impl DatasetDescriptor {
	/// Location of the payload under `base_path`.
	pub fn locator(&self, base_path: &str) -> String {
		format!("{}/{}", base_path.trim_end_matches('/'), self.file)
	}
}

/// Key of the dataset loaded when nothing else is asked for.
pub const DEFAULT_DATASET: &str = "perplexity";

/// Every selectable dataset, in menu order.
pub static DATASETS: [DatasetDescriptor; 4] = [
	DatasetDescriptor {
		key: "main",
		name: "Extended Dataset",
		file: "language-pairs-translation-proximity.json",
		description: "Extended translation proximity scores",
		reference: None,
	},
	DatasetDescriptor {
		key: "gemini",
		name: "Gemini v1 Dataset",
		file: "language-pairs-translation-proximity-gemini-v1.json",
		description: "Global Linguistic Compatibility Framework for Neural Machine Translation",
		reference: Some(DatasetReference {
			title: "Global Linguistic Compatibility Framework for Neural Machine Translation",
			url: "gemini-dataset-documentation.html",
			summary: "Establishes a Translation Compatibility Score (TCS) for cross-lingual \
				transfer efficiency, combining lexical similarity, Levenshtein distance between \
				cognates and mutual intelligibility. Spanish-Portuguese scores 227/255 with \
				Catalan as the best bridge; Czech-Slovak is near-perfect at 250/255.",
		}),
	},
	DatasetDescriptor {
		key: "manus",
		name: "Manus v1 Dataset",
		file: "language-pairs-translation-proximity-manus-v1.json",
		description: "Manual curation and refinement of language compatibility scores",
		reference: Some(DatasetReference {
			title: "Manus v1 Language Compatibility Dataset",
			url: "manus-dataset-documentation.html",
			summary: "Manually curated language compatibility scores based on expert linguistic \
				analysis. Covers 57 languages with 3,192 directional pairs, focusing on practical \
				translation quality assessment.",
		}),
	},
	DatasetDescriptor {
		key: "perplexity",
		name: "Perplexity v1 Dataset",
		file: "language-pairs-translation-proximity-perplexity-v1.json",
		description: "Perplexity AI-powered Language Compatibility Matrix",
		reference: Some(DatasetReference {
			title: "Perplexity AI Language Compatibility Analysis",
			url: "perplexity-dataset-documentation.html",
			summary: "AI-generated language compatibility scores based on linguistic analysis and \
				machine translation performance. Highlights include Czech-Slovak (250/255), \
				Norwegian-Danish (235/255) and Spanish-Portuguese (220/255).",
		}),
	},
];

/// Descriptor for `key`.
pub fn lookup(key: &str) -> Result<&'static DatasetDescriptor> {
	DATASETS
		.iter()
		.find(|d| d.key == key)
		.ok_or_else(|| MatrixError::UnknownDataset(key.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup() {
		assert_eq!(lookup(DEFAULT_DATASET).unwrap().name, "Perplexity v1 Dataset");
		assert!(lookup("main").unwrap().reference.is_none());
		assert!(matches!(lookup("nope"), Err(MatrixError::UnknownDataset(k)) if k == "nope"));
	}

	#[test]
	fn test_locator_joins_base_path() {
		let gemini = lookup("gemini").unwrap();
		assert_eq!(
			gemini.locator("./datasets/"),
			"./datasets/language-pairs-translation-proximity-gemini-v1.json"
		);
		assert_eq!(gemini.locator("data"), "data/language-pairs-translation-proximity-gemini-v1.json");
	}
}
