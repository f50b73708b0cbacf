//! The compatibility matrix itself.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::error::Result;
use super::families::metadata;

/// Scores from one source language, in payload order.
pub type Row = IndexMap<String, u8>;

/// Sparse directed weighted graph of translation compatibility scores.
///
/// Built wholesale from a dataset payload and never mutated afterwards. An
/// absent edge means "no data", which is distinct from a recorded score of 0.
#[derive(Clone, Debug, Default)]
pub struct CompatibilityMatrix {
	rows: IndexMap<String, Row>,
	named: Vec<String>,
	named_set: HashSet<String>,
}

impl CompatibilityMatrix {
	/// Build from parsed rows, precomputing the named-language set.
	pub fn new(rows: IndexMap<String, Row>) -> Self {
		let meta = metadata();
		let mut named = Vec::new();
		let mut named_set = HashSet::new();
		let codes = rows
			.iter()
			.flat_map(|(source, row)| std::iter::once(source).chain(row.keys()));
		for code in codes {
			if meta.is_named(code) && named_set.insert(code.clone()) {
				named.push(code.clone());
			}
		}
		Self {
			rows,
			named,
			named_set,
		}
	}

	/// Parse the dataset payload: `{ source: { target: score } }`.
	///
	/// Scores outside `0..=255` fail to deserialize.
	pub fn from_json(payload: &str) -> Result<Self> {
		let rows: IndexMap<String, Row> = serde_json::from_str(payload)?;
		Ok(Self::new(rows))
	}

	/// Pretty-printed payload, keys in their original order.
	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.rows)?)
	}

	/// True when the payload had no source rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Direct lookup; unknown codes are "no data".
	pub fn score(&self, source: &str, target: &str) -> Option<u8> {
		self.rows.get(source)?.get(target).copied()
	}

	/// The whole outgoing row of `source`.
	pub fn row(&self, source: &str) -> Option<&Row> {
		self.rows.get(source)
	}

	/// `(target, score)` pairs of `source`; empty without a row.
	pub fn outgoing<'a>(&'a self, source: &str) -> impl Iterator<Item = (&'a str, u8)> + use<'a> {
		self.rows
			.get(source)
			.into_iter()
			.flatten()
			.map(|(target, &score)| (target.as_str(), score))
	}

	/// Source codes in payload order.
	pub fn sources(&self) -> impl Iterator<Item = &str> {
		self.rows.keys().map(String::as_str)
	}

	/// Every source or target code with a display name, in first-seen order.
	pub fn named_languages(&self) -> &[String] {
		&self.named
	}

	/// Whether `code` is in [`Self::named_languages`].
	pub fn is_named(&self, code: &str) -> bool {
		self.named_set.contains(code)
	}

	/// Outgoing edges to named targets other than `lang` itself.
	pub fn degree(&self, lang: &str) -> usize {
		self.outgoing(lang)
			.filter(|&(target, _)| target != lang && self.is_named(target))
			.count()
	}

	/// Named languages ranked by degree; ties keep first-seen order.
	pub fn top_by_degree(&self, count: usize) -> Vec<String> {
		let mut ranked: Vec<(&String, usize)> = self
			.named
			.iter()
			.map(|lang| (lang, self.degree(lang)))
			.collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked
			.into_iter()
			.take(count)
			.map(|(lang, _)| lang.clone())
			.collect()
	}
}

#[cfg(test)]
pub(crate) fn matrix_from(value: serde_json::Value) -> CompatibilityMatrix {
	let rows: IndexMap<String, Row> = serde_json::from_value(value).unwrap();
	CompatibilityMatrix::new(rows)
}
