//! Panel payloads for a selected (source, target) pair.

use crate::engine::pivot::{PivotCandidate, best_pivot, direct_score, rank_pivots};
use crate::engine::stats::{Quality, ScoreTier};
use crate::engine::{CompatibilityMatrix, Result, metadata};

/// Rounds halves toward positive infinity, like the browser's `Math.round`.
pub fn round_half_up(value: f64) -> i64 {
	(value + 0.5).floor() as i64
}

/// Signed points with an explicit `+` for gains.
pub fn signed_points(value: i64) -> String {
	if value > 0 {
		format!("+{value}")
	} else {
		value.to_string()
	}
}

/// CSS class for an improvement: gains are good, losses are bad.
pub fn improvement_class(value: i64) -> &'static str {
	match value.signum() {
		1 => Quality::High.css_class(),
		-1 => Quality::Low.css_class(),
		_ => "",
	}
}

/// Everything the pair panel shows for a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairAnalysis {
	/// Source code.
	pub source: String,
	/// Target code.
	pub target: String,
	/// Source display name.
	pub source_name: String,
	/// Target display name.
	pub target_name: String,
	/// Family of the source.
	pub source_family: &'static str,
	/// Family of the target.
	pub target_family: &'static str,
	/// `None` when the matrix has no entry for the pair.
	pub score: Option<u8>,
	/// Five-step reading of the score.
	pub tier: ScoreTier,
	/// Colour class of the score.
	pub quality: Quality,
}

impl PairAnalysis {
	/// Text for [`Self::tier`].
	pub fn interpretation(&self) -> &'static str {
		self.tier.interpretation()
	}

	/// `"n/255"`, or `"No data"`.
	pub fn score_text(&self) -> String {
		match self.score {
			Some(score) => format!("{score}/255"),
			None => "No data".to_string(),
		}
	}

	/// True for a diagonal selection.
	pub fn is_same_language(&self) -> bool {
		self.source == self.target
	}
}

/// The analysis shown whenever the selection changes.
///
/// Both sides must be chosen. A missing score reads as 0 for the tier and
/// quality but stays `None` in the payload.
pub fn selection_changed(
	matrix: &CompatibilityMatrix,
	source: &str,
	target: &str,
) -> Option<PairAnalysis> {
	if source.is_empty() || target.is_empty() {
		return None;
	}
	let meta = metadata();
	let score = matrix.score(source, target);
	let effective = score.unwrap_or(0);
	Some(PairAnalysis {
		source: source.to_string(),
		target: target.to_string(),
		source_name: meta.label(source).to_string(),
		target_name: meta.label(target).to_string(),
		source_family: meta.family_of(source),
		target_family: meta.family_of(target),
		score,
		tier: ScoreTier::of(effective),
		quality: Quality::of(effective as f64),
	})
}

/// Direct score next to the best two-hop route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathReport {
	/// Source display name.
	pub source_name: String,
	/// Target display name.
	pub target_name: String,
	/// Direct score, 0 when absent.
	pub direct: u8,
	/// Best pivot code.
	pub pivot: Option<String>,
	/// Best pivot display name.
	pub pivot_name: Option<String>,
	/// Rounded mean of both legs, 0 without a pivot.
	pub pivot_average: i64,
	/// Rounded gain over the direct score, 0 without a pivot.
	pub improvement: i64,
}

impl PathReport {
	/// Colour class of the direct score.
	pub fn direct_quality(&self) -> Quality {
		Quality::of(self.direct as f64)
	}

	/// Colour class of the pivot average.
	pub fn pivot_quality(&self) -> Quality {
		Quality::of(self.pivot_average as f64)
	}

	/// Pivot name or a placeholder.
	pub fn pivot_label(&self) -> &str {
		self.pivot_name.as_deref().unwrap_or("None found")
	}

	/// `Source → Pivot → Target`, or a notice when there is none.
	pub fn path_text(&self) -> String {
		match &self.pivot_name {
			Some(pivot) => format!("{} → {pivot} → {}", self.source_name, self.target_name),
			None => "No suitable pivot found".to_string(),
		}
	}

	/// Signed gain in points.
	pub fn improvement_text(&self) -> String {
		format!("{} points", signed_points(self.improvement))
	}
}

/// The report behind "Find Best Path".
pub fn find_best_path(matrix: &CompatibilityMatrix, source: &str, target: &str) -> Result<PathReport> {
	let best = best_pivot(matrix, source, target)?;
	let meta = metadata();
	let direct = direct_score(matrix, source, target);
	let (pivot_average, improvement) = match best.pivot {
		Some(_) => (
			round_half_up(best.avg_score),
			round_half_up(best.avg_score - direct as f64),
		),
		None => (0, 0),
	};
	Ok(PathReport {
		source_name: meta.label(source).to_string(),
		target_name: meta.label(target).to_string(),
		direct,
		pivot_name: best.pivot.as_deref().map(|p| meta.label(p).to_string()),
		pivot: best.pivot,
		pivot_average,
		improvement,
	})
}

/// Named pivots ranked by their weaker leg.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendations {
	/// Source display name.
	pub source_name: String,
	/// Target display name.
	pub target_name: String,
	/// Direct score, 0 when absent.
	pub direct: u8,
	/// At most `limit` pivots, best first.
	pub candidates: Vec<PivotCandidate>,
}

/// Top `limit` named pivots for the pair.
pub fn recommend(
	matrix: &CompatibilityMatrix,
	source: &str,
	target: &str,
	limit: usize,
) -> Result<Recommendations> {
	let mut candidates = rank_pivots(matrix, source, target, true)?;
	candidates.truncate(limit);
	let meta = metadata();
	Ok(Recommendations {
		source_name: meta.label(source).to_string(),
		target_name: meta.label(target).to_string(),
		direct: direct_score(matrix, source, target),
		candidates,
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::{MatrixError, matrix_from};

	fn romance() -> CompatibilityMatrix {
		matrix_from(json!({
			"es": { "pt": 227, "ca": 220, "it": 190, "xx": 250 },
			"pt": { "es": 227, "ca": 180 },
			"ca": { "pt": 190, "es": 220 },
			"it": { "pt": 200 },
			"xx": { "pt": 250 },
		}))
	}

	#[test]
	fn test_rounding_helpers() {
		assert_eq!(round_half_up(2.5), 3);
		assert_eq!(round_half_up(-2.5), -2);
		assert_eq!(round_half_up(-2.6), -3);
		assert_eq!(signed_points(12), "+12");
		assert_eq!(signed_points(0), "0");
		assert_eq!(signed_points(-4), "-4");
		assert_eq!(improvement_class(3), "score-high");
		assert_eq!(improvement_class(-3), "score-low");
		assert_eq!(improvement_class(0), "");
	}

	#[test]
	fn test_selection_changed() {
		let m = romance();
		let analysis = selection_changed(&m, "es", "pt").unwrap();
		assert_eq!(analysis.source_name, "Spanish");
		assert_eq!(analysis.target_family, "Romance");
		assert_eq!(analysis.score_text(), "227/255");
		assert_eq!(analysis.tier, ScoreTier::High);
		assert_eq!(analysis.quality.css_class(), "score-high");
		assert_eq!(analysis.interpretation(), "High - Strong mutual intelligibility");

		let missing = selection_changed(&m, "pt", "it").unwrap();
		assert_eq!(missing.score, None);
		assert_eq!(missing.score_text(), "No data");
		assert_eq!(missing.tier, ScoreTier::VeryLow);

		assert!(selection_changed(&m, "es", "es").unwrap().is_same_language());
		assert!(selection_changed(&m, "", "pt").is_none());
	}

	#[test]
	fn test_find_best_path() {
		let m = romance();
		let report = find_best_path(&m, "es", "pt").unwrap();
		// xx averages 250 but the pivot search is not limited to named codes
		assert_eq!(report.pivot.as_deref(), Some("xx"));
		assert_eq!(report.pivot_average, 250);
		assert_eq!(report.improvement, 23);
		assert_eq!(report.improvement_text(), "+23 points");
		assert_eq!(report.path_text(), "Spanish → xx → Portuguese");

		let none = find_best_path(&m, "it", "xx").unwrap();
		assert_eq!(none.pivot, None);
		assert_eq!((none.pivot_average, none.improvement), (0, 0));
		assert_eq!(none.pivot_label(), "None found");
		assert_eq!(none.path_text(), "No suitable pivot found");

		assert!(matches!(find_best_path(&m, "es", "es"), Err(MatrixError::SameLanguage)));
	}

	#[test]
	fn test_recommendations_are_named_and_limited() {
		let m = romance();
		let recs = recommend(&m, "es", "pt", 10).unwrap();
		let pivots: Vec<&str> = recs.candidates.iter().map(|c| c.pivot.as_str()).collect();
		// equal weaker legs fall back to the mean
		assert_eq!(pivots, vec!["ca", "it"]);
		assert_eq!(recs.direct, 227);
		assert_eq!(recommend(&m, "es", "pt", 1).unwrap().candidates.len(), 1);
		assert!(matches!(recommend(&m, "", "pt", 10), Err(MatrixError::MissingSelection)));
	}
}
