//! Derived statistics over a [`CompatibilityMatrix`].
//!
//! Everything here is a pure function of the matrix passed in; nothing is
//! cached, so a dataset switch only needs a new matrix.

use std::cmp::Ordering;

use super::families::metadata;
use super::matrix::CompatibilityMatrix;

/// Lowest score counted as high quality.
pub const HIGH_QUALITY: u8 = 200;
/// Lowest score counted as medium quality.
pub const MEDIUM_QUALITY: u8 = 150;

/// `0-9, 10-19, ..., 240-249, 250-255`.
pub const BUCKET_COUNT: usize = 26;
/// Width of every bucket but the last.
pub const BUCKET_WIDTH: u8 = 10;

/// Default gap [`asymmetric_pairs`] must exceed.
pub const DEFAULT_MIN_ASYMMETRY: u8 = 10;

/// Headline numbers for the summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalSummary {
	/// Named languages in the matrix.
	pub total_languages: usize,
	/// Named (source, target) pairs with a score, self pairs excluded.
	pub total_directed_pairs: usize,
	/// Rounded mean over those pairs.
	pub mean_score: u32,
	/// Highest score over those pairs.
	pub max_score: u8,
}

/// Named, distinct (source, target) pairs. Empty matrices give a zero summary.
pub fn global_summary(matrix: &CompatibilityMatrix) -> GlobalSummary {
	let (mut pairs, mut sum, mut max) = (0usize, 0u64, 0u8);
	for source in matrix.named_languages() {
		for (target, score) in matrix.outgoing(source) {
			if target != source && matrix.is_named(target) {
				pairs += 1;
				sum += score as u64;
				max = max.max(score);
			}
		}
	}
	GlobalSummary {
		total_languages: matrix.named_languages().len(),
		total_directed_pairs: pairs,
		mean_score: rounded_mean(sum, pairs),
		max_score: max,
	}
}

fn rounded_mean(sum: u64, count: usize) -> u32 {
	if count == 0 {
		return 0;
	}
	(sum as f64 / count as f64).round() as u32
}

/// Which entries of a language's row feed [`per_language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowScope {
	/// Named targets other than the language itself.
	Named,
	/// The whole row as loaded, used for connection rankings.
	Full,
}

/// Aggregates over one language's outgoing row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedStats {
	/// Scores considered.
	pub connection_count: usize,
	/// Unrounded mean.
	pub avg_score: f64,
	/// Highest score.
	pub max_score: u8,
	/// Lowest score.
	pub min_score: u8,
	/// Scores of at least [`HIGH_QUALITY`].
	pub high_quality_count: usize,
	/// Scores in `[MEDIUM_QUALITY, HIGH_QUALITY)`.
	pub medium_quality_count: usize,
	/// Scores below [`MEDIUM_QUALITY`].
	pub low_quality_count: usize,
}

/// Row statistics for `lang`; a missing or empty row gives all zeros.
pub fn per_language(matrix: &CompatibilityMatrix, lang: &str, scope: RowScope) -> DerivedStats {
	let scores: Vec<u8> = matrix
		.outgoing(lang)
		.filter(|&(target, _)| match scope {
			RowScope::Named => target != lang && matrix.is_named(target),
			RowScope::Full => true,
		})
		.map(|(_, score)| score)
		.collect();
	if scores.is_empty() {
		return DerivedStats::default();
	}
	let sum: u64 = scores.iter().map(|&s| s as u64).sum();
	DerivedStats {
		connection_count: scores.len(),
		avg_score: sum as f64 / scores.len() as f64,
		max_score: scores.iter().copied().max().unwrap_or(0),
		min_score: scores.iter().copied().min().unwrap_or(0),
		high_quality_count: scores.iter().filter(|&&s| s >= HIGH_QUALITY).count(),
		medium_quality_count: scores
			.iter()
			.filter(|&&s| (MEDIUM_QUALITY..HIGH_QUALITY).contains(&s))
			.count(),
		low_quality_count: scores.iter().filter(|&&s| s < MEDIUM_QUALITY).count(),
	}
}

/// Distribution bucket holding `score`.
pub fn bucket_of(score: u8) -> usize {
	((score / BUCKET_WIDTH) as usize).min(BUCKET_COUNT - 1)
}

/// Lower and upper score of a bucket, inclusive.
pub fn bucket_range(bucket: usize) -> (u8, u8) {
	let low = (bucket.min(BUCKET_COUNT - 1) as u8) * BUCKET_WIDTH;
	(low, low.saturating_add(BUCKET_WIDTH - 1))
}

fn named_pair_scores(matrix: &CompatibilityMatrix) -> impl Iterator<Item = u8> + '_ {
	matrix.named_languages().iter().flat_map(move |source| {
		matrix
			.outgoing(source)
			.filter(move |&(target, _)| matrix.is_named(target))
			.map(|(_, score)| score)
	})
}

/// Histogram of every named-pair score, self pairs included.
pub fn score_distribution(matrix: &CompatibilityMatrix) -> [usize; BUCKET_COUNT] {
	let mut buckets = [0; BUCKET_COUNT];
	for score in named_pair_scores(matrix) {
		buckets[bucket_of(score)] += 1;
	}
	buckets
}

/// Summary line under the score histogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionSummary {
	/// Rounded mean.
	pub average: u32,
	/// `sorted[len / 2]`.
	pub median: u8,
	/// First bucket holding the maximum count.
	pub mode_bucket: usize,
}

/// `None` when no named pair has a score.
pub fn distribution_summary(matrix: &CompatibilityMatrix) -> Option<DistributionSummary> {
	let mut scores: Vec<u8> = named_pair_scores(matrix).collect();
	if scores.is_empty() {
		return None;
	}
	scores.sort_unstable();
	let sum: u64 = scores.iter().map(|&s| s as u64).sum();
	let buckets = score_distribution(matrix);
	let max = buckets.iter().copied().max().unwrap_or(0);
	Some(DistributionSummary {
		average: rounded_mean(sum, scores.len()),
		median: scores[scores.len() / 2],
		mode_bucket: buckets.iter().position(|&c| c == max).unwrap_or(0),
	})
}

/// Mean score over ordered (a ∈ A, b ∈ B, a ≠ b) pairs with a non-zero score.
///
/// Unknown families and families without any signal between them give `0.0`.
pub fn family_pair_average(matrix: &CompatibilityMatrix, family_a: &str, family_b: &str) -> f64 {
	let meta = metadata();
	let (Some(a), Some(b)) = (meta.family(family_a), meta.family(family_b)) else {
		return 0.0;
	};
	let (mut sum, mut count) = (0u64, 0usize);
	for &src in a.languages {
		for &dst in b.languages {
			if src == dst {
				continue;
			}
			if let Some(score) = matrix.score(src, dst).filter(|&s| s > 0) {
				sum += score as u64;
				count += 1;
			}
		}
	}
	if count == 0 {
		0.0
	} else {
		sum as f64 / count as f64
	}
}

/// A language's row restricted to the members of one family.
pub fn family_scores(
	matrix: &CompatibilityMatrix,
	lang: &str,
	family: &str,
) -> Vec<(&'static str, u8)> {
	let Some(family) = metadata().family(family) else {
		return Vec::new();
	};
	family
		.languages
		.iter()
		.filter_map(|&member| matrix.score(lang, member).map(|s| (member, s)))
		.collect()
}

/// A pair that translates noticeably better one way.
#[derive(Clone, Debug, PartialEq)]
pub struct AsymmetricPair {
	/// The smaller code.
	pub lang_a: String,
	/// The larger code.
	pub lang_b: String,
	/// `lang_a` → `lang_b`.
	pub score_ab: u8,
	/// `lang_b` → `lang_a`.
	pub score_ba: u8,
	/// Absolute gap between the two directions.
	pub diff: u8,
	/// Mean of both directions.
	pub avg_score: f64,
}

impl AsymmetricPair {
	/// `(from, to, score)` of the better direction.
	pub fn stronger(&self) -> (&str, &str, u8) {
		if self.score_ab > self.score_ba {
			(self.lang_a.as_str(), self.lang_b.as_str(), self.score_ab)
		} else {
			(self.lang_b.as_str(), self.lang_a.as_str(), self.score_ba)
		}
	}
}

/// Named pairs whose directions differ by more than `min_diff`, largest gap first.
///
/// Each unordered pair appears once with `lang_a < lang_b`; both directions
/// must be recorded and non-zero.
pub fn asymmetric_pairs(matrix: &CompatibilityMatrix, min_diff: u8) -> Vec<AsymmetricPair> {
	let langs = matrix.named_languages();
	let mut pairs = Vec::new();
	for a in langs {
		for b in langs {
			if a >= b {
				continue;
			}
			let (Some(ab), Some(ba)) = (matrix.score(a, b), matrix.score(b, a)) else {
				continue;
			};
			if ab == 0 || ba == 0 {
				continue;
			}
			let diff = ab.abs_diff(ba);
			if diff > min_diff {
				pairs.push(AsymmetricPair {
					lang_a: a.clone(),
					lang_b: b.clone(),
					score_ab: ab,
					score_ba: ba,
					diff,
					avg_score: (ab as f64 + ba as f64) / 2.0,
				});
			}
		}
	}
	pairs.sort_by(|x, y| y.diff.cmp(&x.diff));
	pairs
}

/// The three leaderboards of the rankings view.
#[derive(Clone, Debug, Default)]
pub struct Rankings {
	/// Most recorded targets first.
	pub by_connections: Vec<(String, DerivedStats)>,
	/// Highest mean score first.
	pub by_average: Vec<(String, DerivedStats)>,
	/// Most scores of at least [`HIGH_QUALITY`] first.
	pub by_high_quality: Vec<(String, DerivedStats)>,
}

/// Top-`limit` lists over named source languages, using full-row stats.
pub fn rankings(matrix: &CompatibilityMatrix, limit: usize) -> Rankings {
	let stats: Vec<(String, DerivedStats)> = matrix
		.sources()
		.filter(|lang| matrix.is_named(lang))
		.map(|lang| (lang.to_string(), per_language(matrix, lang, RowScope::Full)))
		.collect();

	Rankings {
		by_connections: top_by(&stats, limit, |a, b| b.connection_count.cmp(&a.connection_count)),
		by_average: top_by(&stats, limit, |a, b| b.avg_score.total_cmp(&a.avg_score)),
		by_high_quality: top_by(&stats, limit, |a, b| {
			b.high_quality_count.cmp(&a.high_quality_count)
		}),
	}
}

fn top_by(
	stats: &[(String, DerivedStats)],
	limit: usize,
	cmp: impl Fn(&DerivedStats, &DerivedStats) -> Ordering,
) -> Vec<(String, DerivedStats)> {
	let mut sorted = stats.to_vec();
	sorted.sort_by(|a, b| cmp(&a.1, &b.1));
	sorted.truncate(limit);
	sorted
}

/// Case-insensitive match on display name or code among named languages.
pub fn search_languages(matrix: &CompatibilityMatrix, query: &str) -> Vec<String> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return Vec::new();
	}
	let meta = metadata();
	matrix
		.named_languages()
		.iter()
		.filter(|code| {
			code.to_lowercase().contains(&query)
				|| meta
					.display_name(code)
					.is_some_and(|name| name.to_lowercase().contains(&query))
		})
		.cloned()
		.collect()
}

/// Five-step reading of a single score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
	/// 240 and above.
	VeryHigh,
	/// 200 to 239.
	High,
	/// 150 to 199.
	Medium,
	/// 100 to 149.
	Low,
	/// Below 100.
	VeryLow,
}

impl ScoreTier {
	/// Tier of a single score.
	pub fn of(score: u8) -> Self {
		match score {
			240.. => Self::VeryHigh,
			200..=239 => Self::High,
			150..=199 => Self::Medium,
			100..=149 => Self::Low,
			_ => Self::VeryLow,
		}
	}

	/// Human-readable reading shown in the pair analysis.
	pub fn interpretation(self) -> &'static str {
		match self {
			Self::VeryHigh => "Very High - Near perfect mutual intelligibility",
			Self::High => "High - Strong mutual intelligibility",
			Self::Medium => "Medium - Moderate mutual intelligibility",
			Self::Low => "Low - Limited mutual intelligibility",
			Self::VeryLow => "Very Low - Minimal mutual intelligibility",
		}
	}
}

/// Three-step quality class used for colouring scores in lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quality {
	/// [`HIGH_QUALITY`] and above.
	High,
	/// [`MEDIUM_QUALITY`] up to high.
	Medium,
	/// Below [`MEDIUM_QUALITY`].
	Low,
}

impl Quality {
	/// Class of a score or an average.
	pub fn of(score: f64) -> Self {
		if score >= HIGH_QUALITY as f64 {
			Self::High
		} else if score >= MEDIUM_QUALITY as f64 {
			Self::Medium
		} else {
			Self::Low
		}
	}

	/// Stylesheet class for coloured score text.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::High => "score-high",
			Self::Medium => "score-medium",
			Self::Low => "score-low",
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix::matrix_from;

	#[test]
	fn test_global_summary() {
		let m = matrix_from(json!({
			"es": { "es": 255, "pt": 227, "ca": 200, "xx": 10 },
			"pt": { "es": 190 },
		}));
		let summary = global_summary(&m);
		assert_eq!(summary.total_languages, 3);
		assert_eq!(summary.total_directed_pairs, 3);
		assert_eq!(summary.mean_score, 206); // (227 + 200 + 190) / 3 = 205.67
		assert_eq!(summary.max_score, 227);
	}

	#[test]
	fn test_global_summary_without_pairs() {
		let m = matrix_from(json!({ "es": { "es": 255 }, "pt": {} }));
		let summary = global_summary(&m);
		assert_eq!(summary.total_languages, 2);
		assert_eq!(summary.total_directed_pairs, 0);
		assert_eq!(summary.mean_score, 0);
		assert_eq!(global_summary(&CompatibilityMatrix::default()), GlobalSummary::default());
	}

	#[test]
	fn test_per_language_scopes() {
		let m = matrix_from(json!({
			"es": { "es": 255, "pt": 227, "ca": 160, "fr": 90, "xx": 10 },
		}));
		let named = per_language(&m, "es", RowScope::Named);
		assert_eq!(named.connection_count, 3);
		assert_eq!(named.max_score, 227);
		assert_eq!(named.min_score, 90);
		assert_eq!(named.high_quality_count, 1);
		assert_eq!(named.medium_quality_count, 1);
		assert_eq!(named.low_quality_count, 1);
		assert!((named.avg_score - 159.0).abs() < 1e-9);

		let full = per_language(&m, "es", RowScope::Full);
		assert_eq!(full.connection_count, 5);
		assert_eq!(full.max_score, 255);
		assert_eq!(full.min_score, 10);

		assert_eq!(per_language(&m, "pt", RowScope::Full), DerivedStats::default());
	}

	#[test]
	fn test_distribution_edges() {
		let m = matrix_from(json!({
			"es": { "es": 0, "pt": 255, "ca": 250, "fr": 9, "it": 10, "xx": 100 },
			"xx": { "es": 100 },
		}));
		let buckets = score_distribution(&m);
		assert_eq!(buckets[0], 2);
		assert_eq!(buckets[1], 1);
		assert_eq!(buckets[25], 2);
		// unnamed source and target are both skipped
		assert_eq!(buckets.iter().sum::<usize>(), 5);
		assert_eq!(bucket_range(25), (250, 255));
		assert_eq!(bucket_range(3), (30, 39));
	}

	#[test]
	fn test_distribution_summary() {
		let m = matrix_from(json!({
			"es": { "pt": 200, "ca": 205, "fr": 100 },
			"pt": { "es": 150 },
		}));
		let summary = distribution_summary(&m).unwrap();
		assert_eq!(summary.average, 164);
		assert_eq!(summary.median, 200);
		assert_eq!(summary.mode_bucket, 20);
		assert_eq!(distribution_summary(&CompatibilityMatrix::default()), None);
	}

	#[test]
	fn test_family_pair_average() {
		let m = matrix_from(json!({
			"es": { "cs": 100, "pl": 50 },
			"pt": { "cs": 0 },
			"cs": { "es": 200 },
		}));
		// pt→cs records 0 and stays out of the mean
		assert!((family_pair_average(&m, "Romance", "Slavic") - 75.0).abs() < 1e-9);
		assert!((family_pair_average(&m, "Slavic", "Romance") - 200.0).abs() < 1e-9);
		assert_eq!(family_pair_average(&m, "Uralic", "Romance"), 0.0);
		assert_eq!(family_pair_average(&m, "Nope", "Romance"), 0.0);
	}

	#[test]
	fn test_family_scores() {
		let m = matrix_from(json!({ "es": { "pt": 227, "cs": 90, "ca": 200 } }));
		assert_eq!(family_scores(&m, "es", "Romance"), vec![("pt", 227), ("ca", 200)]);
		assert!(family_scores(&m, "es", "Nope").is_empty());
	}

	#[test]
	fn test_asymmetric_pairs() {
		let m = matrix_from(json!({
			"es": { "pt": 227, "ca": 200, "fr": 120, "it": 0 },
			"pt": { "es": 180 },
			"ca": { "es": 195 },
			"fr": { "es": 190 },
			"it": { "es": 200 },
			"de": { "nl": 150 },
		}));
		let pairs = asymmetric_pairs(&m, DEFAULT_MIN_ASYMMETRY);
		let keys: Vec<(&str, &str)> = pairs
			.iter()
			.map(|p| (p.lang_a.as_str(), p.lang_b.as_str()))
			.collect();
		assert_eq!(keys, vec![("es", "fr"), ("es", "pt")]);
		assert_eq!(pairs[0].diff, 70);
		assert_eq!(pairs[0].stronger(), ("fr", "es", 190));
		assert_eq!(pairs[1].stronger(), ("es", "pt", 227));
		assert!((pairs[1].avg_score - 203.5).abs() < 1e-9);
	}

	#[test]
	fn test_asymmetric_pairs_never_repeat() {
		let m = matrix_from(json!({
			"es": { "pt": 250, "fr": 100 },
			"pt": { "es": 100, "fr": 200 },
			"fr": { "es": 250, "pt": 20 },
		}));
		let pairs = asymmetric_pairs(&m, 0);
		for (i, p) in pairs.iter().enumerate() {
			assert!(p.lang_a < p.lang_b);
			for q in &pairs[i + 1..] {
				assert!(!(p.lang_a == q.lang_a && p.lang_b == q.lang_b));
			}
		}
		assert_eq!(pairs.len(), 3);
	}

	#[test]
	fn test_rankings() {
		let m = matrix_from(json!({
			"es": { "pt": 227, "ca": 210 },
			"pt": { "es": 150, "ca": 120, "fr": 100 },
			"fr": { "es": 240 },
			"xx": { "es": 255, "pt": 255, "fr": 255, "ca": 255 },
		}));
		let r = rankings(&m, 2);
		let codes = |list: &[(String, DerivedStats)]| -> Vec<String> {
			list.iter().map(|(c, _)| c.clone()).collect()
		};
		assert_eq!(codes(&r.by_connections), vec!["pt", "es"]);
		assert_eq!(codes(&r.by_average), vec!["fr", "es"]);
		assert_eq!(codes(&r.by_high_quality), vec!["es", "fr"]);
	}

	#[test]
	fn test_search_languages() {
		let m = matrix_from(json!({ "es": { "pt": 1, "ca": 1, "xx": 1 } }));
		assert_eq!(search_languages(&m, "PORT"), vec!["pt"]);
		assert_eq!(search_languages(&m, "ca"), vec!["ca"]);
		assert_eq!(search_languages(&m, "an"), vec!["es", "ca"]);
		assert!(search_languages(&m, "  ").is_empty());
		assert!(search_languages(&m, "xx").is_empty());
	}

	#[test]
	fn test_score_tiers() {
		assert_eq!(ScoreTier::of(255), ScoreTier::VeryHigh);
		assert_eq!(ScoreTier::of(239), ScoreTier::High);
		assert_eq!(ScoreTier::of(150), ScoreTier::Medium);
		assert_eq!(ScoreTier::of(100), ScoreTier::Low);
		assert_eq!(ScoreTier::of(0), ScoreTier::VeryLow);
		assert_eq!(Quality::of(199.9), Quality::Medium);
		assert_eq!(Quality::of(200.0).css_class(), "score-high");
	}
}
