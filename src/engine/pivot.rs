//! Two-hop pivot search: source → pivot → target.

use super::error::{Result, validate_pair};
use super::matrix::CompatibilityMatrix;

/// Outcome of [`best_pivot`].
#[derive(Clone, Debug, PartialEq)]
pub struct BestPivot {
	/// `None` when no language bridges the pair.
	pub pivot: Option<String>,
	/// Mean of both legs; `0.0` when no pivot exists.
	pub avg_score: f64,
}

/// One ranked route through a pivot language.
#[derive(Clone, Debug, PartialEq)]
pub struct PivotCandidate {
	/// Pivot code.
	pub pivot: String,
	/// Source → pivot.
	pub score1: u8,
	/// Pivot → target.
	pub score2: u8,
	/// Mean of both legs.
	pub avg_score: f64,
	/// The weaker leg.
	pub min_score: u8,
	/// `avg_score` minus the direct score.
	pub improvement_over_direct: f64,
}

/// Direct score, `0` when nothing is recorded.
pub fn direct_score(matrix: &CompatibilityMatrix, source: &str, target: &str) -> u8 {
	matrix.score(source, target).unwrap_or(0)
}

/// Pivots with both legs recorded and non-zero, in payload order.
fn candidates<'a>(
	matrix: &'a CompatibilityMatrix,
	source: &'a str,
	target: &'a str,
) -> impl Iterator<Item = (&'a str, u8, u8)> + 'a {
	matrix
		.sources()
		.filter(move |&pivot| pivot != source && pivot != target)
		.filter_map(move |pivot| {
			let first = direct_score(matrix, source, pivot);
			let second = direct_score(matrix, pivot, target);
			(first > 0 && second > 0).then_some((pivot, first, second))
		})
}

/// The pivot maximizing the mean of both legs.
///
/// Equal means resolve to the lexicographically smallest pivot code.
pub fn best_pivot(matrix: &CompatibilityMatrix, source: &str, target: &str) -> Result<BestPivot> {
	validate_pair(source, target)?;
	let mut best: Option<(&str, f64)> = None;
	for (pivot, first, second) in candidates(matrix, source, target) {
		let avg = (first as f64 + second as f64) / 2.0;
		let better = match best {
			None => true,
			Some((code, score)) => avg > score || (avg == score && pivot < code),
		};
		if better {
			best = Some((pivot, avg));
		}
	}
	Ok(match best {
		Some((pivot, avg_score)) => BestPivot {
			pivot: Some(pivot.to_string()),
			avg_score,
		},
		None => BestPivot {
			pivot: None,
			avg_score: 0.0,
		},
	})
}

/// Every valid pivot, strongest bottleneck leg first.
///
/// Ties on the weaker leg fall back to the mean, then to the pivot code.
pub fn rank_pivots(
	matrix: &CompatibilityMatrix,
	source: &str,
	target: &str,
	named_only: bool,
) -> Result<Vec<PivotCandidate>> {
	validate_pair(source, target)?;
	let direct = direct_score(matrix, source, target) as f64;
	let mut ranked: Vec<PivotCandidate> = candidates(matrix, source, target)
		.filter(|&(pivot, _, _)| !named_only || matrix.is_named(pivot))
		.map(|(pivot, score1, score2)| {
			let avg_score = (score1 as f64 + score2 as f64) / 2.0;
			PivotCandidate {
				pivot: pivot.to_string(),
				score1,
				score2,
				avg_score,
				min_score: score1.min(score2),
				improvement_over_direct: avg_score - direct,
			}
		})
		.collect();
	ranked.sort_by(|a, b| {
		b.min_score
			.cmp(&a.min_score)
			.then_with(|| b.avg_score.total_cmp(&a.avg_score))
			.then_with(|| a.pivot.cmp(&b.pivot))
	});
	Ok(ranked)
}

/// Languages from `available` reachable from `target`'s row at or above
/// `threshold`, best first.
///
/// Equal scores keep the order of the target's row.
pub fn fallback_chain(
	matrix: &CompatibilityMatrix,
	target: &str,
	available: &[&str],
	threshold: u8,
) -> Vec<String> {
	let mut chain: Vec<(&str, u8)> = matrix
		.outgoing(target)
		.filter(|&(lang, score)| score >= threshold && available.contains(&lang))
		.collect();
	chain.sort_by(|a, b| b.1.cmp(&a.1));
	chain.into_iter().map(|(lang, _)| lang.to_string()).collect()
}

/// Lowest score [`fallback_chain`] accepts by default.
pub const DEFAULT_FALLBACK_THRESHOLD: u8 = 150;
