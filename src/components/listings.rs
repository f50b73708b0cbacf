//! The two views rendered as markup instead of on the canvas.

use leptos::prelude::*;

use crate::analysis::round_half_up;
use crate::engine::metadata;
use crate::engine::stats::{AsymmetricPair, DerivedStats, asymmetric_pairs, rankings};
use crate::session::Session;

pub const NO_ASYMMETRY: &str = "No asymmetric language pairs found in this dataset.";

/// Border class for a pair, by how lopsided it is.
pub fn asymmetry_severity(diff: u8) -> &'static str {
	match diff {
		51.. => "severe",
		31..=50 => "moderate",
		_ => "mild",
	}
}

fn ranking_list(
	title: &'static str,
	class: &'static str,
	unit: &'static str,
	entries: Vec<(String, DerivedStats)>,
	value: fn(&DerivedStats) -> String,
) -> impl IntoView {
	let meta = metadata();
	let rows = entries
		.into_iter()
		.enumerate()
		.map(|(index, (code, stats))| {
			view! {
				<div class="ranking-row">
					<div>
						<span class="ranking-position">{format!("#{}", index + 1)}</span>
						<span class="ranking-name">{meta.label(&code).to_string()}</span>
						<span class="ranking-code">{format!("({code})")}</span>
					</div>
					<div class="ranking-value">
						<div>{value(&stats)}</div>
						<div class="ranking-unit">{unit}</div>
					</div>
				</div>
			}
		})
		.collect_view();
	view! {
		<section class=format!("ranking {class}")>
			<h3>{title}</h3>
			<div class="ranking-list">{rows}</div>
		</section>
	}
}

#[component]
pub fn RankingsView(#[prop(into)] session: Signal<Session>, limit: usize) -> impl IntoView {
	move || {
		let ranked = session.with(|s| rankings(&s.matrix, limit));
		view! {
			<div class="rankings">
				<h2>"Language Rankings"</h2>
				{ranking_list(
					"Most Connected Languages",
					"by-connections",
					"connections",
					ranked.by_connections,
					|s| s.connection_count.to_string(),
				)}
				{ranking_list(
					"Highest Average Compatibility",
					"by-average",
					"avg score",
					ranked.by_average,
					|s| round_half_up(s.avg_score).to_string(),
				)}
				{ranking_list(
					"Most High-Quality Connections (200+)",
					"by-high-quality",
					"high quality",
					ranked.by_high_quality,
					|s| s.high_quality_count.to_string(),
				)}
			</div>
		}
	}
}

fn asymmetry_card(pair: AsymmetricPair) -> impl IntoView {
	let meta = metadata();
	let name_a = meta.label(&pair.lang_a).to_string();
	let name_b = meta.label(&pair.lang_b).to_string();
	let (from, to, strongest) = pair.stronger();
	let stronger = format!(
		"{} → {} (score: {strongest})",
		meta.label(from),
		meta.label(to)
	);
	let winner = |ours: u8, theirs: u8| if ours > theirs { "score stronger" } else { "score" };

	view! {
		<div class=format!("asymmetry {}", asymmetry_severity(pair.diff))>
			<div class="asymmetry-scores">
				<div class="asymmetry-side left">
					<div class="asymmetry-name">{name_a}</div>
					<div class={winner(pair.score_ab, pair.score_ba)}>{pair.score_ab}</div>
				</div>
				<div class="asymmetry-arrow">"↔"</div>
				<div class="asymmetry-side right">
					<div class="asymmetry-name">{name_b}</div>
					<div class={winner(pair.score_ba, pair.score_ab)}>{pair.score_ba}</div>
				</div>
			</div>
			<div class="asymmetry-detail">
				<strong>"Asymmetry: "</strong>
				{format!("{} points | ", pair.diff)}
				<strong>"Stronger direction: "</strong>
				{stronger}
			</div>
		</div>
	}
}

#[component]
pub fn BidirectionalView(
	#[prop(into)] session: Signal<Session>,
	threshold: u8,
	limit: usize,
) -> impl IntoView {
	move || {
		let mut pairs = session.with(|s| asymmetric_pairs(&s.matrix, threshold));
		log::debug!("{} asymmetric pairs above {threshold}", pairs.len());
		pairs.truncate(limit);
		let body = if pairs.is_empty() {
			view! {
				<div class="empty">
					<p>{NO_ASYMMETRY}</p>
					<p>"This dataset may have symmetric scores or limited bidirectional data."</p>
				</div>
			}
			.into_any()
		} else {
			view! {
				<div class="asymmetry-list">
					{pairs.into_iter().map(asymmetry_card).collect_view()}
				</div>
			}
			.into_any()
		};
		view! {
			<div class="bidirectional">
				<h2>"Bidirectional Translation Analysis"</h2>
				<p class="subtitle">
					"Compare translation quality in both directions. Asymmetry indicates one-way compatibility is stronger."
				</p>
				<h3>"Top Asymmetric Language Pairs"</h3>
				{body}
			</div>
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_asymmetry_severity() {
		assert_eq!(asymmetry_severity(11), "mild");
		assert_eq!(asymmetry_severity(30), "mild");
		assert_eq!(asymmetry_severity(31), "moderate");
		assert_eq!(asymmetry_severity(50), "moderate");
		assert_eq!(asymmetry_severity(51), "severe");
	}
}
