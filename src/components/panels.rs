//! Read-only panels around the canvas: summary cards, the pair analysis,
//! the dataset reference and the heat-map language key.

use leptos::prelude::*;

use crate::analysis::{
	PairAnalysis, PathReport, Recommendations, improvement_class, round_half_up, signed_points,
};
use crate::datasets::lookup;
use crate::engine::metadata;
use crate::engine::stats::{Quality, global_summary};
use crate::layout::HeatFilter;
use crate::layout::heat::select_languages;
use crate::session::{Session, View};

pub const SELECTION_PROMPT: &str =
	"Select a source and target language to see detailed compatibility information.";

/// What the pair panel is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PairPanel {
	/// The analysis of the current selection, or a prompt when incomplete.
	#[default]
	Selection,
	Path(PathReport),
	Recommendations(Recommendations),
	/// A rejected action, shown in place of an analysis.
	Notice(String),
}

/// `12345` → `12,345`
pub fn group_thousands(n: usize) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Languages grouped under their family, families in name order.
pub fn group_by_family(languages: &[String]) -> Vec<(&'static str, Vec<String>)> {
	let meta = metadata();
	let mut groups: Vec<(&'static str, Vec<String>)> = Vec::new();
	for lang in languages {
		let family = meta.family_of(lang);
		match groups.iter_mut().find(|(name, _)| *name == family) {
			Some((_, members)) => members.push(lang.clone()),
			None => groups.push((family, vec![lang.clone()])),
		}
	}
	groups.sort_by_key(|(name, _)| *name);
	for (_, members) in &mut groups {
		members.sort_by(|a, b| meta.label(a).cmp(meta.label(b)));
	}
	groups
}

fn analysis_item(label: &'static str, value: String, class: &'static str) -> impl IntoView {
	view! {
		<div class="analysis-item">
			<div class="analysis-label">{label}</div>
			<div class=format!("analysis-value {class}")>{value}</div>
		</div>
	}
}

#[component]
pub fn SummaryCards(#[prop(into)] session: Signal<Session>) -> impl IntoView {
	let summary = Memo::new(move |_| session.with(|s| global_summary(&s.matrix)));

	view! {
		<div class="stats-grid">
			{stat_card("Languages", move || summary.get().total_languages.to_string())}
			{stat_card("Language Pairs", move || group_thousands(summary.get().total_directed_pairs))}
			{stat_card("Average Score", move || summary.get().mean_score.to_string())}
			{stat_card("Highest Score", move || summary.get().max_score.to_string())}
		</div>
	}
}

fn stat_card(
	label: &'static str,
	value: impl Fn() -> String + Send + Sync + 'static,
) -> impl IntoView {
	view! {
		<div class="stat-card">
			<div class="stat-value">{value}</div>
			<div class="stat-label">{label}</div>
		</div>
	}
}

#[component]
fn PairAnalysisView(analysis: PairAnalysis) -> impl IntoView {
	let class = analysis.quality.css_class();
	view! {
		<div class="pair-analysis">
			{analysis_item(
				"Language Pair",
				format!("{} → {}", analysis.source_name, analysis.target_name),
				"",
			)}
			{analysis_item("Compatibility Score", analysis.score_text(), class)}
			{analysis_item("Source Family", analysis.source_family.to_string(), "")}
			{analysis_item("Target Family", analysis.target_family.to_string(), "")}
			{analysis_item("Interpretation", analysis.interpretation().to_string(), class)}
			{analysis.is_same_language().then(|| {
				analysis_item("Note", "Source and target are the same language".to_string(), "")
			})}
		</div>
	}
}

#[component]
fn PathView(report: PathReport) -> impl IntoView {
	view! {
		<div class="pair-analysis">
			{analysis_item(
				"Direct Translation",
				format!("{} → {}", report.source_name, report.target_name),
				"",
			)}
			{analysis_item(
				"Direct Score",
				format!("{}/255", report.direct),
				report.direct_quality().css_class(),
			)}
			{analysis_item("Best Pivot Language", report.pivot_label().to_string(), "")}
			{analysis_item("Pivot Path", report.path_text(), "")}
			{analysis_item(
				"Pivot Average Score",
				format!("{}/255", report.pivot_average),
				report.pivot_quality().css_class(),
			)}
			{analysis_item(
				"Improvement",
				report.improvement_text(),
				improvement_class(report.improvement),
			)}
		</div>
	}
}

#[component]
fn RecommendationsView(recommendations: Recommendations) -> impl IntoView {
	let Recommendations {
		source_name,
		target_name,
		direct,
		candidates,
	} = recommendations;
	let meta = metadata();
	let has_candidates = !candidates.is_empty();

	let rows = candidates
		.into_iter()
		.enumerate()
		.map(|(index, rec)| {
			let pivot_name = meta.label(&rec.pivot).to_string();
			let improvement = round_half_up(rec.improvement_over_direct);
			view! {
				<div class="recommendation" class:best={index == 0}>
					<div class="recommendation-head">
						<div class="recommendation-name">{format!("{}. {pivot_name}", index + 1)}</div>
						<div class="recommendation-path">
							{format!("{source_name} → {pivot_name} → {target_name}")}
						</div>
					</div>
					<div class="recommendation-score">
						<div class="analysis-label">"Min Score (Bottleneck)"</div>
						<div class={Quality::of(rec.min_score as f64).css_class()}>{rec.min_score}</div>
					</div>
					<div class="recommendation-score">
						<div class="analysis-label">"Avg Score"</div>
						<div>{round_half_up(rec.avg_score)}</div>
					</div>
					<div class="recommendation-score">
						<div class="analysis-label">"vs Direct"</div>
						<div class={improvement_class(improvement)}>{signed_points(improvement)}</div>
					</div>
					<div class="recommendation-legs">
						<span>{format!("Step 1: {}/255", rec.score1)}</span>
						<span>{format!("Step 2: {}/255", rec.score2)}</span>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="recommendations">
			<div class="recommendations-banner">
				<h3>"Translation Recommendations"</h3>
				<p>{format!("{source_name} → {target_name} (Direct: {direct}/255)")}</p>
			</div>
			<Show
				when=move || has_candidates
				fallback=|| view! { <div class="empty">"No pivot languages found."</div> }
			>
				<h4>"Top Recommended Pivot Languages"</h4>
			</Show>
			{rows}
		</div>
	}
}

#[component]
pub fn PairPanelView(
	#[prop(into)] session: Signal<Session>,
	#[prop(into)] panel: Signal<PairPanel>,
) -> impl IntoView {
	move || match panel.get() {
		PairPanel::Selection => match session.with(Session::analysis) {
			Some(analysis) => view! { <PairAnalysisView analysis=analysis /> }.into_any(),
			None => view! { <p class="prompt">{SELECTION_PROMPT}</p> }.into_any(),
		},
		PairPanel::Path(report) => view! { <PathView report=report /> }.into_any(),
		PairPanel::Recommendations(recommendations) => {
			view! { <RecommendationsView recommendations=recommendations /> }.into_any()
		}
		PairPanel::Notice(message) => view! { <p class="notice">{message}</p> }.into_any(),
	}
}

#[component]
pub fn DatasetReferencePanel(#[prop(into)] session: Signal<Session>) -> impl IntoView {
	move || {
		let reference = session.with(|s| lookup(&s.dataset).ok().and_then(|d| d.reference))?;
		Some(view! {
			<div class="dataset-reference">
				<h3>{reference.title}</h3>
				<div class="dataset-summary">{reference.summary}</div>
				<a href=reference.url target="_blank" rel="noopener noreferrer">
					"View Full Documentation →"
				</a>
			</div>
		})
	}
}

/// Key for the heat map, listing the languages on screen by family.
#[component]
pub fn LanguageReference(
	#[prop(into)] session: Signal<Session>,
	major_language_count: usize,
) -> impl IntoView {
	let shown = Memo::new(move |_| {
		session.with(|s| {
			(s.view == View::Heat).then(|| {
				let languages = select_languages(&s.matrix, s.heat_filter, major_language_count);
				(s.heat_filter, languages)
			})
		})
	});

	move || {
		let (filter, languages) = shown.get()?;
		let heading = match filter {
			HeatFilter::Major => {
				format!("Language Reference - Major Languages ({} shown)", languages.len())
			}
			HeatFilter::All => {
				format!("Language Reference - All Languages ({} total)", languages.len())
			}
		};
		let meta = metadata();
		let groups = group_by_family(&languages)
			.into_iter()
			.map(|(family, members)| {
				let color = meta.family_color(family).to_string();
				view! {
					<div class="family-group">
						<div class="family-name" style:color=color.clone() style:border-bottom-color=color>
							{format!("{family} ({})", members.len())}
						</div>
						<div class="family-members">
							{members
								.iter()
								.map(|code| view! { <div>{meta.label(code).to_string()}</div> })
								.collect_view()}
						</div>
					</div>
				}
			})
			.collect_view();
		Some(view! {
			<div class="language-reference">
				<h4>{heading}</h4>
				<div class="language-list">{groups}</div>
			</div>
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_group_thousands() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(999), "999");
		assert_eq!(group_thousands(1000), "1,000");
		assert_eq!(group_thousands(1234567), "1,234,567");
	}

	#[test]
	fn test_group_by_family() {
		let languages: Vec<String> = ["pt", "de", "es", "en"].map(String::from).into();
		let groups = group_by_family(&languages);
		assert_eq!(
			groups,
			vec![
				("Germanic", vec!["en".to_string(), "de".to_string()]),
				("Romance", vec!["pt".to_string(), "es".to_string()]),
			]
		);
	}
}
