//! The control bar: dataset and view pickers, the language pair, search and
//! the pair actions.

use std::time::Duration;

use leptos::ev::Event;
use leptos::prelude::*;

use super::export::download_matrix;
use super::panels::PairPanel;
use crate::analysis::{find_best_path, recommend};
use crate::datasets::DATASETS;
use crate::engine::metadata;
use crate::layout::HeatFilter;
use crate::session::{Session, View};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Named languages as `(code, display name)`, sorted by code.
pub fn language_options(session: &Session) -> Vec<(String, String)> {
	let meta = metadata();
	let mut options: Vec<(String, String)> = session
		.matrix
		.named_languages()
		.iter()
		.map(|code| (code.clone(), meta.label(code).to_string()))
		.collect();
	options.sort();
	options
}

fn apply(session: RwSignal<Session>, transition: impl FnOnce(&Session) -> Session) {
	session.update(|s| *s = transition(s));
}

#[component]
fn LanguageSelect(
	label: &'static str,
	options: Memo<Vec<(String, String)>>,
	#[prop(into)] value: Signal<String>,
	#[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
	view! {
		<label class="control-group">
			<span>{label}</span>
			<select
				prop:value=move || value.get()
				on:change=move |ev: Event| on_change.run(event_target_value(&ev))
			>
				<option value="">"Select language..."</option>
				{move || {
					options
						.get()
						.into_iter()
						.map(|(code, name)| view! { <option value=code>{name}</option> })
						.collect_view()
				}}
			</select>
		</label>
	}
}

#[component]
pub fn Controls(
	session: RwSignal<Session>,
	panel: RwSignal<PairPanel>,
	#[prop(into)] on_dataset: Callback<String>,
	recommendation_limit: usize,
) -> impl IntoView {
	let options = Memo::new(move |_| session.with(language_options));
	let pending_search = StoredValue::new(None::<TimeoutHandle>);
	let query = RwSignal::new(String::new());

	let select_source = move |code: String| {
		apply(session, |s| s.with_source(Some(code)));
		panel.set(PairPanel::Selection);
	};
	let select_target = move |code: String| {
		apply(session, |s| s.with_target(Some(code)));
		panel.set(PairPanel::Selection);
	};

	let on_search = move |ev: Event| {
		let text = event_target_value(&ev);
		query.set(text.clone());
		if let Some(handle) = pending_search.get_value() {
			handle.clear();
		}
		let handle = set_timeout_with_handle(
			move || {
				apply(session, |s| s.with_search(&text));
				panel.set(PairPanel::Selection);
			},
			SEARCH_DEBOUNCE,
		);
		if let Err(err) = &handle {
			log::warn!("Search debounce not armed: {err:?}");
		}
		pending_search.set_value(handle.ok());
	};

	let find_path = move |_| {
		let next = session.with_untracked(|s| {
			find_best_path(&s.matrix, s.source_str(), s.target_str())
		});
		panel.set(match next {
			Ok(report) => {
				log::debug!("Best pivot: {}", report.pivot_label());
				PairPanel::Path(report)
			}
			Err(err) => {
				log::warn!("Path search rejected: {err}");
				PairPanel::Notice(err.to_string())
			}
		});
	};

	let show_recommendations = move |_| {
		let next = session.with_untracked(|s| {
			recommend(&s.matrix, s.source_str(), s.target_str(), recommendation_limit)
		});
		panel.set(match next {
			Ok(recommendations) => PairPanel::Recommendations(recommendations),
			Err(err) => {
				log::warn!("Recommendations rejected: {err}");
				PairPanel::Notice(err.to_string())
			}
		});
	};

	let reset = move |_| {
		apply(session, Session::reset);
		query.set(String::new());
		panel.set(PairPanel::Selection);
	};

	let export = move |_| {
		if let Err(err) = session.with_untracked(|s| download_matrix(&s.matrix)) {
			log::error!("Export failed: {err}");
			panel.set(PairPanel::Notice(err.to_string()));
		}
	};

	let is_heat = move || session.with(|s| s.view == View::Heat);
	let filter_button = move |filter: HeatFilter, label: &'static str| {
		view! {
			<button
				class="filter-btn"
				data-filter={filter.key()}
				class:active=move || session.with(|s| s.heat_filter == filter)
				on:click=move |_| apply(session, |s| s.with_heat_filter(filter))
			>
				{label}
			</button>
		}
	};

	view! {
		<div class="controls">
			<div class="controls-row">
				<label class="control-group">
					<span>"Dataset"</span>
					<select
						prop:value=move || session.with(|s| s.dataset.clone())
						on:change=move |ev: Event| on_dataset.run(event_target_value(&ev))
					>
						{DATASETS
							.iter()
							.map(|d| view! { <option value=d.key title=d.description>{d.name}</option> })
							.collect_view()}
					</select>
				</label>
				<div class="view-buttons">
					{View::ALL
						.into_iter()
						.map(|view| {
							view! {
								<button
									class="view-btn"
									data-view={view.key()}
									class:active=move || session.with(|s| s.view == view)
									on:click=move |_| apply(session, |s| s.with_view(view))
								>
									{view.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
				<Show when=is_heat>
					<div class="heat-filter">
						{filter_button(HeatFilter::Major, "Major Languages")}
						{filter_button(HeatFilter::All, "All Languages")}
					</div>
				</Show>
			</div>
			<div class="controls-row">
				<LanguageSelect
					label="Source Language"
					options=options
					value=Signal::derive(move || session.with(|s| s.source_str().to_string()))
					on_change=select_source
				/>
				<LanguageSelect
					label="Target Language"
					options=options
					value=Signal::derive(move || session.with(|s| s.target_str().to_string()))
					on_change=select_target
				/>
				<label class="control-group">
					<span>"Search"</span>
					<input
						type="search"
						placeholder="Search languages..."
						prop:value=move || query.get()
						on:input=on_search
					/>
				</label>
			</div>
			<div class="controls-row actions">
				<button class="btn" on:click=find_path>"Find Best Path"</button>
				<button class="btn" on:click=show_recommendations>"Recommendations"</button>
				<button class="btn secondary" on:click=reset>"Reset"</button>
				<button class="btn secondary" on:click=export>"Export Data"</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;

	#[test]
	fn test_language_options_sorted_by_code() {
		let m = matrix_from(json!({
			"pt": { "es": 227 },
			"es": { "pt": 190 },
			"zz": { "es": 10 },
			"de": {},
		}));
		let session = Session::empty("main").with_dataset("main", Arc::new(m));
		assert_eq!(
			language_options(&session),
			vec![
				("de".to_string(), "German".to_string()),
				("es".to_string(), "Spanish".to_string()),
				("pt".to_string(), "Portuguese".to_string()),
			]
		);
	}
}
