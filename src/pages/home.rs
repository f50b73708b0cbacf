use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::controls::Controls;
use crate::components::listings::{BidirectionalView, RankingsView};
use crate::components::matrix_canvas::MatrixCanvas;
use crate::components::panels::{
	DatasetReferencePanel, LanguageReference, PairPanel, PairPanelView, SummaryCards,
};
use crate::config::ViewerConfig;
use crate::datasets::lookup;
use crate::engine::MatrixError;
use crate::loader::{LoadState, LoadTracker, fetch_matrix};
use crate::scene::Hit;
use crate::session::{Session, View};

/// The reactive handles a dataset load writes to.
#[derive(Clone, Copy)]
struct Loader {
	session: RwSignal<Session>,
	state: RwSignal<LoadState>,
	panel: RwSignal<PairPanel>,
	tracker: StoredValue<LoadTracker>,
}

impl Loader {
	fn fail(self, dataset: &str, err: &MatrixError) {
		log::error!("Failed to load {dataset}: {err}");
		self.state.set(LoadState::Failed {
			dataset: dataset.to_string(),
			message: err.to_string(),
		});
	}

	/// Fetch `key` and swap it in, unless a newer load or the timeout wins.
	fn start(self, key: &str, config: &ViewerConfig) {
		let dataset = match lookup(key) {
			Ok(dataset) => dataset,
			Err(err) => return self.fail(key, &err),
		};
		let Some(ticket) = self.tracker.try_update_value(|t| t.issue(dataset.key)) else {
			return;
		};
		self.state.set(LoadState::Loading {
			dataset: dataset.key.to_string(),
		});

		let timeout_ms = config.fetch_timeout_ms;
		let timed_out = ticket.clone();
		set_timeout(
			move || {
				if self.tracker.try_update_value(|t| t.settle(&timed_out)) == Some(true) {
					self.fail(&timed_out.dataset, &MatrixError::Timeout(timeout_ms));
				}
			},
			Duration::from_millis(timeout_ms),
		);

		let base_path = config.dataset_base_path.clone();
		spawn_local(async move {
			let result = fetch_matrix(dataset, &base_path).await;
			if self.tracker.try_update_value(|t| t.settle(&ticket)) != Some(true) {
				log::warn!("Discarding stale load of {}", ticket.dataset);
				return;
			}
			match result {
				Ok(matrix) => {
					log::info!(
						"Dataset loaded successfully: {} ({} languages)",
						dataset.name,
						matrix.named_languages().len()
					);
					let matrix = Arc::new(matrix);
					self.session.update(|s| *s = s.with_dataset(&ticket.dataset, matrix));
					self.panel.set(PairPanel::Selection);
					self.state.set(LoadState::Ready {
						dataset: ticket.dataset,
					});
				}
				Err(err) => self.fail(&ticket.dataset, &err),
			}
		});
	}
}

#[component]
fn LoadStatus(#[prop(into)] state: Signal<LoadState>) -> impl IntoView {
	move || match state.get() {
		LoadState::Loading { .. } => {
			Some(view! { <div class="loading">"Loading dataset..."</div> }.into_any())
		}
		LoadState::Failed { message, .. } => {
			Some(view! { <div class="loading error">{message}</div> }.into_any())
		}
		LoadState::Idle | LoadState::Ready { .. } => None,
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = ViewerConfig::from_document();
	// `?dataset=gemini&view=network` picks the starting point
	let query = use_query_map();
	let (dataset, start_view) = query.with_untracked(|q| {
		(
			q.get("dataset").unwrap_or_else(|| config.default_dataset.clone()),
			q.get("view").and_then(|v| View::from_key(&v)).unwrap_or_default(),
		)
	});
	let session = RwSignal::new(Session::empty(&dataset).with_view(start_view));
	let loader = Loader {
		session,
		state: RwSignal::new(LoadState::default()),
		panel: RwSignal::new(PairPanel::default()),
		tracker: StoredValue::new(LoadTracker::default()),
	};
	let panel = loader.panel;

	loader.start(&dataset, &config);

	let load_config = config.clone();
	let on_dataset = move |key: String| loader.start(&key, &load_config);

	let on_select = move |hit: Hit| match hit {
		Hit::Cell { source, target, .. } => {
			session.update(|s| *s = s.with_pair(&source, &target));
			panel.set(PairPanel::Selection);
		}
		Hit::Language(code) => {
			session.update(|s| *s = s.with_source(Some(code)));
			panel.set(PairPanel::Selection);
		}
		Hit::Family(_) | Hit::Bucket(_) => {}
	};

	let view_kind = move || session.with(|s| s.view);
	let canvas_config = config.clone();
	let (ranking_limit, bidirectional_limit, threshold) = (
		config.ranking_limit,
		config.bidirectional_limit,
		config.asymmetry_threshold,
	);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="container">
				<header>
					<h1>"Translation Compatibility Matrix"</h1>
					<p class="subtitle">"How well each language translates into every other"</p>
				</header>
				<DatasetReferencePanel session=session />
				<Controls
					session=session
					panel=panel
					on_dataset=on_dataset
					recommendation_limit=config.recommendation_limit
				/>
				<LoadStatus state=loader.state />
				<SummaryCards session=session />
				<div
					class="matrix-canvas-container"
					class:busy=move || loader.state.with(LoadState::is_loading)
				>
					<Show when=move || view_kind().uses_canvas()>
						<MatrixCanvas
							session=session
							config=canvas_config.clone()
							on_select=on_select
						/>
					</Show>
					<Show when=move || view_kind() == View::Rankings>
						<RankingsView session=session limit=ranking_limit />
					</Show>
					<Show when=move || view_kind() == View::Bidirectional>
						<BidirectionalView
							session=session
							threshold=threshold
							limit=bidirectional_limit
						/>
					</Show>
				</div>
				<LanguageReference
					session=session
					major_language_count=config.major_language_count
				/>
				<div class="info-panel">
					<h3>"Pair Analysis"</h3>
					<PairPanelView session=session panel=panel />
				</div>
			</div>
		</ErrorBoundary>
	}
}
