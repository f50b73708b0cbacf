//! The viewer's state as one immutable value.
//!
//! Every user action produces a new [`Session`]; nothing derived from the
//! matrix is stored here, so views always recompute from the current one.

use std::sync::Arc;

use crate::analysis::{PairAnalysis, selection_changed};
use crate::engine::CompatibilityMatrix;
use crate::engine::stats::search_languages;
use crate::layout::HeatFilter;

/// The selectable views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
	/// Score grid.
	#[default]
	Heat,
	/// Best-connected languages on a circle.
	Network,
	/// Family comparison.
	Families,
	/// Outgoing versus incoming averages.
	Scatter,
	/// Leaderboards.
	Rankings,
	/// Asymmetric pairs.
	Bidirectional,
	/// Score distribution.
	Statistics,
}

impl View {
	/// Button order.
	pub const ALL: [View; 7] = [
		Self::Heat,
		Self::Network,
		Self::Families,
		Self::Scatter,
		Self::Rankings,
		Self::Bidirectional,
		Self::Statistics,
	];

	/// Identifier used in markup and the `view` query parameter.
	pub fn key(self) -> &'static str {
		match self {
			Self::Heat => "heat",
			Self::Network => "network",
			Self::Families => "families",
			Self::Scatter => "scatter",
			Self::Rankings => "rankings",
			Self::Bidirectional => "bidirectional",
			Self::Statistics => "statistics",
		}
	}

	/// Button text.
	pub fn label(self) -> &'static str {
		match self {
			Self::Heat => "Heat Map",
			Self::Network => "Network Graph",
			Self::Families => "Language Families",
			Self::Scatter => "Scatter Plot",
			Self::Rankings => "Rankings",
			Self::Bidirectional => "Bidirectional",
			Self::Statistics => "Statistics",
		}
	}

	/// Inverse of [`View::key`].
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|v| v.key() == key)
	}

	/// Rankings and the bidirectional list are plain markup.
	pub fn uses_canvas(self) -> bool {
		!matches!(self, Self::Rankings | Self::Bidirectional)
	}
}

/// Loaded dataset, active view and language selection.
#[derive(Clone, Debug)]
pub struct Session {
	/// Key of the dataset the matrix came from.
	pub dataset: String,
	/// The loaded matrix, shared between sessions.
	pub matrix: Arc<CompatibilityMatrix>,
	/// Active view.
	pub view: View,
	/// Languages shown in the heat map.
	pub heat_filter: HeatFilter,
	/// Selected source code.
	pub source: Option<String>,
	/// Selected target code.
	pub target: Option<String>,
}

impl PartialEq for Session {
	fn eq(&self, other: &Self) -> bool {
		self.dataset == other.dataset
			&& Arc::ptr_eq(&self.matrix, &other.matrix)
			&& self.view == other.view
			&& self.heat_filter == other.heat_filter
			&& self.source == other.source
			&& self.target == other.target
	}
}

impl Session {
	/// A session with nothing loaded yet.
	pub fn empty(dataset: &str) -> Self {
		Self {
			dataset: dataset.to_string(),
			matrix: Arc::new(CompatibilityMatrix::default()),
			view: View::default(),
			heat_filter: HeatFilter::default(),
			source: None,
			target: None,
		}
	}

	/// Swap in a freshly loaded matrix. The view and filter survive; the
	/// selection does not.
	pub fn with_dataset(&self, dataset: &str, matrix: Arc<CompatibilityMatrix>) -> Self {
		Self {
			dataset: dataset.to_string(),
			matrix,
			source: None,
			target: None,
			..self.clone()
		}
	}

	/// Switch views, keeping the selection.
	pub fn with_view(&self, view: View) -> Self {
		Self {
			view,
			..self.clone()
		}
	}

	/// Switch the heat map filter.
	pub fn with_heat_filter(&self, heat_filter: HeatFilter) -> Self {
		Self {
			heat_filter,
			..self.clone()
		}
	}

	/// Replace the source; `None` clears it.
	pub fn with_source(&self, source: Option<String>) -> Self {
		Self {
			source: source.filter(|s| !s.is_empty()),
			..self.clone()
		}
	}

	/// Replace the target; `None` clears it.
	pub fn with_target(&self, target: Option<String>) -> Self {
		Self {
			target: target.filter(|t| !t.is_empty()),
			..self.clone()
		}
	}

	/// Select both sides at once.
	pub fn with_pair(&self, source: &str, target: &str) -> Self {
		self.with_source(Some(source.to_string()))
			.with_target(Some(target.to_string()))
	}

	/// Clear the selected pair.
	pub fn reset(&self) -> Self {
		Self {
			source: None,
			target: None,
			..self.clone()
		}
	}

	/// Select the first search hit as source and the second as target.
	///
	/// An empty query or no hits leaves the session unchanged.
	pub fn with_search(&self, query: &str) -> Self {
		let hits = search_languages(&self.matrix, query);
		match hits.as_slice() {
			[] => self.clone(),
			[only] => self.with_source(Some(only.clone())),
			[first, second, ..] => self.with_pair(first, second),
		}
	}

	/// Both sides, when both are chosen.
	pub fn selection(&self) -> Option<(&str, &str)> {
		Some((self.source.as_deref()?, self.target.as_deref()?))
	}

	/// Source code, or `""` when unset.
	pub fn source_str(&self) -> &str {
		self.source.as_deref().unwrap_or("")
	}

	/// Target code, or `""` when unset.
	pub fn target_str(&self) -> &str {
		self.target.as_deref().unwrap_or("")
	}

	/// Pair analysis for the current selection.
	pub fn analysis(&self) -> Option<PairAnalysis> {
		let (source, target) = self.selection()?;
		selection_changed(&self.matrix, source, target)
	}
}
