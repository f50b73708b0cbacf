//! Geometry for the canvas views, rebuilt whenever the session or the
//! container size changes, plus pointer hit-testing over it.

use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::engine::stats::{
	DistributionSummary, Quality, bucket_range, distribution_summary, score_distribution,
};
use crate::engine::{CompatibilityMatrix, metadata};
use crate::layout::{
	BarChartLayout, FamilyLayout, HeatMapLayout, NetworkLayout, Point, ScatterLayout, Viewport,
};
use crate::render::heat::LEGEND_HEIGHT;
use crate::render::{
	Surface, paint_families, paint_heat_map, paint_histogram, paint_network, paint_scatter,
};
use crate::session::{Session, View};

const MIN_GRAPH_HEIGHT: f64 = 800.0;
const CHART_HEIGHT: f64 = 600.0;

/// What the pointer is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
	/// A heat map cell.
	Cell {
		/// Grid row.
		row: usize,
		/// Grid column.
		col: usize,
		/// Row language.
		source: String,
		/// Column language.
		target: String,
	},
	/// A network node or scatter point.
	Language(String),
	/// A family disc.
	Family(&'static str),
	/// A histogram bar.
	Bucket(usize),
}

/// Text shown next to the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
	/// Bold first line.
	pub heading: String,
	/// Second line.
	pub detail: String,
	/// Colours `detail` when set.
	pub quality: Option<Quality>,
}

#[derive(Clone, Debug)]
enum Geometry {
	Heat {
		layout: HeatMapLayout,
		highlight: Option<(usize, usize)>,
	},
	Network(NetworkLayout),
	Families(FamilyLayout),
	Scatter(ScatterLayout),
	Distribution {
		chart: BarChartLayout,
		summary: Option<DistributionSummary>,
	},
}

/// The active canvas view, laid out and ready to paint.
#[derive(Clone, Debug)]
pub struct Scene {
	matrix: Arc<CompatibilityMatrix>,
	geometry: Geometry,
	width: f64,
	height: f64,
}

impl Scene {
	/// `None` for views that are not drawn on a canvas.
	pub fn build(session: &Session, config: &ViewerConfig, container: Viewport) -> Option<Self> {
		let matrix = &session.matrix;
		let (geometry, width, height) = match session.view {
			View::Heat => {
				let layout = HeatMapLayout::for_matrix(
					matrix,
					session.heat_filter,
					config.major_language_count,
					container.width,
				);
				let size = layout.canvas_size();
				log::debug!("Heat map: {} languages, cell {:.1}px", layout.len(), layout.cell_size);
				(
					Geometry::Heat {
						layout,
						highlight: None,
					},
					size,
					size + LEGEND_HEIGHT,
				)
			}
			View::Network => {
				let view = Viewport::new(container.width, container.height.max(MIN_GRAPH_HEIGHT));
				let layout = NetworkLayout::new(matrix, view, config.network_node_count);
				(Geometry::Network(layout), view.width, view.height)
			}
			View::Families => {
				let view = Viewport::new(container.width, container.height.max(MIN_GRAPH_HEIGHT));
				(Geometry::Families(FamilyLayout::new(matrix, view)), view.width, view.height)
			}
			View::Scatter => {
				let view = Viewport::new(container.width, CHART_HEIGHT);
				(Geometry::Scatter(ScatterLayout::new(matrix, view)), view.width, view.height)
			}
			View::Statistics => {
				let view = Viewport::new(container.width, CHART_HEIGHT);
				let chart = BarChartLayout::new(&score_distribution(matrix), view);
				let summary = distribution_summary(matrix);
				(Geometry::Distribution { chart, summary }, view.width, view.height)
			}
			View::Rankings | View::Bidirectional => return None,
		};
		Some(Self {
			matrix: Arc::clone(matrix),
			geometry,
			width,
			height,
		})
	}

	/// Canvas size in CSS pixels.
	/// Canvas width and height.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Draw the whole view.
	pub fn paint<S: Surface>(&self, surface: &mut S) {
		match &self.geometry {
			Geometry::Heat { layout, highlight } => {
				paint_heat_map(surface, layout, &self.matrix, *highlight, self.width, self.height)
			}
			Geometry::Network(layout) => paint_network(surface, layout, self.width, self.height),
			Geometry::Families(layout) => paint_families(surface, layout, self.width, self.height),
			Geometry::Scatter(layout) => paint_scatter(surface, layout, self.width, self.height),
			Geometry::Distribution { chart, summary } => {
				paint_histogram(surface, chart, summary.as_ref())
			}
		}
	}

	/// What sits under canvas coordinates `(x, y)`.
	pub fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
		let at = Point::new(x, y);
		match &self.geometry {
			Geometry::Heat { layout, .. } => {
				let (row, col) = layout.cell_at(at)?;
				Some(Hit::Cell {
					row,
					col,
					source: layout.languages[row].clone(),
					target: layout.languages[col].clone(),
				})
			}
			Geometry::Network(layout) => {
				let index = layout.node_at(at)?;
				Some(Hit::Language(layout.nodes[index].code.clone()))
			}
			Geometry::Families(layout) => {
				let index = layout.family_at(at)?;
				Some(Hit::Family(layout.nodes[index].family.name))
			}
			Geometry::Scatter(layout) => {
				let index = layout.point_at(at)?;
				Some(Hit::Language(layout.points[index].axes.code.clone()))
			}
			Geometry::Distribution { chart, .. } => chart.bar_at(x, y).map(Hit::Bucket),
		}
	}

	/// Track the hovered heat-map cell. Returns whether a repaint is needed.
	pub fn set_hover(&mut self, hit: Option<&Hit>) -> bool {
		let Geometry::Heat { highlight, .. } = &mut self.geometry else {
			return false;
		};
		let next = match hit {
			Some(Hit::Cell { row, col, .. }) => Some((*row, *col)),
			_ => None,
		};
		if *highlight == next {
			return false;
		}
		*highlight = next;
		true
	}

	/// Tooltip text for `hit`.
	pub fn tooltip(&self, hit: &Hit) -> Tooltip {
		let meta = metadata();
		match hit {
			Hit::Cell { source, target, .. } if source == target => Tooltip {
				heading: meta.label(source).to_string(),
				detail: "Same language".to_string(),
				quality: None,
			},
			Hit::Cell { source, target, .. } => {
				let score = self.matrix.score(source, target).unwrap_or(0);
				Tooltip {
					heading: format!(
						"{} ({}) → {} ({})",
						meta.label(source),
						meta.family_of(source),
						meta.label(target),
						meta.family_of(target)
					),
					detail: format!("{score}/255"),
					quality: Some(Quality::of(score as f64)),
				}
			}
			Hit::Language(code) => Tooltip {
				heading: meta.label(code).to_string(),
				detail: format!(
					"{}, {} connections",
					meta.family_of(code),
					self.matrix.degree(code)
				),
				quality: None,
			},
			Hit::Family(name) => Tooltip {
				heading: name.to_string(),
				detail: format!(
					"{} languages",
					meta.family(name).map_or(0, |f| f.languages.len())
				),
				quality: None,
			},
			Hit::Bucket(bucket) => {
				let (low, high) = bucket_range(*bucket);
				let count = match &self.geometry {
					Geometry::Distribution { chart, .. } => {
						chart.bars.get(*bucket).map_or(0, |b| b.count)
					}
					_ => 0,
				};
				Tooltip {
					heading: format!("{low}-{high}"),
					detail: format!("{count} pairs"),
					quality: Some(Quality::of(low as f64)),
				}
			}
		}
	}
}
