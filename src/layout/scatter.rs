//! Scatter plot of outgoing versus incoming averages.

use super::{Point, Rect, Viewport};
use crate::engine::{CompatibilityMatrix, metadata};

/// Space around the plot for axes and titles.
pub const PLOT_PADDING: f64 = 80.0;
/// Grid divisions per axis.
pub const GRID_STEPS: usize = 5;
const MAX_SCORE: f64 = 255.0;
const BASE_POINT_RADIUS: f64 = 6.0;
const POINT_RADIUS_RANGE: f64 = 10.0;
const LABEL_MIN_AVERAGE: f64 = 160.0;
const LABEL_MIN_ASYMMETRY: f64 = 40.0;

/// Mean incoming and outgoing scores of one language.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageAxes {
	/// Language code.
	pub code: String,
	/// Mean non-zero score from this language.
	pub avg_outgoing: f64,
	/// Mean non-zero score into this language.
	pub avg_incoming: f64,
	/// Scores behind both means.
	pub connections: usize,
}

impl LanguageAxes {
	/// Mean of both axes.
	pub fn average(&self) -> f64 {
		(self.avg_outgoing + self.avg_incoming) / 2.0
	}

	/// Gap between both axes.
	pub fn asymmetry(&self) -> f64 {
		(self.avg_outgoing - self.avg_incoming).abs()
	}
}

fn mean(scores: &[u8]) -> f64 {
	if scores.is_empty() {
		return 0.0;
	}
	scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
}

/// Non-zero scores to and from other named languages.
///
/// Languages with neither are left out: there is nothing to plot.
pub fn language_axes(matrix: &CompatibilityMatrix) -> Vec<LanguageAxes> {
	let named = matrix.named_languages();
	named
		.iter()
		.filter_map(|lang| {
			let outgoing: Vec<u8> = matrix
				.outgoing(lang)
				.filter(|&(target, score)| target != lang && score > 0 && matrix.is_named(target))
				.map(|(_, score)| score)
				.collect();
			let incoming: Vec<u8> = named
				.iter()
				.filter(|source| *source != lang)
				.filter_map(|source| matrix.score(source, lang))
				.filter(|&score| score > 0)
				.collect();
			let axes = LanguageAxes {
				code: lang.clone(),
				avg_outgoing: mean(&outgoing),
				avg_incoming: mean(&incoming),
				connections: outgoing.len() + incoming.len(),
			};
			(axes.avg_outgoing > 0.0 || axes.avg_incoming > 0.0).then_some(axes)
		})
		.collect()
}

fn project_into(plot: &Rect, outgoing: f64, incoming: f64) -> Point {
	Point::new(
		plot.x + outgoing / MAX_SCORE * plot.width,
		plot.y + plot.height - incoming / MAX_SCORE * plot.height,
	)
}

/// A placed language.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
	/// The plotted values.
	pub axes: LanguageAxes,
	/// Family name, which picks the colour.
	pub family: &'static str,
	/// Centre.
	pub position: Point,
	/// Grows with [`LanguageAxes::average`].
	pub radius: f64,
	/// Strong or lopsided languages get a label.
	pub labelled: bool,
}

/// Outgoing mean on x, incoming mean on y, both on a fixed 0-255 scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterLayout {
	/// Canvas area.
	pub viewport: Viewport,
	/// The area inside the padding.
	pub plot: Rect,
	/// One point per plotted language.
	pub points: Vec<ScatterPoint>,
}

impl ScatterLayout {
	/// Plot every language returned by [`language_axes`].
	pub fn new(matrix: &CompatibilityMatrix, viewport: Viewport) -> Self {
		let plot = Rect::new(
			PLOT_PADDING,
			PLOT_PADDING,
			(viewport.width - PLOT_PADDING * 2.0).max(0.0),
			(viewport.height - PLOT_PADDING * 2.0).max(0.0),
		);
		let meta = metadata();
		let points = language_axes(matrix)
			.into_iter()
			.map(|axes| {
				let position = project_into(&plot, axes.avg_outgoing, axes.avg_incoming);
				let average = axes.average();
				ScatterPoint {
					family: meta.family_of(&axes.code),
					position,
					radius: BASE_POINT_RADIUS + average / MAX_SCORE * POINT_RADIUS_RANGE,
					labelled: average > LABEL_MIN_AVERAGE || axes.asymmetry() > LABEL_MIN_ASYMMETRY,
					axes,
				}
			})
			.collect();
		Self {
			viewport,
			plot,
			points,
		}
	}

	/// Canvas position of a (outgoing, incoming) score pair.
	pub fn project(&self, outgoing: f64, incoming: f64) -> Point {
		project_into(&self.plot, outgoing, incoming)
	}

	/// Topmost point under the cursor; later points are drawn on top.
	pub fn point_at(&self, at: Point) -> Option<usize> {
		self.points
			.iter()
			.rposition(|p| p.position.distance(at) <= p.radius)
	}

	/// Scale value for grid step `i`, 0 at the origin.
	pub fn tick_value(i: usize) -> u32 {
		(MAX_SCORE * i as f64 / GRID_STEPS as f64).round() as u32
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;

	#[test]
	fn test_language_axes() {
		let m = matrix_from(json!({
			"es": { "es": 255, "pt": 200, "ca": 100, "fr": 0, "xx": 50 },
			"pt": { "es": 150 },
			"xx": { "ca": 250 },
		}));
		let axes = language_axes(&m);
		let es = axes.iter().find(|a| a.code == "es").unwrap();
		assert!((es.avg_outgoing - 150.0).abs() < 1e-9);
		assert!((es.avg_incoming - 150.0).abs() < 1e-9);
		assert_eq!(es.connections, 3);

		let ca = axes.iter().find(|a| a.code == "ca").unwrap();
		assert_eq!(ca.avg_outgoing, 0.0);
		assert!((ca.avg_incoming - 100.0).abs() < 1e-9);

		// fr only has a zero score: no signal either way
		assert!(axes.iter().all(|a| a.code != "fr"));
	}

	#[test]
	fn test_scatter_projection() {
		let m = matrix_from(json!({
			"es": { "pt": 255 },
			"pt": { "es": 255 },
		}));
		let layout = ScatterLayout::new(&m, Viewport::new(590.0, 590.0));
		assert_eq!(layout.plot, Rect::new(80.0, 80.0, 430.0, 430.0));
		let es = &layout.points[0];
		assert_eq!(es.position, Point::new(510.0, 80.0));
		assert_eq!(es.radius, 16.0);
		assert!(es.labelled);
		assert_eq!(layout.project(0.0, 0.0), Point::new(80.0, 510.0));
		assert_eq!(layout.point_at(Point::new(505.0, 85.0)), Some(1));
		assert_eq!(layout.point_at(Point::new(300.0, 300.0)), None);
	}

	#[test]
	fn test_tick_values() {
		let ticks: Vec<u32> = (0..=GRID_STEPS).map(ScatterLayout::tick_value).collect();
		assert_eq!(ticks, vec![0, 51, 102, 153, 204, 255]);
	}
}
