//! Scatter plot painter.

use std::f64::consts::FRAC_PI_2;

use super::surface::{Stroke, Surface, TextAlign, TextStyle};
use crate::color::{MUTED_TEXT, Rgb, TEXT};
use crate::engine::metadata;
use crate::layout::scatter::GRID_STEPS;
use crate::layout::{Point, ScatterLayout};

/// Chart heading.
pub const TITLE: &str = "Translation Compatibility: Incoming vs Outgoing";
/// How to read the diagonal.
pub const SUBTITLE: &str =
	"Points above diagonal: easier to translate FROM | Below diagonal: easier to translate TO";
/// Label under the x axis.
pub const X_AXIS_TITLE: &str = "Outgoing Compatibility (This → Others)";
/// Label beside the y axis, drawn rotated.
pub const Y_AXIS_TITLE: &str = "Incoming Compatibility (Others → This)";

const GRID_COLOR: Rgb = Rgb::gray(0xe0);
const DIAGONAL_COLOR: Rgb = Rgb::gray(0xcc);
const POINT_ALPHA: f64 = 0.7;

/// Grid, axes, the diagonal, then the points on top.
pub fn paint_scatter<S: Surface>(surface: &mut S, layout: &ScatterLayout, width: f64, height: f64) {
	surface.clear(width, height);
	let plot = layout.plot;
	let (left, top) = (plot.x, plot.y);
	let (right, bottom) = (plot.x + plot.width, plot.y + plot.height);

	let grid = Stroke::solid(GRID_COLOR.opaque(), 1.0);
	for i in 0..=GRID_STEPS {
		let share = i as f64 / GRID_STEPS as f64;
		let y = top + plot.height * share;
		let x = left + plot.width * share;
		surface.stroke_line(Point::new(left, y), Point::new(right, y), &grid);
		surface.stroke_line(Point::new(x, top), Point::new(x, bottom), &grid);
	}

	let axis = Stroke::solid(TEXT.opaque(), 2.0);
	let origin = Point::new(left, bottom);
	surface.stroke_line(origin, Point::new(right, bottom), &axis);
	surface.stroke_line(origin, Point::new(left, top), &axis);
	surface.stroke_line(
		origin,
		Point::new(right, top),
		&Stroke::solid(DIAGONAL_COLOR.opaque(), 2.0).dashed(5.0, 5.0),
	);

	let meta = metadata();
	let point_label = TextStyle::new(TEXT.opaque(), "bold 11px Arial").align(TextAlign::Center);
	for point in &layout.points {
		let color = meta.family_color(point.family);
		surface.fill_circle(point.position, point.radius, color.alpha(POINT_ALPHA));
		if point.labelled {
			let at = Point::new(point.position.x, point.position.y - point.radius - 5.0);
			surface.fill_text(meta.label(&point.axes.code), at, &point_label);
		}
	}

	let axis_title = TextStyle::new(TEXT.opaque(), "bold 14px Arial").align(TextAlign::Center);
	surface.fill_text(X_AXIS_TITLE, Point::new(width / 2.0, height - 20.0), &axis_title);
	surface.fill_text(
		Y_AXIS_TITLE,
		Point::new(20.0, height / 2.0),
		&axis_title.clone().rotated(-FRAC_PI_2),
	);
	surface.fill_text(
		TITLE,
		Point::new(width / 2.0, 30.0),
		&TextStyle::new(TEXT.opaque(), "bold 16px Arial").align(TextAlign::Center),
	);
	surface.fill_text(
		SUBTITLE,
		Point::new(width / 2.0, 50.0),
		&TextStyle::new(MUTED_TEXT.opaque(), "12px Arial").align(TextAlign::Center),
	);

	let tick = TextStyle::new(TEXT.opaque(), "11px Arial");
	let y_tick = tick.clone().align(TextAlign::Right);
	let x_tick = tick.align(TextAlign::Center);
	for i in 0..=GRID_STEPS {
		let share = i as f64 / GRID_STEPS as f64;
		let value = ScatterLayout::tick_value(GRID_STEPS - i).to_string();
		surface.fill_text(&value, Point::new(left - 10.0, top + plot.height * share + 4.0), &y_tick);
		let value = ScatterLayout::tick_value(i).to_string();
		surface.fill_text(&value, Point::new(left + plot.width * share, bottom + 20.0), &x_tick);
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;
	use crate::layout::Viewport;
	use crate::render::surface::{DrawCommand, DrawList};

	#[test]
	fn test_scatter_frame_and_points() {
		let m = matrix_from(json!({
			"es": { "pt": 255, "de": 20 },
			"pt": { "es": 255 },
			"de": { "es": 30 },
		}));
		let view = Viewport::new(600.0, 600.0);
		let layout = ScatterLayout::new(&m, view);
		let mut list = DrawList::default();
		paint_scatter(&mut list, &layout, view.width, view.height);

		let lines: Vec<&Stroke> = list
			.commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Line { stroke, .. } => Some(stroke),
				_ => None,
			})
			.collect();
		// 6 horizontal + 6 vertical grid lines, two axes, one diagonal
		assert_eq!(lines.len(), 15);
		assert_eq!(lines.iter().filter(|s| s.dash.is_some()).count(), 1);

		let points = list
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
			.count();
		assert_eq!(points, layout.points.len());

		let texts: Vec<&str> = list.texts().collect();
		assert!(texts.contains(&TITLE));
		assert!(texts.contains(&"Portuguese"));
		assert_eq!(texts.iter().filter(|t| **t == "255").count(), 2);
		assert_eq!(texts.iter().filter(|t| **t == "0").count(), 2);
	}
}
