//! Heat map painter.

use std::f64::consts::FRAC_PI_4;

use super::surface::{Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::color::{MUTED_TEXT, Rgb, TEXT};
use crate::engine::{CompatibilityMatrix, metadata};
use crate::layout::heat::{HeatMapLayout, cell_color, families_present, ramp_color};
use crate::layout::{Point, Rect};

/// Room below the grid for the colour and family legends.
pub const LEGEND_HEIGHT: f64 = 170.0;
const CELL_GAP: f64 = 0.5;
const LEGEND_MAX_WIDTH: f64 = 400.0;
const LEGEND_BAR_HEIGHT: f64 = 20.0;

/// Cells, family separators, labels and both legends.
///
/// `highlight` is the hovered `(row, col)`; its row and column get a light wash.
pub fn paint_heat_map<S: Surface>(
	surface: &mut S,
	layout: &HeatMapLayout,
	matrix: &CompatibilityMatrix,
	highlight: Option<(usize, usize)>,
	width: f64,
	height: f64,
) {
	surface.clear(width, height);

	for (row, source) in layout.languages.iter().enumerate() {
		for (col, target) in layout.languages.iter().enumerate() {
			let score = matrix.score(source, target).unwrap_or(0);
			let cell = layout.cell_bounds(row, col);
			surface.fill_rect(
				Rect::new(cell.x, cell.y, cell.width - CELL_GAP, cell.height - CELL_GAP),
				cell_color(score, row == col).opaque(),
			);
		}
	}

	if let Some((row, col)) = highlight {
		let wash = Rgb::gray(255).alpha(0.3);
		let (pad, size, cell) = (layout.label_padding, layout.matrix_size, layout.cell_size);
		surface.fill_rect(Rect::new(pad, pad + row as f64 * cell, size, cell), wash);
		surface.fill_rect(Rect::new(pad + col as f64 * cell, pad, cell, size), wash);
	}

	paint_family_separators(surface, layout);
	if layout.shows_labels() {
		paint_labels(surface, layout);
	}
	paint_legend(surface, layout, width);
}

fn paint_family_separators<S: Surface>(surface: &mut S, layout: &HeatMapLayout) {
	let stroke = Stroke::solid(Rgb::gray(0).opaque(), 2.0);
	let (pad, size) = (layout.label_padding, layout.matrix_size);
	for &i in &layout.boundaries {
		let offset = pad + i as f64 * layout.cell_size;
		surface.stroke_line(Point::new(pad, offset), Point::new(pad + size, offset), &stroke);
		surface.stroke_line(Point::new(offset, pad), Point::new(offset, pad + size), &stroke);
	}
}

fn paint_labels<S: Surface>(surface: &mut S, layout: &HeatMapLayout) {
	let meta = metadata();
	let font_size = (layout.cell_size * 0.5).min(10.0);
	let base = TextStyle::new(TEXT.opaque(), format!("bold {font_size}px Arial"))
		.baseline(TextBaseline::Middle);
	let top = base.clone().rotated(-FRAC_PI_4);
	let left = base.align(TextAlign::Right);
	let pad = layout.label_padding;

	for (i, code) in layout.languages.iter().enumerate() {
		let label = meta.label(code);
		let mid = pad + i as f64 * layout.cell_size + layout.cell_size / 2.0;
		surface.fill_text(label, Point::new(mid, pad - 10.0), &top);
		surface.fill_text(label, Point::new(pad - 10.0, mid), &left);
	}
}

fn paint_legend<S: Surface>(surface: &mut S, layout: &HeatMapLayout, width: f64) {
	let legend_y = layout.canvas_size() + 30.0;
	let legend_width = LEGEND_MAX_WIDTH.min(width * 0.8).floor();
	let legend_x = (width - legend_width) / 2.0;

	let steps = legend_width as usize;
	for i in 0..=steps {
		let normalized = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
		surface.fill_rect(
			Rect::new(legend_x + i as f64, legend_y, 1.0, LEGEND_BAR_HEIGHT),
			ramp_color(normalized).opaque(),
		);
	}

	let caption = TextStyle::new(TEXT.opaque(), "bold 12px Arial").align(TextAlign::Center);
	for (text, share) in [("0", 0.0), ("Low", 0.25), ("Medium", 0.5), ("High", 0.75), ("255", 1.0)] {
		surface.fill_text(
			text,
			Point::new(legend_x + legend_width * share, legend_y + 35.0),
			&caption,
		);
	}

	let meta = metadata();
	let families_y = legend_y + 60.0;
	surface.fill_text(
		"Language Families (separated by black lines):",
		Point::new(20.0, families_y),
		&TextStyle::new(MUTED_TEXT.opaque(), "11px Arial"),
	);
	let entry_font = "10px Arial";
	let entry = TextStyle::new(TEXT.opaque(), entry_font);
	let families = families_present(&layout.languages);
	let (mut x, mut y) = (20.0, families_y + 20.0);
	for (idx, family) in families.iter().enumerate() {
		surface.fill_rect(Rect::new(x, y - 8.0, 12.0, 12.0), meta.family_color(family).opaque());
		surface.fill_text(family, Point::new(x + 16.0, y), &entry);
		x += surface.measure_text(family, entry_font) + 35.0;
		if x > width - 100.0 && idx + 1 < families.len() {
			x = 20.0;
			y += 20.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;
	use crate::layout::HeatFilter;
	use crate::render::surface::{DrawCommand, DrawList};

	fn grid() -> (CompatibilityMatrix, HeatMapLayout) {
		let m = matrix_from(json!({
			"es": { "pt": 227, "de": 0 },
			"pt": { "es": 190 },
			"de": { "es": 120 },
		}));
		let layout = HeatMapLayout::for_matrix(&m, HeatFilter::All, 40, 320.0);
		(m, layout)
	}

	#[test]
	fn test_cells_follow_layout_order() {
		let (m, layout) = grid();
		assert_eq!(layout.languages, vec!["de", "pt", "es"]);
		let mut list = DrawList::default();
		paint_heat_map(&mut list, &layout, &m, None, 600.0, 800.0);

		let cells: Vec<&DrawCommand> = list
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::FillRect { rect, .. } if rect.width > 50.0))
			.collect();
		assert_eq!(cells.len(), 9);
		let color_at = |i: usize| match cells[i] {
			DrawCommand::FillRect { color, .. } => color.rgb,
			_ => unreachable!(),
		};
		assert_eq!(color_at(0), cell_color(0, true));
		assert_eq!(color_at(2), cell_color(120, false));
		assert_eq!(color_at(7), cell_color(227, false));
		assert_eq!(color_at(5), cell_color(190, false));
		assert_eq!(color_at(6), cell_color(0, false));
	}

	#[test]
	fn test_separators_and_labels() {
		let (m, layout) = grid();
		let mut list = DrawList::default();
		paint_heat_map(&mut list, &layout, &m, None, 600.0, 800.0);

		let lines = list
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
			.count();
		assert_eq!(lines, 2);
		let texts: Vec<&str> = list.texts().collect();
		assert_eq!(texts.iter().filter(|t| **t == "German").count(), 2);
		assert!(texts.contains(&"Romance"));
		assert!(texts.contains(&"Germanic"));
	}

	#[test]
	fn test_highlight_washes_row_and_column() {
		let (m, layout) = grid();
		let mut plain = DrawList::default();
		let mut lit = DrawList::default();
		paint_heat_map(&mut plain, &layout, &m, None, 600.0, 800.0);
		paint_heat_map(&mut lit, &layout, &m, Some((1, 2)), 600.0, 800.0);
		assert_eq!(lit.commands.len(), plain.commands.len() + 2);
	}
}
