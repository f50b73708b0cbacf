//! Painters for the language network and the family comparison.

use super::surface::{Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::color::{ACCENT, TEXT};
use crate::engine::metadata;
use crate::layout::circular::{FAMILY_DISC_RADIUS, NETWORK_NODE_RADIUS, WeightedEdge};
use crate::layout::{FamilyLayout, NetworkLayout, Point};

const FAMILY_DISC_ALPHA: f64 = 0.6;

fn edge_stroke(edge: &WeightedEdge) -> Stroke {
	Stroke::solid(ACCENT.alpha(edge.opacity), edge.line_width)
}

fn paint_edges<S: Surface>(
	surface: &mut S,
	edges: &[WeightedEdge],
	position: impl Fn(usize) -> Point,
) {
	for edge in edges {
		surface.stroke_line(position(edge.from), position(edge.to), &edge_stroke(edge));
	}
}

/// Edges first so that nodes and labels sit on top.
pub fn paint_network<S: Surface>(surface: &mut S, layout: &NetworkLayout, width: f64, height: f64) {
	surface.clear(width, height);
	paint_edges(surface, &layout.edges, |i| layout.nodes[i].position);

	let meta = metadata();
	let label = TextStyle::new(TEXT.opaque(), "bold 13px Arial")
		.align(TextAlign::Center)
		.baseline(TextBaseline::Middle);
	for node in &layout.nodes {
		let color = meta.family_color(meta.family_of(&node.code));
		surface.fill_circle(node.position, NETWORK_NODE_RADIUS, color.opaque());
		surface.fill_text(meta.label(&node.code), node.label_position, &label);
	}
}

/// Translucent family discs, then the cross-family edges over them.
pub fn paint_families<S: Surface>(surface: &mut S, layout: &FamilyLayout, width: f64, height: f64) {
	surface.clear(width, height);

	let name = TextStyle::new(TEXT.opaque(), "bold 16px Arial")
		.align(TextAlign::Center)
		.baseline(TextBaseline::Middle);
	let count = TextStyle {
		font: "12px Arial".to_string(),
		..name.clone()
	};
	for node in &layout.nodes {
		let Point { x, y } = node.position;
		surface.fill_circle(
			node.position,
			FAMILY_DISC_RADIUS,
			node.family.color.alpha(FAMILY_DISC_ALPHA),
		);
		surface.fill_text(node.family.name, Point::new(x, y - 5.0), &name);
		surface.fill_text(
			&format!("{} languages", node.family.languages.len()),
			Point::new(x, y + 15.0),
			&count,
		);
	}

	paint_edges(surface, &layout.edges, |i| layout.nodes[i].position);
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::{CompatibilityMatrix, matrix_from};
	use crate::layout::Viewport;
	use crate::layout::circular::NETWORK_NODE_COUNT;
	use crate::render::surface::{DrawCommand, DrawList};

	const VIEW: Viewport = Viewport::new(1000.0, 800.0);

	#[test]
	fn test_network_draws_edges_under_nodes() {
		let m = matrix_from(json!({
			"en": { "de": 255, "fr": 51 },
			"de": { "en": 100 },
			"fr": { "en": 50 },
		}));
		let layout = NetworkLayout::new(&m, VIEW, NETWORK_NODE_COUNT);
		let mut list = DrawList::default();
		paint_network(&mut list, &layout, VIEW.width, VIEW.height);

		assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
		let first_node = list
			.commands
			.iter()
			.position(|c| matches!(c, DrawCommand::FillCircle { .. }))
			.unwrap();
		let last_edge = list
			.commands
			.iter()
			.rposition(|c| matches!(c, DrawCommand::Line { .. }))
			.unwrap();
		assert!(last_edge < first_node);

		let widths: Vec<f64> = list
			.commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Line { stroke, .. } => Some(stroke.width),
				_ => None,
			})
			.collect();
		assert_eq!(widths.len(), 2);
		assert_eq!(widths[0], 3.0);
		assert!((widths[1] - 1.4).abs() < 1e-9);
		let texts: Vec<&str> = list.texts().collect();
		assert_eq!(texts, vec!["English", "German", "French"]);
	}

	#[test]
	fn test_empty_network_only_clears() {
		let layout = NetworkLayout::new(&CompatibilityMatrix::default(), VIEW, NETWORK_NODE_COUNT);
		let mut list = DrawList::default();
		paint_network(&mut list, &layout, VIEW.width, VIEW.height);
		assert_eq!(list.commands.len(), 1);
	}

	#[test]
	fn test_family_discs_and_counts() {
		let layout = FamilyLayout::new(&CompatibilityMatrix::default(), VIEW);
		let mut list = DrawList::default();
		paint_families(&mut list, &layout, VIEW.width, VIEW.height);

		let discs = list
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::FillCircle { radius, color, .. } if *radius == 50.0 && color.a == 0.6))
			.count();
		assert_eq!(discs, metadata().families().len());
		let texts: Vec<&str> = list.texts().collect();
		assert_eq!(texts[0], "Germanic");
		assert_eq!(texts[1], "14 languages");
		assert!(!list.commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
	}
}
