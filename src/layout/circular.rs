//! Circular placements for the network and family views.

use std::f64::consts::TAU;

use super::{Point, Viewport};
use crate::engine::stats::family_pair_average;
use crate::engine::{CompatibilityMatrix, Family, metadata};

/// Languages shown in the network view by default.
pub const NETWORK_NODE_COUNT: usize = 20;
/// Circle radius as a share of the smaller viewport side.
pub const NETWORK_RADIUS_RATIO: f64 = 0.42;
/// Radius of a drawn language node.
pub const NETWORK_NODE_RADIUS: f64 = 10.0;
/// Label offset outward from the node centre.
pub const NETWORK_LABEL_DISTANCE: f64 = 25.0;
/// Pointer tolerance around a node.
pub const HIT_RADIUS: f64 = 14.0;

/// Family circle radius as a share of the smaller viewport side.
pub const FAMILY_RADIUS_RATIO: f64 = 0.38;
/// Radius of a family disc, also its hit area.
pub const FAMILY_DISC_RADIUS: f64 = 50.0;

/// Angle of slot `index` out of `count` evenly spaced slots.
///
/// Callers only ask for slots that exist, so `count` is never 0 here.
fn slot_angle(index: usize, count: usize) -> f64 {
	index as f64 / count as f64 * TAU
}

fn place_on_circle(count: usize, center: Point, radius: f64) -> Vec<(Point, f64)> {
	(0..count)
		.map(|i| {
			let angle = slot_angle(i, count);
			(center.polar(angle, radius), angle)
		})
		.collect()
}

/// A language placed on the network circle.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	/// Language code.
	pub code: String,
	/// Node centre.
	pub position: Point,
	/// Radians, clockwise from the positive x axis.
	pub angle: f64,
	/// Anchor of the node label.
	pub label_position: Point,
}

/// A line between two placed nodes, weighted by the `from → to` score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
	/// Index of the source node.
	pub from: usize,
	/// Index of the target node.
	pub to: usize,
	/// Score or mean score behind the edge.
	pub weight: f64,
	/// `weight / 255`, clamped to `[0, 1]`.
	pub opacity: f64,
	/// `1 + 2 * opacity`.
	pub line_width: f64,
}

impl WeightedEdge {
	fn new(from: usize, to: usize, weight: f64) -> Self {
		let opacity = (weight / 255.0).clamp(0.0, 1.0);
		Self {
			from,
			to,
			weight,
			opacity,
			line_width: 1.0 + opacity * 2.0,
		}
	}
}

/// The best-connected languages evenly spaced on one circle.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkLayout {
	/// Centre of the circle.
	pub center: Point,
	/// Radius of the circle.
	pub radius: f64,
	/// Placed languages, best connected first.
	pub nodes: Vec<NetworkNode>,
	/// One edge per unordered pair with a non-zero score.
	pub edges: Vec<WeightedEdge>,
}

impl NetworkLayout {
	/// Place the `node_count` best-connected languages.
	pub fn new(matrix: &CompatibilityMatrix, viewport: Viewport, node_count: usize) -> Self {
		let codes = matrix.top_by_degree(node_count);
		let center = viewport.center();
		let radius = viewport.min_dimension() * NETWORK_RADIUS_RATIO;

		let slots = place_on_circle(codes.len(), center, radius);
		let nodes: Vec<NetworkNode> = codes
			.into_iter()
			.zip(slots)
			.map(|(code, (position, angle))| NetworkNode {
				code,
				position,
				angle,
				label_position: position.polar(angle, NETWORK_LABEL_DISTANCE),
			})
			.collect();

		let mut edges = Vec::new();
		for (i, a) in nodes.iter().enumerate() {
			for (j, b) in nodes.iter().enumerate().skip(i + 1) {
				match matrix.score(&a.code, &b.code) {
					Some(score) if score > 0 => edges.push(WeightedEdge::new(i, j, score as f64)),
					_ => {}
				}
			}
		}

		Self {
			center,
			radius,
			nodes,
			edges,
		}
	}

	/// Node under `point`, if any.
	pub fn node_at(&self, point: Point) -> Option<usize> {
		self.nodes
			.iter()
			.position(|n| n.position.distance(point) < HIT_RADIUS)
	}
}

/// A family disc on the family circle.
#[derive(Clone, Debug)]
pub struct FamilyNode {
	/// The family drawn here.
	pub family: &'static Family,
	/// Disc centre.
	pub position: Point,
}

/// Every registered family on a circle, linked by mean cross-family score.
#[derive(Clone, Debug)]
pub struct FamilyLayout {
	/// Centre of the circle.
	pub center: Point,
	/// Radius of the circle.
	pub radius: f64,
	/// One disc per registered family, in registration order.
	pub nodes: Vec<FamilyNode>,
	/// Links weighted by [`family_pair_average`].
	pub edges: Vec<WeightedEdge>,
}

impl FamilyLayout {
	/// Place every registered family.
	pub fn new(matrix: &CompatibilityMatrix, viewport: Viewport) -> Self {
		let families = metadata().families();
		let center = viewport.center();
		let radius = viewport.min_dimension() * FAMILY_RADIUS_RATIO;

		let nodes: Vec<FamilyNode> = families
			.iter()
			.zip(place_on_circle(families.len(), center, radius))
			.map(|(family, (position, _))| FamilyNode { family, position })
			.collect();

		let mut edges = Vec::new();
		for (i, a) in nodes.iter().enumerate() {
			for (j, b) in nodes.iter().enumerate().skip(i + 1) {
				let weight = family_pair_average(matrix, a.family.name, b.family.name);
				if weight > 0.0 {
					edges.push(WeightedEdge::new(i, j, weight));
				}
			}
		}

		Self {
			center,
			radius,
			nodes,
			edges,
		}
	}

	/// Family disc under `point`, if any.
	pub fn family_at(&self, point: Point) -> Option<usize> {
		self.nodes
			.iter()
			.position(|n| n.position.distance(point) < FAMILY_DISC_RADIUS)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;

	const VIEW: Viewport = Viewport::new(1000.0, 800.0);

	#[test]
	fn test_network_circle_placement() {
		let m = matrix_from(json!({
			"en": { "de": 255, "fr": 0 },
			"de": { "en": 100 },
			"fr": { "en": 50 },
		}));
		let layout = NetworkLayout::new(&m, VIEW, NETWORK_NODE_COUNT);
		assert_eq!(layout.nodes.len(), 3);
		assert!((layout.radius - 336.0).abs() < 1e-9);
		for node in &layout.nodes {
			assert!((node.position.distance(layout.center) - layout.radius).abs() < 1e-6);
		}
		assert_eq!(layout.nodes[0].code, "en");
		assert_eq!(layout.nodes[0].position, Point::new(836.0, 400.0));
		// en→de is drawn, en→fr has no signal, de→fr is absent
		assert_eq!(layout.edges.len(), 1);
		assert_eq!(layout.edges[0].opacity, 1.0);
		assert_eq!(layout.edges[0].line_width, 3.0);
	}

	#[test]
	fn test_network_small_inputs() {
		let empty = NetworkLayout::new(&CompatibilityMatrix::default(), VIEW, NETWORK_NODE_COUNT);
		assert!(empty.nodes.is_empty());
		assert!(empty.edges.is_empty());

		let single = matrix_from(json!({ "en": {} }));
		let layout = NetworkLayout::new(&single, VIEW, NETWORK_NODE_COUNT);
		assert_eq!(layout.nodes.len(), 1);
		assert!(layout.nodes[0].position.x.is_finite());
		assert_eq!(layout.node_at(layout.nodes[0].position), Some(0));
		assert_eq!(layout.node_at(layout.center), None);
	}

	#[test]
	fn test_network_caps_node_count() {
		let m = matrix_from(json!({
			"en": { "de": 1, "fr": 1, "es": 1 },
			"de": { "en": 1 },
		}));
		let layout = NetworkLayout::new(&m, VIEW, 2);
		let codes: Vec<&str> = layout.nodes.iter().map(|n| n.code.as_str()).collect();
		assert_eq!(codes, vec!["en", "de"]);
		assert!((layout.nodes[1].angle - std::f64::consts::PI).abs() < 1e-9);
	}

	#[test]
	fn test_network_degree_ties_keep_payload_order() {
		let m = matrix_from(json!({
			"it": { "es": 1 },
			"fr": { "es": 1 },
		}));
		let layout = NetworkLayout::new(&m, VIEW, 1);
		assert_eq!(layout.nodes[0].code, "it");
	}

	#[test]
	fn test_family_layout_edges() {
		let m = matrix_from(json!({
			"es": { "cs": 102 },
			"cs": { "es": 250 },
		}));
		let layout = FamilyLayout::new(&m, VIEW);
		assert_eq!(layout.nodes.len(), metadata().families().len());
		assert!((layout.radius - 304.0).abs() < 1e-9);
		let romance = layout.nodes.iter().position(|n| n.family.name == "Romance").unwrap();
		let slavic = layout.nodes.iter().position(|n| n.family.name == "Slavic").unwrap();
		assert_eq!(layout.edges.len(), 1);
		let edge = layout.edges[0];
		assert_eq!((edge.from, edge.to), (romance, slavic));
		// only the earlier → later family direction is averaged
		assert!((edge.opacity - 0.4).abs() < 1e-9);
		assert_eq!(layout.family_at(layout.nodes[slavic].position), Some(slavic));
	}
}
