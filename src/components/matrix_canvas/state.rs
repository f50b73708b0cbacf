use crate::scene::{Hit, Scene, Tooltip};

/// Result of moving the pointer over the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerUpdate {
	pub repaint: bool,
	pub tooltip: Option<Tooltip>,
}

/// The scene on screen and what the pointer last touched.
#[derive(Default)]
pub struct MatrixCanvasState {
	pub scene: Option<Scene>,
	hovered: Option<Hit>,
}

impl MatrixCanvasState {
	pub fn replace_scene(&mut self, scene: Option<Scene>) {
		self.scene = scene;
		self.hovered = None;
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) -> PointerUpdate {
		let Some(scene) = self.scene.as_mut() else {
			return PointerUpdate::default();
		};
		let hit = scene.hit_test(x, y);
		let repaint = scene.set_hover(hit.as_ref());
		let tooltip = hit.as_ref().map(|h| scene.tooltip(h));
		self.hovered = hit;
		PointerUpdate { repaint, tooltip }
	}

	pub fn pointer_left(&mut self) -> bool {
		self.hovered = None;
		self.scene.as_mut().is_some_and(|scene| scene.set_hover(None))
	}

	pub fn clicked(&self, x: f64, y: f64) -> Option<Hit> {
		self.scene.as_ref()?.hit_test(x, y)
	}

	pub fn hovered(&self) -> Option<&Hit> {
		self.hovered.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use serde_json::json;

	use super::*;
	use crate::config::ViewerConfig;
	use crate::engine::matrix_from;
	use crate::layout::{HeatFilter, Viewport};
	use crate::session::Session;

	fn heat_state() -> MatrixCanvasState {
		let m = matrix_from(json!({
			"es": { "pt": 227 },
			"pt": { "es": 190 },
		}));
		let session = Session::empty("main")
			.with_dataset("main", Arc::new(m))
			.with_heat_filter(HeatFilter::All);
		let mut state = MatrixCanvasState::default();
		state.replace_scene(Scene::build(
			&session,
			&ViewerConfig::default(),
			Viewport::new(420.0, 400.0),
		));
		state
	}

	#[test]
	fn test_hover_repaints_only_on_change() {
		let mut state = heat_state();
		// 400px grid, two 200px cells after 120px of padding
		let first = state.pointer_moved(130.0, 350.0);
		assert!(first.repaint);
		assert_eq!(first.tooltip.unwrap().detail, "227/255");
		assert!(!state.pointer_moved(140.0, 360.0).repaint);
		assert!(state.hovered().is_some());

		let outside = state.pointer_moved(5.0, 5.0);
		assert!(outside.repaint);
		assert!(outside.tooltip.is_none());
		assert!(!state.pointer_left());
	}

	#[test]
	fn test_click_reports_cell() {
		let state = heat_state();
		match state.clicked(350.0, 130.0) {
			Some(Hit::Cell { source, target, .. }) => {
				assert_eq!((source.as_str(), target.as_str()), ("pt", "es"));
			}
			other => panic!("unexpected hit {other:?}"),
		}
		assert!(MatrixCanvasState::default().clicked(0.0, 0.0).is_none());
	}
}
