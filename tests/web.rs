//! Browser smoke tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use lang_compat_canvas::config::ViewerConfig;
use lang_compat_canvas::engine::CompatibilityMatrix;
use lang_compat_canvas::layout::Viewport;
use lang_compat_canvas::scene::Scene;
use lang_compat_canvas::session::{Session, View};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAYLOAD: &str = r#"{
	"es": { "pt": 227, "ca": 220, "en": 180 },
	"pt": { "es": 190, "en": 170 },
	"en": { "es": 200, "pt": 160 }
}"#;

fn canvas_context() -> (HtmlCanvasElement, CanvasRenderingContext2d) {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
	let ctx = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into::<CanvasRenderingContext2d>()
		.unwrap();
	(canvas, ctx)
}

#[wasm_bindgen_test]
fn paints_every_canvas_view() {
	let matrix = Arc::new(CompatibilityMatrix::from_json(PAYLOAD).unwrap());
	let config = ViewerConfig::default();
	let (canvas, mut ctx) = canvas_context();

	for view in View::ALL.into_iter().filter(|v| v.uses_canvas()) {
		let session = Session::empty("perplexity")
			.with_dataset("perplexity", Arc::clone(&matrix))
			.with_view(view);
		let scene = Scene::build(&session, &config, Viewport::new(600.0, 400.0)).unwrap();
		let (w, h) = scene.size();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		scene.paint(&mut ctx);
	}
}

#[wasm_bindgen_test]
fn config_without_meta_tag_is_default() {
	assert_eq!(ViewerConfig::from_document(), ViewerConfig::default());
}
