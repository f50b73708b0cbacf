use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::state::MatrixCanvasState;
use crate::config::ViewerConfig;
use crate::layout::Viewport;
use crate::scene::{Hit, Scene, Tooltip};
use crate::session::Session;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 600.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn container_viewport(canvas: &HtmlCanvasElement) -> Viewport {
	canvas
		.parent_element()
		.map(|p| Viewport::new(p.client_width() as f64, p.client_height() as f64))
		.filter(|v| v.width > 0.0)
		.unwrap_or(Viewport::new(FALLBACK_WIDTH, FALLBACK_HEIGHT))
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn repaint(canvas: &HtmlCanvasElement, scene: &Scene) {
	match context_2d(canvas) {
		Some(mut ctx) => scene.paint(&mut ctx),
		None => log::error!("Canvas 2D context unavailable"),
	}
}

/// Floating tooltip anchored next to the pointer.
#[derive(Clone, Debug, PartialEq)]
struct TooltipAt {
	x: f64,
	y: f64,
	tooltip: Tooltip,
}

#[component]
pub fn MatrixCanvas(
	#[prop(into)] session: Signal<Session>,
	config: ViewerConfig,
	#[prop(into)] on_select: Callback<Hit>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<MatrixCanvasState>> = Rc::new(RefCell::new(MatrixCanvasState::default()));
	let resize_tick = RwSignal::new(0u32);
	let tooltip = RwSignal::new(None::<TooltipAt>);
	let pointer_over_hit = RwSignal::new(false);

	let resize = window_event_listener(leptos::ev::resize, move |_| {
		resize_tick.update(|t| *t = t.wrapping_add(1));
	});
	on_cleanup(move || resize.remove());

	let state_paint = state.clone();
	Effect::new(move |_| {
		let session = session.get();
		resize_tick.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let scene = Scene::build(&session, &config, container_viewport(&canvas));
		if let Some(ref scene) = scene {
			let (w, h) = scene.size();
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			repaint(&canvas, scene);
		}
		state_paint.borrow_mut().replace_scene(scene);
		tooltip.set(None);
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);

		let mut s = state_mm.borrow_mut();
		let update = s.pointer_moved(x, y);
		if update.repaint {
			if let Some(ref scene) = s.scene {
				repaint(&canvas, scene);
			}
		}
		pointer_over_hit.set(s.hovered().is_some());
		tooltip.set(update.tooltip.map(|tooltip| TooltipAt {
			x: ev.client_x() as f64 + 10.0,
			y: ev.client_y() as f64 - 30.0,
			tooltip,
		}));
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(hit) = state_click.borrow().clicked(x, y) {
			on_select.run(hit);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut s = state_ml.borrow_mut();
		if s.pointer_left() {
			if let (Some(canvas), Some(scene)) = (canvas_ref.get(), s.scene.as_ref()) {
				let canvas: HtmlCanvasElement = canvas.into();
				repaint(&canvas, scene);
			}
		}
		pointer_over_hit.set(false);
		tooltip.set(None);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="matrix-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			on:mouseleave=on_mouseleave
			style:display="block"
			style:cursor=move || if pointer_over_hit.get() { "pointer" } else { "default" }
		/>
		{move || {
			tooltip
				.get()
				.map(|TooltipAt { x, y, tooltip }| {
					let class = tooltip.quality.map(|q| q.css_class()).unwrap_or("");
					view! {
						<div
							class="tooltip"
							style:position="fixed"
							style:left=format!("{x}px")
							style:top=format!("{y}px")
						>
							<strong>{tooltip.heading}</strong>
							<br />
							<span class=class>{tooltip.detail}</span>
						</div>
					}
				})
		}}
	}
}

