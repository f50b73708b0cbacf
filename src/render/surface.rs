//! The drawing target shared by the browser canvas and tests.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgba;
use crate::layout::{Point, Rect};

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
	/// Text starts at the anchor.
	#[default]
	Left,
	/// Text is centred on the anchor.
	Center,
	/// Text ends at the anchor.
	Right,
}

impl TextAlign {
	fn as_css(self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Center => "center",
			Self::Right => "right",
		}
	}
}

/// Vertical text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
	/// The anchor sits on the baseline.
	#[default]
	Alphabetic,
	/// The anchor sits at mid-height.
	Middle,
}

impl TextBaseline {
	fn as_css(self) -> &'static str {
		match self {
			Self::Alphabetic => "alphabetic",
			Self::Middle => "middle",
		}
	}
}

/// How a piece of text is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	/// Fill colour.
	pub color: Rgba,
	/// CSS font shorthand.
	pub font: String,
	/// Horizontal anchoring.
	pub align: TextAlign,
	/// Vertical anchoring.
	pub baseline: TextBaseline,
	/// Radians, applied around the anchor point.
	pub rotation: f64,
}

impl TextStyle {
	/// Left-aligned, alphabetic baseline, unrotated.
	pub fn new(color: Rgba, font: impl Into<String>) -> Self {
		Self {
			color,
			font: font.into(),
			align: TextAlign::Left,
			baseline: TextBaseline::Alphabetic,
			rotation: 0.0,
		}
	}

	/// With horizontal anchoring.
	pub fn align(mut self, align: TextAlign) -> Self {
		self.align = align;
		self
	}

	/// With vertical anchoring.
	pub fn baseline(mut self, baseline: TextBaseline) -> Self {
		self.baseline = baseline;
		self
	}

	/// With a rotation in radians.
	pub fn rotated(mut self, rotation: f64) -> Self {
		self.rotation = rotation;
		self
	}
}

/// Line colour, width and optional dash pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	/// Line colour.
	pub color: Rgba,
	/// Line width in pixels.
	pub width: f64,
	/// `(dash, gap)` lengths.
	pub dash: Option<(f64, f64)>,
}

impl Stroke {
	/// A continuous line.
	pub fn solid(color: Rgba, width: f64) -> Self {
		Self {
			color,
			width,
			dash: None,
		}
	}

	/// The same line, dashed.
	pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
		self.dash = Some((dash, gap));
		self
	}
}

/// The 2D drawing primitives every view is painted with.
pub trait Surface {
	/// Reset the drawing area to `width` by `height`.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill an axis-aligned rectangle.
	fn fill_rect(&mut self, rect: Rect, color: Rgba);
	/// Draw a straight segment.
	fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);
	/// Fill a disc.
	fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
	/// Draw `text` anchored at `at`.
	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
	/// Rendered width of `text` in `font`.
	fn measure_text(&mut self, text: &str, font: &str) -> f64;
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rect(&mut self, rect: Rect, color: Rgba) {
		self.set_fill_style_str(&color.to_string());
		CanvasRenderingContext2d::fill_rect(self, rect.x, rect.y, rect.width, rect.height);
	}

	fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
		self.set_stroke_style_str(&stroke.color.to_string());
		self.set_line_width(stroke.width);
		if let Some((dash, gap)) = stroke.dash {
			let _ = self.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
		}
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
		if stroke.dash.is_some() {
			let _ = self.set_line_dash(&js_sys::Array::new());
		}
	}

	fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
		self.set_fill_style_str(&color.to_string());
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, TAU);
		self.fill();
	}

	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
		self.save();
		let _ = self.translate(at.x, at.y);
		if style.rotation != 0.0 {
			let _ = self.rotate(style.rotation);
		}
		self.set_fill_style_str(&style.color.to_string());
		self.set_font(&style.font);
		self.set_text_align(style.align.as_css());
		self.set_text_baseline(style.baseline.as_css());
		let _ = CanvasRenderingContext2d::fill_text(self, text, 0.0, 0.0);
		self.restore();
	}

	fn measure_text(&mut self, text: &str, font: &str) -> f64 {
		self.set_font(font);
		CanvasRenderingContext2d::measure_text(self, text)
			.map(|m| m.width())
			.unwrap_or(0.0)
	}
}

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// [`Surface::clear`].
	Clear {
		/// Cleared width.
		width: f64,
		/// Cleared height.
		height: f64,
	},
	/// [`Surface::fill_rect`].
	FillRect {
		/// Filled area.
		rect: Rect,
		/// Fill colour.
		color: Rgba,
	},
	/// [`Surface::stroke_line`].
	Line {
		/// Start point.
		from: Point,
		/// End point.
		to: Point,
		/// Line style.
		stroke: Stroke,
	},
	/// [`Surface::fill_circle`].
	FillCircle {
		/// Disc centre.
		center: Point,
		/// Disc radius.
		radius: f64,
		/// Fill colour.
		color: Rgba,
	},
	/// [`Surface::fill_text`].
	Text {
		/// Drawn string.
		text: String,
		/// Anchor point.
		at: Point,
		/// Font and anchoring.
		style: TextStyle,
	},
}

/// A surface that records draw calls instead of rasterizing them.
///
/// Text width is estimated from the character count.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
	/// Primitives in call order.
	pub commands: Vec<DrawCommand>,
}

impl DrawList {
	/// Every drawn string, in order.
	pub fn texts(&self) -> impl Iterator<Item = &str> {
		self.commands.iter().filter_map(|c| match c {
			DrawCommand::Text { text, .. } => Some(text.as_str()),
			_ => None,
		})
	}
}

impl Surface for DrawList {
	fn clear(&mut self, width: f64, height: f64) {
		self.commands.clear();
		self.commands.push(DrawCommand::Clear { width, height });
	}

	fn fill_rect(&mut self, rect: Rect, color: Rgba) {
		self.commands.push(DrawCommand::FillRect { rect, color });
	}

	fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
		self.commands.push(DrawCommand::Line {
			from,
			to,
			stroke: *stroke,
		});
	}

	fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
		self.commands.push(DrawCommand::FillCircle {
			center,
			radius,
			color,
		});
	}

	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
		self.commands.push(DrawCommand::Text {
			text: text.to_string(),
			at,
			style: style.clone(),
		});
	}

	fn measure_text(&mut self, text: &str, _font: &str) -> f64 {
		text.chars().count() as f64 * 6.0
	}
}
