//! Screen-space geometry for each view.
//!
//! Layouts are recomputed from scratch on every view switch, dataset switch
//! and resize. Each one doubles as the inverse mapping used for hit-testing.

pub mod circular;
pub mod heat;
pub mod histogram;
pub mod scatter;

pub use circular::{FamilyLayout, NetworkLayout};
pub use heat::{HeatFilter, HeatMapLayout};
pub use histogram::BarChartLayout;
pub use scatter::ScatterLayout;

/// A position in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, growing downward.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}

	/// Offset by `distance` along `angle` (radians, clockwise from +x).
	pub fn polar(self, angle: f64, distance: f64) -> Self {
		Self::new(self.x + angle.cos() * distance, self.y + angle.sin() * distance)
	}
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Rect {
	/// Rectangle with its top-left corner at `(x, y)`.
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Midpoint.
	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}
}

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Viewport {
	/// Viewport of `width` by `height`.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Midpoint of the area.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// The shorter side.
	pub fn min_dimension(&self) -> f64 {
		self.width.min(self.height)
	}
}
