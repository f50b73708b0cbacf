//! Colours shared by the layouts and painters.

use std::fmt;

/// An opaque 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
}

impl Rgb {
	/// Colour from its channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Equal channels.
	pub const fn gray(v: u8) -> Self {
		Self::new(v, v, v)
	}

	/// Parse `#rrggbb` or `#rgb`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let hex = hex.strip_prefix('#')?;
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match hex.len() {
			6 => Some(Self::new(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			3 => {
				let (r, g, b) = (channel(&hex[0..1])?, channel(&hex[1..2])?, channel(&hex[2..3])?);
				Some(Self::new(r * 17, g * 17, b * 17))
			}
			_ => None,
		}
	}

	/// The same colour at opacity `a`.
	pub const fn alpha(self, a: f64) -> Rgba {
		Rgba { rgb: self, a }
	}

	/// Fully opaque [`Rgba`].
	pub const fn opaque(self) -> Rgba {
		self.alpha(1.0)
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

/// An RGB colour with an opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Colour channels.
	pub rgb: Rgb,
	/// Opacity.
	pub a: f64,
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.a >= 1.0 {
			return fmt::Display::fmt(&self.rgb, f);
		}
		write!(
			f,
			"rgba({}, {}, {}, {})",
			self.rgb.r,
			self.rgb.g,
			self.rgb.b,
			self.a.clamp(0.0, 1.0)
		)
	}
}

/// Body text.
pub const TEXT: Rgb = Rgb::new(0x33, 0x33, 0x33);
/// Secondary text and axes.
pub const MUTED_TEXT: Rgb = Rgb::new(0x66, 0x66, 0x66);
/// Highlights and hover outlines.
pub const ACCENT: Rgb = Rgb::new(102, 126, 234);
/// Scores of 200 and above.
pub const QUALITY_HIGH: Rgb = Rgb::new(0x2e, 0xa4, 0x43);
/// Scores from 150.
pub const QUALITY_MEDIUM: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
/// Scores from 100 in the histogram.
pub const QUALITY_LOW_MEDIUM: Rgb = Rgb::new(0xe6, 0x7e, 0x22);
/// Everything lower.
pub const QUALITY_LOW: Rgb = Rgb::new(0xdc, 0x26, 0x26);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hex_parsing() {
		assert_eq!(Rgb::from_hex("#667eea"), Some(ACCENT));
		assert_eq!(Rgb::from_hex("#999"), Some(Rgb::gray(0x99)));
		assert_eq!(Rgb::from_hex("667eea"), None);
		assert_eq!(Rgb::from_hex("#12345"), None);
	}

	#[test]
	fn test_css_output() {
		assert_eq!(ACCENT.to_string(), "rgb(102, 126, 234)");
		assert_eq!(ACCENT.alpha(0.5).to_string(), "rgba(102, 126, 234, 0.5)");
		assert_eq!(ACCENT.opaque().to_string(), "rgb(102, 126, 234)");
	}
}
