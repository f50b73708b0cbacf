//! Heat map grid: language selection, cell colours and pixel mapping.

use super::{Point, Rect};
use crate::color::Rgb;
use crate::engine::{CompatibilityMatrix, metadata};

/// Languages kept by [`HeatFilter::Major`] by default.
pub const DEFAULT_MAJOR_COUNT: usize = 40;
/// Upper bound on the grid side, in pixels.
pub const MAX_MATRIX_SIZE: f64 = 1200.0;
/// Grids up to this many languages get room for labels.
pub const LABELLED_GRID_LIMIT: usize = 50;
/// Padding for grids of at most [`LABELLED_GRID_LIMIT`] languages.
pub const WIDE_LABEL_PADDING: f64 = 120.0;
/// Padding for larger grids.
pub const NARROW_LABEL_PADDING: f64 = 40.0;
/// Labels are only drawn when cells are wider than this.
pub const MIN_LABELLED_CELL: f64 = 20.0;

/// Fill of self pairs.
pub const DIAGONAL_COLOR: Rgb = Rgb::gray(200);
/// Fill of missing and zero scores.
pub const NO_DATA_COLOR: Rgb = Rgb::gray(240);

/// Which languages the heat map shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeatFilter {
	/// Every named language.
	All,
	/// The best connected languages only.
	#[default]
	Major,
}

impl HeatFilter {
	/// Identifier used in the markup.
	pub fn key(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Major => "major",
		}
	}
}

/// Languages shown in the grid, grouped by family and sorted by name within it.
pub fn select_languages(
	matrix: &CompatibilityMatrix,
	filter: HeatFilter,
	major_count: usize,
) -> Vec<String> {
	let mut languages = match filter {
		HeatFilter::All => matrix.named_languages().to_vec(),
		HeatFilter::Major => matrix.top_by_degree(major_count),
	};
	let meta = metadata();
	languages.sort_by(|a, b| {
		meta.family_of(a)
			.cmp(meta.family_of(b))
			.then_with(|| meta.label(a).cmp(meta.label(b)))
	});
	languages
}

/// Red → yellow → green ramp; diagonal and missing cells are gray.
pub fn cell_color(score: u8, is_diagonal: bool) -> Rgb {
	if is_diagonal {
		return DIAGONAL_COLOR;
	}
	if score == 0 {
		return NO_DATA_COLOR;
	}
	ramp_color(score as f64 / 255.0)
}

/// The colour ramp at `normalized` ∈ [0, 1], also used for the legend.
pub fn ramp_color(normalized: f64) -> Rgb {
	if normalized < 0.5 {
		let t = normalized * 2.0;
		Rgb::new(220, (50.0 + t * 180.0).floor() as u8, 50)
	} else {
		let t = (normalized - 0.5) * 2.0;
		Rgb::new(
			(220.0 - t * 180.0).floor() as u8,
			230,
			(50.0 + t * 30.0).floor() as u8,
		)
	}
}

/// Indices where the family changes from the previous language.
pub fn family_boundaries(ordered: &[String]) -> Vec<usize> {
	let meta = metadata();
	(1..ordered.len())
		.filter(|&i| meta.family_of(&ordered[i]) != meta.family_of(&ordered[i - 1]))
		.collect()
}

/// Square grid geometry: `label_padding` on every side around the cells.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatMapLayout {
	/// Row and column order.
	pub languages: Vec<String>,
	/// Room for labels on each side of the grid.
	pub label_padding: f64,
	/// Side of the cell area.
	pub matrix_size: f64,
	/// Side of one cell.
	pub cell_size: f64,
	/// Indices where a new family starts.
	pub boundaries: Vec<usize>,
}

impl HeatMapLayout {
	/// Grid for `languages` in a container `container_width` pixels wide.
	pub fn new(languages: Vec<String>, container_width: f64) -> Self {
		let matrix_size = (container_width - 20.0).clamp(0.0, MAX_MATRIX_SIZE);
		let label_padding = label_padding_for(languages.len());
		let cell_size = if languages.is_empty() {
			0.0
		} else {
			matrix_size / languages.len() as f64
		};
		let boundaries = family_boundaries(&languages);
		Self {
			languages,
			label_padding,
			matrix_size,
			cell_size,
			boundaries,
		}
	}

	/// Select the languages with `filter`, then lay them out.
	pub fn for_matrix(
		matrix: &CompatibilityMatrix,
		filter: HeatFilter,
		major_count: usize,
		container_width: f64,
	) -> Self {
		Self::new(select_languages(matrix, filter, major_count), container_width)
	}

	/// Number of rows, equal to the number of columns.
	pub fn len(&self) -> usize {
		self.languages.len()
	}

	/// True when no language is selected.
	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}

	/// Width and height of the grid including padding.
	pub fn canvas_size(&self) -> f64 {
		self.matrix_size + self.label_padding * 2.0
	}

	/// Whether cells are wide enough for language labels.
	pub fn shows_labels(&self) -> bool {
		self.cell_size > MIN_LABELLED_CELL
	}

	/// Pixel rectangle of a cell.
	pub fn cell_bounds(&self, row: usize, col: usize) -> Rect {
		Rect::new(
			self.label_padding + col as f64 * self.cell_size,
			self.label_padding + row as f64 * self.cell_size,
			self.cell_size,
			self.cell_size,
		)
	}

	/// `(row, col)` under a canvas position, `None` outside the grid.
	pub fn pixel_to_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
		if self.is_empty() {
			return None;
		}
		let index = |v: f64| -> Option<usize> {
			let adjusted = v - self.label_padding;
			if !(0.0..self.matrix_size).contains(&adjusted) {
				return None;
			}
			let i = (adjusted / self.cell_size).floor() as usize;
			(i < self.len()).then_some(i)
		};
		Some((index(y)?, index(x)?))
	}

	/// [`Self::pixel_to_cell`] for a [`Point`].
	pub fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
		self.pixel_to_cell(point.x, point.y)
	}
}

/// Dense grids skip labels, so they need less room.
pub fn label_padding_for(language_count: usize) -> f64 {
	if language_count <= LABELLED_GRID_LIMIT {
		WIDE_LABEL_PADDING
	} else {
		NARROW_LABEL_PADDING
	}
}

/// Families present in `languages`, alphabetically.
pub fn families_present(languages: &[String]) -> Vec<&'static str> {
	let meta = metadata();
	let mut families: Vec<&'static str> = languages.iter().map(|l| meta.family_of(l)).collect();
	families.sort_unstable();
	families.dedup();
	families
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::engine::matrix_from;

	fn codes(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("l{i}")).collect()
	}

	#[test]
	fn test_cell_colors() {
		assert_eq!(cell_color(0, false), NO_DATA_COLOR);
		assert_eq!(cell_color(200, true), DIAGONAL_COLOR);
		assert_eq!(cell_color(255, false), Rgb::new(40, 230, 80));
		assert_eq!(cell_color(128, false), Rgb::new(219, 230, 50));
		assert_eq!(cell_color(127, false), Rgb::new(220, 229, 50));
		assert_eq!(cell_color(1, false), Rgb::new(220, 51, 50));
	}

	#[test]
	fn test_select_major_languages() {
		let m = matrix_from(json!({
			"en": { "de": 200, "es": 180, "pt": 170, "xx": 1 },
			"de": { "en": 200, "nl": 220 },
			"pt": { "es": 227, "en": 170, "ca": 200 },
			"xx": { "en": 1, "de": 1, "pt": 1, "es": 1, "nl": 1 },
		}));
		let selected = select_languages(&m, HeatFilter::Major, 3);
		assert_eq!(selected, vec!["en", "de", "pt"]);
		for lang in &selected {
			assert!(m.named_languages().contains(lang));
		}

		let all = select_languages(&m, HeatFilter::All, 3);
		// Germanic (Dutch, English, German) then Romance (Catalan, Portuguese, Spanish)
		assert_eq!(all, vec!["nl", "en", "de", "ca", "pt", "es"]);
		assert_eq!(family_boundaries(&all), vec![3]);
	}

	#[test]
	fn test_major_ties_keep_payload_order() {
		let m = matrix_from(json!({
			"it": { "es": 1 },
			"fr": { "es": 1 },
		}));
		assert_eq!(select_languages(&m, HeatFilter::Major, 1), vec!["it"]);
	}

	#[test]
	fn test_major_selection_is_bounded() {
		let m = matrix_from(json!({ "en": { "de": 1 }, "de": { "en": 1 } }));
		assert_eq!(select_languages(&m, HeatFilter::Major, DEFAULT_MAJOR_COUNT).len(), 2);
		assert!(select_languages(&CompatibilityMatrix::default(), HeatFilter::Major, 40).is_empty());
	}

	#[test]
	fn test_label_padding() {
		assert_eq!(HeatMapLayout::new(codes(50), 800.0).label_padding, 120.0);
		assert_eq!(HeatMapLayout::new(codes(51), 800.0).label_padding, 40.0);
	}

	#[test]
	fn test_cell_round_trip() {
		for (n, width) in [(1, 300.0), (7, 517.0), (40, 1000.0), (85, 1400.0)] {
			let layout = HeatMapLayout::new(codes(n), width);
			for row in 0..n {
				for col in 0..n {
					let center = layout.cell_bounds(row, col).center();
					assert_eq!(layout.cell_at(center), Some((row, col)), "n={n} w={width}");
				}
			}
		}
	}

	#[test]
	fn test_pixel_to_cell_rejects_outside() {
		let layout = HeatMapLayout::new(codes(10), 420.0);
		let (pad, size) = (layout.label_padding, layout.matrix_size);
		assert_eq!(layout.pixel_to_cell(pad - 0.1, pad + 1.0), None);
		assert_eq!(layout.pixel_to_cell(pad + 1.0, pad + size), None);
		assert_eq!(layout.pixel_to_cell(pad, pad), Some((0, 0)));
		assert_eq!(layout.pixel_to_cell(pad + size - 0.01, pad), Some((0, 9)));
		assert_eq!(HeatMapLayout::new(Vec::new(), 420.0).pixel_to_cell(pad, pad), None);
	}

	#[test]
	fn test_families_present() {
		let langs: Vec<String> = ["es", "de", "pt", "eu"].iter().map(|s| s.to_string()).collect();
		assert_eq!(families_present(&langs), vec!["Germanic", "Other", "Romance"]);
	}
}
