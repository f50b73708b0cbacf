//! Bar chart geometry for the score distribution.

use super::{Rect, Viewport};
use crate::engine::stats::{BUCKET_COUNT, bucket_range};

/// Space above the bars for the title.
const TOP_MARGIN: f64 = 100.0;
/// Distance from the bottom edge to the x axis.
pub const AXIS_OFFSET: f64 = 60.0;
const BAR_GAP: f64 = 2.0;
/// Counts above this share of the tallest bar get a label.
const LABEL_SHARE: f64 = 0.1;

/// One score bucket of the distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
	/// Bucket index.
	pub bucket: usize,
	/// Scores in the bucket.
	pub count: usize,
	/// Inclusive score range.
	pub range: (u8, u8),
	/// Bar rectangle, standing on the baseline.
	pub rect: Rect,
	/// Whether the count is printed above the bar.
	pub labelled: bool,
}

/// One bar per score bucket, scaled to the tallest bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
	/// Chart area.
	pub viewport: Viewport,
	/// y of the x axis.
	pub baseline: f64,
	/// Horizontal slot per bucket, gaps included.
	pub bar_width: f64,
	/// Bars in bucket order.
	pub bars: Vec<Bar>,
}

impl BarChartLayout {
	/// Scale `buckets` into `viewport`.
	pub fn new(buckets: &[usize; BUCKET_COUNT], viewport: Viewport) -> Self {
		let bar_width = viewport.width / BUCKET_COUNT as f64;
		let chart_height = (viewport.height - TOP_MARGIN).max(0.0);
		let baseline = viewport.height - AXIS_OFFSET;
		let max_count = buckets.iter().copied().max().unwrap_or(0);

		let bars = buckets
			.iter()
			.enumerate()
			.map(|(bucket, &count)| {
				let height = if max_count == 0 {
					0.0
				} else {
					count as f64 / max_count as f64 * chart_height
				};
				let x = bucket as f64 * bar_width;
				Bar {
					bucket,
					count,
					range: bucket_range(bucket),
					rect: Rect::new(
						x + BAR_GAP,
						baseline - height,
						(bar_width - BAR_GAP * 2.0).max(0.0),
						height,
					),
					labelled: count as f64 > max_count as f64 * LABEL_SHARE,
				}
			})
			.collect();

		Self {
			viewport,
			baseline,
			bar_width,
			bars,
		}
	}

	/// Bucket whose bar is under the pointer.
	pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
		if !(0.0..self.viewport.width).contains(&x) || y > self.baseline {
			return None;
		}
		let bucket = (x / self.bar_width).floor() as usize;
		let bar = self.bars.get(bucket)?;
		(y >= bar.rect.y).then_some(bucket)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bars_scale_to_tallest() {
		let mut buckets = [0; BUCKET_COUNT];
		buckets[0] = 5;
		buckets[20] = 10;
		buckets[25] = 1;
		let chart = BarChartLayout::new(&buckets, Viewport::new(520.0, 600.0));
		assert_eq!(chart.bars.len(), BUCKET_COUNT);
		assert_eq!(chart.bar_width, 20.0);
		assert_eq!(chart.bars[20].rect.height, 500.0);
		assert_eq!(chart.bars[0].rect.height, 250.0);
		assert_eq!(chart.bars[20].rect.y, 40.0);
		assert!(chart.bars[0].labelled);
		assert!(!chart.bars[25].labelled);
		assert_eq!(chart.bars[25].range, (250, 255));
		assert_eq!(chart.bar_at(410.0, 300.0), Some(20));
		assert_eq!(chart.bar_at(10.0, 100.0), None);
	}

	#[test]
	fn test_empty_distribution() {
		let chart = BarChartLayout::new(&[0; BUCKET_COUNT], Viewport::new(520.0, 600.0));
		assert!(chart.bars.iter().all(|b| b.rect.height == 0.0 && !b.labelled));
	}
}
