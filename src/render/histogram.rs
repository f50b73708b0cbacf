//! Score distribution painter.

use super::surface::{Stroke, Surface, TextAlign, TextStyle};
use crate::color::{
	ACCENT, MUTED_TEXT, QUALITY_HIGH, QUALITY_LOW, QUALITY_LOW_MEDIUM, QUALITY_MEDIUM, Rgb, TEXT,
};
use crate::engine::stats::{DistributionSummary, HIGH_QUALITY, MEDIUM_QUALITY, bucket_range};
use crate::layout::{BarChartLayout, Point};

/// Chart heading.
pub const TITLE: &str = "Score Distribution Across All Language Pairs";
const LOW_MEDIUM_QUALITY: u8 = 100;
/// Every n-th bucket gets an x-axis label.
const LABEL_EVERY: usize = 5;

/// Bar colour keyed on the lower bound of the bucket.
pub fn bucket_color(low: u8) -> Rgb {
	if low >= HIGH_QUALITY {
		QUALITY_HIGH
	} else if low >= MEDIUM_QUALITY {
		QUALITY_MEDIUM
	} else if low >= LOW_MEDIUM_QUALITY {
		QUALITY_LOW_MEDIUM
	} else {
		QUALITY_LOW
	}
}

/// `Avg: 143 | Median: 150 | Mode: 150-159`
pub fn summary_line(summary: &DistributionSummary) -> String {
	let (low, high) = bucket_range(summary.mode_bucket);
	format!(
		"Avg: {} | Median: {} | Mode: {low}-{high}",
		summary.average, summary.median
	)
}

/// Bars, axis labels and the summary line.
pub fn paint_histogram<S: Surface>(
	surface: &mut S,
	chart: &BarChartLayout,
	summary: Option<&DistributionSummary>,
) {
	let (width, height) = (chart.viewport.width, chart.viewport.height);
	surface.clear(width, height);
	surface.fill_text(
		TITLE,
		Point::new(width / 2.0, 30.0),
		&TextStyle::new(TEXT.opaque(), "bold 16px Arial").align(TextAlign::Center),
	);

	let count_style = TextStyle::new(TEXT.opaque(), "10px Arial").align(TextAlign::Center);
	let axis_label = TextStyle::new(MUTED_TEXT.opaque(), "11px Arial").align(TextAlign::Center);
	for bar in &chart.bars {
		surface.fill_rect(bar.rect, bucket_color(bar.range.0).opaque());
		let mid = bar.bucket as f64 * chart.bar_width + chart.bar_width / 2.0;
		if bar.labelled {
			surface.fill_text(&bar.count.to_string(), Point::new(mid, bar.rect.y - 5.0), &count_style);
		}
		if bar.bucket % LABEL_EVERY == 0 {
			surface.fill_text(&bar.range.0.to_string(), Point::new(mid, height - 35.0), &axis_label);
		}
	}

	surface.stroke_line(
		Point::new(0.0, chart.baseline),
		Point::new(width, chart.baseline),
		&Stroke::solid(TEXT.opaque(), 2.0),
	);
	surface.fill_text(
		"Score Range",
		Point::new(10.0, height - 10.0),
		&TextStyle::new(TEXT.opaque(), "12px Arial"),
	);

	if let Some(summary) = summary {
		surface.fill_text(
			&summary_line(summary),
			Point::new(width - 10.0, 30.0),
			&TextStyle::new(ACCENT.opaque(), "bold 14px Arial").align(TextAlign::Right),
		);
	}
}
