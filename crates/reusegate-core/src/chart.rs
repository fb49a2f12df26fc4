//! # Chart Frame
//!
//! Maps a sensitivity series onto a fixed-size plotting area so that a
//! front end can draw it without redoing the arithmetic.
//!
//! The value axis always includes zero, so a ceiling crossing from negative
//! to positive shows the break-even baseline inside the frame. Non-finite
//! ceilings have no position: they are left out of the axis and the points.

use crate::types::SensitivityPoint;
use serde::Serialize;

/// Plot area width.
pub const CHART_WIDTH: f64 = 560.0;

/// Plot area height.
pub const CHART_HEIGHT: f64 = 200.0;

/// Horizontal padding on each side.
pub const CHART_PADDING_X: f64 = 40.0;

/// Vertical padding on each side.
pub const CHART_PADDING_Y: f64 = 20.0;

/// A sensitivity series scaled into plot coordinates.
///
/// `y` grows downward, as in SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    /// Lowest value on the axis (never above zero).
    pub min: f64,
    /// Highest value on the axis (never below zero).
    pub max: f64,
    /// Vertical position of the zero baseline.
    pub zero_y: f64,
    /// One `(x, y)` per finite input point, in input order. `x` keeps the
    /// point's slot in the full series, so a skipped value leaves a gap.
    pub points: Vec<(f64, f64)>,
}

impl ChartFrame {
    /// Fit a series into the default plot area.
    #[must_use]
    pub fn fit(series: &[SensitivityPoint]) -> Self {
        let (min, max) = series
            .iter()
            .map(|p| p.c_ref_max)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let frame = Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            min,
            max,
            zero_y: 0.0,
            points: Vec::new(),
        };

        let points = series
            .iter()
            .enumerate()
            .filter(|(_, p)| p.c_ref_max.is_finite())
            .map(|(i, p)| (frame.scale_x(i, series.len()), frame.scale_y(p.c_ref_max)))
            .collect();

        Self {
            zero_y: frame.scale_y(0.0),
            points,
            ..frame
        }
    }

    /// Horizontal position of point `index` out of `count`.
    #[must_use]
    pub fn scale_x(&self, index: usize, count: usize) -> f64 {
        if count < 2 {
            return CHART_PADDING_X;
        }
        CHART_PADDING_X + (index as f64 / (count - 1) as f64) * (self.width - CHART_PADDING_X * 2.0)
    }

    /// Vertical position of `value`; a flat axis centers everything.
    #[must_use]
    pub fn scale_y(&self, value: f64) -> f64 {
        if self.max == self.min {
            return self.height / 2.0;
        }
        let t = (value - self.min) / (self.max - self.min);
        self.height - CHART_PADDING_Y - t * (self.height - CHART_PADDING_Y * 2.0)
    }

    /// Points as an SVG `polyline` attribute: `"x,y x,y ..."`.
    #[must_use]
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
