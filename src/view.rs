//! Data-space view bounds and the affine map into pixel space.

use crate::sample::SampleSeries;

/// Relative head-room added above and below the sampled extremes.
const Y_MARGIN: f64 = 0.025;

/// The data-space rectangle currently shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl ViewBounds {
    /// Fit the view to sampled data.
    ///
    /// The x-range is taken verbatim from the settings. The y-range spans the
    /// minimum and maximum of every defined sample, gets a small relative
    /// margin, and is then widened to include `y = 0` so the zero baseline
    /// (and the cone glyphs anchored to it) is always on screen.
    ///
    /// When no series has a single defined value the y-range mirrors the
    /// x-range. That keeps the grid and axes drawable for an empty plot; the
    /// substitution is logged since the resulting labels describe x values.
    pub fn fit(x_min: f64, x_max: f64, series: &[SampleSeries]) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in series {
            for &(_, y) in &s.points {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
        if lo > hi {
            tracing::warn!("no defined samples; mirroring x-range onto the y axis");
            return Self {
                x_min,
                x_max,
                y_min: x_min,
                y_max: x_max,
            };
        }
        let margin = (hi - lo) * Y_MARGIN;
        let y_min = (lo - margin).min(0.0);
        let y_max = (hi + margin).max(0.0);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the view in data space.
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the view in data space.
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// A pixel-space drawing frame: the outer size plus an inner margin that the
/// plot area is inset by on all four sides.
///
/// Pixel rows grow downward, so the view's `y_max` lands at the top of the
/// plot area and `y_min` at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    /// Outer width in pixels.
    pub width: f64,
    /// Outer height in pixels.
    pub height: f64,
    /// Inset between the outer edge and the plot area.
    pub margin: f64,
}

impl PlotFrame {
    /// Create a frame, clamping the margin so the plot area stays non-empty.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        let margin = margin.min(width / 4.0).min(height / 4.0).max(0.0);
        Self {
            width,
            height,
            margin,
        }
    }

    /// Width of the inner plot area.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height of the inner plot area.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Map a data point into pixel coordinates.
    ///
    /// A degenerate view span maps onto the plot-area midline rather than
    /// dividing by zero.
    pub fn to_pixel(&self, view: &ViewBounds, (x, y): (f64, f64)) -> (f64, f64) {
        let px = if view.x_span() > 0.0 {
            self.margin + (x - view.x_min) / view.x_span() * self.plot_width()
        } else {
            self.margin + self.plot_width() / 2.0
        };
        let py = if view.y_span() > 0.0 {
            self.margin + self.plot_height() - (y - view.y_min) / view.y_span() * self.plot_height()
        } else {
            self.margin + self.plot_height() / 2.0
        };
        (px, py)
    }

    /// Map a pixel position back into data coordinates.
    ///
    /// Inverse of [`Self::to_pixel`] for non-degenerate view bounds.
    pub fn from_pixel(&self, view: &ViewBounds, (px, py): (f64, f64)) -> (f64, f64) {
        let x = view.x_min + (px - self.margin) / self.plot_width() * view.x_span();
        let y = view.y_min + (self.margin + self.plot_height() - py) / self.plot_height() * view.y_span();
        (x, y)
    }
}
