//! Plot feature - sampled series, fitted view, glyph style and probe cursor.
//!
//! A `PlotState` is one complete, immutable snapshot of everything the plot
//! renderer needs. It is built from validated settings and replaced wholesale
//! on every successful settings update, so a rejected update can never leave
//! a half-applied plot behind.

pub mod ui;

use crate::error::Result;
use crate::sample::{PlotSettings, SampleSeries};
use crate::view::ViewBounds;

/// How sampled points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Consecutive samples joined by line segments.
    #[default]
    Lines,
    /// A filled cone from the zero baseline up (or down) to each sample.
    Cones,
}

impl GlyphStyle {
    /// Get the next style in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Lines => Self::Cones,
            Self::Cones => Self::Lines,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lines => "Lines",
            Self::Cones => "Cones",
        }
    }
}

/// State for the plot panel.
#[derive(Debug, Clone)]
pub struct PlotState {
    /// The validated settings this snapshot was built from.
    pub settings: PlotSettings,
    /// Sampled series, in selection order.
    pub series: Vec<SampleSeries>,
    /// The shared x grid (never empty for validated settings).
    pub positions: Vec<f64>,
    /// Data-space view fitted around the samples.
    pub view: ViewBounds,
    /// Current glyph style.
    pub style: GlyphStyle,
    /// Probe cursor: index into `positions`.
    pub cursor: usize,
}

impl PlotState {
    /// Sample the settings and fit the view around the result.
    pub fn build(settings: PlotSettings, style: GlyphStyle) -> Self {
        let series = settings.sample_all();
        let positions = settings.positions();
        let view = ViewBounds::fit(settings.x_min, settings.x_max, &series);
        Self {
            settings,
            series,
            positions,
            view,
            style,
            cursor: 0,
        }
    }

    /// Cycle glyph style.
    pub fn cycle_style(&mut self) {
        self.style = self.style.next();
    }

    /// The x position under the probe cursor.
    pub fn cursor_x(&self) -> f64 {
        self.positions[self.cursor.min(self.positions.len() - 1)]
    }

    /// Move the probe cursor one sample left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the probe cursor one sample right.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.positions.len() - 1);
    }

    /// Render the sampled grid as TSV: an x column plus one column per
    /// series, with blank cells where a function is undefined.
    pub fn series_tsv(&self) -> String {
        let mut out = String::with_capacity(self.positions.len() * 16);
        out.push('x');
        for s in &self.series {
            out.push('\t');
            out.push_str(s.function.label());
        }
        out.push('\n');
        for &x in &self.positions {
            out.push_str(&format!("{x}"));
            for s in &self.series {
                out.push('\t');
                if let Some(y) = s.function.evaluate(x) {
                    out.push_str(&format!("{y}"));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Copy the sampled grid to the system clipboard.
    pub fn copy_series_tsv(&self) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(self.series_tsv())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::sample::SampleSpec;

    fn state(functions: &[Function]) -> PlotState {
        let settings =
            PlotSettings::new(-1.0, 1.0, SampleSpec::Count(3), functions.to_vec()).unwrap();
        PlotState::build(settings, GlyphStyle::Lines)
    }

    #[test]
    fn build_snapshots_samples_and_view_together() {
        let plot = state(&[Function::Square]);
        assert_eq!(plot.positions, vec![-1.0, 0.0, 1.0]);
        assert_eq!(plot.series.len(), 1);
        assert_eq!(plot.view.x_min, -1.0);
        assert_eq!(plot.view.x_max, 1.0);
        assert!(plot.view.y_min <= 0.0 && plot.view.y_max >= 1.0);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut plot = state(&[Function::Identity]);
        plot.cursor_left();
        assert_eq!(plot.cursor, 0);
        for _ in 0..10 {
            plot.cursor_right();
        }
        assert_eq!(plot.cursor, 2);
        assert_eq!(plot.cursor_x(), 1.0);
    }

    #[test]
    fn style_cycles_through_both_variants() {
        assert_eq!(GlyphStyle::Lines.next(), GlyphStyle::Cones);
        assert_eq!(GlyphStyle::Cones.next(), GlyphStyle::Lines);
        assert_eq!(GlyphStyle::Cones.name(), "Cones");
    }

    #[test]
    fn tsv_leaves_undefined_cells_blank() {
        let plot = state(&[Function::Reciprocal, Function::Identity]);
        let tsv = plot.series_tsv();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "x\ty = 1/x\ty = x");
        assert_eq!(lines[1], "-1\t-1\t-1");
        assert_eq!(lines[2], "0\t\t0");
        assert_eq!(lines[3], "1\t1\t1");
    }

    #[test]
    fn tsv_with_no_series_is_just_the_x_column() {
        let plot = state(&[]);
        assert_eq!(plot.series_tsv(), "x\n-1\n0\n1\n");
    }
}
