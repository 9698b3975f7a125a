//! Sampling of function values over an interval.
//!
//! `PlotSettings` is the validated snapshot the settings surface hands to the
//! sampler: by the time `sample_all` runs, bounds, density and function
//! selection have already been checked, so sampling itself cannot fail.
//! Samples where a function is undefined are omitted from that function's
//! series without disturbing the other positions or series.

use crate::error::{OrdinateError, Result};
use crate::function::Function;

/// How sample positions are generated over the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleSpec {
    /// A fixed number of evenly spaced points, endpoints included.
    Count(usize),
    /// A fixed stride from the left edge. The right edge is included when it
    /// lands within half a step, so floating-point drift cannot drop it.
    Step(f64),
}

/// One function's sampled points, in ascending `x` order.
///
/// Every `(x, y)` pair is finite; positions where the function was undefined
/// are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// The sampled function.
    pub function: Function,
    /// The defined samples.
    pub points: Vec<(f64, f64)>,
}

/// Validated sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Left edge of the sampling interval.
    pub x_min: f64,
    /// Right edge of the sampling interval.
    pub x_max: f64,
    /// Position generation rule.
    pub spec: SampleSpec,
    /// Selected functions, in selection order.
    pub functions: Vec<Function>,
}

impl PlotSettings {
    /// The most functions that can be overlaid on one plot.
    pub const MAX_SERIES: usize = 3;

    /// Validate and build plot settings.
    ///
    /// Rejects non-finite or reversed bounds, a point count that cannot span
    /// the interval, a step that cannot advance through it, and selections
    /// larger than [`Self::MAX_SERIES`]. An empty selection is accepted.
    pub fn new(x_min: f64, x_max: f64, spec: SampleSpec, functions: Vec<Function>) -> Result<Self> {
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(OrdinateError::InvalidBounds {
                min: x_min,
                max: x_max,
            });
        }
        match spec {
            SampleSpec::Count(count) if count <= 1 => {
                return Err(OrdinateError::InvalidPointCount { count });
            },
            SampleSpec::Step(step) if !step.is_finite() || step <= 0.0 => {
                return Err(OrdinateError::InvalidStep { step });
            },
            _ => {},
        }
        if functions.len() > Self::MAX_SERIES {
            return Err(OrdinateError::TooManySeries {
                count: functions.len(),
                max: Self::MAX_SERIES,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            spec,
            functions,
        })
    }

    /// The shared x grid, in ascending order.
    ///
    /// Positions are generated multiplicatively (`x_min + k * step`) so the
    /// grid does not accumulate rounding error.
    pub fn positions(&self) -> Vec<f64> {
        match self.spec {
            SampleSpec::Count(count) => {
                let step = (self.x_max - self.x_min) / (count - 1) as f64;
                (0..count).map(|k| self.x_min + k as f64 * step).collect()
            },
            SampleSpec::Step(step) => {
                let mut positions = Vec::new();
                let mut k = 0u64;
                loop {
                    let x = self.x_min + k as f64 * step;
                    if x > self.x_max + step / 2.0 {
                        break;
                    }
                    positions.push(x);
                    k += 1;
                }
                positions
            },
        }
    }

    /// Evaluate every selected function on the shared x grid.
    ///
    /// Output series follow the selection order; within each series points
    /// are in ascending x order with undefined samples omitted.
    pub fn sample_all(&self) -> Vec<SampleSeries> {
        let positions = self.positions();
        tracing::debug!(
            positions = positions.len(),
            series = self.functions.len(),
            "sampling [{}, {}]",
            self.x_min,
            self.x_max
        );
        self.functions
            .iter()
            .map(|&function| SampleSeries {
                function,
                points: positions
                    .iter()
                    .filter_map(|&x| function.evaluate(x).map(|y| (x, y)))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn settings(x_min: f64, x_max: f64, spec: SampleSpec, functions: &[Function]) -> PlotSettings {
        PlotSettings::new(x_min, x_max, spec, functions.to_vec()).unwrap()
    }

    #[test]
    fn count_sampling_spans_the_interval_evenly() {
        let s = settings(-1.0, 2.0, SampleSpec::Count(7), &[Function::Identity]);
        let positions = s.positions();
        assert_eq!(positions.len(), 7);
        assert!((positions[0] - -1.0).abs() < TOL);
        assert!((positions[6] - 2.0).abs() < TOL);
        for pair in positions.windows(2) {
            assert!((pair[1] - pair[0] - 0.5).abs() < TOL);
        }
    }

    #[test]
    fn step_sampling_includes_the_right_edge_despite_drift() {
        // 0.1 is not exact in binary; 10 * 0.1 overshoots 1.0 slightly.
        let s = settings(0.0, 1.0, SampleSpec::Step(0.1), &[Function::Identity]);
        let positions = s.positions();
        assert_eq!(positions.len(), 11);
        assert!((positions[10] - 1.0).abs() < TOL);
    }

    #[test]
    fn step_sampling_stops_before_a_far_overshoot() {
        let s = settings(0.0, 1.0, SampleSpec::Step(0.4), &[Function::Identity]);
        // 0.0, 0.4, 0.8; 1.2 is more than half a step past 1.0.
        assert_eq!(s.positions(), vec![0.0, 0.4, 0.8]);
    }

    #[test]
    fn square_over_symmetric_bounds() {
        let s = settings(-2.0, 2.0, SampleSpec::Count(5), &[Function::Square]);
        let series = s.sample_all();
        assert_eq!(series.len(), 1);
        let ys: Vec<f64> = series[0].points.iter().map(|&(_, y)| y).collect();
        assert_eq!(ys, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
        let xs: Vec<f64> = series[0].points.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn domain_restriction_omits_exactly_the_undefined_sample() {
        let s = settings(
            -1.0,
            1.0,
            SampleSpec::Count(3),
            &[Function::Reciprocal, Function::Identity],
        );
        let series = s.sample_all();
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].points.len(), 3);
        assert_eq!(series[0].points, vec![(-1.0, -1.0), (1.0, 1.0)]);
    }

    #[test]
    fn series_follow_selection_order() {
        let s = settings(
            1.0,
            2.0,
            SampleSpec::Count(2),
            &[Function::NaturalLog, Function::Square, Function::Identity],
        );
        let order: Vec<Function> = s.sample_all().into_iter().map(|s| s.function).collect();
        assert_eq!(
            order,
            vec![Function::NaturalLog, Function::Square, Function::Identity]
        );
    }

    #[test]
    fn log_series_is_empty_over_a_negative_interval() {
        let s = settings(-2.0, -1.0, SampleSpec::Count(5), &[Function::NaturalLog]);
        assert!(s.sample_all()[0].points.is_empty());
    }

    #[test]
    fn rejects_reversed_or_equal_bounds() {
        let err = PlotSettings::new(5.0, 2.0, SampleSpec::Count(10), Vec::new()).unwrap_err();
        assert!(matches!(err, OrdinateError::InvalidBounds { .. }));
        assert!(PlotSettings::new(1.0, 1.0, SampleSpec::Count(10), Vec::new()).is_err());
        assert!(PlotSettings::new(f64::NAN, 1.0, SampleSpec::Count(10), Vec::new()).is_err());
    }

    #[test]
    fn rejects_too_few_points() {
        for count in [0, 1] {
            let err =
                PlotSettings::new(0.0, 1.0, SampleSpec::Count(count), Vec::new()).unwrap_err();
            assert!(matches!(err, OrdinateError::InvalidPointCount { .. }));
        }
        assert!(PlotSettings::new(0.0, 1.0, SampleSpec::Count(2), Vec::new()).is_ok());
    }

    #[test]
    fn rejects_a_step_that_cannot_advance() {
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = PlotSettings::new(0.0, 1.0, SampleSpec::Step(step), Vec::new()).unwrap_err();
            assert!(matches!(err, OrdinateError::InvalidStep { .. }));
        }
    }

    #[test]
    fn rejects_more_than_three_series() {
        let err = PlotSettings::new(
            0.0,
            1.0,
            SampleSpec::Count(2),
            vec![
                Function::Identity,
                Function::Square,
                Function::Notch,
                Function::Reciprocal,
            ],
        )
        .unwrap_err();
        assert!(matches!(err, OrdinateError::TooManySeries { count: 4, .. }));
    }
}
