//! Ordinate - a terminal-based function plotter.
//!
//! Ordinate samples a fixed registry of functions over an editable interval
//! and draws the result as line or cone glyphs in the terminal, with a grid,
//! axes, tick labels and a legend. Settings flow one way: the form validates
//! its fields into `PlotSettings`, the sampler turns those into per-function
//! series, the view fits bounds around the samples, and the renderer maps
//! everything into pixels.
//!
//! # Features
//!
//! - Five built-in functions selectable by key, up to three overlaid
//! - Point-count or step-size sampling with domain gaps handled per point
//! - Auto-fitted y-range that always keeps the zero baseline visible
//! - Line and pseudo-3D cone glyph styles
//! - Probe cursor with a per-function value readout
//! - Gruvbox color themes
//! - Clipboard export of the sampled grid as TSV
//!
//! # Example
//!
//! ```
//! use ordinate::function::Function;
//! use ordinate::sample::{PlotSettings, SampleSpec};
//!
//! let settings = PlotSettings::new(
//!     -2.0,
//!     2.0,
//!     SampleSpec::Count(5),
//!     vec![Function::Square],
//! )?;
//! let series = settings.sample_all();
//! assert_eq!(series[0].points.len(), 5);
//! # Ok::<(), ordinate::OrdinateError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod function;
pub mod plot;
pub mod sample;
pub mod settings;
pub mod ui;
pub mod view;

pub use error::{OrdinateError, Result};
