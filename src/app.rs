//! Application state and logic.

use crate::plot::{GlyphStyle, PlotState};
use crate::sample::PlotSettings;
use crate::settings::SettingsForm;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which panel owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The settings form receives typed input.
    #[default]
    Form,
    /// The plot panel receives navigation keys.
    Plot,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Settings form being edited.
    pub form: SettingsForm,
    /// Current plot snapshot.
    pub plot: PlotState,
    /// Panel owning key input.
    pub focus: Focus,
    /// Modal warning. While set it swallows all keys until dismissed.
    pub warning: Option<String>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set when the event loop should exit.
    pub should_quit: bool,
}

impl App {
    /// Create the application from validated startup settings.
    pub fn new(settings: PlotSettings, style: GlyphStyle) -> Self {
        Self {
            form: SettingsForm::from_settings(&settings),
            plot: PlotState::build(settings, style),
            focus: Focus::default(),
            warning: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            should_quit: false,
        }
    }

    /// Validate the form and rebuild the plot from it.
    ///
    /// The new snapshot replaces the old one in a single assignment. On
    /// failure nothing is sampled: the previous snapshot stays untouched and
    /// the error surfaces as a modal warning.
    pub fn apply_settings(&mut self) {
        match self.form.validate() {
            Ok(settings) => {
                let style = self.plot.style;
                self.plot = PlotState::build(settings, style);
                self.status = format!(
                    "Plot updated: [{}, {}], {} series",
                    self.plot.settings.x_min,
                    self.plot.settings.x_max,
                    self.plot.series.len()
                );
                tracing::info!("{}", self.status);
            },
            Err(err) => {
                tracing::warn!("settings rejected: {err}");
                self.warning = Some(err.to_string());
                self.status = "Invalid settings".to_string();
            },
        }
    }

    /// Dismiss the warning modal.
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Cycle glyph style.
    pub fn cycle_style(&mut self) {
        self.plot.cycle_style();
        self.status = format!("Style: {}", self.plot.style.name());
    }

    /// Toggle how the density field is interpreted.
    pub fn toggle_sample_mode(&mut self) {
        self.form.toggle_mode();
        self.status = format!("Sampling: {}", self.form.mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Toggle focus between form and plot.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Plot,
            Focus::Plot => Focus::Form,
        };
    }

    /// Copy the sampled grid to the clipboard as TSV.
    pub fn copy_plot_data(&mut self) {
        match self.plot.copy_series_tsv() {
            Ok(()) => self.status = "Copied plot data!".to_string(),
            Err(err) => {
                tracing::error!("clipboard copy failed: {err}");
                self.status = format!("Copy failed: {err}");
            },
        }
    }
}
