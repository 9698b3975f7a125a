//! Settings feature - the editable form the plot is rebuilt from.
//!
//! The form holds free text; nothing is interpreted while typing. `validate`
//! parses every field and funnels the result through the checked
//! `PlotSettings` constructor, so a plot can only ever be built from values
//! that passed the full validation in one step.

pub mod ui;

use crate::error::{OrdinateError, Result};
use crate::function::Function;
use crate::sample::{PlotSettings, SampleSpec};

/// A single editable text field with a byte-offset cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    /// Current text.
    pub text: String,
    /// Cursor position (byte offset, always on a char boundary).
    pub cursor: usize,
}

impl FieldInput {
    /// Create a field holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
        }
    }

    /// Move the cursor to the start of the text.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// How the density field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Density is a point count.
    #[default]
    Points,
    /// Density is a step size.
    Step,
}

impl SampleMode {
    /// Get the next mode in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Points => Self::Step,
            Self::Step => Self::Points,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Points => "Points",
            Self::Step => "Step",
        }
    }
}

/// Which form field has the edit focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    /// Left bound field.
    #[default]
    XMin,
    /// Right bound field.
    XMax,
    /// Point count or step size field.
    Density,
    /// Function key list field.
    Functions,
}

impl SettingsField {
    /// Get the next field in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::XMin => Self::XMax,
            Self::XMax => Self::Density,
            Self::Density => Self::Functions,
            Self::Functions => Self::XMin,
        }
    }

    /// Get the previous field in cycle.
    pub fn prev(self) -> Self {
        match self {
            Self::XMin => Self::Functions,
            Self::XMax => Self::XMin,
            Self::Density => Self::XMax,
            Self::Functions => Self::Density,
        }
    }

    /// Field label; the density label follows the sampling mode.
    pub fn label(self, mode: SampleMode) -> &'static str {
        match self {
            Self::XMin => "x min",
            Self::XMax => "x max",
            Self::Density => match mode {
                SampleMode::Points => "points",
                SampleMode::Step => "step",
            },
            Self::Functions => "keys",
        }
    }
}

/// State for the settings form.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// Left bound text.
    pub x_min: FieldInput,
    /// Right bound text.
    pub x_max: FieldInput,
    /// Point count or step size text, per `mode`.
    pub density: FieldInput,
    /// Comma-separated function keys text.
    pub functions: FieldInput,
    /// Field with the edit focus.
    pub focus: SettingsField,
    /// How the density field is interpreted.
    pub mode: SampleMode,
}

impl SettingsForm {
    /// Populate the form from validated settings.
    pub fn from_settings(settings: &PlotSettings) -> Self {
        let (density, mode) = match settings.spec {
            SampleSpec::Count(n) => (n.to_string(), SampleMode::Points),
            SampleSpec::Step(dx) => (dx.to_string(), SampleMode::Step),
        };
        let keys: Vec<String> = settings
            .functions
            .iter()
            .map(|f| f.key().to_string())
            .collect();
        Self {
            x_min: FieldInput::with_text(settings.x_min.to_string()),
            x_max: FieldInput::with_text(settings.x_max.to_string()),
            density: FieldInput::with_text(density),
            functions: FieldInput::with_text(keys.join(",")),
            focus: SettingsField::default(),
            mode,
        }
    }

    /// The field currently being edited.
    pub fn active_field(&self) -> &FieldInput {
        match self.focus {
            SettingsField::XMin => &self.x_min,
            SettingsField::XMax => &self.x_max,
            SettingsField::Density => &self.density,
            SettingsField::Functions => &self.functions,
        }
    }

    /// Mutable access to the field currently being edited.
    pub fn active_field_mut(&mut self) -> &mut FieldInput {
        match self.focus {
            SettingsField::XMin => &mut self.x_min,
            SettingsField::XMax => &mut self.x_max,
            SettingsField::Density => &mut self.density,
            SettingsField::Functions => &mut self.functions,
        }
    }

    /// Move the edit focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move the edit focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Switch between point-count and step density.
    ///
    /// When the current bounds and density parse, the density value is
    /// converted so the grid stays the same; otherwise only the
    /// interpretation changes and the text is left for the user to fix.
    pub fn toggle_mode(&mut self) {
        let bounds = self
            .x_min
            .text
            .trim()
            .parse::<f64>()
            .ok()
            .zip(self.x_max.text.trim().parse::<f64>().ok())
            .filter(|(lo, hi)| hi > lo);
        match self.mode {
            SampleMode::Points => {
                if let (Some((lo, hi)), Ok(n)) = (bounds, self.density.text.trim().parse::<usize>())
                {
                    if n > 1 {
                        let step = (hi - lo) / (n - 1) as f64;
                        self.density = FieldInput::with_text(step.to_string());
                    }
                }
            },
            SampleMode::Step => {
                if let (Some((lo, hi)), Ok(dx)) = (bounds, self.density.text.trim().parse::<f64>())
                {
                    if dx.is_finite() && dx > 0.0 {
                        let n = ((hi - lo) / dx).round() as usize + 1;
                        self.density = FieldInput::with_text(n.to_string());
                    }
                }
            },
        }
        self.mode = self.mode.next();
    }

    /// Parse and validate every field into ready-to-sample settings.
    ///
    /// Nothing is applied here; on failure the caller keeps its previous
    /// plot and surfaces the error.
    pub fn validate(&self) -> Result<PlotSettings> {
        let x_min = self
            .x_min
            .text
            .trim()
            .parse::<f64>()
            .map_err(|_| OrdinateError::invalid_number("x min", &self.x_min.text))?;
        let x_max = self
            .x_max
            .text
            .trim()
            .parse::<f64>()
            .map_err(|_| OrdinateError::invalid_number("x max", &self.x_max.text))?;
        let spec = match self.mode {
            SampleMode::Points => {
                let count = self
                    .density
                    .text
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| OrdinateError::invalid_number("points", &self.density.text))?;
                SampleSpec::Count(count)
            },
            SampleMode::Step => {
                let step = self
                    .density
                    .text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| OrdinateError::invalid_number("step", &self.density.text))?;
                SampleSpec::Step(step)
            },
        };
        let functions = Function::parse_selection(&self.functions.text)?;
        PlotSettings::new(x_min, x_max, spec, functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrdinateError;

    fn form() -> SettingsForm {
        let settings = PlotSettings::new(
            -5.0,
            5.0,
            SampleSpec::Count(101),
            vec![Function::Identity, Function::Square],
        )
        .unwrap();
        SettingsForm::from_settings(&settings)
    }

    #[test]
    fn editing_works_across_char_boundaries() {
        let mut field = FieldInput::with_text("1π2");
        assert_eq!(field.cursor, 4);
        field.move_left();
        field.move_left();
        assert_eq!(field.cursor, 1);
        field.delete();
        assert_eq!(field.text, "12");
        field.insert('5');
        assert_eq!(field.text, "152");
        field.backspace();
        assert_eq!(field.text, "12");
        assert_eq!(field.cursor, 1);
        field.move_end();
        assert_eq!(field.cursor, 2);
        field.move_home();
        field.move_right();
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn from_settings_round_trips_through_validate() {
        let settings = PlotSettings::new(
            -5.0,
            5.0,
            SampleSpec::Step(0.25),
            vec![Function::Reciprocal],
        )
        .unwrap();
        let form = SettingsForm::from_settings(&settings);
        assert_eq!(form.mode, SampleMode::Step);
        assert_eq!(form.validate().unwrap(), settings);
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = form();
        let start = form.focus;
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, start);
        form.focus_prev();
        assert_eq!(form.focus, SettingsField::Functions);
    }

    #[test]
    fn mode_toggle_converts_the_density_value() {
        let mut form = form();
        form.x_min = FieldInput::with_text("0");
        form.x_max = FieldInput::with_text("10");
        form.density = FieldInput::with_text("11");
        form.toggle_mode();
        assert_eq!(form.mode, SampleMode::Step);
        assert_eq!(form.density.text, "1");
        form.toggle_mode();
        assert_eq!(form.mode, SampleMode::Points);
        assert_eq!(form.density.text, "11");
    }

    #[test]
    fn mode_toggle_keeps_unparseable_text() {
        let mut form = form();
        form.density = FieldInput::with_text("abc");
        form.toggle_mode();
        assert_eq!(form.mode, SampleMode::Step);
        assert_eq!(form.density.text, "abc");
    }

    #[test]
    fn validate_names_the_offending_field() {
        let mut form = form();
        form.x_min = FieldInput::with_text("five");
        match form.validate().unwrap_err() {
            OrdinateError::InvalidNumber { field, text } => {
                assert_eq!(field, "x min");
                assert_eq!(text, "five");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_rejects_reversed_bounds() {
        let mut form = form();
        form.x_min = FieldInput::with_text("5");
        form.x_max = FieldInput::with_text("2");
        assert!(matches!(
            form.validate().unwrap_err(),
            OrdinateError::InvalidBounds { .. }
        ));
    }

    #[test]
    fn validate_rejects_a_single_point() {
        let mut form = form();
        form.density = FieldInput::with_text("1");
        assert!(matches!(
            form.validate().unwrap_err(),
            OrdinateError::InvalidPointCount { count: 1 }
        ));
    }

    #[test]
    fn validate_rejects_a_negative_step() {
        let mut form = form();
        form.mode = SampleMode::Step;
        form.density = FieldInput::with_text("-0.5");
        assert!(matches!(
            form.validate().unwrap_err(),
            OrdinateError::InvalidStep { .. }
        ));
    }

    #[test]
    fn validate_rejects_unknown_function_keys() {
        let mut form = form();
        form.functions = FieldInput::with_text("1,9");
        assert!(matches!(
            form.validate().unwrap_err(),
            OrdinateError::UnknownFunction { .. }
        ));
    }

    #[test]
    fn validate_accepts_an_empty_selection() {
        let mut form = form();
        form.functions = FieldInput::with_text("");
        assert!(form.validate().unwrap().functions.is_empty());
    }
}
