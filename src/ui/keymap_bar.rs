//! Keymap help bar UI component.

use crate::app::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar. Content follows focus and modal state.
pub fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    focus: Focus,
    warning_open: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if warning_open {
        "Esc/Enter:dismiss"
    } else {
        match focus {
            Focus::Form => {
                "Enter:apply | ↑↓:field | ←→:move | Ctrl-S:mode | Tab:plot | Ctrl-C:quit"
            },
            Focus::Plot => {
                "q:quit | ←→/hl:probe | Enter:apply | g:style | s:mode | T:theme | c:copy | Tab:form"
            },
        }
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
