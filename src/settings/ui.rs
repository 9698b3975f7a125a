//! Settings form - pure rendering layer.

use super::{SettingsField, SettingsForm};
use crate::function::Function;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Columns taken by a field label, separator included.
const LABEL_WIDTH: u16 = 8;

/// Draw the settings form and the function registry listing.
///
/// With `has_focus` the terminal cursor is placed at the edit position of
/// the focused field.
pub fn draw_settings(
    f: &mut Frame<'_>,
    area: Rect,
    form: &SettingsForm,
    has_focus: bool,
    colors: &ThemeColors,
) {
    let border = if has_focus { colors.yellow } else { colors.bg2 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Settings ")
        .title_style(Style::default().fg(colors.yellow))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = [
        (SettingsField::XMin, &form.x_min),
        (SettingsField::XMax, &form.x_max),
        (SettingsField::Density, &form.density),
        (SettingsField::Functions, &form.functions),
    ];

    // Selected registry entries light up in their series color. An invalid
    // key list simply shows nothing selected until it parses again.
    let selection = Function::parse_selection(&form.functions.text).unwrap_or_default();

    let mut lines: Vec<Line> = Vec::new();
    for (field, input) in fields {
        let focused = has_focus && form.focus == field;
        let label_style = if focused {
            Style::default().fg(colors.yellow)
        } else {
            Style::default().fg(colors.fg1)
        };
        let value_style = if focused {
            Style::default().fg(colors.fg0).bg(colors.bg1)
        } else {
            Style::default().fg(colors.fg0)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{:<width$}",
                    format!("{}:", field.label(form.mode)),
                    width = LABEL_WIDTH as usize
                ),
                label_style,
            ),
            Span::styled(input.text.as_str(), value_style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Sampling: ", Style::default().fg(colors.fg1)),
        Span::styled(form.mode.name(), Style::default().fg(colors.aqua)),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Functions",
        Style::default()
            .fg(colors.orange)
            .add_modifier(Modifier::BOLD),
    )));
    for function in Function::ALL {
        let selected = selection.iter().position(|&s| s == function);
        let (marker, style) = match selected {
            Some(idx) => ("■", Style::default().fg(colors.series(idx))),
            None => (" ", Style::default().fg(colors.gray)),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", function.key()),
                Style::default().fg(colors.fg1),
            ),
            Span::styled(format!("{marker} "), style),
            Span::styled(function.label(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);

    if has_focus {
        let row = fields
            .iter()
            .position(|(field, _)| *field == form.focus)
            .unwrap_or(0) as u16;
        let input = form.active_field();
        let col = inner.x + LABEL_WIDTH + input.text[..input.cursor].width() as u16;
        let cursor_y = inner.y + row;
        if col < inner.x + inner.width && cursor_y < inner.y + inner.height {
            f.set_cursor_position((col, cursor_y));
        }
    }
}
