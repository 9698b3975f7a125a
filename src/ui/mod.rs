//! User interface rendering.

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::{App, Focus};
use crate::plot;
use crate::settings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use formatters::{format_tick, format_value};
pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Width of the settings panel.
const SETTINGS_WIDTH: u16 = 30;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SETTINGS_WIDTH), Constraint::Min(20)])
        .split(chunks[0]);

    let form_focus = app.focus == Focus::Form && app.warning.is_none();
    settings::ui::draw_settings(f, panels[0], &app.form, form_focus, &colors);
    plot::ui::draw_plot(f, panels[1], &app.plot, &colors);

    draw_status(f, chunks[1], &app.status, &colors);
    draw_keymap(f, chunks[2], app.focus, app.warning.is_some(), &colors);

    if let Some(ref warning) = app.warning {
        draw_warning(f, warning, &colors);
    }
}

/// Modal warning overlay, centered over everything else.
fn draw_warning(f: &mut Frame<'_>, message: &str, colors: &ThemeColors) {
    let area = centered_rect(50, 25, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Warning ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.orange))
        .title_style(Style::default().fg(colors.orange))
        .style(Style::default().bg(colors.bg1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors.fg0),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Esc/Enter to dismiss",
            Style::default().fg(colors.gray),
        )),
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
