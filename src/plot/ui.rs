//! Plot panel - pure rendering layer.
//!
//! Everything is drawn from one `PlotState` snapshot into a braille canvas
//! addressed in pixel coordinates, so the same affine map positions glyphs,
//! grid lines and the tick labels in the gutter. The canvas y axis grows
//! upward while the pixel map grows downward; `frame.height - py` converts
//! between them at the drawing calls.

use super::{GlyphStyle, PlotState};
use crate::ui::{format_tick, format_value, ThemeColors};
use crate::view::{PlotFrame, ViewBounds};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid divisions along each axis.
const GRID_DIVISIONS: usize = 10;
/// Character columns reserved for y tick labels.
const GUTTER_WIDTH: u16 = 7;
/// Braille pixels per character cell.
const PX_PER_COL: f64 = 2.0;
const PX_PER_ROW: f64 = 4.0;
/// Inset between the canvas edge and the plot area, in pixels.
const FRAME_MARGIN: f64 = 4.0;

/// Draw the plot panel: grid, axes, glyphs, cursor, legend and tick labels.
pub fn draw_plot(f: &mut Frame<'_>, area: Rect, plot: &PlotState, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(readout_title(plot))
        .title_style(Style::default().fg(colors.yellow))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < GUTTER_WIDTH + 8 || inner.height < 5 {
        let para = Paragraph::new("Too small to plot")
            .style(Style::default().fg(colors.fg1))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return;
    }

    // Left gutter for y labels, bottom line for x labels.
    let canvas_area = Rect {
        x: inner.x + GUTTER_WIDTH,
        y: inner.y,
        width: inner.width - GUTTER_WIDTH,
        height: inner.height - 1,
    };

    let frame = PlotFrame::new(
        canvas_area.width as f64 * PX_PER_COL,
        canvas_area.height as f64 * PX_PER_ROW,
        FRAME_MARGIN,
    );
    let view = plot.view;

    let canvas = Canvas::default()
        .background_color(colors.bg0)
        .marker(Marker::Braille)
        .x_bounds([0.0, frame.width])
        .y_bounds([0.0, frame.height])
        .paint(|ctx| {
            draw_grid(ctx, &frame, &view, colors);
            draw_axes(ctx, &frame, &view, colors);
            for (idx, series) in plot.series.iter().enumerate() {
                let color = colors.series(idx);
                match plot.style {
                    GlyphStyle::Lines => draw_polyline(ctx, &frame, &view, &series.points, color),
                    GlyphStyle::Cones => draw_cones(
                        ctx,
                        &frame,
                        &view,
                        &series.points,
                        idx,
                        plot.series.len(),
                        plot.positions.len(),
                        color,
                    ),
                }
            }
            draw_cursor(ctx, &frame, &view, plot.cursor_x(), colors);
            draw_legend(ctx, &frame, plot, colors);
        });
    f.render_widget(canvas, canvas_area);

    draw_y_labels(f, canvas_area, &frame, &view, colors);
    draw_x_labels(f, canvas_area, &frame, &view, colors);
}

/// Block title with the probe readout and the glyph style.
fn readout_title(plot: &PlotState) -> String {
    let x = plot.cursor_x();
    let mut title = format!(" x = {}", format_value(x));
    for series in &plot.series {
        let value = match series.function.evaluate(x) {
            Some(y) => format_value(y),
            None => "undef".to_string(),
        };
        title.push_str(&format!(" | {}: {}", series.function.label(), value));
    }
    title.push_str(&format!(" | {} ", plot.style.name()));
    title
}

fn draw_grid(ctx: &mut Context<'_>, frame: &PlotFrame, view: &ViewBounds, colors: &ThemeColors) {
    let bottom = frame.height - (frame.margin + frame.plot_height());
    let top = frame.height - frame.margin;
    for i in 0..=GRID_DIVISIONS {
        let t = i as f64 / GRID_DIVISIONS as f64;
        let x = view.x_min + t * view.x_span();
        let y = view.y_min + t * view.y_span();
        let (px, py) = frame.to_pixel(view, (x, y));
        dashed_line(ctx, (px, bottom), (px, top), colors.gray);
        let fy = frame.height - py;
        dashed_line(
            ctx,
            (frame.margin, fy),
            (frame.margin + frame.plot_width(), fy),
            colors.gray,
        );
    }
}

/// Solid axis lines. Each axis runs through zero when the view contains it
/// and is pinned to the left or bottom plot edge otherwise.
fn draw_axes(ctx: &mut Context<'_>, frame: &PlotFrame, view: &ViewBounds, colors: &ThemeColors) {
    let y0 = if view.y_min <= 0.0 && view.y_max >= 0.0 {
        0.0
    } else {
        view.y_min
    };
    let (_, py) = frame.to_pixel(view, (view.x_min, y0));
    let fy = frame.height - py;
    ctx.draw(&CanvasLine {
        x1: frame.margin,
        y1: fy,
        x2: frame.margin + frame.plot_width(),
        y2: fy,
        color: colors.fg1,
    });

    let x0 = if view.x_min <= 0.0 && view.x_max >= 0.0 {
        0.0
    } else {
        view.x_min
    };
    let (px, _) = frame.to_pixel(view, (x0, view.y_min));
    ctx.draw(&CanvasLine {
        x1: px,
        y1: frame.height - (frame.margin + frame.plot_height()),
        x2: px,
        y2: frame.height - frame.margin,
        color: colors.fg1,
    });
}

fn draw_polyline(
    ctx: &mut Context<'_>,
    frame: &PlotFrame,
    view: &ViewBounds,
    points: &[(f64, f64)],
    color: Color,
) {
    for pair in points.windows(2) {
        let (x1, y1) = frame.to_pixel(view, pair[0]);
        let (x2, y2) = frame.to_pixel(view, pair[1]);
        ctx.draw(&CanvasLine {
            x1,
            y1: frame.height - y1,
            x2,
            y2: frame.height - y2,
            color,
        });
    }
    if points.len() == 1 {
        let (px, py) = frame.to_pixel(view, points[0]);
        ctx.draw(&Points {
            coords: &[(px, frame.height - py)],
            color,
        });
    }
}

/// Cone glyphs: per sample a filled triangle from the zero baseline to the
/// value, with an elliptical base. With several series overlaid each one
/// narrows its footprint and shifts sideways inside the per-sample slot so
/// all of them stay visible.
#[allow(clippy::too_many_arguments)]
fn draw_cones(
    ctx: &mut Context<'_>,
    frame: &PlotFrame,
    view: &ViewBounds,
    points: &[(f64, f64)],
    series_idx: usize,
    n_series: usize,
    n_positions: usize,
    color: Color,
) {
    if points.is_empty() {
        return;
    }
    let slot = frame.plot_width() / n_positions.max(1) as f64;
    let width = slot * 0.7 / n_series.max(1) as f64;
    let offset = (series_idx as f64 - (n_series as f64 - 1.0) / 2.0) * width;
    let half = (width / 2.0).max(1.0);
    let base_y = if view.y_min <= 0.0 && view.y_max >= 0.0 {
        0.0
    } else {
        view.y_min
    };

    for &(x, y) in points {
        let (px, apex_py) = frame.to_pixel(view, (x, y));
        let (_, base_py) = frame.to_pixel(view, (x, base_y));
        let cx = px + offset;
        let base = frame.height - base_py;
        fill_triangle(
            ctx,
            (cx - half, base),
            (cx + half, base),
            (cx, frame.height - apex_py),
            color,
        );
        ellipse(ctx, cx, base, half, (half / 2.0).min(PX_PER_ROW), color);
    }
}

fn draw_cursor(
    ctx: &mut Context<'_>,
    frame: &PlotFrame,
    view: &ViewBounds,
    cursor_x: f64,
    colors: &ThemeColors,
) {
    let (px, _) = frame.to_pixel(view, (cursor_x, view.y_min));
    ctx.draw(&CanvasLine {
        x1: px,
        y1: frame.height - (frame.margin + frame.plot_height()),
        x2: px,
        y2: frame.height - frame.margin,
        color: colors.yellow,
    });
}

fn draw_legend(ctx: &mut Context<'_>, frame: &PlotFrame, plot: &PlotState, colors: &ThemeColors) {
    for (idx, series) in plot.series.iter().enumerate() {
        let py = frame.margin + 2.0 + idx as f64 * PX_PER_ROW;
        let line = Line::from(Span::styled(
            format!("■ {}", series.function.label()),
            Style::default().fg(colors.series(idx)),
        ));
        ctx.print(frame.margin + 2.0 * PX_PER_COL, frame.height - py, line);
    }
}

/// Draw a dashed segment between two canvas points.
fn dashed_line(ctx: &mut Context<'_>, from: (f64, f64), to: (f64, f64), color: Color) {
    const DASH_ON: f64 = 2.0;
    const DASH_OFF: f64 = 3.0;

    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= 0.0 {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let mut t = 0.0;
    while t < len {
        let end = (t + DASH_ON).min(len);
        ctx.draw(&CanvasLine {
            x1: from.0 + ux * t,
            y1: from.1 + uy * t,
            x2: from.0 + ux * end,
            y2: from.1 + uy * end,
            color,
        });
        t += DASH_ON + DASH_OFF;
    }
}

/// Fill a triangle with horizontal scanlines, one per pixel row.
fn fill_triangle(
    ctx: &mut Context<'_>,
    a: (f64, f64),
    b: (f64, f64),
    c: (f64, f64),
    color: Color,
) {
    let pts = [a, b, c];
    let min_y = pts.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor();
    let max_y = pts
        .iter()
        .map(|p| p.1)
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil();

    let mut y = min_y;
    while y <= max_y {
        let mut xs: Vec<f64> = Vec::new();
        for j in 0..3 {
            let (x1, y1) = pts[j];
            let (x2, y2) = pts[(j + 1) % 3];
            if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
                xs.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
            }
        }
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in xs.chunks(2) {
            if pair.len() == 2 {
                ctx.draw(&CanvasLine {
                    x1: pair[0],
                    y1: y,
                    x2: pair[1],
                    y2: y,
                    color,
                });
            }
        }
        y += 1.0;
    }
}

/// Approximate an ellipse outline with line segments.
fn ellipse(ctx: &mut Context<'_>, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
    const SEGMENTS: usize = 24;

    let mut prev = (cx + rx, cy);
    for i in 1..=SEGMENTS {
        let angle = std::f64::consts::TAU * i as f64 / SEGMENTS as f64;
        let next = (cx + rx * angle.cos(), cy + ry * angle.sin());
        ctx.draw(&CanvasLine {
            x1: prev.0,
            y1: prev.1,
            x2: next.0,
            y2: next.1,
            color,
        });
        prev = next;
    }
}

/// Write y tick labels into the gutter, right-aligned, skipping labels that
/// would land on an already used row.
fn draw_y_labels(
    f: &mut Frame<'_>,
    canvas_area: Rect,
    frame: &PlotFrame,
    view: &ViewBounds,
    colors: &ThemeColors,
) {
    let gutter_x = canvas_area.x - GUTTER_WIDTH;
    let mut last_row: Option<u16> = None;
    for i in 0..=GRID_DIVISIONS {
        let t = i as f64 / GRID_DIVISIONS as f64;
        let y = view.y_min + t * view.y_span();
        let (_, py) = frame.to_pixel(view, (view.x_min, y));
        let row = canvas_area.y
            + ((py / PX_PER_ROW) as u16).min(canvas_area.height.saturating_sub(1));
        if last_row == Some(row) {
            continue;
        }
        last_row = Some(row);

        let label = format_tick(y);
        let pad = (GUTTER_WIDTH as usize).saturating_sub(label.len() + 1);
        for (j, ch) in label.chars().enumerate() {
            let x = gutter_x + (pad + j) as u16;
            if x < canvas_area.x {
                if let Some(cell) = f.buffer_mut().cell_mut((x, row)) {
                    cell.set_char(ch).set_fg(colors.fg1);
                }
            }
        }
    }
}

/// Write x tick labels on the bottom line, centered under their grid line,
/// skipping labels that would overlap the previous one.
fn draw_x_labels(
    f: &mut Frame<'_>,
    canvas_area: Rect,
    frame: &PlotFrame,
    view: &ViewBounds,
    colors: &ThemeColors,
) {
    let row = canvas_area.y + canvas_area.height;
    let right = canvas_area.x + canvas_area.width;
    let mut last_end: Option<u16> = None;
    for i in 0..=GRID_DIVISIONS {
        let t = i as f64 / GRID_DIVISIONS as f64;
        let x = view.x_min + t * view.x_span();
        let (px, _) = frame.to_pixel(view, (x, view.y_min));
        let col = canvas_area.x + (px / PX_PER_COL) as u16;

        let label = format_tick(x);
        let len = label.len() as u16;
        let start = col
            .saturating_sub(len / 2)
            .max(canvas_area.x)
            .min(right.saturating_sub(len));
        if let Some(end) = last_end {
            if start <= end + 1 {
                continue;
            }
        }
        for (j, ch) in label.chars().enumerate() {
            let cx = start + j as u16;
            if cx < right {
                if let Some(cell) = f.buffer_mut().cell_mut((cx, row)) {
                    cell.set_char(ch).set_fg(colors.fg1);
                }
            }
        }
        last_end = Some(start + len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::sample::{PlotSettings, SampleSpec};

    #[test]
    fn readout_reports_undefined_samples_as_undef() {
        let settings = PlotSettings::new(
            -1.0,
            1.0,
            SampleSpec::Count(3),
            vec![Function::Reciprocal],
        )
        .unwrap();
        let mut plot = PlotState::build(settings, GlyphStyle::Lines);
        plot.cursor_right();
        let title = readout_title(&plot);
        assert!(title.contains("x = 0"));
        assert!(title.contains("y = 1/x: undef"));
        assert!(title.contains("Lines"));
    }
}
