//! Phase plot rendering.

use std::io;

use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame, Terminal,
};

use super::PhasePlot;
use crate::surface::PlotSurface;
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;

/// Draw the plot: arrows on a braille canvas plus a footer with the limits.
pub fn draw_phase_plot(f: &mut Frame<'_>, area: Rect, plot: &PhasePlot, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let (x0, x1) = plot.xlim();
    let (y0, y1) = plot.ylim();
    let arrows = plot.arrows();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", plot.title().unwrap_or("Direction field")))
                .title_style(Style::default().fg(colors.heading)),
        )
        .marker(Marker::Braille)
        .x_bounds([x0, x1])
        .y_bounds([y0, y1])
        .paint(|ctx| {
            if (x0..=x1).contains(&0.0) {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: y0,
                    x2: 0.0,
                    y2: y1,
                    color: colors.axis,
                });
            }
            if (y0..=y1).contains(&0.0) {
                ctx.draw(&CanvasLine {
                    x1: x0,
                    y1: 0.0,
                    x2: x1,
                    y2: 0.0,
                    color: colors.axis,
                });
            }
            // axes go on their own layer so arrows are drawn over them
            ctx.layer();

            for arrow in &arrows {
                for seg in std::iter::once(&arrow.shaft).chain(arrow.barbs.iter()) {
                    ctx.draw(&CanvasLine {
                        x1: seg.x1,
                        y1: seg.y1,
                        x2: seg.x2,
                        y2: seg.y2,
                        color: arrow.color,
                    });
                }
            }
        });

    f.render_widget(canvas, chunks[0]);

    let footer = format!(
        " {}: [{}, {}]   {}: [{}, {}] ",
        plot.x_label().unwrap_or("x"),
        format_axis_label(x0),
        format_axis_label(x1),
        plot.y_label().unwrap_or("y"),
        format_axis_label(y0),
        format_axis_label(y1),
    );
    let paragraph = Paragraph::new(footer).style(Style::default().fg(colors.label));
    f.render_widget(paragraph, chunks[1]);
}

/// Render the plot off-screen and return it as text, one line per row.
pub fn snapshot(plot: &PhasePlot, colors: &ThemeColors, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw_phase_plot(f, f.area(), plot, colors))?;

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width).max(1);
    let lines: Vec<String> = buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}
