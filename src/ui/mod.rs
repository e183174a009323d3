//! User interface rendering.

pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::plot::ui::draw_phase_plot;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    Frame,
};

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(colors.bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_phase_plot(f, chunks[0], &app.plot, &colors);
    draw_status(f, chunks[1], app, &colors);
    draw_keymap(f, chunks[2], &colors);
}
