//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar: the last error if any, otherwise the status and option summary.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (text, fg) = match &app.error_message {
        Some(err) => (format!("Error: {}", err), colors.error),
        None => {
            let opts = &app.options;
            let range = match (opts.normalise, opts.dynamic_range) {
                (true, Some(_)) => "norm (range ignored)".to_string(),
                (true, None) => "norm".to_string(),
                (false, Some(r)) => format!("range {}", r),
                (false, None) => "range 1".to_string(),
            };
            let text = format!(
                "{} | {} | clip:{} axes:{} switch:{}",
                app.status,
                range,
                flag(opts.clip_negative),
                flag(opts.scale_to_axes),
                flag(opts.switch_axes),
            );
            let fg = if opts.normalise && opts.dynamic_range.is_some() {
                colors.warning
            } else {
                colors.status_fg
            };
            (text, fg)
        },
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn flag(on: bool) -> char {
    if on {
        '+'
    } else {
        '-'
    }
}
