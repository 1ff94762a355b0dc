//! Layout for the response viewer

mod response;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use idsp::dsp::RbjBiquad;

use response::render_response;
use status::render_status;

/// Render the whole screen
pub fn render(
    frame: &mut Frame,
    filter: &RbjBiquad<f64>,
    analytic: &[(f64, f64)],
    measured: &[(f64, f64)],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter settings
            Constraint::Min(10),   // Response plot
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_status(frame, chunks[0], filter);
    render_response(frame, chunks[1], analytic, measured);

    let help = Paragraph::new(" [Tab] Shape  [←/→] Cutoff  [↑/↓] Q / Gain  [R] Reset  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
