//! Frequency response plot
//!
//! The line is the transfer function evaluated analytically, the dots are
//! FFT bins of the measured impulse response. They should sit on top of each
//! other.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

const MIN_DB: f64 = -60.0;
const MAX_DB: f64 = 30.0;

pub fn render_response(
    frame: &mut Frame,
    area: Rect,
    analytic: &[(f64, f64)],
    measured: &[(f64, f64)],
) {
    let block = Block::default()
        .title(" Magnitude (dB) vs normalised frequency ")
        .borders(Borders::ALL);

    let datasets = vec![
        Dataset::default()
            .name("analytic")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(analytic),
        Dataset::default()
            .name("measured")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Magenta))
            .data(measured),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 0.5])
                .labels(vec!["0", "0.125", "0.25", "0.375", "0.5"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([MIN_DB, MAX_DB])
                .labels(vec!["-60", "-30", "0", "+30"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
