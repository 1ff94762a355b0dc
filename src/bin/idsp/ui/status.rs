//! Status bar widget - shows the filter shape and parameters

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use idsp::dsp::{BiquadFilter, RbjBiquad};

pub fn render_status(frame: &mut Frame, area: Rect, filter: &RbjBiquad<f64>) {
    let block = Block::default().title(" idsp ").borders(Borders::ALL);

    let param = if filter.kind().uses_gain() {
        format!("Gain: {:+.1} dB  ", filter.param())
    } else {
        format!("Q: {:.2}  ", filter.param())
    };
    let [p0, p1, p2] = *filter.biquad().poles();
    let [z0, z1, z2] = *filter.biquad().zeros();

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", filter.kind()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Cutoff: {:.4}  ", filter.freq()),
            Style::default().fg(Color::White),
        ),
        Span::styled(param, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(
                "poles [{:.3} {:.3} {:.3}]  zeros [{:.3} {:.3} {:.3}]",
                p0, p1, p2, z0, z1, z2
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
