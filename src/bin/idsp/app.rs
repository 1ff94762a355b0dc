//! Viewer state and the event loop.

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

use idsp::{
    analysis::{decibels, impulse_response, magnitude_response},
    dsp::{BiquadFilter, RbjBiquad, RbjKind},
    maths::clamp,
};

use crate::ui;

/// Number of points on the analytic curve
const PLOT_POINTS: usize = 256;
/// Impulse response length for the measured curve
const IMPULSE_LEN: usize = 4096;
/// Plot every Nth FFT bin of the measured curve
const MEASURED_STRIDE: usize = 32;

const MIN_FREQ: f64 = 0.001;
const MAX_FREQ: f64 = 0.49;
const MIN_Q: f64 = 0.1;
const MAX_Q: f64 = 20.0;
const MAX_GAIN_DB: f64 = 24.0;

/// Interactive response viewer
pub struct ResponseViewer {
    /// Filter being inspected
    filter: RbjBiquad<f64>,
    /// Transfer function magnitude: (freq, dB)
    analytic: Vec<(f64, f64)>,
    /// FFT of the impulse response: (freq, dB)
    measured: Vec<(f64, f64)>,
    /// Whether the app should quit
    should_quit: bool,
}

impl ResponseViewer {
    pub fn new() -> Self {
        let mut viewer = Self {
            filter: RbjBiquad::new(RbjKind::LowPass),
            analytic: Vec::with_capacity(PLOT_POINTS),
            measured: Vec::new(),
            should_quit: false,
        };
        viewer.recompute();
        viewer
    }

    /// Run the UI event loop
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| {
                ui::render(frame, &self.filter, &self.analytic, &self.measured)
            })?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        let freq = self.filter.freq();
        let param = self.filter.param();
        let uses_gain = self.filter.kind().uses_gain();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                let kind = self.filter.kind().next();
                self.filter = RbjBiquad::with_params(kind, freq, kind.default_param());
            }
            KeyCode::Right => self.filter.set_params(clamp(freq * 1.1, MIN_FREQ, MAX_FREQ), param),
            KeyCode::Left => self.filter.set_params(clamp(freq / 1.1, MIN_FREQ, MAX_FREQ), param),
            KeyCode::Up if uses_gain => {
                self.filter.set_params(freq, clamp(param + 1.0, -MAX_GAIN_DB, MAX_GAIN_DB))
            }
            KeyCode::Down if uses_gain => {
                self.filter.set_params(freq, clamp(param - 1.0, -MAX_GAIN_DB, MAX_GAIN_DB))
            }
            KeyCode::Up => self.filter.set_params(freq, clamp(param * 1.1, MIN_Q, MAX_Q)),
            KeyCode::Down => self.filter.set_params(freq, clamp(param / 1.1, MIN_Q, MAX_Q)),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.filter = RbjBiquad::new(self.filter.kind());
            }
            _ => return,
        }

        self.recompute();
    }

    /// Rebuild both curves from the current filter settings
    fn recompute(&mut self) {
        self.analytic.clear();
        for i in 0..PLOT_POINTS {
            let freq = 0.5 * i as f64 / (PLOT_POINTS - 1) as f64;
            self.analytic
                .push((freq, decibels(self.filter.frequency_response(freq))));
        }

        let mut probe = self.filter;
        probe.reset();
        let ir = impulse_response(IMPULSE_LEN, |x| probe.process(x));
        self.measured = magnitude_response(&ir)
            .iter()
            .step_by(MEASURED_STRIDE)
            .map(|point| (point.freq, decibels(point.magnitude)))
            .collect();
    }
}

impl Default for ResponseViewer {
    fn default() -> Self {
        Self::new()
    }
}
