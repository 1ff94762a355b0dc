//! idsp - Terminal viewer for biquad frequency responses
//!
//! Run with: cargo run --bin idsp

mod app;
mod ui;

use app::ResponseViewer;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let terminal = ratatui::init();
    let result = ResponseViewer::new().run(terminal);
    ratatui::restore();
    result
}
