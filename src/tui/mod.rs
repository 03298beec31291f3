// src/tui/mod.rs
pub mod runner;
pub mod state;
pub mod view;

use crate::types::AnalysisResult;
use anyhow::Result;

/// Runs the interactive results viewer until the user quits.
///
/// # Errors
/// Returns error if TUI setup or execution fails.
pub fn run(label: &str, result: AnalysisResult) -> Result<()> {
    runner::setup_terminal()?;

    let res = ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(std::io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| state::App::new(label, result).run(&mut terminal));

    runner::restore_terminal()?;

    res
}
