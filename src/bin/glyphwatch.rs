// src/bin/glyphwatch.rs
use anyhow::Result;
use clap::Parser;

use glyphwatch_core::cli::{self, Cli, Commands};
use glyphwatch_core::exit::GlyphExit;
use glyphwatch_core::logging;

fn main() -> GlyphExit {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    GlyphExit::from(run(&cli))
}

fn run(cli: &Cli) -> Result<GlyphExit> {
    match &cli.command {
        Commands::Init => cli::handle_init(),
        #[cfg(feature = "tui")]
        Commands::View { file } => cli::handle_view(file),
        Commands::Scan {
            paths,
            stdin,
            output,
        } => {
            let config = cli::load_config(cli.config.as_deref())?;
            cli::handle_scan(paths, *stdin, output, &config)
        }
        Commands::Text { text, output } => {
            let config = cli::load_config(cli.config.as_deref())?;
            cli::handle_text(text, output, &config)
        }
    }
}
