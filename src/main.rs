// algoTTY: step-by-step algorithm playback in the terminal

use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::config::Cli;
use algotty::ui::App;

/// Send tracing output to `path`. Nothing is logged to the terminal, which
/// belongs to the TUI.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    // Generate the first timeline before touching the terminal
    let mut app = match App::from_command(&cli.command, cli.seed, cli.interval()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        steps = app.player.timeline().len(),
        algorithm = %app.player.timeline().algorithm(),
        "starting TUI"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
