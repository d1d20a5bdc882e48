//! fuzzmenu: pick one item from a list in the terminal
//!
//! Reads items from a file (or stdin), shows them in a filterable menu and
//! prints the payload of the chosen item.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    event::{DisableFocusChange, EnableFocusChange},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::panic;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fuzzmenu::services::ItemSource;
use fuzzmenu::{App, MenuConfig};

/// Setup the terminal for TUI mode; drawing goes to stderr so stdout stays
/// free for the result
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stderr>>> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableFocusChange, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Pick one item from a list in the terminal
#[derive(Parser, Debug)]
#[command(name = "fuzzmenu")]
#[command(about = "Pick one item from a list in the terminal")]
#[command(version)]
struct Cli {
    /// Show a plain menu without the filter prompt
    #[arg(long)]
    no_filter: bool,

    /// Item file (`.json` or one item per line); `-` or none reads stdin
    file: Option<PathBuf>,
}

impl Cli {
    fn source(&self) -> ItemSource {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => ItemSource::File(path.clone()),
            _ => ItemSource::Stdin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = MenuConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default configuration: {}", e);
        MenuConfig::default()
    });
    let source = cli.source();
    let items = source.load()?;
    tracing::info!("Loaded {} items from {:?}", items.len(), source);

    let mut app = App::new(items, config, !cli.no_filter)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = tokio::select! {
        res = app.run(&mut terminal) => res,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
            Ok(())
        }
    };

    // Restore terminal (always, even on error)
    restore_terminal(&mut terminal)?;

    result?;

    if let Some(item) = app.chosen {
        println!("{}", item.payload);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_stdin_with_filter() {
        let cli = Cli::try_parse_from(["fuzzmenu"]).unwrap();
        assert!(!cli.no_filter);
        assert_eq!(cli.source(), ItemSource::Stdin);
    }

    #[test]
    fn test_cli_dash_reads_stdin() {
        let cli = Cli::try_parse_from(["fuzzmenu", "-"]).unwrap();
        assert_eq!(cli.source(), ItemSource::Stdin);
    }

    #[test]
    fn test_cli_file_and_no_filter() {
        let cli = Cli::try_parse_from(["fuzzmenu", "--no-filter", "items.json"]).unwrap();
        assert!(cli.no_filter);
        assert_eq!(cli.source(), ItemSource::File(PathBuf::from("items.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_option() {
        assert!(Cli::try_parse_from(["fuzzmenu", "--bogus"]).is_err());
    }
}
