#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use multiset::{App, init_logging};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "multiset")]
#[command(about = "Terminal menu for multiset compliance analysis and business insights")]
struct Args {
    /// Path to the data directory (default: ~/.multiset/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Directory holding parsed dataset sessions
    #[arg(long, default_value = "parsed_datasets")]
    datasets_dir: PathBuf,

    /// Screen to open on startup (menu, compliance, insights)
    #[arg(short, long)]
    screen: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".multiset")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_dirs(data_dir, args.datasets_dir);
    if let Some(screen) = args.screen.as_deref() {
        app.open_start_screen(screen);
    }

    crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

    let result = ratatui::run(|terminal| app.run(terminal));

    if let Err(err) = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture) {
        tracing::error!("Failed to disable mouse capture: {err}");
    }

    tracing::info!("Application shutting down");

    result
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    // This main() exists only to satisfy the binary target requirement
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
