use anyhow::Result;

use bmi_tracker::{logging, Config};

fn main() -> Result<()> {
    let config = Config::default();
    logging::init(&config.log_path)?;
    tracing::info!(version = bmi_tracker::VERSION, backend = ?config.backend, "starting");

    // The data file must exist before the first append
    let store = config.open_store()?;
    store.initialize()?;

    run_ui_mode(store)
}

#[cfg(feature = "tui")]
fn run_ui_mode(store: Box<dyn bmi_tracker::RecordStore>) -> Result<()> {
    let mut app = bmi_tracker::ui::App::new(store);
    bmi_tracker::ui::run_ui(&mut app)?;

    tracing::info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_store: Box<dyn bmi_tracker::RecordStore>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
