use anyhow::Context;
use lunch_store::RecordStorage;
use lunch_tui::{App, Config, TerminalGuard, init_logger, run_app};
use tui_logger::TuiWidgetState;

fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    let _log_guard = init_logger(&config)?;

    // 2. Open the database (closed when `app` is dropped)
    let storage = RecordStorage::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;
    tracing::info!(
        path = %config.db_path.display(),
        lunch_orders = storage.lunch_orders()?.len(),
        office_tallies = storage.office_tallies()?.len(),
        "Database ready"
    );

    // 3. Run the UI
    let mut app = App::new(storage);
    let logger_state = TuiWidgetState::new();
    let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
    run_app(guard.terminal_mut(), &mut app, &logger_state)?;

    tracing::info!("Bye");
    Ok(())
}
