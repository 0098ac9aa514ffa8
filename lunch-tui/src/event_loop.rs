use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use lunch_store::RecordStore;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::app::App;
use crate::ui;

/// Redraw interval while no key arrives, so new log lines show up
const TICK: Duration = Duration::from_millis(250);

/// Draw, read one key, apply it; until the app asks to quit.
///
/// PageUp/PageDown scroll the log pane and never reach the forms.
pub fn run_app<B: Backend, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    logger_state: &TuiWidgetState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app, Some(logger_state)))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match key.code {
                KeyCode::PageUp => logger_state.transition(TuiWidgetEvent::PrevPageKey),
                KeyCode::PageDown => logger_state.transition(TuiWidgetEvent::NextPageKey),
                _ => app.handle_key(key),
            }
        }
    }
}
