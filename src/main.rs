use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use todolist::app::TodoApp;
use todolist::core::InputEvent;
use todolist::services::settings;
use todolist::services::Settings;
use todolist::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use todolist::tui::view::{EventResult, View};

mod logging;

/// Upper bound on how long a pending termination signal waits for the loop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let logging = logging::init();
    let settings = load_startup_settings();

    let guard = TerminalGuard::new()?;
    let restorer = guard.restorer();
    restorer.install_panic_hook();

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = todolist::tui::terminal_guard::install_termination_signals(
        restorer.clone(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = TodoApp::from_settings(&settings);

    let outcome = run(&mut terminal, &mut app, &signal_rx);

    drop(terminal);
    drop(guard);

    match outcome {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "exiting on signal");
            // exit() skips destructors; flush the log writer first.
            drop(logging);
            std::process::exit(signal.exit_code());
        }
        Ok(None) => {
            tracing::info!(items = app.state().todo.len(), "exiting");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal loop failed");
            Err(err)
        }
    }
}

fn load_startup_settings() -> Settings {
    if let Err(err) = settings::ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    settings::load_settings().unwrap_or_default()
}

/// Mutate, then redraw only when the app reports a visible change.
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TodoApp,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;

    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                app.render(frame, area);
                if let Some(pos) = app.cursor_position() {
                    frame.set_cursor_position(pos);
                }
            })?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let input = InputEvent::from(event::read()?);
        match app.handle_input(&input) {
            EventResult::Quit => return Ok(None),
            EventResult::Redraw => dirty = true,
            EventResult::Consumed | EventResult::Ignored => {}
        }
    }
}
