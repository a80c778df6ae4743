//! 终端模式的进入与恢复
//!
//! 进入：raw mode → 备用屏幕 → 鼠标捕获 → 括号粘贴
//! 恢复：逆序撤销；某一步失败不会跳过后面的步骤

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use signal_hook::consts::signal::{SIGINT, SIGTERM};

/// How long the main loop gets to exit on its own after SIGINT/SIGTERM.
pub const SIGNAL_GRACE_PERIOD: Duration = Duration::from_secs(2);

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let entered = execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        );
        if let Err(err) = entered {
            let _ = self.restore();
            return Err(err);
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        let mut out = io::stdout();
        let steps = [
            execute!(out, DisableBracketedPaste),
            execute!(out, DisableMouseCapture),
            execute!(out, LeaveAlternateScreen),
            terminal::disable_raw_mode(),
        ];
        let _ = out.flush();

        steps.into_iter().find_map(Result::err).map_or(Ok(()), Err)
    }
}

/// Undoes setup at most once, whether from drop, the panic hook or the
/// signal thread.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    /// Leaves raw mode before the panic message is printed, then defers to the
    /// previously installed hook.
    pub fn install_panic_hook(&self) {
        let restorer = self.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let restorer = TerminalRestorer {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        };
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    pub fn from_raw(signo: i32) -> Option<Self> {
        match signo {
            SIGINT => Some(TerminationSignal::Interrupt),
            SIGTERM => Some(TerminationSignal::Terminate),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => SIGINT,
            TerminationSignal::Terminate => SIGTERM,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        128 + self.raw()
    }
}

/// Forwards the first SIGINT/SIGTERM to the main loop. If the loop has not
/// exited after [`SIGNAL_GRACE_PERIOD`], restores the terminal and exits.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    let mut signals = signal_hook::iterator::Signals::new([SIGINT, SIGTERM])?;

    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
                return;
            };

            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);

            std::thread::sleep(SIGNAL_GRACE_PERIOD);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
