use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_restore_is_reported_once() {
    struct BrokenRestore {
        restores: Mutex<usize>,
    }

    impl TerminalOps for BrokenRestore {
        fn setup(&self) -> std::io::Result<()> {
            Ok(())
        }

        fn restore(&self) -> std::io::Result<()> {
            *self.restores.lock().unwrap() += 1;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "stdout closed"))
        }
    }

    let ops = Arc::new(BrokenRestore {
        restores: Mutex::new(0),
    });
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    assert!(restorer.restore().is_err());
    assert!(restorer.restore().is_ok());
    drop(guard);

    assert_eq!(*ops.restores.lock().unwrap(), 1);
}

#[test]
fn setup_failure_does_not_restore() {
    struct FailingOps;

    impl TerminalOps for FailingOps {
        fn setup(&self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"))
        }

        fn restore(&self) -> std::io::Result<()> {
            panic!("restore must not run when setup failed");
        }
    }

    assert!(TerminalGuard::with_ops(Arc::new(FailingOps)).is_err());
}

#[test]
fn termination_signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}

#[test]
fn only_interrupt_and_terminate_are_recognized() {
    assert_eq!(TerminationSignal::from_raw(SIGINT), Some(TerminationSignal::Interrupt));
    assert_eq!(TerminationSignal::from_raw(SIGTERM), Some(TerminationSignal::Terminate));
    assert_eq!(TerminationSignal::from_raw(0), None);
}
