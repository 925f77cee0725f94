use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn guard_restores_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restore_runs_once_across_clones() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    let other = restorer.clone();

    restorer.restore().unwrap();
    other.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_setup_yields_no_guard() {
    let ops = Arc::new(RecordingOps {
        fail_setup: true,
        ..RecordingOps::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup"]);
}

#[cfg(unix)]
#[test]
fn only_interrupt_and_terminate_are_handled() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    assert_eq!(
        TerminationSignal::from_raw(SIGINT),
        Some(TerminationSignal::SigInt)
    );
    assert_eq!(
        TerminationSignal::from_raw(SIGTERM),
        Some(TerminationSignal::SigTerm)
    );
    assert_eq!(TerminationSignal::from_raw(SIGHUP), None);
}

#[test]
fn signal_exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
