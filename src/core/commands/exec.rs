use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::process::{ProcessError, ProcessLauncher};

/// `exec <command>`: run a foreign command and block until it exits.
/// The one place the shell deliberately waits; Ctrl-C kills the child
/// and hands the prompt back.
pub struct ExecCommand {
    painter: Painter,
    launcher: ProcessLauncher,
}

impl ExecCommand {
    pub fn new(painter: Painter, launcher: ProcessLauncher) -> Self {
        ExecCommand { painter, launcher }
    }
}

impl Command for ExecCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, Some("exec"), Some("Enter the command to execute"));
            return Signal::Warning;
        }

        let argv: Vec<&str> = arg.split_whitespace().collect();
        match self.launcher.launch_and_wait(&argv) {
            Ok(()) => Signal::Done,
            Err(ProcessError::Interrupted) => {
                println!("\nProcess terminated by interrupt");
                Signal::Error
            }
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mode::Mode;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn cmd() -> ExecCommand {
        ExecCommand::new(
            Painter::plain(),
            ProcessLauncher::new(Arc::new(AtomicBool::new(false))),
        )
    }

    #[test]
    fn test_empty_command_is_a_warning() {
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd().execute("", &mut session), Signal::Warning);
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(
            cmd().execute("cforces_no_such_binary --flag", &mut session),
            Signal::Error
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_completed_command_is_done() {
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd().execute("true", &mut session), Signal::Done);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_not_propagated() {
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd().execute("false", &mut session), Signal::Done);
    }
}
