use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::ProcessError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Child-process gateway with two launch modes: detached
/// (fire-and-forget, used for editors and compiled binaries) and
/// blocking (used for `exec` and compilation), where an interrupt at
/// the terminal kills the tracked child.
#[derive(Clone)]
pub struct ProcessLauncher {
    interrupted: Arc<AtomicBool>,
}

impl ProcessLauncher {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        ProcessLauncher { interrupted }
    }

    /// Spawn and return immediately; the child keeps the terminal.
    pub fn launch_detached(&self, program: &str, args: &[&str]) -> Result<(), ProcessError> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map(|_| ())
            .map_err(|e| classify_spawn_error(program, e))
    }

    /// Spawn and block until the child exits, polling at a fixed
    /// interval. An interrupt during the wait kills the child. The
    /// child's exit status is not propagated.
    pub fn launch_and_wait(&self, argv: &[&str]) -> Result<(), ProcessError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ProcessError::Other("empty command".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| classify_spawn_error(program, e))?;

        self.interrupted.store(false, Ordering::SeqCst);
        loop {
            match child.try_wait() {
                Ok(Some(_status)) => return Ok(()),
                Ok(None) => {
                    if self.interrupted.swap(false, Ordering::SeqCst) {
                        kill_and_reap(&mut child);
                        return Err(ProcessError::Interrupted);
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(e.into());
                }
            }
        }
    }
}

fn classify_spawn_error(program: &str, e: std::io::Error) -> ProcessError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ProcessError::CommandNotFound(program.to_string())
    } else {
        ProcessError::Other(e.to_string())
    }
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
