/// Outcome of one dispatched command, consumed by the REPL loop.
///
/// `Warning` marks a user-input problem (a corrective usage message has
/// already been printed), `Error` a failed operation. Both leave the
/// shell running; `Exit` is the only value that stops the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Done,
    Error,
    Warning,
    Exit,
}

impl Signal {
    pub fn is_exit(self) -> bool {
        matches!(self, Signal::Exit)
    }
}
