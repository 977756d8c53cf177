use std::fmt;

pub mod editor;
pub mod launcher;

pub use editor::EditorLauncher;
pub use launcher::ProcessLauncher;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Interrupted,
    Other(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Interrupted => write!(f, "Process terminated by interrupt"),
            ProcessError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
