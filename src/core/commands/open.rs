use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;
use crate::process::EditorLauncher;

/// `open <file>`: hand a path to the configured editor, detached.
pub struct OpenCommand {
    painter: Painter,
    editor: EditorLauncher,
    expander: PathExpander,
}

impl OpenCommand {
    pub fn new(painter: Painter, editor: EditorLauncher) -> Self {
        OpenCommand {
            painter,
            editor,
            expander: PathExpander::new(),
        }
    }
}

impl Command for OpenCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, Some("open"), Some("Enter the file path to open"));
            return Signal::Warning;
        }

        let path = match self.expander.expand(arg) {
            Ok(path) => path,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if path.is_file() {
            println!("Opening file '{}'...", arg);
        } else if path.is_dir() {
            println!("Opening directory '{}'...", arg);
        } else {
            println!("Opening new file '{}'...", arg);
        }

        match self.editor.open_path(&path.to_string_lossy()) {
            Ok(()) => Signal::Done,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}
