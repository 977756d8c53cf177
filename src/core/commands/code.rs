use super::Command;
use crate::core::help;
use crate::core::scaffold::Scaffolder;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `code <directory>`: create or open a project for the active mode
/// and drop into it.
pub struct CodeCommand {
    painter: Painter,
    scaffolder: Scaffolder,
    expander: PathExpander,
}

impl CodeCommand {
    pub fn new(painter: Painter, scaffolder: Scaffolder) -> Self {
        CodeCommand {
            painter,
            scaffolder,
            expander: PathExpander::new(),
        }
    }
}

impl Command for CodeCommand {
    fn execute(&self, arg: &str, session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(
                &self.painter,
                Some("code"),
                Some("Enter the project directory to open"),
            );
            return Signal::Warning;
        }

        let path = match self.expander.expand(arg) {
            Ok(path) => path,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if path.exists() {
            println!("Opening project '{}'...", arg);
        } else {
            println!("Creating new project '{}'...", arg);
        }

        match self.scaffolder.open_or_create(&path, session.mode()) {
            Ok(_) => Signal::Done,
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
    use crate::process::{EditorLauncher, ProcessLauncher};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[test]
    fn test_empty_arg_is_a_warning() {
        let launcher = ProcessLauncher::new(Arc::new(AtomicBool::new(false)));
        let cmd = CodeCommand::new(
            Painter::plain(),
            Scaffolder::new(EditorLauncher::new("cforces_no_such_editor", launcher), "id1"),
        );
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd.execute("", &mut session), Signal::Warning);
    }
}
