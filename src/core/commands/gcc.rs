use std::env;
use std::fs;
use std::path::Path;

use super::Command;
use crate::core::help;
use crate::core::mode::Mode;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;
use crate::process::{ProcessError, ProcessLauncher};

/// `gcc [directory]`: compile every C++ source in the project
/// directory with one compiler invocation. Codeforces mode defines
/// `_DEBUG` so the template's redirection block is compiled in.
pub struct GccCommand {
    painter: Painter,
    compiler: String,
    launcher: ProcessLauncher,
    expander: PathExpander,
}

impl GccCommand {
    pub fn new(painter: Painter, compiler: String, launcher: ProcessLauncher) -> Self {
        GccCommand {
            painter,
            compiler,
            launcher,
            expander: PathExpander::new(),
        }
    }
}

impl Command for GccCommand {
    fn execute(&self, arg: &str, session: &mut SessionState) -> Signal {
        let arg = if arg.is_empty() { "." } else { arg };

        let path = match self.expander.expand(arg) {
            Ok(path) => path,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if !path.is_dir() {
            help::show(
                &self.painter,
                Some("gcc"),
                Some(&format!("Directory '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        let sources = match collect_sources(&path) {
            Ok(sources) => sources,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };
        if sources.is_empty() {
            println!("No C++ source files in '{}'", arg);
            return Signal::Warning;
        }

        if let Err(e) = env::set_current_dir(&path) {
            println!("{} {}", self.painter.error("Error:"), e);
            return Signal::Error;
        }

        match compile(&self.launcher, &self.compiler, session.mode(), &sources) {
            Ok(()) => Signal::Done,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}

/// Names of the `.cpp` files directly under `path`, sorted.
pub(super) fn collect_sources(path: &Path) -> std::io::Result<Vec<String>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".cpp") && entry.path().is_file() {
            sources.push(name);
        }
    }
    sources.sort();
    Ok(sources)
}

/// One blocking compiler invocation over all sources, in the current
/// directory. The compiler's exit status is not inspected.
pub(super) fn compile(
    launcher: &ProcessLauncher,
    compiler: &str,
    mode: Mode,
    sources: &[String],
) -> Result<(), ProcessError> {
    let mut argv: Vec<&str> = vec![compiler];
    argv.extend_from_slice(mode.compiler_flags());
    argv.extend(sources.iter().map(String::as_str));
    launcher.launch_and_wait(&argv)
}
