use std::env;
use std::path::Path;
use std::time::Instant;

use super::gcc::{collect_sources, compile};
use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;
use crate::process::ProcessLauncher;

#[cfg(windows)]
const BINARY_NAME: &str = "a.exe";
#[cfg(not(windows))]
const BINARY_NAME: &str = "a.out";

/// `run [directory]`: launch the compiled binary, compiling first when
/// it is absent. The launch is fire-and-forget; only the time spent
/// starting the child is reported.
pub struct RunCommand {
    painter: Painter,
    compiler: String,
    launcher: ProcessLauncher,
    expander: PathExpander,
}

impl RunCommand {
    pub fn new(painter: Painter, compiler: String, launcher: ProcessLauncher) -> Self {
        RunCommand {
            painter,
            compiler,
            launcher,
            expander: PathExpander::new(),
        }
    }
}

impl Command for RunCommand {
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
                Some("run"),
                Some(&format!("Directory '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        if let Err(e) = env::set_current_dir(&path) {
            println!("{} {}", self.painter.error("Error:"), e);
            return Signal::Error;
        }

        if !Path::new(BINARY_NAME).exists() {
            let sources = match collect_sources(Path::new(".")) {
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
            if let Err(e) = compile(&self.launcher, &self.compiler, session.mode(), &sources) {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        }

        let binary = Path::new(".").join(BINARY_NAME);
        let start = Instant::now();
        match self
            .launcher
            .launch_detached(&binary.to_string_lossy(), &[])
        {
            Ok(()) => {
                println!("Elapsed time: {:.3} seconds", start.elapsed().as_secs_f64());
                Signal::Done
            }
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}
