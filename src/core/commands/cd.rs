use std::env;

use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `cd [directory]`: change the working directory, defaulting to home.
pub struct CdCommand {
    painter: Painter,
    expander: PathExpander,
}

impl CdCommand {
    pub fn new(painter: Painter) -> Self {
        CdCommand {
            painter,
            expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        let path = if arg.is_empty() {
            match self.expander.home_dir() {
                Ok(home) => home,
                Err(e) => {
                    println!("{} {}", self.painter.error("Error:"), e);
                    return Signal::Error;
                }
            }
        } else {
            match self.expander.expand(arg) {
                Ok(path) => path,
                Err(e) => {
                    println!("{} {}", self.painter.error("Error:"), e);
                    return Signal::Error;
                }
            }
        };

        if !path.exists() {
            help::show(
                &self.painter,
                Some("cd"),
                Some(&format!("Directory '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        if path.is_file() {
            println!("File path '{}' is not a directory", arg);
            return Signal::Warning;
        }

        match env::set_current_dir(&path) {
            Ok(()) => Signal::Done,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}
