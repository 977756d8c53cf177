use std::fs;

use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `mkdir <directory>`: create one directory level.
pub struct MkdirCommand {
    painter: Painter,
    expander: PathExpander,
}

impl MkdirCommand {
    pub fn new(painter: Painter) -> Self {
        MkdirCommand {
            painter,
            expander: PathExpander::new(),
        }
    }
}

impl Command for MkdirCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, Some("mkdir"), Some("Enter the directory to make"));
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
            let msg = if path.is_dir() {
                format!("Directory '{}' already exists", arg)
            } else {
                format!("File path '{}' already exists", arg)
            };
            help::show(&self.painter, Some("mkdir"), Some(&msg));
            return Signal::Warning;
        }

        println!("Creating new directory '{}'...", arg);
        match fs::create_dir(&path) {
            Ok(()) => Signal::Done,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}
