use std::env;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `ls [file]`: list the direct children of a directory as a small
/// tree, directories and files in distinct colors.
pub struct LsCommand {
    painter: Painter,
    expander: PathExpander,
}

impl LsCommand {
    pub fn new(painter: Painter) -> Self {
        LsCommand {
            painter,
            expander: PathExpander::new(),
        }
    }

    fn render(&self, entries: &[(String, bool)]) -> Vec<String> {
        let mut out = Vec::new();
        if !entries.is_empty() {
            out.push(self.painter.accent("│"));
        }
        for (i, (name, is_dir)) in entries.iter().enumerate() {
            let branch = if i + 1 == entries.len() { "╰" } else { "├" };
            let colored = if *is_dir {
                self.painter.dir(&format!("{}{}", name, MAIN_SEPARATOR))
            } else {
                self.painter.file(name)
            };
            out.push(format!(
                "{}{}",
                self.painter.accent(&format!("{}─ ", branch)),
                colored
            ));
        }
        out
    }
}

impl Command for LsCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        let arg = if arg.is_empty() { "." } else { arg };

        let path = match self.expander.expand(arg) {
            Ok(path) => path,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if !path.exists() {
            help::show(
                &self.painter,
                Some("ls"),
                Some(&format!("File path '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        if path.is_file() {
            help::show(
                &self.painter,
                Some("ls"),
                Some(&format!("File '{}' is not a directory", arg)),
            );
            return Signal::Warning;
        }

        let mut entries = match scan_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if entries.is_empty() {
            help::show(
                &self.painter,
                Some("ls"),
                Some(&format!("Directory '{}' is empty", arg)),
            );
            return Signal::Warning;
        }

        entries.sort();
        println!(
            "{}",
            self.painter.accent(&format!("◉  {}", absolute(&path).display()))
        );
        for line in self.render(&entries) {
            println!("{}", line);
        }
        Signal::Done
    }
}

fn scan_entries(path: &Path) -> std::io::Result<Vec<(String, bool)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, entry.path().is_dir()));
    }
    Ok(entries)
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
