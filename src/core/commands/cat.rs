use std::env;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `cat <file>`: line-numbered file viewer with an ordered encoding
/// fallback and middle elision for long files.
pub struct CatCommand {
    painter: Painter,
    expander: PathExpander,
    encodings: Vec<&'static Encoding>,
    line_limit: usize,
}

impl CatCommand {
    pub fn new(painter: Painter, encodings: Vec<&'static Encoding>, line_limit: usize) -> Self {
        CatCommand {
            painter,
            expander: PathExpander::new(),
            encodings,
            line_limit,
        }
    }

    fn decode(&self, bytes: &[u8]) -> Option<(String, &'static str)> {
        for encoding in &self.encodings {
            // no BOM sniffing: the configured order decides, nothing else
            let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
            if !had_errors {
                return Some((text.into_owned(), encoding.name()));
            }
        }
        None
    }

    fn numbered_line(&self, number: usize, width: usize, line: &str) -> String {
        let line = line.replace('\t', &self.painter.dir("| "));
        format!(
            "{}{}",
            self.painter
                .accent(&format!("│ {:>width$} │ ", number, width = width)),
            line
        )
    }

    /// Render the gutter view: every line up to the limit, then an
    /// ellipsis row and the final line.
    fn render(&self, content: &str) -> Vec<String> {
        let lines: Vec<&str> = content.lines().collect();
        let total = lines.len();
        let width = total.to_string().len();

        let mut out = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if i >= self.line_limit {
                let k = width + 3;
                out.push(self.painter.accent(&format!(
                    "{}⋮{}",
                    " ".repeat((k + 1) / 2),
                    " ".repeat(k / 2)
                )));
                out.push(self.numbered_line(total, width, lines[total - 1]));
                break;
            }
            out.push(self.numbered_line(i + 1, width, line));
        }
        out
    }
}

impl Command for CatCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, Some("cat"), Some("Enter the file path to view"));
            return Signal::Warning;
        }

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
                Some("cat"),
                Some(&format!("File path '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        if path.is_dir() {
            println!("File path '{}' is not a file", arg);
            return Signal::Warning;
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                println!("Failed to output file '{}'", arg);
                return Signal::Error;
            }
        };

        match self.decode(&bytes) {
            Some((content, encoding)) => {
                println!(
                    "{} {}",
                    self.painter.accent(&format!("◉  {}", absolute(&path).display())),
                    self.painter.tag(&format!("[{}]", encoding))
                );
                for line in self.render(&content) {
                    println!("{}", line);
                }
                Signal::Done
            }
            None => {
                println!("Failed to output file '{}'", arg);
                Signal::Error
            }
        }
    }
}

fn absolute(path: &Path) -> std::path::PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
