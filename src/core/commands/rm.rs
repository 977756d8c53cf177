use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::path::PathExpander;

/// `rm <file>`: delete a file or directory. Non-empty directories
/// require interactive confirmation before the recursive delete.
pub struct RmCommand {
    painter: Painter,
    expander: PathExpander,
}

impl RmCommand {
    pub fn new(painter: Painter) -> Self {
        RmCommand {
            painter,
            expander: PathExpander::new(),
        }
    }

    /// The deletion policy, with the confirmation source injected so
    /// the decline path has no terminal dependency.
    fn delete(
        &self,
        path: &Path,
        display: &str,
        confirm: &mut dyn FnMut() -> io::Result<bool>,
    ) -> Signal {
        if path.is_file() {
            return match fs::remove_file(path) {
                Ok(()) => {
                    println!("File '{}' deleted successfully", display);
                    Signal::Done
                }
                Err(e) => {
                    println!("{} {}", self.painter.error("Error:"), e);
                    Signal::Error
                }
            };
        }

        let is_empty = match fs::read_dir(path) {
            Ok(mut entries) => entries.next().is_none(),
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                return Signal::Error;
            }
        };

        if is_empty {
            return match fs::remove_dir(path) {
                Ok(()) => {
                    println!("Directory '{}' deleted successfully", display);
                    Signal::Done
                }
                Err(e) => {
                    println!("{} {}", self.painter.error("Error:"), e);
                    Signal::Error
                }
            };
        }

        match confirm() {
            Ok(true) => match fs::remove_dir_all(path) {
                Ok(()) => {
                    println!("Directory '{}' deleted successfully", display);
                    Signal::Done
                }
                Err(e) => {
                    println!("{} {}", self.painter.error("Error:"), e);
                    Signal::Error
                }
            },
            Ok(false) => {
                println!("Operation has been cancelled");
                Signal::Warning
            }
            Err(e) => {
                println!("{} {}", self.painter.error("Error:"), e);
                Signal::Error
            }
        }
    }
}

impl Command for RmCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, Some("rm"), Some("Enter the file path to remove"));
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
                Some("rm"),
                Some(&format!("File path '{}' doesn't exist", arg)),
            );
            return Signal::Warning;
        }

        self.delete(&path, arg, &mut || prompt_confirmation(arg))
    }
}

fn prompt_confirmation(display: &str) -> io::Result<bool> {
    print!(
        "Directory '{}' is not empty; confirm to continue [y/N] ",
        display
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mode::Mode;
    use std::env;
    use std::path::PathBuf;

    fn cmd() -> RmCommand {
        RmCommand::new(Painter::plain())
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("cforces_rm_{}_{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_path_is_a_warning() {
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(
            cmd().execute("/no/such/path/at/all", &mut session),
            Signal::Warning
        );
    }

    #[test]
    fn test_remove_file() {
        let dir = scratch_dir("file");
        let file = dir.join("x.txt");
        fs::write(&file, "x").unwrap();

        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(
            cmd().execute(file.to_str().unwrap(), &mut session),
            Signal::Done
        );
        assert!(!file.exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_remove_empty_directory() {
        let dir = scratch_dir("emptydir");
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(
            cmd().execute(dir.to_str().unwrap(), &mut session),
            Signal::Done
        );
        assert!(!dir.exists());
    }

    #[test]
    fn test_declined_confirmation_leaves_directory() {
        let dir = scratch_dir("declined");
        fs::write(dir.join("keep.txt"), "x").unwrap();

        let command = cmd();
        let signal = command.delete(&dir, "declined", &mut || Ok(false));
        assert_eq!(signal, Signal::Warning);
        assert!(dir.join("keep.txt").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_confirmed_recursive_delete() {
        let dir = scratch_dir("confirmed");
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("sub").join("x.txt"), "x").unwrap();

        let command = cmd();
        let signal = command.delete(&dir, "confirmed", &mut || Ok(true));
        assert_eq!(signal, Signal::Done);
        assert!(!dir.exists());
    }

    #[test]
    fn test_failed_confirmation_read_is_an_error() {
        let dir = scratch_dir("readfail");
        fs::write(dir.join("keep.txt"), "x").unwrap();

        let command = cmd();
        let signal = command.delete(&dir, "readfail", &mut || {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        });
        assert_eq!(signal, Signal::Error);
        assert!(dir.join("keep.txt").exists());
        fs::remove_dir_all(dir).unwrap();
    }
}
