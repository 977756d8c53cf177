use std::io::{self, Write};

use crate::core::commands::{Command, CommandSet};
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;

/// Pure routing: one input line in, one `Signal` out. State changes
/// happen only inside the handlers.
pub struct Interpreter {
    commands: CommandSet,
    painter: Painter,
}

impl Interpreter {
    pub fn new(commands: CommandSet, painter: Painter) -> Self {
        Interpreter { commands, painter }
    }

    pub fn dispatch(&self, raw_line: &str, session: &mut SessionState) -> Signal {
        let line = raw_line.trim();
        if line.is_empty() {
            help::show(&self.painter, None, Some("Enter the command"));
            return Signal::Warning;
        }

        match line {
            "exit" | "quit" | "q" => return Signal::Exit,
            "clear" | "cls" => {
                clear_terminal();
                return Signal::Done;
            }
            _ => {}
        }

        let (verb, rest) = split_command(line);
        match self.commands.get(verb) {
            Some(command) => command.execute(rest, session),
            None => {
                help::show(
                    &self.painter,
                    None,
                    Some(&format!("Unknown command: {}", line)),
                );
                Signal::Warning
            }
        }
    }
}

/// Split at the first whitespace run: verb, trimmed remainder.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

fn clear_terminal() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::mode::Mode;
    use crate::process::ProcessLauncher;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn interpreter() -> Interpreter {
        let commands = CommandSet::new(
            Painter::plain(),
            &Settings::default(),
            ProcessLauncher::new(Arc::new(AtomicBool::new(false))),
        );
        Interpreter::new(commands, Painter::plain())
    }

    fn session() -> SessionState {
        SessionState::new(Mode::Codeforces).unwrap()
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("cat file.txt"), ("cat", "file.txt"));
        assert_eq!(split_command("exec g++ -O2 a.cpp"), ("exec", "g++ -O2 a.cpp"));
        assert_eq!(split_command("ls"), ("ls", ""));
        assert_eq!(split_command("cd   spaced  "), ("cd", "spaced"));
    }

    #[test]
    fn test_exit_tokens() {
        let interpreter = interpreter();
        let mut session = session();
        for line in ["exit", "quit", "q", "  exit  ", "\tq\t"] {
            assert_eq!(interpreter.dispatch(line, &mut session), Signal::Exit);
        }
    }

    #[test]
    fn test_exit_requires_the_whole_line() {
        let interpreter = interpreter();
        let mut session = session();
        assert_eq!(interpreter.dispatch("exit now", &mut session), Signal::Warning);
    }

    #[test]
    fn test_empty_line_is_a_warning() {
        let interpreter = interpreter();
        let mut session = session();
        assert_eq!(interpreter.dispatch("", &mut session), Signal::Warning);
        assert_eq!(interpreter.dispatch("   ", &mut session), Signal::Warning);
    }

    #[test]
    fn test_unknown_verb_is_a_warning() {
        let interpreter = interpreter();
        let mut session = session();
        assert_eq!(interpreter.dispatch("frobnicate x", &mut session), Signal::Warning);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let interpreter = interpreter();
        let mut session = session();
        assert_eq!(interpreter.dispatch("Help", &mut session), Signal::Warning);
    }

    #[test]
    fn test_mode_round_trip() {
        let interpreter = interpreter();
        let mut session = session();

        assert_eq!(interpreter.dispatch("mode", &mut session), Signal::Done);
        assert_eq!(session.mode(), Mode::Codeforces);

        assert_eq!(interpreter.dispatch("mode usaco", &mut session), Signal::Done);
        assert_eq!(session.mode(), Mode::Usaco);

        assert_eq!(interpreter.dispatch("mode xyz", &mut session), Signal::Warning);
        assert_eq!(session.mode(), Mode::Usaco);
    }

    #[test]
    fn test_help_routes_through_registry() {
        let interpreter = interpreter();
        let mut session = session();
        assert_eq!(interpreter.dispatch("help", &mut session), Signal::Done);
        assert_eq!(interpreter.dispatch("help cat", &mut session), Signal::Done);
        assert_eq!(interpreter.dispatch("help bogus", &mut session), Signal::Warning);
    }
}
