use super::Command;
use crate::core::help;
use crate::core::mode::Mode;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;

/// `mode <mode>`: report or switch the active judge profile. An
/// explicit choice is pinned to the current directory.
pub struct ModeCommand {
    painter: Painter,
}

impl ModeCommand {
    pub fn new(painter: Painter) -> Self {
        ModeCommand { painter }
    }
}

impl Command for ModeCommand {
    fn execute(&self, arg: &str, session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            println!("Current mode is {}", session.mode().name());
            return Signal::Done;
        }

        match Mode::parse(arg) {
            Some(mode) => {
                session.select_mode(mode);
                println!("Mode {} selected", mode.name());
                Signal::Done
            }
            None => {
                help::show(
                    &self.painter,
                    Some("mode"),
                    Some(&format!("Unknown mode: {}", arg)),
                );
                Signal::Warning
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(Mode::Codeforces).unwrap()
    }

    #[test]
    fn test_empty_arg_reports_without_changing() {
        let cmd = ModeCommand::new(Painter::plain());
        let mut session = session();
        assert_eq!(cmd.execute("", &mut session), Signal::Done);
        assert_eq!(session.mode(), Mode::Codeforces);
    }

    #[test]
    fn test_select_known_mode() {
        let cmd = ModeCommand::new(Painter::plain());
        let mut session = session();
        assert_eq!(cmd.execute("usaco", &mut session), Signal::Done);
        assert_eq!(session.mode(), Mode::Usaco);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let cmd = ModeCommand::new(Painter::plain());
        let mut session = session();
        assert_eq!(cmd.execute("xyz", &mut session), Signal::Warning);
        assert_eq!(session.mode(), Mode::Codeforces);
    }
}
