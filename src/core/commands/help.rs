use super::Command;
use crate::core::help;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;

/// `help [option]`: the full command table, or one entry.
pub struct HelpCommand {
    painter: Painter,
}

impl HelpCommand {
    pub fn new(painter: Painter) -> Self {
        HelpCommand { painter }
    }
}

impl Command for HelpCommand {
    fn execute(&self, arg: &str, _session: &mut SessionState) -> Signal {
        if arg.is_empty() {
            help::show(&self.painter, None, None);
            return Signal::Done;
        }

        help::show(&self.painter, Some(arg), None);
        if help::find(arg).is_some() {
            Signal::Done
        } else {
            Signal::Warning
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mode::Mode;

    #[test]
    fn test_known_option_is_done() {
        let cmd = HelpCommand::new(Painter::plain());
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd.execute("run", &mut session), Signal::Done);
        assert_eq!(cmd.execute("", &mut session), Signal::Done);
    }

    #[test]
    fn test_unknown_option_is_a_warning() {
        let cmd = HelpCommand::new(Painter::plain());
        let mut session = SessionState::new(Mode::Codeforces).unwrap();
        assert_eq!(cmd.execute("bogus", &mut session), Signal::Warning);
    }
}
