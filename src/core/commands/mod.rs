mod cat;
mod cd;
mod code;
mod exec;
mod gcc;
mod help;
mod ls;
mod mkdir;
mod mode;
mod open;
mod rm;
mod run;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use code::CodeCommand;
pub use exec::ExecCommand;
pub use gcc::GccCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mode::ModeCommand;
pub use open::OpenCommand;
pub use rm::RmCommand;
pub use run::RunCommand;

use crate::config::Settings;
use crate::core::scaffold::Scaffolder;
use crate::core::signal::Signal;
use crate::core::state::SessionState;
use crate::highlight::Painter;
use crate::process::{EditorLauncher, ProcessLauncher};

/// A registered verb handler. Receives the remainder of the input line
/// and reports its outcome as a `Signal`; invalid arguments print a
/// usage message through `core::help` before returning `Warning`.
pub trait Command {
    fn execute(&self, arg: &str, session: &mut SessionState) -> Signal;
}

pub enum CommandKind {
    Cat(CatCommand),
    Cd(CdCommand),
    Code(CodeCommand),
    Exec(ExecCommand),
    Gcc(GccCommand),
    Help(HelpCommand),
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Mode(ModeCommand),
    Open(OpenCommand),
    Rm(RmCommand),
    Run(RunCommand),
}

impl Command for CommandKind {
    fn execute(&self, arg: &str, session: &mut SessionState) -> Signal {
        match self {
            CommandKind::Cat(cmd) => cmd.execute(arg, session),
            CommandKind::Cd(cmd) => cmd.execute(arg, session),
            CommandKind::Code(cmd) => cmd.execute(arg, session),
            CommandKind::Exec(cmd) => cmd.execute(arg, session),
            CommandKind::Gcc(cmd) => cmd.execute(arg, session),
            CommandKind::Help(cmd) => cmd.execute(arg, session),
            CommandKind::Ls(cmd) => cmd.execute(arg, session),
            CommandKind::Mkdir(cmd) => cmd.execute(arg, session),
            CommandKind::Mode(cmd) => cmd.execute(arg, session),
            CommandKind::Open(cmd) => cmd.execute(arg, session),
            CommandKind::Rm(cmd) => cmd.execute(arg, session),
            CommandKind::Run(cmd) => cmd.execute(arg, session),
        }
    }
}

/// All verb handlers, in registration order. Lookup is exact and
/// case-sensitive.
pub struct CommandSet {
    entries: Vec<(&'static str, CommandKind)>,
}

impl CommandSet {
    pub fn new(painter: Painter, settings: &Settings, launcher: ProcessLauncher) -> Self {
        let editor = EditorLauncher::new(settings.editor.clone(), launcher.clone());
        let scaffolder = Scaffolder::new(editor.clone(), settings.judge_id.clone());

        let entries = vec![
            (
                "cat",
                CommandKind::Cat(CatCommand::new(
                    painter,
                    settings.encodings.clone(),
                    settings.line_limit,
                )),
            ),
            ("cd", CommandKind::Cd(CdCommand::new(painter))),
            (
                "exec",
                CommandKind::Exec(ExecCommand::new(painter, launcher.clone())),
            ),
            (
                "gcc",
                CommandKind::Gcc(GccCommand::new(
                    painter,
                    settings.compiler.clone(),
                    launcher.clone(),
                )),
            ),
            ("help", CommandKind::Help(HelpCommand::new(painter))),
            ("ls", CommandKind::Ls(LsCommand::new(painter))),
            (
                "code",
                CommandKind::Code(CodeCommand::new(painter, scaffolder)),
            ),
            ("mkdir", CommandKind::Mkdir(MkdirCommand::new(painter))),
            ("mode", CommandKind::Mode(ModeCommand::new(painter))),
            ("open", CommandKind::Open(OpenCommand::new(painter, editor))),
            ("rm", CommandKind::Rm(RmCommand::new(painter))),
            (
                "run",
                CommandKind::Run(RunCommand::new(
                    painter,
                    settings.compiler.clone(),
                    launcher,
                )),
            ),
        ];

        CommandSet { entries }
    }

    pub fn get(&self, verb: &str) -> Option<&CommandKind> {
        self.entries
            .iter()
            .find(|(name, _)| *name == verb)
            .map(|(_, command)| command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    pub(crate) fn test_command_set() -> CommandSet {
        CommandSet::new(
            Painter::plain(),
            &Settings::default(),
            ProcessLauncher::new(Arc::new(AtomicBool::new(false))),
        )
    }

    #[test]
    fn test_every_help_entry_has_a_handler() {
        let commands = test_command_set();
        for entry in crate::core::help::COMMANDS {
            assert!(commands.get(entry.verb).is_some(), "{}", entry.verb);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let commands = test_command_set();
        assert!(commands.get("cat").is_some());
        assert!(commands.get("Cat").is_none());
        assert!(commands.get("ca").is_none());
        assert!(commands.get("").is_none());
    }
}
