use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::{
    config::Settings,
    core::{commands::CommandSet, interpreter::Interpreter, state::SessionState},
    error::ShellError,
    flags::Flags,
    highlight::Painter,
    process::ProcessLauncher,
};

const BANNER_WIDTH: usize = 46;

const BANNER_ART: &[&str] = &[
    "      ____________                            ",
    "     / ____/ ____/___  _____________  _____   ",
    r"    / /   / /_  / __ \/ ___/ ___/ _ \/ ___/   ",
    r"   / /___/ __/ / /_/ / /  / /__/  __(__  )    ",
    r"   \____/_/    \____/_/   \___/\___/____/     ",
    "                                              ",
];

pub struct Shell {
    editor: DefaultEditor,
    interpreter: Interpreter,
    session: SessionState,
    history_path: PathBuf,
    painter: Painter,
    quiet: bool,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let painter = Painter::new();
        let settings = Settings::load(flags.get_value("config").map(Path::new))?;

        // One process-wide SIGINT handler; the blocking wait loop in
        // ProcessLauncher reads the flag and kills its child.
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = interrupted.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })?;

        let launcher = ProcessLauncher::new(interrupted);
        let commands = CommandSet::new(painter, &settings, launcher);
        let interpreter = Interpreter::new(commands, painter);
        let session = SessionState::new(settings.default_mode)?;

        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".cforces_history");
        // First run: no history file yet
        let _ = editor.load_history(&history_path);

        Ok(Shell {
            editor,
            interpreter,
            session,
            history_path,
            painter,
            quiet: flags.is_set("quiet"),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.quiet {
            self.print_banner();
        }

        loop {
            self.session.refresh();
            let prompt = format!("{} >> ", self.session.current_dir().display());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.quiet {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    if self.interpreter.dispatch(&line, &mut self.session).is_exit() {
                        println!("Exiting CForces...");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Terminating CForces...");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.quiet {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            if !self.quiet {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
        Ok(())
    }

    fn print_banner(&self) {
        let title = format!(" CForces {} ", env!("CARGO_PKG_VERSION"));
        let pad = BANNER_WIDTH.saturating_sub(title.chars().count());
        println!(
            "{}{}{}",
            self.painter
                .dir(&format!("┌{}", "─".repeat((pad + 1) / 2))),
            title,
            self.painter.dir(&format!("{}┐", "─".repeat(pad / 2)))
        );
        for line in BANNER_ART {
            println!(
                "{}{}{}",
                self.painter.dir("│"),
                self.painter.tag(line),
                self.painter.dir("│")
            );
        }
        println!(
            "{}",
            self.painter
                .dir(&format!("└{}┘", "─".repeat(BANNER_WIDTH)))
        );
    }
}
