use super::{ProcessError, ProcessLauncher};

/// Launches the configured editor, always detached so the prompt comes
/// back immediately.
#[derive(Clone)]
pub struct EditorLauncher {
    program: String,
    launcher: ProcessLauncher,
}

impl EditorLauncher {
    pub fn new(program: impl Into<String>, launcher: ProcessLauncher) -> Self {
        EditorLauncher {
            program: program.into(),
            launcher,
        }
    }

    /// `open <path>`: hand one path to the editor.
    pub fn open_path(&self, path: &str) -> Result<(), ProcessError> {
        self.launcher.launch_detached(&self.program, &[path])
    }

    /// Open a scaffolded project: source plus both companion files.
    /// VS Code supports cursor placement through `-g`; other editors
    /// get the three paths and place the cursor themselves.
    pub fn open_project(
        &self,
        source: &str,
        input: &str,
        output: &str,
        cursor_line: usize,
    ) -> Result<(), ProcessError> {
        if self.is_vscode() {
            let goto = format!("{}:{}:2", source, cursor_line);
            self.launcher.launch_detached(
                &self.program,
                &["-n", "-g", &goto, "--", source, input, output],
            )
        } else {
            self.launcher
                .launch_detached(&self.program, &[source, input, output])
        }
    }

    fn is_vscode(&self) -> bool {
        matches!(self.program.as_str(), "code" | "code-insiders" | "codium")
    }
}
