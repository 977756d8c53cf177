use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::mode::Mode;
use crate::process::{EditorLauncher, ProcessError};

#[derive(Debug)]
pub enum ScaffoldError {
    InvalidProjectName(PathBuf),
    Io(std::io::Error),
    Editor(ProcessError),
}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidProjectName(path) => {
                write!(f, "Cannot derive a project name from '{}'", path.display())
            }
            ScaffoldError::Io(e) => write!(f, "{}", e),
            ScaffoldError::Editor(e) => write!(f, "Failed to launch editor: {}", e),
        }
    }
}

impl std::error::Error for ScaffoldError {}

/// Filenames of a scaffolded project, relative to the project
/// directory.
pub struct ProjectFiles {
    pub source: String,
    pub input: String,
    pub output: String,
    /// false when the project directory already existed
    pub created: bool,
}

/// Creates or opens a project for the active mode: source file from
/// the mode template, two companion I/O files, editor positioned at
/// the mode's cursor line.
pub struct Scaffolder {
    editor: EditorLauncher,
    judge_id: String,
}

impl Scaffolder {
    pub fn new(editor: EditorLauncher, judge_id: impl Into<String>) -> Self {
        Scaffolder {
            editor,
            judge_id: judge_id.into(),
        }
    }

    /// Ensure the project exists, make it the working directory and
    /// hand its files to the editor.
    pub fn open_or_create(&self, path: &Path, mode: Mode) -> Result<ProjectFiles, ScaffoldError> {
        let files = Self::materialize(path, mode, &self.judge_id)?;
        env::set_current_dir(path)?;
        self.editor
            .open_project(&files.source, &files.input, &files.output, mode.cursor_line())
            .map_err(ScaffoldError::Editor)?;
        Ok(files)
    }

    /// The filesystem half, separate from chdir and editor launch. An
    /// existing path is left completely untouched; a missing one gets
    /// the directory, the rendered source and two empty companions.
    pub fn materialize(
        path: &Path,
        mode: Mode,
        judge_id: &str,
    ) -> Result<ProjectFiles, ScaffoldError> {
        let project = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| ScaffoldError::InvalidProjectName(path.to_path_buf()))?;

        let source = format!("{}.cpp", project);
        let (input, output) = mode.companion_files(project);
        let created = !path.exists();

        if created {
            fs::create_dir(path)?;
            fs::write(path.join(&source), mode.render_source(project, judge_id))?;
            fs::write(path.join(&input), "")?;
            fs::write(path.join(&output), "")?;
        }

        Ok(ProjectFiles {
            source,
            input,
            output,
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("cforces_scaffold_{}_{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&path);
        path
    }

    #[test]
    fn test_codeforces_project_layout() {
        let dir = scratch_dir("cf").join("p");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();

        let files = Scaffolder::materialize(&dir, Mode::Codeforces, "id1").unwrap();
        assert!(files.created);
        assert_eq!(files.source, "p.cpp");
        assert_eq!(files.input, "input.txt");
        assert_eq!(files.output, "output.txt");

        let source = fs::read_to_string(dir.join("p.cpp")).unwrap();
        assert_eq!(source, Mode::Codeforces.render_source("p", "id1"));
        assert_eq!(fs::read_to_string(dir.join("input.txt")).unwrap(), "");
        assert_eq!(fs::read_to_string(dir.join("output.txt")).unwrap(), "");

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_usaco_project_layout() {
        let dir = scratch_dir("usaco").join("p");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();

        let files = Scaffolder::materialize(&dir, Mode::Usaco, "id1").unwrap();
        assert_eq!(files.input, "p.in");
        assert_eq!(files.output, "p.out");

        let source = fs::read_to_string(dir.join("p.cpp")).unwrap();
        assert!(source.contains("ID: id1"));
        assert!(source.contains("TASK: p"));
        assert!(source.contains("freopen(\"p.in\""));
        assert!(source.contains("freopen(\"p.out\""));

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_existing_project_is_never_overwritten() {
        let dir = scratch_dir("existing").join("p");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("p.cpp"), "// my solution\n").unwrap();

        let files = Scaffolder::materialize(&dir, Mode::Codeforces, "id1").unwrap();
        assert!(!files.created);
        assert_eq!(
            fs::read_to_string(dir.join("p.cpp")).unwrap(),
            "// my solution\n"
        );
        // companions are not created for existing projects either
        assert!(!dir.join("input.txt").exists());

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
