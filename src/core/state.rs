use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::mode::Mode;

/// Process-wide shell state: the cached working directory used for
/// prompt rendering and the active judge mode. Explicit mode choices
/// are remembered per directory and restored when the shell returns
/// there.
pub struct SessionState {
    current_dir: PathBuf,
    mode: Mode,
    mode_cache: HashMap<PathBuf, Mode>,
}

impl SessionState {
    pub fn new(default_mode: Mode) -> std::io::Result<Self> {
        Ok(SessionState {
            current_dir: env::current_dir()?,
            mode: default_mode,
            mode_cache: HashMap::new(),
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Explicit selection: becomes the active mode and is pinned to the
    /// current directory.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.mode_cache.insert(self.current_dir.clone(), mode);
    }

    /// Re-read the process working directory and restore the mode
    /// pinned to it, falling back to path inference. Called once per
    /// REPL iteration, so `cd` inside any handler is picked up.
    pub fn refresh(&mut self) {
        if let Ok(cwd) = env::current_dir() {
            self.enter_dir(cwd);
        }
    }

    fn enter_dir(&mut self, dir: PathBuf) {
        if let Some(mode) = self.mode_cache.get(&dir) {
            self.mode = *mode;
        } else if let Some(mode) = Mode::infer_from_path(&dir) {
            self.mode = mode;
        }
        self.current_dir = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(dir: &str) -> SessionState {
        let mut state = SessionState::new(Mode::Codeforces).unwrap();
        state.enter_dir(PathBuf::from(dir));
        state
    }

    #[test]
    fn test_select_mode_is_pinned_to_directory() {
        let mut state = state_at("/tmp/a");
        state.select_mode(Mode::Usaco);
        assert_eq!(state.mode(), Mode::Usaco);

        state.enter_dir(PathBuf::from("/tmp/b"));
        assert_eq!(state.mode(), Mode::Usaco);

        state.enter_dir(PathBuf::from("/tmp/a"));
        assert_eq!(state.mode(), Mode::Usaco);
    }

    #[test]
    fn test_pinned_mode_wins_over_inference() {
        let mut state = state_at("/tmp/usaco/ride");
        assert_eq!(state.mode(), Mode::Usaco);

        state.select_mode(Mode::Codeforces);
        state.enter_dir(PathBuf::from("/tmp"));
        state.enter_dir(PathBuf::from("/tmp/usaco/ride"));
        assert_eq!(state.mode(), Mode::Codeforces);
    }

    #[test]
    fn test_inference_applies_to_unpinned_directories() {
        let mut state = state_at("/tmp/a");
        assert_eq!(state.mode(), Mode::Codeforces);

        state.enter_dir(PathBuf::from("/home/u/cp/usaco/p"));
        assert_eq!(state.mode(), Mode::Usaco);

        // no pin, no hint: mode carries over
        state.enter_dir(PathBuf::from("/tmp/plain"));
        assert_eq!(state.mode(), Mode::Usaco);
    }
}
