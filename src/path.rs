use crate::error::ShellError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.len() == 1 {
            // Just "~"
            dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
        } else {
            let without_tilde = &path[1..];
            if let Some(stripped) = without_tilde.strip_prefix('/') {
                // "~/path"
                let mut home_path = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            } else {
                // "~username/path" - not handled, taken verbatim
                Ok(Path::new(path).to_path_buf())
            }
        }
    }

    pub fn home_dir(&self) -> Result<PathBuf, ShellError> {
        dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path() {
        let expander = PathExpander::new();
        assert_eq!(
            expander.expand("/tmp/foo").unwrap(),
            PathBuf::from("/tmp/foo")
        );
    }

    #[test]
    fn test_expand_bare_tilde() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("~").unwrap(), dirs::home_dir().unwrap());
    }

    #[test]
    fn test_expand_tilde_slash() {
        let expander = PathExpander::new();
        let expected = dirs::home_dir().unwrap().join("work").join("cp");
        assert_eq!(expander.expand("~/work/cp").unwrap(), expected);
    }
}
