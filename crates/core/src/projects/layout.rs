use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// A discovered project: its directory and the script that starts it.
///
/// This is derived from paths only and does not touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project directory relative to the search root, with a leading `/`.
    pub label: String,
    /// Project directory.
    pub root: PathBuf,
    /// Launcher script inside `root`.
    pub script: PathBuf,
}

impl Project {
    /// Build a project from the path of its launcher script.
    pub fn from_script(search_root: impl AsRef<Path>, script: impl Into<PathBuf>) -> Self {
        let script = script.into();
        let root = script.parent().map(Path::to_path_buf).unwrap_or_default();
        let label = label_for(search_root.as_ref(), &root);
        Self { label, root, script }
    }

    /// Name of the project directory itself.
    pub fn dir_name(&self) -> String {
        self.root
            .file_name()
            .and_then(|os| os.to_str())
            .unwrap_or("unnamed-project")
            .to_string()
    }

    /// Menu line: `"<label>: <icons>"`.
    pub fn display_line(&self, icons: &str) -> String {
        format!("{}: {}", self.label, icons)
    }
}

/// `root` relative to `search_root`, `/`-separated with a leading `/`.
///
/// Falls back to the full path when `root` is not under `search_root`.
fn label_for(search_root: &Path, root: &Path) -> String {
    match root.strip_prefix(search_root) {
        Ok(rel) => {
            let parts: Vec<String> = rel
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            format!("/{}", parts.join("/"))
        }
        Err(_) => root.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_strips_search_root() {
        let project = Project::from_script(
            "/home/me/Projects",
            "/home/me/Projects/games/tetris/start-session.sh",
        );
        assert_eq!(project.label, "/games/tetris");
        assert_eq!(project.root, PathBuf::from("/home/me/Projects/games/tetris"));
        assert_eq!(project.dir_name(), "tetris");
    }

    #[test]
    fn script_at_search_root_gets_slash_label() {
        let project = Project::from_script("/srv/p", "/srv/p/start-session.sh");
        assert_eq!(project.label, "/");
    }

    #[test]
    fn label_outside_root_is_full_path() {
        let project = Project::from_script("/srv/p", "/opt/x/start-session.sh");
        assert_eq!(project.label, "/opt/x");
    }
}
