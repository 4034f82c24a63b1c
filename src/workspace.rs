//! Mapping repository identifiers to local checkout paths

use std::path::{Path, PathBuf};

use crate::config::Settings;

const APP_DIR: &str = "devopen";
const CHECKOUTS_DIR: &str = "repositories";

/// Maps a repository identifier to a local filesystem path.
///
/// A trait so tests can pin the layout without touching the real
/// checkout root.
pub trait RepositoryLocator {
    /// Path of the checkout for `repository` ("owner/name" or bare name).
    /// Pure: same identifier, same path, every call.
    fn resolve_path(&self, repository: &str) -> PathBuf;

    /// Whether the resolved path exists on disk
    fn path_exists(&self, path: &Path) -> bool;
}

/// [`RepositoryLocator`] over a flat `<root>/owner/name` checkout tree
#[derive(Debug, Clone)]
pub struct Worktrees {
    root: PathBuf,
}

impl Worktrees {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build from settings, falling back to the default checkout root
    pub fn from_settings(settings: &Settings) -> Self {
        let root = settings
            .workspace
            .root
            .clone()
            .unwrap_or_else(default_root);
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RepositoryLocator for Worktrees {
    fn resolve_path(&self, repository: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in repository.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn default_root() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CHECKOUTS_DIR)
}

/// Validate a repository identifier before it is interpolated into a
/// command line or a filesystem path.
///
/// Rejects identifiers with:
/// - `..` (path traversal)
/// - Null bytes or whitespace
/// - Shell metacharacters
///
/// Returns `Some(identifier)` if safe, `None` otherwise.
pub fn sanitize_identifier(identifier: &str) -> Option<&str> {
    if identifier.is_empty() || identifier.contains("..") {
        return None;
    }

    let dangerous_chars = [
        '\0', '|', '&', ';', '$', '`', '(', ')', '{', '}', '<', '>', '\\',
    ];
    if identifier
        .chars()
        .any(|c| c.is_whitespace() || dangerous_chars.contains(&c))
    {
        return None;
    }

    Some(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_owner_name() {
        let worktrees = Worktrees::new("/home/dev/src");
        assert_eq!(
            worktrees.resolve_path("acme/webapp"),
            PathBuf::from("/home/dev/src/acme/webapp")
        );
    }

    #[test]
    fn test_resolve_path_bare_name() {
        let worktrees = Worktrees::new("/home/dev/src");
        assert_eq!(
            worktrees.resolve_path("webapp"),
            PathBuf::from("/home/dev/src/webapp")
        );
    }

    #[test]
    fn test_resolve_path_is_deterministic() {
        let worktrees = Worktrees::new("/srv/checkouts");
        assert_eq!(
            worktrees.resolve_path("acme/webapp"),
            worktrees.resolve_path("acme/webapp")
        );
    }

    #[test]
    fn test_from_settings_uses_configured_root() {
        let mut settings = Settings::default();
        settings.workspace.root = Some(PathBuf::from("/custom/root"));

        let worktrees = Worktrees::from_settings(&settings);
        assert_eq!(worktrees.root(), Path::new("/custom/root"));
    }

    #[test]
    fn test_path_exists() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let worktrees = Worktrees::new(temp_dir.path());

        assert!(worktrees.path_exists(temp_dir.path()));
        assert!(!worktrees.path_exists(&temp_dir.path().join("missing")));
    }

    #[test]
    fn test_sanitize_identifier_valid() {
        assert!(sanitize_identifier("acme/webapp").is_some());
        assert!(sanitize_identifier("webapp").is_some());
        assert!(sanitize_identifier("acme/web-app_2").is_some());
    }

    #[test]
    fn test_sanitize_identifier_traversal() {
        assert!(sanitize_identifier("../../../etc/passwd").is_none());
        assert!(sanitize_identifier("acme/../secret").is_none());
    }

    #[test]
    fn test_sanitize_identifier_shell_injection() {
        assert!(sanitize_identifier("acme/webapp; rm -rf /").is_none());
        assert!(sanitize_identifier("$(whoami)/webapp").is_none());
        assert!(sanitize_identifier("`id`/webapp").is_none());
        assert!(sanitize_identifier("acme/webapp|cat").is_none());
    }

    #[test]
    fn test_sanitize_identifier_whitespace_and_empty() {
        assert!(sanitize_identifier("").is_none());
        assert!(sanitize_identifier("acme/web app").is_none());
        assert!(sanitize_identifier("acme\0webapp").is_none());
    }
}
