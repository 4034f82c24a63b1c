//! The open command: glue between CLI arguments and the editor layer
//!
//! Linear flow: load settings, build the registry, require exactly one
//! enabled editor, resolve the database reference, construct the editor,
//! open. No retries.

use std::path::Path;

use crate::config::{self, Settings};
use crate::database::DatabaseStore;
use crate::editor::registry::EditorRegistry;
use crate::editor::Editor;
use crate::error::Result;
use crate::shell::{ShellExecutor, SystemShell};
use crate::workspace::Worktrees;

/// What the user asked to open
#[derive(Debug, Clone, Default)]
pub struct OpenRequest {
    /// Database name; falls back to the configured default database
    pub database: Option<String>,

    /// Explicit repository identifier ("owner/name" or bare name)
    pub repository: Option<String>,
}

/// Open the configured editor for the given request
pub fn open_editor(request: &OpenRequest) -> Result<()> {
    let config_dir = config::config_dir();
    let settings = config::load_settings(&config_dir);
    open_with(&config_dir, &settings, request, &SystemShell)
}

/// Open with explicit collaborators; the seam the integration tests use.
pub fn open_with(
    config_dir: &Path,
    settings: &Settings,
    request: &OpenRequest,
    shell: &dyn ShellExecutor,
) -> Result<()> {
    let registry = EditorRegistry::from_settings(settings);
    let entry = registry.single()?;

    let store = DatabaseStore::load(config_dir)?;
    let database = request
        .database
        .as_deref()
        .or(settings.database.default.as_deref())
        .map(|name| store.resolve(name));

    let locator = Worktrees::from_settings(settings);
    let editor = Editor::new(
        entry.instantiate(),
        database,
        request.repository.clone(),
        &locator,
        shell,
    )?;

    editor.open()
}

/// Print the enabled editor plugins and whether each is installed
pub fn list_editors() -> Result<()> {
    let settings = config::load_settings(&config::config_dir());
    let registry = EditorRegistry::from_settings(&settings);

    for line in editor_listing(&registry, &SystemShell) {
        println!("{}", line);
    }

    if registry.is_empty() {
        println!("No editor plugins enabled.");
    }

    Ok(())
}

fn editor_listing(registry: &EditorRegistry, shell: &dyn ShellExecutor) -> Vec<String> {
    registry
        .list()
        .into_iter()
        .map(|descriptor| {
            let installed = if descriptor.installed(shell) {
                "installed"
            } else {
                "not installed"
            };
            format!(
                "{:<10} {} ({})",
                descriptor.command, descriptor.display_name, installed
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::test_support::FakeShell;
    use crate::error::Error;
    use tempfile::TempDir;

    fn settings_with(enabled: &[&str]) -> Settings {
        let mut settings = Settings::default();
        settings.editors.enabled = enabled.iter().map(|s| s.to_string()).collect();
        settings
    }

    #[test]
    fn test_open_with_no_enabled_editor_fails() {
        let temp_dir = TempDir::new().unwrap();
        let shell = FakeShell::new();

        let err = open_with(
            temp_dir.path(),
            &Settings::default(),
            &OpenRequest::default(),
            &shell,
        )
        .unwrap_err();

        assert!(matches!(err, Error::NoEditorAvailable));
        assert!(shell.detached.borrow().is_empty());
    }

    #[test]
    fn test_open_with_two_enabled_editors_fails() {
        let temp_dir = TempDir::new().unwrap();
        let shell = FakeShell::new();

        let err = open_with(
            temp_dir.path(),
            &settings_with(&["vscode", "zed"]),
            &OpenRequest::default(),
            &shell,
        )
        .unwrap_err();

        assert!(matches!(err, Error::AmbiguousEditor { .. }));
    }

    #[test]
    fn test_open_with_uses_default_database() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("databases.toml"),
            "[databases.mydb]\nrepository = \"acme/webapp\"\n",
        )
        .unwrap();

        let mut settings = settings_with(&["zed"]);
        settings.database.default = Some("mydb".to_string());
        settings.workspace.root = Some(temp_dir.path().join("src"));

        let shell = FakeShell::new();
        open_with(temp_dir.path(), &settings, &OpenRequest::default(), &shell).unwrap();

        let expected = format!(
            "zed {}",
            temp_dir.path().join("src/acme/webapp").display()
        );
        assert_eq!(shell.detached.borrow().as_slice(), [expected]);
    }

    #[test]
    fn test_open_with_no_database_and_no_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        let shell = FakeShell::new();

        let err = open_with(
            temp_dir.path(),
            &settings_with(&["zed"]),
            &OpenRequest::default(),
            &shell,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_editor_listing_reports_install_state() {
        let registry = EditorRegistry::from_settings(&settings_with(&["vscode", "zed"]));
        let shell = FakeShell::with_execute_status(0);

        let lines = editor_listing(&registry, &shell);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Visual Studio Code"));
        assert!(lines[0].contains("(installed)"));
        assert_eq!(
            shell.executed.borrow().as_slice(),
            ["code -v", "zed -v"]
        );
    }
}
