//! Editor abstraction: resolve the project behind a database, configure
//! the editor, launch it detached.
//!
//! Concrete editors implement [`EditorVariant`] (static descriptor plus
//! per-editor configuration writing); [`Editor`] carries the shared flow.
//! Variants are enabled through the capability registry in [`registry`].

pub mod registry;
pub mod vscode;
pub mod zed;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::database::DatabaseRef;
use crate::error::{Error, Result};
use crate::shell::{ShellExecutor, EXECUTE_TIMEOUT};
use crate::workspace::{sanitize_identifier, RepositoryLocator};

/// Static attributes of an editor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorDescriptor {
    /// Launch command name (e.g., "code")
    pub command: &'static str,

    /// Human-readable name (e.g., "Visual Studio Code")
    pub display_name: &'static str,
}

impl EditorDescriptor {
    /// Check whether the editor binary is installed by running
    /// `<command> -v`.
    ///
    /// Degrades to `false` on a missing binary, a non-zero exit, or a
    /// probe timeout; never errors.
    pub fn installed(&self, shell: &dyn ShellExecutor) -> bool {
        shell
            .execute(&format!("{} -v", self.command), EXECUTE_TIMEOUT)
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// What a variant gets to see when writing its configuration
#[derive(Debug)]
pub struct ProjectContext<'a> {
    /// Resolved project checkout path (may not exist yet)
    pub path: &'a Path,

    /// Effective repository identifier
    pub repository: &'a str,

    /// The database the project was resolved from, if any
    pub database: Option<&'a DatabaseRef>,
}

/// A concrete editor: its descriptor plus whatever file-writing makes the
/// external program open the project correctly.
///
/// `configure` must be idempotent; it runs on every open.
pub trait EditorVariant {
    fn descriptor(&self) -> &'static EditorDescriptor;

    fn configure(&self, ctx: &ProjectContext<'_>) -> Result<()>;
}

/// One editor invocation: a variant bound to a resolved repository.
///
/// Constructed once per command run, used to configure and open, then
/// discarded.
pub struct Editor<'a> {
    variant: Box<dyn EditorVariant>,
    database: Option<DatabaseRef>,
    repository: String,
    locator: &'a dyn RepositoryLocator,
    shell: &'a dyn ShellExecutor,
}

impl std::fmt::Debug for Editor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("database", &self.database)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl<'a> Editor<'a> {
    /// Bind a variant to a project source.
    ///
    /// Exactly one of an explicit repository identifier or a
    /// database-derived one must be in effect:
    /// - a database with an associated repository plus an explicit
    ///   identifier is contradictory and fails,
    /// - no identifier from either source fails.
    ///
    /// Database-derived identifiers prefer the canonical "owner/name"
    /// form over the bare project name.
    pub fn new(
        variant: Box<dyn EditorVariant>,
        database: Option<DatabaseRef>,
        repository: Option<String>,
        locator: &'a dyn RepositoryLocator,
        shell: &'a dyn ShellExecutor,
    ) -> Result<Self> {
        let derived = database
            .as_ref()
            .and_then(|db| db.repository.as_ref())
            .map(|repo| repo.identifier().to_string());

        let repository = match (repository, derived) {
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    "both an explicit repository and a database with an associated \
                     repository were given; pass only one",
                ))
            }
            (Some(explicit), None) => explicit,
            (None, Some(derived)) => derived,
            (None, None) => {
                let hint = match &database {
                    Some(db) => format!("database {:?} has no associated repository", db.name),
                    None => "no database or repository was given".to_string(),
                };
                return Err(Error::config(format!("no project to open: {}", hint)));
            }
        };

        if sanitize_identifier(&repository).is_none() {
            return Err(Error::invalid_repository(repository));
        }

        Ok(Self {
            variant,
            database,
            repository,
            locator,
            shell,
        })
    }

    pub fn descriptor(&self) -> &'static EditorDescriptor {
        self.variant.descriptor()
    }

    /// The effective repository identifier
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The path to the project checkout. Pure: no side effects, stable
    /// across calls.
    pub fn resolve_path(&self) -> PathBuf {
        self.locator.resolve_path(&self.repository)
    }

    /// Check if the project checkout exists on disk
    pub fn project_exists(&self) -> bool {
        self.locator.path_exists(&self.resolve_path())
    }

    /// Check if the editor binary is installed
    pub fn installed(&self) -> bool {
        self.descriptor().installed(self.shell)
    }

    /// The command line that opens the editor with the project loaded
    pub fn command(&self) -> String {
        format!(
            "{} {}",
            self.descriptor().command,
            self.resolve_path().display()
        )
    }

    /// Configure the editor and launch it detached.
    ///
    /// A missing checkout is a warning, not a failure: the user likely
    /// wants the editor open even with an imperfect workspace. The
    /// detached child is neither waited on nor verified.
    pub fn open(&self) -> Result<()> {
        let path = self.resolve_path();

        self.variant.configure(&ProjectContext {
            path: &path,
            repository: &self.repository,
            database: self.database.as_ref(),
        })?;

        info!(
            "Opening project {:?} in {}",
            self.repository,
            self.descriptor().display_name
        );

        if !self.locator.path_exists(&path) {
            warn!(
                "Project directory {:?} does not exist; {} may not open it correctly",
                path,
                self.descriptor().display_name
            );
        }

        self.shell.detached(&self.command())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Hand-written fakes shared by the editor tests

    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use super::*;
    use crate::shell::ExecStatus;

    /// Records issued commands instead of spawning processes
    #[derive(Debug, Default)]
    pub struct FakeShell {
        pub executed: RefCell<Vec<String>>,
        pub detached: RefCell<Vec<String>>,
        pub execute_status: Option<ExecStatus>,
    }

    impl FakeShell {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_execute_status(code: i32) -> Self {
            Self {
                execute_status: Some(ExecStatus { code: Some(code) }),
                ..Self::default()
            }
        }
    }

    impl ShellExecutor for FakeShell {
        fn execute(&self, command: &str, _timeout: Duration) -> Option<ExecStatus> {
            self.executed.borrow_mut().push(command.to_string());
            self.execute_status
        }

        fn detached(&self, command: &str) -> crate::error::Result<()> {
            self.detached.borrow_mut().push(command.to_string());
            Ok(())
        }
    }

    /// Locator with a fixed root and a configurable notion of which
    /// paths exist
    #[derive(Debug)]
    pub struct FakeLocator {
        pub root: PathBuf,
        pub existing: Vec<PathBuf>,
    }

    impl FakeLocator {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                existing: Vec::new(),
            }
        }

        pub fn with_existing(mut self, repository: &str) -> Self {
            let path = self.resolve_path(repository);
            self.existing.push(path);
            self
        }
    }

    impl RepositoryLocator for FakeLocator {
        fn resolve_path(&self, repository: &str) -> PathBuf {
            let mut path = self.root.clone();
            for segment in repository.split('/') {
                path.push(segment);
            }
            path
        }

        fn path_exists(&self, path: &Path) -> bool {
            self.existing.iter().any(|p| p == path)
        }
    }

    /// Variant that records its configure calls
    #[derive(Debug, Default)]
    pub struct RecordingVariant {
        pub configured: std::rc::Rc<RefCell<Vec<PathBuf>>>,
    }

    pub static RECORDING_DESCRIPTOR: EditorDescriptor = EditorDescriptor {
        command: "fakeedit",
        display_name: "Fake Editor",
    };

    impl EditorVariant for RecordingVariant {
        fn descriptor(&self) -> &'static EditorDescriptor {
            &RECORDING_DESCRIPTOR
        }

        fn configure(&self, ctx: &ProjectContext<'_>) -> Result<()> {
            self.configured.borrow_mut().push(ctx.path.to_path_buf());
            Ok(())
        }
    }
}
