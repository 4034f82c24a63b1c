//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid repository identifier: {identifier:?}")]
    InvalidRepository { identifier: String },

    // ─────────────────────────────────────────────────────────────
    // Editor Discovery Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No editor is enabled. Enable an editor plugin in the configuration and retry.")]
    NoEditorAvailable,

    #[error("Multiple editor plugins are enabled ({names}). Disable all but one and retry.")]
    AmbiguousEditor { names: String },

    // ─────────────────────────────────────────────────────────────
    // Launch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch {command:?}: {reason}")]
    Launch { command: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_repository(identifier: impl Into<String>) -> Self {
        Self::InvalidRepository {
            identifier: identifier.into(),
        }
    }

    pub fn ambiguous_editor<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::AmbiguousEditor {
            names: names.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    pub fn launch(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Launch {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a user-input problem rather than an
    /// environment failure
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidRepository { .. }
                | Error::NoEditorAvailable
                | Error::AmbiguousEditor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("no repository to open");
        assert_eq!(
            err.to_string(),
            "Configuration error: no repository to open"
        );

        let err = Error::NoEditorAvailable;
        assert!(err.to_string().contains("No editor is enabled"));
    }

    #[test]
    fn test_ambiguous_editor_lists_names() {
        let err = Error::ambiguous_editor(["vscode", "zed"]);
        assert!(err.to_string().contains("vscode, zed"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_usage() {
        assert!(Error::config("test").is_usage());
        assert!(Error::NoEditorAvailable.is_usage());
        assert!(Error::ambiguous_editor(["a", "b"]).is_usage());
        assert!(!Error::launch("code /tmp/x", "spawn failed").is_usage());
    }
}
