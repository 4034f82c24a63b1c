//! devopen - open the project behind a database in your code editor
//!
//! Given a database name or a repository identifier, resolve the local
//! checkout path of the associated project, write editor-specific
//! configuration, and launch the editor detached.

// Module declarations
pub mod command;
pub mod config;
pub mod database;
pub mod editor;
pub mod error;
pub mod logging;
pub mod shell;
pub mod workspace;

// Re-export commonly used types at crate root for convenience
pub use command::{open_editor, OpenRequest};
pub use error::{Error, Result};

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}
