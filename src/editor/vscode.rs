//! Visual Studio Code editor plugin
//!
//! Writes workspace settings into `.vscode/settings.json` so the project
//! carries the database association when opened.

use std::fs::OpenOptions;
use std::io::Write;

use fs2::FileExt;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::{EditorDescriptor, EditorVariant, ProjectContext};
use crate::error::Result;

pub static DESCRIPTOR: EditorDescriptor = EditorDescriptor {
    command: "code",
    display_name: "Visual Studio Code",
};

pub fn factory() -> Box<dyn EditorVariant> {
    Box::new(VsCode)
}

/// The VS Code variant
#[derive(Debug, Default)]
pub struct VsCode;

impl EditorVariant for VsCode {
    fn descriptor(&self) -> &'static EditorDescriptor {
        &DESCRIPTOR
    }

    /// Merge devopen keys into `.vscode/settings.json`, preserving
    /// everything else in the file.
    ///
    /// Idempotent: rewriting the same keys with the same values. A missing
    /// checkout is skipped silently; open() warns about it separately.
    fn configure(&self, ctx: &ProjectContext<'_>) -> Result<()> {
        if !ctx.path.is_dir() {
            debug!(
                "Checkout {:?} does not exist, skipping VS Code configuration",
                ctx.path
            );
            return Ok(());
        }

        let vscode_dir = ctx.path.join(".vscode");
        std::fs::create_dir_all(&vscode_dir)?;

        let settings_path = vscode_dir.join("settings.json");
        let mut settings: Map<String, Value> = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            match serde_json::from_str(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    // Never clobber a settings file we cannot parse.
                    warn!(
                        "Cannot parse {:?}, leaving it untouched",
                        settings_path
                    );
                    return Ok(());
                }
            }
        } else {
            Map::new()
        };

        settings.insert("devopen.repository".to_string(), json!(ctx.repository));
        if let Some(database) = ctx.database {
            settings.insert("devopen.database".to_string(), json!(database.name));
        }

        let content = serde_json::to_string_pretty(&Value::Object(settings))?;

        // Exclusive lock guards against a concurrent invocation writing
        // the same file.
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&settings_path)?;
        file.lock_exclusive()?;
        file.write_all(content.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        debug!("Wrote VS Code settings to {:?}", settings_path);
        Ok(())
    }
}
