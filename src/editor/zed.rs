//! Zed editor plugin
//!
//! Zed picks up the project directly from the path it is launched with and
//! needs no per-project wiring, so configuration is a no-op.

use tracing::debug;

use super::{EditorDescriptor, EditorVariant, ProjectContext};
use crate::error::Result;

pub static DESCRIPTOR: EditorDescriptor = EditorDescriptor {
    command: "zed",
    display_name: "Zed",
};

pub fn factory() -> Box<dyn EditorVariant> {
    Box::new(Zed)
}

/// The Zed variant
#[derive(Debug, Default)]
pub struct Zed;

impl EditorVariant for Zed {
    fn descriptor(&self) -> &'static EditorDescriptor {
        &DESCRIPTOR
    }

    fn configure(&self, ctx: &ProjectContext<'_>) -> Result<()> {
        debug!("Zed needs no configuration for {:?}", ctx.path);
        Ok(())
    }
}
