//! Capability registry for editor variants
//!
//! Editor plugins register a descriptor and a factory under a stable name.
//! The open command requires exactly one registered variant; which ones are
//! registered is driven by the `[editors] enabled` list in the settings
//! file, so enabling or disabling an editor is a configuration change, not
//! a code change.

use std::collections::BTreeMap;

use tracing::warn;

use super::{vscode, zed, EditorDescriptor, EditorVariant};
use crate::config::Settings;
use crate::error::{Error, Result};

/// Constructor for a registered editor variant
pub type EditorFactory = fn() -> Box<dyn EditorVariant>;

/// A registered editor plugin
#[derive(Debug, Clone)]
pub struct RegisteredEditor {
    pub descriptor: EditorDescriptor,
    factory: EditorFactory,
}

impl RegisteredEditor {
    pub fn instantiate(&self) -> Box<dyn EditorVariant> {
        (self.factory)()
    }
}

/// Registry of enabled editor plugins, keyed by plugin name
#[derive(Default)]
pub struct EditorRegistry {
    entries: BTreeMap<&'static str, RegisteredEditor>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the registry from the enabled list in the settings.
    /// Unknown names are skipped with a warning.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();
        for name in &settings.editors.enabled {
            match name.as_str() {
                "vscode" => registry.register("vscode", vscode::DESCRIPTOR, vscode::factory),
                "zed" => registry.register("zed", zed::DESCRIPTOR, zed::factory),
                other => warn!("Unknown editor plugin {:?} in configuration, skipping", other),
            }
        }
        registry
    }

    pub fn register(
        &mut self,
        name: &'static str,
        descriptor: EditorDescriptor,
        factory: EditorFactory,
    ) {
        self.entries
            .insert(name, RegisteredEditor { descriptor, factory });
    }

    /// Descriptors of all registered variants, in stable name order
    pub fn list(&self) -> Vec<&EditorDescriptor> {
        self.entries.values().map(|e| &e.descriptor).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The single registered variant.
    ///
    /// Zero registered variants is a missing-plugin error; more than one
    /// is ambiguous, since the open command has no way to choose.
    pub fn single(&self) -> Result<&RegisteredEditor> {
        let mut entries = self.entries.values();
        match (entries.next(), entries.next()) {
            (None, _) => Err(Error::NoEditorAvailable),
            (Some(only), None) => Ok(only),
            (Some(_), Some(_)) => Err(Error::ambiguous_editor(
                self.entries.values().map(|e| e.descriptor.display_name),
            )),
        }
    }
}
