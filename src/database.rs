//! Database references and the database registry file
//!
//! The host tool owns the real database lifecycle; this module models the
//! slice the editor command needs: a name, whether the reference is backed
//! by a known database, and the optionally associated repository.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

const DATABASES_FILENAME: &str = "databases.toml";

/// Repository associated with a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Bare project name (e.g., "webapp")
    pub name: String,

    /// Canonical "owner/name" form, when known
    pub full_name: Option<String>,
}

impl RepositoryInfo {
    /// The identifier used for path resolution: canonical form when
    /// available, bare name otherwise.
    pub fn identifier(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }
}

/// Whether a reference points at a known database or stands in for an
/// argument that matched none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// A database known to the registry
    Local,

    /// A stand-in for a name with no registered database behind it
    Placeholder,
}

/// Reference to a database, as far as the editor command cares
#[derive(Debug, Clone)]
pub struct DatabaseRef {
    pub name: String,
    pub kind: DatabaseKind,
    pub repository: Option<RepositoryInfo>,
}

impl DatabaseRef {
    pub fn local(name: impl Into<String>, repository: Option<RepositoryInfo>) -> Self {
        Self {
            name: name.into(),
            kind: DatabaseKind::Local,
            repository,
        }
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DatabaseKind::Placeholder,
            repository: None,
        }
    }

    pub fn has_repository(&self) -> bool {
        self.repository.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Database Registry File
// ─────────────────────────────────────────────────────────────────────────────

/// On-disk entry in databases.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct DatabaseEntry {
    /// Associated repository, "owner/name" or bare name
    #[serde(default)]
    repository: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct DatabasesFile {
    #[serde(default)]
    databases: BTreeMap<String, DatabaseEntry>,
}

/// Registry of known databases, read from `databases.toml` in the
/// configuration directory
#[derive(Debug, Clone, Default)]
pub struct DatabaseStore {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl DatabaseStore {
    /// Load the registry; a missing file yields an empty store.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(DATABASES_FILENAME);

        if !path.exists() {
            debug!("No database registry at {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let file: DatabasesFile = toml::from_str(&content)?;
        Ok(Self {
            entries: file.databases,
        })
    }

    /// Look up a known database by name
    pub fn get(&self, name: &str) -> Option<DatabaseRef> {
        self.entries.get(name).map(|entry| {
            let repository = entry.repository.as_deref().map(parse_repository);
            DatabaseRef::local(name, repository)
        })
    }

    /// Resolve a name to a reference: a known database when registered,
    /// else a placeholder carrying just the name.
    pub fn resolve(&self, name: &str) -> DatabaseRef {
        self.get(name)
            .unwrap_or_else(|| DatabaseRef::placeholder(name))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse an on-disk repository string into [`RepositoryInfo`]
fn parse_repository(value: &str) -> RepositoryInfo {
    match value.split_once('/') {
        Some((_, name)) => RepositoryInfo {
            name: name.to_string(),
            full_name: Some(value.to_string()),
        },
        None => RepositoryInfo {
            name: value.to_string(),
            full_name: None,
        },
    }
}
