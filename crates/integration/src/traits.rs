//! Seams to the seeding, plugin, and typegen machinery.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::CollectionConfig;

/// Which lifecycle a seed run serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Dev server run; seeders may add fixture rows.
    Dev,
    /// Production build; tables only, real data comes from the deploy.
    Build,
}

/// Inputs for populating a freshly provisioned database file.
#[derive(Debug, Clone)]
pub struct SeedRequest {
    pub db_path: PathBuf,
    pub collections: BTreeMap<String, CollectionConfig>,
    pub data: Option<serde_json::Value>,
    pub mode: SeedMode,
}

/// Where collection queries should execute.
#[derive(Debug, Clone)]
pub enum PluginRequest {
    /// Queries run against the local database file.
    Local {
        db_path: PathBuf,
        collections: BTreeMap<String, CollectionConfig>,
    },
    /// Queries run against the hosted database.
    Remote {
        app_token: String,
        collections: BTreeMap<String, CollectionConfig>,
    },
}

/// Inputs for emitting collection type declarations.
#[derive(Debug, Clone)]
pub struct TypegenRequest {
    pub root: PathBuf,
    pub collections: BTreeMap<String, CollectionConfig>,
}

/// Creates tables and loads seed data into a provisioned database file.
#[async_trait]
pub trait TableSeeder: Send + Sync {
    async fn seed(&self, request: SeedRequest) -> anyhow::Result<()>;
}

/// Registers the build plugin that routes collection queries.
#[async_trait]
pub trait PluginHost: Send + Sync {
    async fn register(&self, request: PluginRequest) -> anyhow::Result<()>;
}

/// Writes type declarations for the configured collections.
#[async_trait]
pub trait DeclarationWriter: Send + Sync {
    async fn write(&self, request: TypegenRequest) -> anyhow::Result<()>;
}
