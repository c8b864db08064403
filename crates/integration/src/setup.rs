//! Database provisioning for project runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;

use crate::config::{Command, SetupConfig};
use crate::error::{Result, SetupError};
use crate::traits::{
    DeclarationWriter, PluginHost, PluginRequest, SeedMode, SeedRequest, TableSeeder,
    TypegenRequest,
};

/// Environment variable holding the hosted-database token.
pub const APP_TOKEN_ENV: &str = "DEVBAR_APP_TOKEN";

const DB_DIR: &str = ".devbar";
const DB_FILE: &str = "content.db";

/// Path of the local database file for a project root.
pub fn local_db_path(root: &Path) -> PathBuf {
    root.join(DB_DIR).join(DB_FILE)
}

/// What a setup run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Preview runs leave the database layer untouched.
    Skipped,
    /// A fresh local database file was provisioned and seeded.
    Local { db_path: PathBuf },
    /// Queries were pointed at the hosted database.
    Remote,
}

impl SetupOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, SetupOutcome::Skipped)
    }

    pub fn db_path(&self) -> Option<&Path> {
        match self {
            SetupOutcome::Local { db_path } => Some(db_path),
            _ => None,
        }
    }
}

/// Wires the database layer into a project run.
pub struct Integration {
    seeder: Arc<dyn TableSeeder>,
    plugins: Arc<dyn PluginHost>,
    typegen: Arc<dyn DeclarationWriter>,
}

impl Integration {
    pub fn new(
        seeder: Arc<dyn TableSeeder>,
        plugins: Arc<dyn PluginHost>,
        typegen: Arc<dyn DeclarationWriter>,
    ) -> Self {
        Self {
            seeder,
            plugins,
            typegen,
        }
    }

    /// Provision the database layer for one run.
    ///
    /// Preview runs are skipped entirely. A remote build requires
    /// [`APP_TOKEN_ENV`] and points the plugin at the hosted database.
    /// Every other run replaces the local database file, seeds it, and
    /// registers the local plugin. Type declarations are written last.
    pub async fn setup(&self, config: &SetupConfig) -> Result<SetupOutcome> {
        if config.command == Command::Preview {
            return Ok(SetupOutcome::Skipped);
        }

        if !config.db.remote && config.db.any_writable() {
            tracing::warn!("Writable collections have no effect without a remote database");
        }

        let outcome = if config.db.remote && config.command == Command::Build {
            let app_token = std::env::var(APP_TOKEN_ENV)
                .ok()
                .filter(|token| !token.is_empty())
                .ok_or(SetupError::MissingAppToken)?;

            self.plugins
                .register(PluginRequest::Remote {
                    app_token,
                    collections: config.db.collections.clone(),
                })
                .await
                .map_err(SetupError::Plugin)?;

            SetupOutcome::Remote
        } else {
            let db_path = provision_local_file(&config.root).await?;

            let mode = if config.command == Command::Dev {
                SeedMode::Dev
            } else {
                SeedMode::Build
            };
            self.seeder
                .seed(SeedRequest {
                    db_path: db_path.clone(),
                    collections: config.db.collections.clone(),
                    data: config.db.data.clone(),
                    mode,
                })
                .await
                .map_err(SetupError::Seed)?;

            tracing::info!(
                "Set up {} collection(s) in {}",
                config.db.collections.len(),
                db_path.display()
            );

            self.plugins
                .register(PluginRequest::Local {
                    db_path: db_path.clone(),
                    collections: config.db.collections.clone(),
                })
                .await
                .map_err(SetupError::Plugin)?;

            SetupOutcome::Local { db_path }
        };

        self.typegen
            .write(TypegenRequest {
                root: config.root.clone(),
                collections: config.db.collections.clone(),
            })
            .await
            .map_err(SetupError::Typegen)?;

        Ok(outcome)
    }
}

/// Replace any stale database file with a fresh empty one.
async fn provision_local_file(root: &Path) -> Result<PathBuf> {
    let db_path = local_db_path(root);

    if db_path.exists() {
        fs::remove_file(&db_path).await?;
    }
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&db_path, b"").await?;

    Ok(db_path)
}
