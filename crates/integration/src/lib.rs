//! Devbar framework integration.
//!
//! Provisions the content database for a project run. The heavy lifting
//! (table seeding, query routing, type declarations) lives behind the
//! traits in [`traits`], so hosts can swap in their own machinery.

pub mod config;
pub mod error;
pub mod setup;
pub mod traits;

pub use config::{CollectionConfig, Command, DatabaseConfig, SetupConfig};
pub use error::{Result, SetupError};
pub use setup::{local_db_path, Integration, SetupOutcome, APP_TOKEN_ENV};
pub use traits::{
    DeclarationWriter, PluginHost, PluginRequest, SeedMode, SeedRequest, TableSeeder,
    TypegenRequest,
};
