//! Project configuration consumed by setup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Command the project is being run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Dev,
    Build,
    Preview,
}

/// One content collection backed by the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Whether the deployed site may write to this collection.
    #[serde(default)]
    pub writable: bool,
    /// Field definitions, passed through to seeding and typegen untouched.
    #[serde(default)]
    pub fields: serde_json::Value,
}

/// Database section of the project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionConfig>,
    /// Point production builds at the hosted database.
    #[serde(default)]
    pub remote: bool,
    /// Seed data handed to the table seeder verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl DatabaseConfig {
    /// Whether any collection accepts writes at runtime.
    pub fn any_writable(&self) -> bool {
        self.collections.values().any(|collection| collection.writable)
    }
}

/// Everything setup needs for one project run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    pub root: PathBuf,
    pub command: Command,
    #[serde(default)]
    pub db: DatabaseConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_serialization() {
        assert_eq!(serde_json::to_string(&Command::Dev).unwrap(), "\"dev\"");
        assert_eq!(serde_json::to_string(&Command::Build).unwrap(), "\"build\"");
        assert_eq!(serde_json::to_string(&Command::Preview).unwrap(), "\"preview\"");
    }

    #[test]
    fn test_database_config_defaults() {
        let config: DatabaseConfig = serde_json::from_str("{}").unwrap();

        assert!(config.collections.is_empty());
        assert!(!config.remote);
        assert!(config.data.is_none());
    }

    #[test]
    fn test_any_writable() {
        let mut config = DatabaseConfig::default();
        assert!(!config.any_writable());

        config
            .collections
            .insert("posts".to_string(), CollectionConfig::default());
        assert!(!config.any_writable());

        config.collections.insert(
            "comments".to_string(),
            CollectionConfig {
                writable: true,
                fields: json!({}),
            },
        );
        assert!(config.any_writable());
    }

    #[test]
    fn test_setup_config_deserializes_without_db_section() {
        let config: SetupConfig =
            serde_json::from_value(json!({"root": "/tmp/site", "command": "dev"})).unwrap();

        assert_eq!(config.command, Command::Dev);
        assert!(config.db.collections.is_empty());
    }
}
