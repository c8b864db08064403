use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("DEVBAR_APP_TOKEN is not set; remote database builds require it")]
    MissingAppToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seeding failed: {0}")]
    Seed(#[source] anyhow::Error),

    #[error("Plugin registration failed: {0}")]
    Plugin(#[source] anyhow::Error),

    #[error("Type generation failed: {0}")]
    Typegen(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;
