use std::path::PathBuf;

/// Failures raised while binding layout leaves to live elements.
///
/// `MissingRefId` and `ElementNotFound` mean the host broke the
/// "element exists before bind" contract. They are never retried.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("component's ref id is required")]
    MissingRefId,

    #[error("element not found: {0}")]
    ElementNotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("layout storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize layout: {0}")]
    Serialize(String),

    #[error("failed to deserialize stored layout: {0}")]
    Deserialize(String),

    #[error("could not determine a storage directory")]
    NoStorageDir,
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
