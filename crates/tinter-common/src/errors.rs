use std::path::PathBuf;

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
pub enum ThemeError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("missing field {category}.{key}")]
    MissingField { category: String, key: String },

    #[error("theme parse error: {0}")]
    ParseError(String),

    #[error("theme file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TinterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("editor error: {0}")]
    Editor(String),
}
