use thiserror::Error;

/// Invalid plugin configuration, detected before the title is inspected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'url' missing - must supply JIRA installation URL")]
    MissingUrl,

    #[error("'key' missing - must supply JIRA issue key")]
    MissingKey,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot resolve issue URL: {0}")]
    UrlResolution(#[from] url::ParseError),

    #[error("Invalid issue key pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GitHub CLI error: {0}")]
    GitHubCli(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
