use thiserror::Error;

/// Rejections raised while interpreting stored or incoming activity values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("category must be one of TASK, EVENT (got `{0}`)")]
    UnknownCategory(String),
}
