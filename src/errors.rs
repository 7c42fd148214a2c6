use thiserror::Error;

/// Errors raised while preparing or running a filter pass.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The flattened name/value token list has odd length.
    #[error("token pairs must come in twos")]
    OddPairCount,

    /// A constraint names a parameter the template does not define.
    #[error("key {0} not among the template's parameters")]
    UnknownParameter(String),

    /// The sweep template could not be loaded; surfaced verbatim.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Writing to the output stream failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading or validating a sweep template file.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unable to read template: {0}")]
    Io(#[from] std::io::Error),

    #[error("template parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("template parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate parameter {0} in template")]
    DuplicateParameter(String),
}

/// Type alias for results that use `FilterError` as the error type.
pub type Result<T> = std::result::Result<T, FilterError>;
