use hopdoc_core::error::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Error from the decode-then-render entry point.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("error parsing collection: {0}")]
    Parse(#[from] ParseError),

    #[error("error rendering markdown: {0}")]
    Render(#[from] RenderError),
}
