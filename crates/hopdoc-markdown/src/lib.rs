pub mod anchor;
pub mod emitters;
pub mod error;
pub mod fetch;
pub mod generator;

pub use error::{GenerateError, RenderError};
pub use fetch::UreqFetcher;
pub use generator::{MarkdownGenerator, generate};
