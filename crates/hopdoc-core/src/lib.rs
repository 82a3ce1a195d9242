pub mod config;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;

pub use config::RenderOptions;
pub use fetch::{FetchedResponse, Fetcher};
pub use model::{Auth, Body, Collection, Folder, HttpMethod, KeyValue, Request};
