use crate::error::FetchError;
use crate::model::KeyValue;

/// Observed response of a live fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,
    /// Canonical reason phrase, empty for unknown codes.
    pub status_text: String,
    /// One entry per header value, in the order received.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// First `Content-Type` value, matched case-insensitively.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs one blocking GET for a documented request.
///
/// Implementations own their timeout; a timeout is reported like any other
/// execution failure.
pub trait Fetcher {
    fn get(&self, url: &str, headers: &[KeyValue]) -> Result<FetchedResponse, FetchError>;
}
