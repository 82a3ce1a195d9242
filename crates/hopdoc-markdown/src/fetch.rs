//! Blocking HTTP fetcher used for live `GET` requests.

use std::time::Duration;

use hopdoc_core::error::FetchError;
use hopdoc_core::{FetchedResponse, Fetcher, KeyValue};
use log::debug;
use ureq::{Agent, Proxy};
use ureq::http::Request;

/// [`Fetcher`] backed by a single `ureq` agent.
///
/// Non-2xx responses are returned as regular responses so they can be
/// documented like any other.
pub struct UreqFetcher {
    agent: Agent,
}

impl UreqFetcher {
    /// Fetcher honouring the `HTTP_PROXY`/`HTTPS_PROXY`/`ALL_PROXY` environment.
    pub fn new(timeout: Duration) -> Self {
        Self::build(timeout, Proxy::try_from_env())
    }

    /// Fetcher that always connects directly, ignoring proxy variables.
    pub fn direct(timeout: Duration) -> Self {
        Self::build(timeout, None)
    }

    fn build(timeout: Duration, proxy: Option<Proxy>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(global_timeout(timeout))
            .http_status_as_error(false)
            .proxy(proxy)
            .build()
            .into();
        Self { agent }
    }
}

/// A zero timeout means no timeout at all.
fn global_timeout(timeout: Duration) -> Option<Duration> {
    (!timeout.is_zero()).then_some(timeout)
}

impl Fetcher for UreqFetcher {
    fn get(&self, url: &str, headers: &[KeyValue]) -> Result<FetchedResponse, FetchError> {
        let mut builder = Request::get(url);
        // Hoppscotch keeps blank rows in its header editor
        for header in headers.iter().filter(|h| !h.key.is_empty()) {
            builder = builder.header(header.key.as_str(), header.value.as_str());
        }
        let request = builder
            .body(())
            .map_err(|e| FetchError::Construct(e.to_string()))?;

        let response = self
            .agent
            .run(request)
            .map_err(|e| FetchError::Execute(e.to_string()))?;

        let status = response.status();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| FetchError::Read(e.to_string()))?;
        debug!("GET {url} -> {} ({} bytes)", status.as_u16(), body.len());

        Ok(FetchedResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_disables_limit() {
        assert_eq!(global_timeout(Duration::ZERO), None);
        assert_eq!(
            global_timeout(Duration::from_secs(10)),
            Some(Duration::from_secs(10))
        );
    }
}
