//! Host substitution for documented and fetched endpoints.

use log::warn;
use url::Url;

/// Scheme, host and port taken from an override URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverride {
    url: Url,
}

impl HostOverride {
    /// Parse an override URL. A malformed or host-less override is reported
    /// and ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match Url::parse(raw) {
            Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => Some(Self { url }),
            Ok(_) => {
                warn!("ignoring host override without a host: {raw}");
                None
            }
            Err(e) => {
                warn!("ignoring malformed host override {raw}: {e}");
                None
            }
        }
    }

    /// Swap scheme and host (including port) of `endpoint`, keeping path,
    /// query and fragment exactly as written. Endpoints that are not absolute
    /// URLs, such as `<<baseUrl>>/users`, come back unchanged.
    pub fn apply(&self, endpoint: &str) -> String {
        if Url::parse(endpoint).is_err() {
            return endpoint.to_string();
        }
        let Some(start) = endpoint.find("://").map(|i| i + 3) else {
            return endpoint.to_string();
        };
        let tail = &endpoint[start..];
        let end = tail.find(['/', '?', '#']).unwrap_or(tail.len());
        let (authority, rest) = tail.split_at(end);
        let userinfo = authority.rfind('@').map_or("", |at| &authority[..=at]);
        format!(
            "{}://{userinfo}{}{rest}",
            self.url.scheme(),
            self.host_and_port()
        )
    }

    fn host_and_port(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }
}

/// Apply an optional override.
pub fn resolve_endpoint(endpoint: &str, host_override: Option<&HostOverride>) -> String {
    match host_override {
        Some(host) => host.apply(endpoint),
        None => endpoint.to_string(),
    }
}
