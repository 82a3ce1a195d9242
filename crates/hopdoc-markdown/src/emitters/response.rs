use hopdoc_core::endpoint::{HostOverride, resolve_endpoint};
use hopdoc_core::error::FetchError;
use hopdoc_core::{FetchedResponse, Fetcher, Request};
use log::{info, warn};
use serde::Serialize;

use super::format_json;

/// Raw (non-JSON) response bodies are cut after this many bytes.
pub const MAX_RAW_BODY_BYTES: usize = 10_000;

const TRUNCATION_MARKER: &str = "... (truncated)";

/// Template view of the `Response` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseView {
    pub error: Option<String>,
    pub status: String,
    pub headers: Vec<HeaderRow>,
    pub fence: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

impl ResponseView {
    pub fn failed(error: &FetchError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn from_response(response: FetchedResponse) -> Self {
        let status = format!("{} {}", response.status, response.status_text)
            .trim_end()
            .to_string();

        let is_json = response
            .content_type()
            .is_some_and(|ct| ct.contains("application/json"));
        let (fence, body) = match is_json.then(|| format_json(&response.body)).flatten() {
            Some(pretty) => ("json", pretty),
            None => ("", raw_body(&response.body)),
        };

        let headers = response
            .headers
            .into_iter()
            .map(|(key, value)| HeaderRow { key, value })
            .collect();

        Self {
            error: None,
            status,
            headers,
            fence,
            body,
        }
    }
}

fn raw_body(body: &[u8]) -> String {
    if body.len() > MAX_RAW_BODY_BYTES {
        let head = String::from_utf8_lossy(&body[..MAX_RAW_BODY_BYTES]);
        format!("{head}\n{TRUNCATION_MARKER}")
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

/// Fetch `request` live and build its response view. Failures are captured
/// in the view instead of aborting the render.
pub fn fetch_response(
    request: &Request,
    fetch_host: Option<&HostOverride>,
    fetcher: &dyn Fetcher,
) -> ResponseView {
    let target = resolve_endpoint(&request.endpoint, fetch_host);
    info!("fetching GET {target}");
    match fetcher.get(&target, &request.headers) {
        Ok(response) => ResponseView::from_response(response),
        Err(e) => {
            warn!("live fetch for '{}' failed: {e}", request.name);
            ResponseView::failed(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: &str, body: &[u8]) -> FetchedResponse {
        FetchedResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: vec![("content-type".to_string(), content_type.to_string())],
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_json_body_is_pretty_printed() {
        let view = ResponseView::from_response(response(
            "application/json; charset=utf-8",
            br#"{"id":7}"#,
        ));
        assert_eq!(view.status, "200 OK");
        assert_eq!(view.fence, "json");
        assert_eq!(view.body, "{\n  \"id\": 7\n}");
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw() {
        let view = ResponseView::from_response(response("application/json", b"{oops"));
        assert_eq!(view.fence, "");
        assert_eq!(view.body, "{oops");
    }

    #[test]
    fn test_json_without_json_content_type_is_raw() {
        let view = ResponseView::from_response(response("text/plain", br#"{"id":7}"#));
        assert_eq!(view.fence, "");
        assert_eq!(view.body, r#"{"id":7}"#);
    }

    #[test]
    fn test_long_raw_body_is_truncated() {
        let body = vec![b'x'; MAX_RAW_BODY_BYTES + 5];
        let view = ResponseView::from_response(response("text/plain", &body));
        let expected = format!("{}\n... (truncated)", "x".repeat(MAX_RAW_BODY_BYTES));
        assert_eq!(view.body, expected);
    }

    #[test]
    fn test_body_at_limit_is_kept_whole() {
        let body = vec![b'y'; MAX_RAW_BODY_BYTES];
        let view = ResponseView::from_response(response("text/html", &body));
        assert_eq!(view.body.len(), MAX_RAW_BODY_BYTES);
        assert!(!view.body.contains("truncated"));
    }

    #[test]
    fn test_multi_valued_headers_are_not_collapsed() {
        let mut fetched = response("text/plain", b"ok");
        fetched
            .headers
            .push(("set-cookie".to_string(), "a=1".to_string()));
        fetched
            .headers
            .push(("set-cookie".to_string(), "b=2".to_string()));
        let view = ResponseView::from_response(fetched);
        let cookies: Vec<&str> = view
            .headers
            .iter()
            .filter(|row| row.key == "set-cookie")
            .map(|row| row.value.as_str())
            .collect();
        assert_eq!(cookies, ["a=1", "b=2"]);
    }

    #[test]
    fn test_unknown_status_has_no_reason() {
        let view = ResponseView::from_response(FetchedResponse {
            status: 599,
            ..FetchedResponse::default()
        });
        assert_eq!(view.status, "599");
    }
}
