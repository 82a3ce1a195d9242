use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method of a documented request.
///
/// Parsing is case-sensitive: only the exact upper-case spellings map to the
/// known variants, everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(method) => method,
        }
    }

    /// Colour marker shown in front of the method name.
    pub fn badge_emoji(&self) -> &'static str {
        match self {
            HttpMethod::Get => "🟢",
            HttpMethod::Post => "🟡",
            HttpMethod::Put => "🔵",
            HttpMethod::Patch => "🟠",
            HttpMethod::Delete => "🔴",
            HttpMethod::Head => "⚪",
            HttpMethod::Options => "⚫",
            HttpMethod::Other(_) => "⚪",
        }
    }

    /// Bold `{emoji} {METHOD}` badge, e.g. `**🟡 POST**`.
    pub fn badge(&self) -> String {
        format!("**{} {}**", self.badge_emoji(), self.as_str())
    }

    pub fn is_get(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::Other(String::new())
    }
}

impl From<&str> for HttpMethod {
    fn from(value: &str) -> Self {
        match value {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            other => HttpMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(value: String) -> Self {
        HttpMethod::from(value.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Other(method) => method,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_badges() {
        assert_eq!(HttpMethod::from("GET").badge(), "**🟢 GET**");
        assert_eq!(HttpMethod::from("POST").badge(), "**🟡 POST**");
        assert_eq!(HttpMethod::from("PUT").badge(), "**🔵 PUT**");
        assert_eq!(HttpMethod::from("PATCH").badge(), "**🟠 PATCH**");
        assert_eq!(HttpMethod::from("DELETE").badge(), "**🔴 DELETE**");
        assert_eq!(HttpMethod::from("HEAD").badge(), "**⚪ HEAD**");
        assert_eq!(HttpMethod::from("OPTIONS").badge(), "**⚫ OPTIONS**");
    }

    #[test]
    fn test_unknown_method_falls_back() {
        assert_eq!(HttpMethod::from("TRACE").badge(), "**⚪ TRACE**");
        assert_eq!(HttpMethod::from("TRACE").as_str(), "TRACE");
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        let lower = HttpMethod::from("get");
        assert!(!lower.is_get());
        assert_eq!(lower.badge(), "**⚪ get**");
    }

    #[test]
    fn test_string_roundtrip_keeps_spelling() {
        assert_eq!(String::from(HttpMethod::from("PURGE")), "PURGE");
        assert_eq!(String::from(HttpMethod::Delete), "DELETE");
    }
}
