use serde::{Deserialize, Serialize};

use super::method::HttpMethod;
use super::null_as_default;

/// Root of a Hoppscotch collection export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub folders: Vec<Folder>,

    #[serde(deserialize_with = "null_as_default")]
    pub requests: Vec<Request>,

    #[serde(deserialize_with = "null_as_default")]
    pub auth: Auth,

    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<KeyValue>,

    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<KeyValue>,
}

/// A named group of requests; folders nest arbitrarily deep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub folders: Vec<Folder>,

    #[serde(deserialize_with = "null_as_default")]
    pub requests: Vec<Request>,

    #[serde(deserialize_with = "null_as_default")]
    pub auth: Auth,

    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<KeyValue>,

    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<KeyValue>,
}

/// A single documented HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub method: HttpMethod,

    #[serde(deserialize_with = "null_as_default")]
    pub endpoint: String,

    #[serde(deserialize_with = "null_as_default")]
    pub params: Vec<KeyValue>,

    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<KeyValue>,

    #[serde(deserialize_with = "null_as_default")]
    pub body: Body,

    #[serde(deserialize_with = "null_as_default")]
    pub auth: Auth,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A header, query parameter or variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(deserialize_with = "null_as_default")]
    pub value: String,

    /// Older exports call this field `desc`.
    #[serde(alias = "desc", deserialize_with = "null_as_default")]
    pub description: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Description for table rendering; `-` when none was given.
    pub fn description_or_dash(&self) -> &str {
        if self.description.is_empty() {
            "-"
        } else {
            &self.description
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    #[serde(rename = "contentType", deserialize_with = "null_as_default")]
    pub content_type: String,

    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

impl Body {
    /// A body section is only documented when both parts are set.
    pub fn is_present(&self) -> bool {
        !self.content_type.is_empty() && !self.body.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth {
    #[serde(rename = "authType", deserialize_with = "null_as_default")]
    pub auth_type: String,

    #[serde(rename = "authActive")]
    pub auth_active: bool,
}

impl Auth {
    /// Inherited, disabled and unset auth are not documented. The active flag
    /// is ignored.
    pub fn is_documented(&self) -> bool {
        !matches!(self.auth_type.as_str(), "" | "inherit" | "none")
    }
}

/// Shape summary of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub folders: usize,
    pub requests: usize,
    pub variables: usize,
    /// Deepest folder nesting; 0 when there are no folders.
    pub max_depth: usize,
}

impl Collection {
    pub fn stats(&self) -> CollectionStats {
        let mut stats = CollectionStats {
            requests: self.requests.len(),
            variables: self.variables.len(),
            ..CollectionStats::default()
        };
        for folder in &self.folders {
            folder.accumulate_stats(1, &mut stats);
        }
        stats
    }
}

impl Folder {
    fn accumulate_stats(&self, depth: usize, stats: &mut CollectionStats) {
        stats.folders += 1;
        stats.requests += self.requests.len();
        stats.variables += self.variables.len();
        stats.max_depth = stats.max_depth.max(depth);
        for child in &self.folders {
            child.accumulate_stats(depth + 1, stats);
        }
    }
}
