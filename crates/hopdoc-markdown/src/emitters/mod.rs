pub mod content;
pub mod request;
pub mod response;
pub mod toc;

use hopdoc_core::Collection;

/// Emit the document title and the optional collection description.
pub fn emit_title(out: &mut String, collection: &Collection) {
    out.push_str(&format!("# {}\n\n", collection.name));
    if !collection.description.is_empty() {
        out.push_str(&format!("## Description\n\n{}\n\n", collection.description));
    }
}

/// Pretty-print `raw` with two-space indentation if it is valid JSON.
pub fn format_json(raw: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(raw).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
