use hopdoc_core::{Collection, Folder, Request};
use log::debug;

use super::request::{RenderContext, emit_request};
use crate::error::RenderError;

const SEPARATOR: &str = "\n---\n\n";

/// Emit the body: every folder depth-first with its own requests before its
/// subfolders, then the root-level requests under `## General`.
pub fn emit_content(
    out: &mut String,
    collection: &Collection,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    emit_folders(out, &collection.folders, 0, ctx)?;

    if !collection.requests.is_empty() {
        out.push_str("## General\n\n");
        emit_requests(out, &collection.requests, ctx)?;
    }
    Ok(())
}

fn emit_folders(
    out: &mut String,
    folders: &[Folder],
    depth: usize,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    for folder in folders {
        debug!("rendering folder '{}' at depth {depth}", folder.name);
        out.push_str(&format!("{} {}\n\n", "#".repeat(2 + depth), folder.name));
        if !folder.description.is_empty() {
            out.push_str(&format!("{}\n\n", folder.description));
        }
        emit_requests(out, &folder.requests, ctx)?;
        emit_folders(out, &folder.folders, depth + 1, ctx)?;
    }
    Ok(())
}

fn emit_requests(
    out: &mut String,
    requests: &[Request],
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    for request in requests {
        emit_request(out, request, ctx)?;
        out.push_str(SEPARATOR);
    }
    Ok(())
}
