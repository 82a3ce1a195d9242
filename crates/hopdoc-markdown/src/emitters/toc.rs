use hopdoc_core::{Collection, Folder, Request};

use crate::anchor::anchor;

const INDENT: &str = "  ";

/// Emit the table of contents: the folder tree first, pre-order, with each
/// folder's own requests listed right beneath it, then the root-level
/// requests grouped under `General`.
pub fn emit_toc(out: &mut String, collection: &Collection) {
    out.push_str("## Table of Contents\n\n");

    if !collection.folders.is_empty() {
        emit_folder_entries(out, &collection.folders, 0);
        out.push('\n');
    }

    if !collection.requests.is_empty() {
        push_entry(out, 0, "General");
        emit_request_entries(out, &collection.requests, 1);
        out.push('\n');
    }
}

fn emit_folder_entries(out: &mut String, folders: &[Folder], depth: usize) {
    for folder in folders {
        push_entry(out, depth, &folder.name);
        emit_request_entries(out, &folder.requests, depth + 1);
        emit_folder_entries(out, &folder.folders, depth + 1);
    }
}

fn emit_request_entries(out: &mut String, requests: &[Request], depth: usize) {
    for request in requests {
        push_entry(out, depth, &request.name);
    }
}

fn push_entry(out: &mut String, depth: usize, name: &str) {
    out.push_str(&format!(
        "{}- [{}](#{})\n",
        INDENT.repeat(depth),
        name,
        anchor(name)
    ));
}
