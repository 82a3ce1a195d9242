use hopdoc_core::endpoint::{HostOverride, resolve_endpoint};
use hopdoc_core::{Body, Fetcher, KeyValue, RenderOptions, Request};
use log::debug;
use minijinja::{Template, context};
use serde::Serialize;

use super::format_json;
use super::response::{ResponseView, fetch_response};
use crate::error::RenderError;

/// Everything a request block needs besides the request itself.
pub struct RenderContext<'a> {
    pub template: Template<'a, 'a>,
    pub options: &'a RenderOptions,
    pub documentation_host: Option<&'a HostOverride>,
    pub fetch_host: Option<&'a HostOverride>,
    pub fetcher: &'a dyn Fetcher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TableRow<'r> {
    key: &'r str,
    value: &'r str,
    description: &'r str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct BodyView<'r> {
    content_type: &'r str,
    fence: &'static str,
    text: String,
}

fn table_rows(items: &[KeyValue]) -> Vec<TableRow<'_>> {
    items
        .iter()
        .map(|item| TableRow {
            key: &item.key,
            value: &item.value,
            description: item.description_or_dash(),
        })
        .collect()
}

fn body_view(body: &Body) -> Option<BodyView<'_>> {
    if !body.is_present() {
        return None;
    }
    let (fence, text) = match format_json(body.body.as_bytes()) {
        Some(pretty) => ("json", pretty),
        None => ("", body.body.clone()),
    };
    Some(BodyView {
        content_type: &body.content_type,
        fence,
        text,
    })
}

/// Render one request block into `out`.
///
/// With live fetching enabled, `GET` requests are fetched here, so output
/// order equals fetch order.
pub fn emit_request(
    out: &mut String,
    request: &Request,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    debug!("rendering request '{}'", request.name);

    let response: Option<ResponseView> = (ctx.options.execute_reads
        && request.method.is_get())
    .then(|| fetch_response(request, ctx.fetch_host, ctx.fetcher));

    let auth_type = request
        .auth
        .is_documented()
        .then_some(request.auth.auth_type.as_str());

    let rendered = ctx.template.render(context! {
        name => &request.name,
        description => &request.description,
        badge => request.method.badge(),
        endpoint => resolve_endpoint(&request.endpoint, ctx.documentation_host),
        headers => table_rows(&request.headers),
        params => table_rows(&request.params),
        body => body_view(&request.body),
        response => response,
        auth_type => auth_type,
    })?;
    out.push_str(&rendered);
    Ok(())
}
