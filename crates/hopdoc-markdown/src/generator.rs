use hopdoc_core::endpoint::HostOverride;
use hopdoc_core::parse::{self, InputFormat};
use hopdoc_core::{Collection, Fetcher, RenderOptions};
use log::info;
use minijinja::{AutoEscape, Environment};

use crate::emitters::request::RenderContext;
use crate::emitters::{self, content, toc};
use crate::error::{GenerateError, RenderError};
use crate::fetch::UreqFetcher;

const REQUEST_TEMPLATE: &str = "request.md.j2";

/// Renders a [`Collection`] as a Markdown document.
pub struct MarkdownGenerator {
    options: RenderOptions,
    documentation_host: Option<HostOverride>,
    fetch_host: Option<HostOverride>,
    fetcher: Box<dyn Fetcher>,
    env: Environment<'static>,
}

impl MarkdownGenerator {
    /// Generator that performs live fetches over HTTP.
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        let fetcher = UreqFetcher::new(options.timeout());
        Self::with_fetcher(options, Box::new(fetcher))
    }

    pub fn with_fetcher(
        options: RenderOptions,
        fetcher: Box<dyn Fetcher>,
    ) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(
            REQUEST_TEMPLATE,
            include_str!("../templates/request.md.j2"),
        )?;

        let documentation_host = options
            .documentation_host
            .as_deref()
            .and_then(HostOverride::parse);
        let fetch_host = options.fetch_host.as_deref().and_then(HostOverride::parse);

        Ok(Self {
            options,
            documentation_host,
            fetch_host,
            fetcher,
            env,
        })
    }

    /// Render the whole document. The collection is never modified.
    pub fn render(&self, collection: &Collection) -> Result<String, RenderError> {
        info!(
            "rendering collection '{}' (live fetch: {})",
            collection.name, self.options.execute_reads
        );

        let ctx = RenderContext {
            template: self.env.get_template(REQUEST_TEMPLATE)?,
            options: &self.options,
            documentation_host: self.documentation_host.as_ref(),
            fetch_host: self.fetch_host.as_ref(),
            fetcher: self.fetcher.as_ref(),
        };

        let mut out = String::new();
        emitters::emit_title(&mut out, collection);
        toc::emit_toc(&mut out, collection);
        content::emit_content(&mut out, collection, &ctx)?;
        Ok(out)
    }
}

/// Decode `input` and render it. Decode failures abort before anything is
/// rendered.
pub fn generate(
    input: &str,
    format: InputFormat,
    options: RenderOptions,
) -> Result<String, GenerateError> {
    let collection = parse::parse(input, format)?;
    let generator = MarkdownGenerator::new(options)?;
    Ok(generator.render(&collection)?)
}
