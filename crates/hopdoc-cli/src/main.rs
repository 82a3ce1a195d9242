use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use log::info;

use hopdoc_core::config::{self, CONFIG_FILE_NAME, HopdocConfig};
use hopdoc_core::parse::{self, InputFormat};
use hopdoc_core::{Collection, RenderOptions};
use hopdoc_markdown::MarkdownGenerator;

#[derive(Parser)]
#[command(
    name = "hopdoc",
    about = "Generate Markdown API documentation from Hoppscotch collections",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown documentation from a Hoppscotch collection
    Generate {
        /// Input Hoppscotch collection (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output Markdown file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Execute GET requests and include responses in the documentation
        #[arg(short = 'x', long)]
        execute: bool,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Replace endpoint host in documentation (e.g. https://api.example.com)
        #[arg(long)]
        server: Option<String>,

        /// Replace endpoint host only when executing requests
        #[arg(long)]
        target_server: Option<String>,
    },

    /// Check that a collection decodes and print its shape
    Validate {
        /// Input Hoppscotch collection
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Write a default hopdoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Flag values for `generate`; set flags win over the config file.
struct GenerateArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    execute: bool,
    timeout: Option<u64>,
    server: Option<String>,
    target_server: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            execute,
            timeout,
            server,
            target_server,
        } => cmd_generate(GenerateArgs {
            input,
            output,
            execute,
            timeout,
            server,
            target_server,
        }),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "hopdoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<HopdocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_collection(path: &Path) -> Result<Collection> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let format = InputFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    let collection = parse::parse(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(collection)
}

fn merge_options(args: &GenerateArgs, cfg: &HopdocConfig) -> RenderOptions {
    RenderOptions {
        execute_reads: args.execute || cfg.render.execute_reads,
        timeout_seconds: args.timeout.unwrap_or(cfg.render.timeout_seconds),
        documentation_host: args
            .server
            .clone()
            .or_else(|| cfg.render.documentation_host.clone()),
        fetch_host: args
            .target_server
            .clone()
            .or_else(|| cfg.render.fetch_host.clone()),
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = args
        .input
        .clone()
        .or_else(|| cfg.input.as_ref().map(PathBuf::from))
        .context("no input collection given; pass --input or set `input` in the config")?;
    let output = args
        .output
        .clone()
        .or_else(|| cfg.output.as_ref().map(PathBuf::from));

    let collection = load_collection(&input)?;
    let options = merge_options(&args, &cfg);
    info!("generating documentation for {}", input.display());

    let generator = MarkdownGenerator::new(options)?;
    let markdown = generator.render(&collection)?;

    match output {
        Some(path) => {
            fs::write(&path, &markdown)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Markdown documentation generated: {}", path.display());
        }
        None => print!("{markdown}"),
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let collection = load_collection(input)?;
    let stats = collection.stats();

    eprintln!("Valid Hoppscotch collection: {}", collection.name);
    eprintln!("  Folders: {}", stats.folders);
    eprintln!("  Requests: {}", stats.requests);
    eprintln!("  Variables: {}", stats.variables);
    eprintln!("  Max folder depth: {}", stats.max_depth);
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
