//! xmldiff command-line tool
//!
//! Compares a source and a result XML document and writes the difference
//! as a text change log, an HTML report or an XML-Document-Transform file.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xmldiff::{
    compare_documents, DiffNode, HtmlRenderer, Renderer, TextRenderer, TransformRenderer,
    XmlParser, XmlParserOptions, XmlPrinterOptions, MAX_ATTRIBUTES_PREVIEW,
};

/// Structural XML diff
#[derive(Parser)]
#[command(name = "xmldiff")]
#[command(version)]
#[command(about = "Structural XML diff with XML-Document-Transform output", long_about = None)]
struct Cli {
    /// Keep whitespace-only text when parsing
    #[arg(long, global = true)]
    preserve_whitespace: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Input and output files shared by every subcommand.
#[derive(Args)]
struct Files {
    /// Source (original) file
    source: String,
    /// Result (modified) file
    result: String,
    /// Output file (default: stdout)
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a plain-text change log
    #[command(visible_alias = "t")]
    Text {
        #[command(flatten)]
        files: Files,

        /// Number of attributes previewed next to each element
        #[arg(long, default_value_t = MAX_ATTRIBUTES_PREVIEW)]
        preview_attributes: usize,
    },

    /// Write an HTML change report
    #[command(visible_alias = "h")]
    Html {
        #[command(flatten)]
        files: Files,

        /// Number of attributes previewed for added or removed elements
        #[arg(long, default_value_t = MAX_ATTRIBUTES_PREVIEW)]
        preview_attributes: usize,
    },

    /// Generate an XML-Document-Transform file
    #[command(visible_alias = "x")]
    Transform {
        #[command(flatten)]
        files: Files,

        /// Write the transform on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let parser = XmlParser::with_options(XmlParserOptions {
        preserve_whitespace: cli.preserve_whitespace,
    });

    let result = match cli.command {
        Commands::Text {
            files,
            preview_attributes,
        } => run(
            &parser,
            &files,
            &TextRenderer::new().with_preview_attributes(preview_attributes),
        ),
        Commands::Html {
            files,
            preview_attributes,
        } => run(
            &parser,
            &files,
            &HtmlRenderer::new().with_preview_attributes(preview_attributes),
        ),
        Commands::Transform { files, compact } => {
            let renderer = TransformRenderer::new().with_printer_options(XmlPrinterOptions {
                pretty_print: !compact,
                declaration: true,
            });
            run(&parser, &files, &renderer)
        }
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Parses both inputs and compares them.
fn load_and_compare(parser: &XmlParser, files: &Files) -> Result<DiffNode, xmldiff::Error> {
    info!("Loading {}", files.source);
    let source = parser.parse_file(&files.source)?;

    info!("Loading {}", files.result);
    let result = parser.parse_file(&files.result)?;

    info!("Comparing differences...");
    let started = Instant::now();
    let diff = compare_documents(&source, &result)?;
    info!(
        "Compared in {} ms ({})",
        started.elapsed().as_millis(),
        if diff.is_changed() { "changed" } else { "unchanged" }
    );
    Ok(diff)
}

/// Compares the inputs and writes the rendered diff.
fn run(
    parser: &XmlParser,
    files: &Files,
    renderer: &dyn Renderer,
) -> Result<(), Box<dyn std::error::Error>> {
    let diff = load_and_compare(parser, files)?;
    let rendered = renderer.render(&diff)?;

    match &files.output {
        Some(path) => {
            info!("Writing output to {}", path);
            fs::write(path, rendered)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    info!("Done.");
    Ok(())
}
