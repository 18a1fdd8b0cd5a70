//! Command-line interface for mdlite
//!
//! Reads Markdown from a file (or stdin) and prints the rendered HTML, or the
//! token stream with `--tokens`.
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use mdlite::{EngineConfig, MarkdownEngine, Token};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mdlite", version, about = "Convert a small Markdown subset to HTML")]
struct Cli {
    /// Markdown file to convert; reads stdin when omitted
    path: Option<PathBuf>,

    /// Print the token stream instead of HTML
    #[arg(long)]
    tokens: bool,

    /// Print tokens as JSON
    #[cfg(feature = "serde")]
    #[arg(long, requires = "tokens")]
    json: bool,

    /// Self-close void elements (`<img ... />`)
    #[arg(long)]
    xhtml: bool,

    /// Write payloads without HTML escaping
    #[arg(long)]
    no_escape: bool,

    /// Only recognize `#` and `-` block markers at the start of a line
    #[arg(long)]
    line_start_blocks: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_recoverable() => {
            eprintln!("Error: {}", e);
            eprintln!("hint: raise --max-size or drop it");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mdlite={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> mdlite::Result<()> {
    let source = read_source(cli.path.as_deref())?;
    info!(bytes = source.len(), path = ?cli.path, "read input");

    let engine = MarkdownEngine::with_config(
        EngineConfig::builder()
            .block_markers_at_line_start(cli.line_start_blocks)
            .max_input_size(cli.max_size)
            .escape_html(!cli.no_escape)
            .xhtml_style(cli.xhtml)
            .build(),
    );

    let mut stdout = io::stdout().lock();
    if cli.tokens {
        let tokens = engine.tokenize(&source)?;
        write_tokens(cli, &tokens, &mut stdout)?;
    } else {
        let html = engine.render_to_html(&source)?;
        stdout.write_all(html.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn read_source(path: Option<&Path>) -> mdlite::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

#[cfg_attr(not(feature = "serde"), allow(unused_variables))]
fn write_tokens(cli: &Cli, tokens: &[Token], out: &mut impl Write) -> mdlite::Result<()> {
    #[cfg(feature = "serde")]
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, tokens)?;
        writeln!(out)?;
        return Ok(());
    }

    for token in tokens {
        writeln!(out, "{token:?}")?;
    }
    Ok(())
}
