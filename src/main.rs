use std::fs;
use std::path::{Path, PathBuf};

use chatmark::{ChatRequest, Config, Error};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Typst,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Pdf => "pdf",
            Format::Typst => "typ",
            Format::Json => "blocks.json",
        }
    }
}

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Render coaching chat messages to PDF, Typst or JSON blocks")]
struct Cli {
    /// Assistant message (markdown) or chat transcript (.json)
    input: PathBuf,

    /// Output file (defaults to input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: Format,

    /// TOML settings layered over the built-in defaults
    #[arg(short, long, default_value = "chatmark.toml")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatmark=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> chatmark::Result<()> {
    let output = output_path(cli)?;
    let config = Config::load(&cli.config)?;

    let input = fs::read_to_string(&cli.input).map_err(|source| Error::Read {
        path: cli.input.clone(),
        source,
    })?;

    let bytes = if is_transcript(&cli.input) {
        let request = ChatRequest::from_json(&input)?;
        match cli.format {
            Format::Pdf => chatmark::transcript_to_pdf(&request.messages, &config)?,
            Format::Typst => chatmark::transcript_to_typst(&request.messages, &config).into_bytes(),
            Format::Json => serde_json::to_vec_pretty(&request.render())?,
        }
    } else {
        match cli.format {
            Format::Pdf => chatmark::message_to_pdf(&input, &config)?,
            Format::Typst => chatmark::message_to_typst(&input, &config).into_bytes(),
            Format::Json => serde_json::to_vec_pretty(&chatmark::render(&input))?,
        }
    };

    fs::write(&output, bytes).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;

    info!("Created {}", output.display());
    Ok(())
}

/// Defaults to the input name with the format's extension, and never the
/// input itself.
fn output_path(cli: &Cli) -> chatmark::Result<PathBuf> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(cli.format.extension()));

    if output == cli.input {
        return Err(Error::OverwritesInput(output));
    }
    Ok(output)
}

fn is_transcript(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
