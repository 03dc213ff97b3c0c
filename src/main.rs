use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rdxmark::{Document, Error, Result, TokenStream, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rdxmark")]
#[command(about = "Render a parsed CommonMark document tree as a JSON token stream")]
struct Cli {
    /// Input JSON document (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let document = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => Document::load(path)?,
        _ => Document::from_reader(io::stdin().lock())?,
    };

    let stream = TokenStream::from(render(&document));
    let json = stream.to_json(!cli.compact)?;

    match &cli.output {
        Some(path) => fs::write(path, format!("{json}\n")).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| Error::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }

    tracing::info!(tokens = stream.tokens.len(), "wrote token stream");
    Ok(())
}
