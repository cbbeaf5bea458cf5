use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use transit_catalogue::RequestHandler;

mod input;
mod output;

use input::{build_catalogue, read_document};
use output::{answer_requests, write_responses};

#[derive(Parser, Debug)]
#[command(
    name = "transit-catalogue",
    author,
    version,
    about = "Answer bus statistics and routing requests from a JSON document",
    long_about = "Reads a JSON document with base_requests (stops, road distances and buses), \
                  routing_settings (bus_wait_time in minutes, bus_velocity in km/h) and \
                  stat_requests (Bus, Stop and Route queries), and writes a JSON array with \
                  one response per request."
)]
struct Args {
    /// Input JSON document (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the JSON responses (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON responses
    #[arg(long)]
    pretty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let document = match &args.input {
        Some(path) => {
            log::info!("Input: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            read_document(BufReader::new(file))?
        }
        None => read_document(io::stdin().lock())?,
    };

    let catalogue = build_catalogue(&document.base_requests)?;
    let handler = match document.routing_settings {
        Some(settings) => RequestHandler::with_routing(catalogue, settings)
            .context("Invalid routing settings")?,
        None => RequestHandler::new(catalogue),
    };

    let responses = answer_requests(&handler, &document.stat_requests)?;
    log::info!("Answered {} requests", responses.len());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_responses(&mut writer, &responses, args.pretty)?;
            writer.flush().context("Failed to flush output")?;
            log::info!("Wrote responses to {}", path.display());
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            write_responses(&mut writer, &responses, args.pretty)?;
            writeln!(writer).context("Failed to write output")?;
            writer.flush().context("Failed to flush output")?;
        }
    }

    Ok(())
}
