use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gallery::config::{load_asset_origin, load_asset_origin_from};
use gallery::{AssetOrigin, DomainKind};
use serde_json::Value;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "gallery", about = "Normalize content-record galleries")]
struct Cli {
    /// Config file (without extension is fine). Overrides GALLERY_CONFIG.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the render-ready cover and gallery for each record.
    Read(RecordArgs),
    /// Validate form state and print the payload to persist.
    Write {
        #[command(flatten)]
        args: RecordArgs,
        /// Persist storage paths instead of absolute URLs.
        #[arg(long)]
        storage_paths: bool,
    },
}

#[derive(clap::Args)]
struct RecordArgs {
    /// Content type: portfolio, service or home.
    #[arg(long, short)]
    domain: DomainKind,

    /// JSON file holding one record or an array of records. Reads stdin if omitted.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let origin = match &cli.config {
        Some(path) => load_asset_origin_from(path),
        None => load_asset_origin(),
    }
    .context("Failed to establish asset origin")?;
    info!(origin = %origin, "Asset origin configured");

    match cli.command {
        Command::Read(args) => {
            let records = read_records(args.file.as_ref())?;
            let adapter = args.domain.adapter(origin);
            let canonical: Vec<_> = records
                .iter()
                .map(|record| adapter.to_canonical(record))
                .collect();
            print_json(&canonical)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Write {
            args,
            storage_paths,
        } => write(&origin, &args, storage_paths),
    }
}

fn write(origin: &AssetOrigin, args: &RecordArgs, storage_paths: bool) -> anyhow::Result<ExitCode> {
    let records = read_records(args.file.as_ref())?;
    let bounds = args.domain.bounds();
    info!(
        domain = %args.domain,
        min = bounds.min,
        max = bounds.max,
        records = records.len(),
        "Validating gallery writes"
    );

    let adapter = args.domain.adapter(origin.clone());
    let mut payloads = Vec::with_capacity(records.len());

    for (index, form) in records.iter().enumerate() {
        match adapter.to_validated_payload(form) {
            Ok(payload) if storage_paths => payloads.push(payload.into_storage_paths(origin)),
            Ok(payload) => payloads.push(payload),
            Err(e) => {
                error!(index, domain = %args.domain, kind = ?e.kind(), "Gallery rejected");
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    print_json(&payloads)?;
    Ok(ExitCode::SUCCESS)
}

/// A single object is treated as a one-record batch.
fn read_records(file: Option<&PathBuf>) -> anyhow::Result<Vec<Value>> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let value: Value = serde_json::from_str(&text).context("Input is not valid JSON")?;
    Ok(match value {
        Value::Array(records) => records,
        record => vec![record],
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
