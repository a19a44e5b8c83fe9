mod display;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendorscan_core::{VendorCategory, VendorContact};
use vendorscan_scan::config::{DEFAULT_EXCERPT_LEN, DEFAULT_PHONE_NAME_PREFIX};
use vendorscan_scan::{Classifier, ClassifierConfig, ScanError};

/// Exit status when a payload is consumed but yields no contact data.
const EXIT_UNRECOGNIZED: u8 = 2;

/// Turn scanned QR payloads into vendor contact records
#[derive(Parser, Debug)]
#[command(name = "vendorscan", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a scanned payload into a contact record
    Classify(ClassifyArgs),
    /// List the vendor categories a payload may name
    Categories,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Payload text; read from --file or stdin when omitted
    payload: Option<String>,

    /// Read the payload from a file
    #[arg(short, long, conflicts_with = "payload")]
    file: Option<PathBuf>,

    /// Print the record as JSON instead of a card
    #[arg(long)]
    json: bool,

    /// Merge the scan into this vendor contact JSON and print the result
    #[arg(long, value_name = "VENDOR_JSON")]
    merge: Option<PathBuf>,

    /// Prefix of the placeholder name given to phone-only scans
    #[arg(long, env = "VENDORSCAN_PHONE_PREFIX", default_value = DEFAULT_PHONE_NAME_PREFIX)]
    phone_prefix: String,

    /// Characters of the payload quoted when it is not recognised
    #[arg(long, env = "VENDORSCAN_EXCERPT_LEN", default_value_t = DEFAULT_EXCERPT_LEN)]
    excerpt_len: usize,

    /// Retry JSON/URL payloads that yield nothing with the rest of the chain
    #[arg(long, env = "VENDORSCAN_FALL_THROUGH")]
    fall_through: bool,
}

impl ClassifyArgs {
    fn config(&self) -> ClassifierConfig {
        ClassifierConfig {
            phone_name_prefix: self.phone_prefix.clone(),
            excerpt_len: self.excerpt_len,
            fall_through_on_empty: self.fall_through,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("vendorscan v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Classify(args) => run_classify(&args),
        Command::Categories => {
            for category in VendorCategory::ALL {
                println!("{category}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_classify(args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let raw = read_payload(args, std::io::stdin().lock())?;
    let classifier = Classifier::new(args.config());

    let scan = match classifier.classify_detailed(&raw) {
        Ok(scan) => scan,
        Err(err @ ScanError::NoUsableData { .. }) => {
            eprintln!("format not recognized: {err}");
            return Ok(ExitCode::from(EXIT_UNRECOGNIZED));
        }
    };

    if let Some(path) = &args.merge {
        let mut contact = load_vendor(path)?;
        let updated = contact.apply_scan(&scan.record);
        let names: Vec<&str> = updated.iter().map(|f| f.json_key()).collect();
        eprintln!(
            "Updated {} field(s) on {:?}: {}",
            names.len(),
            contact.display_name(),
            names.join(", ")
        );
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&scan.record)?);
    } else {
        print!("{}", display::render_card(scan.kind, &scan.record));
    }

    Ok(ExitCode::SUCCESS)
}

/// Payload from the positional argument, else `--file`, else `stdin`.
///
/// One trailing line ending is dropped from file and stdin input.
fn read_payload(args: &ClassifyArgs, mut stdin: impl Read) -> anyhow::Result<String> {
    if let Some(payload) = &args.payload {
        return Ok(payload.clone());
    }

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading payload from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading payload from stdin")?;
            buf
        }
    };
    Ok(strip_line_ending(text))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn load_vendor(path: &Path) -> anyhow::Result<VendorContact> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading vendor contact {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing vendor contact {}", path.display()))
}
