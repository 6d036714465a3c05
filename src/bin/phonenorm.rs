//! CLI tool for phone and fax number normalization.
//!
//! # Usage
//!
//! ```bash
//! # Standardize a phone number
//! phonenorm standardize "514.696.2442"
//!
//! # Standardize a fax number
//! phonenorm standardize 4186964673 --fax
//!
//! # Check a stored value
//! phonenorm validate "(514) 696-2442"
//!
//! # Standardize one value per line from a file (or stdin)
//! phonenorm batch --input phones.txt --output json
//!
//! # Clean a whole clinic directory
//! RUST_LOG=info phonenorm clinics outbound_clinics.json --pretty
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use phone_normalizer::directory::{self, csv as csv_dir, json as json_dir, ClinicEntry};
use phone_normalizer::{
    display_phone_number, extract_extension, is_valid_phone_number, remove_extension,
    standardize_fax_number, standardize_phone_number, DirectoryError, RawInput,
};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "phonenorm")]
#[command(
    author,
    version,
    about = "Phone and fax number normalization for clinic directories"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Standardize a phone (or fax) number
    Standardize {
        /// Raw value, as typed
        value: String,

        /// Treat the value as a fax field (integers are read as numeric cells)
        #[arg(short, long)]
        fax: bool,
    },

    /// Check whether a value has a plausible digit count
    Validate {
        /// Value to check
        value: String,
    },

    /// Print a value for display, with a placeholder when missing
    Display {
        /// Value to display
        value: Option<String>,
    },

    /// Print the extension digits of a value
    Extension {
        /// Value containing an extension
        value: String,
    },

    /// Print a value without its extension
    StripExtension {
        /// Value containing an extension
        value: String,
    },

    /// Standardize one value per line
    Batch {
        /// Input file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat values as fax fields (integers are read as numeric cells)
        #[arg(short, long)]
        fax: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Clean a clinic directory and print the cleaned records as JSON
    Clinics {
        /// Directory file (JSON or CSV)
        file: PathBuf,

        /// Input format (inferred from the file extension when omitted)
        #[arg(short, long)]
        format: Option<DirectoryFormat>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DirectoryFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct BatchRecord {
    input: String,
    standardized: Option<String>,
    valid: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Standardize { value, fax } => {
            cmd_standardize(&value, fax);
        }
        Commands::Validate { value } => {
            cmd_validate(&value);
        }
        Commands::Display { value } => {
            println!("{}", display_phone_number(value.as_deref()));
        }
        Commands::Extension { value } => {
            cmd_extension(&value);
        }
        Commands::StripExtension { value } => {
            cmd_strip_extension(&value);
        }
        Commands::Batch { input, fax, output } => {
            cmd_batch(input.as_deref(), fax, output);
        }
        Commands::Clinics {
            file,
            format,
            pretty,
        } => {
            cmd_clinics(&file, format, pretty);
        }
    }
}

/// Reads a fax argument the way a fax cell is read: integers are numeric.
fn fax_input(value: &str) -> RawInput {
    match value.trim().parse::<i64>() {
        Ok(number) => RawInput::Numeric(number),
        Err(_) => RawInput::from(value),
    }
}

/// Standardizes a single value as a phone or fax field.
fn standardize_value(value: &str, fax: bool) -> Option<String> {
    if fax {
        standardize_fax_number(fax_input(value))
    } else {
        standardize_phone_number(value)
    }
}

fn cmd_standardize(value: &str, fax: bool) {
    match standardize_value(value, fax) {
        Some(standardized) => {
            println!("{}", standardized);
            std::process::exit(0);
        }
        None => {
            eprintln!("Error: no digits to standardize");
            std::process::exit(1);
        }
    }
}

fn cmd_validate(value: &str) {
    if is_valid_phone_number(value) {
        println!("Valid: yes");
        std::process::exit(0);
    } else {
        println!("Valid: no");
        std::process::exit(1);
    }
}

fn cmd_extension(value: &str) {
    match extract_extension(value) {
        Some(ext) => println!("{}", ext),
        None => {
            eprintln!("Error: no extension found");
            std::process::exit(1);
        }
    }
}

fn cmd_strip_extension(value: &str) {
    if let Some(stripped) = remove_extension(value) {
        println!("{}", stripped);
    }
}

fn batch_record(line: &str, fax: bool) -> BatchRecord {
    let standardized = standardize_value(line, fax);
    BatchRecord {
        input: line.to_string(),
        valid: is_valid_phone_number(standardized.as_deref()),
        standardized,
    }
}

fn render_text(record: &BatchRecord) -> String {
    format!(
        "{} => {}",
        record.input,
        record.standardized.as_deref().unwrap_or("(unformattable)")
    )
}

fn read_lines(input: Option<&Path>) -> io::Result<Vec<String>> {
    match input {
        Some(path) => BufReader::new(File::open(path)?).lines().collect(),
        None => io::stdin().lock().lines().collect(),
    }
}

fn cmd_batch(input: Option<&Path>, fax: bool, output: OutputFormat) {
    let lines = match read_lines(input) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let records: Vec<BatchRecord> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| batch_record(line, fax))
        .collect();

    match output {
        OutputFormat::Text => {
            for record in &records {
                println!("{}", render_text(record));
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }

    let unformattable = records.iter().filter(|r| r.standardized.is_none()).count();
    tracing::info!(total = records.len(), unformattable, "batch completed");
}

/// Picks the directory format from the flag or the file extension.
fn infer_format(file: &Path, format: Option<DirectoryFormat>) -> Option<DirectoryFormat> {
    format.or_else(|| {
        match file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(DirectoryFormat::Json),
            Some("csv") => Some(DirectoryFormat::Csv),
            _ => None,
        }
    })
}

fn load_entries(
    file: &Path,
    format: DirectoryFormat,
) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    match format {
        DirectoryFormat::Json => json_dir::load_json_directory_from_path(file),
        DirectoryFormat::Csv => csv_dir::load_csv_directory_from_path(file),
    }
}

fn cmd_clinics(file: &Path, format: Option<DirectoryFormat>, pretty: bool) {
    let Some(format) = infer_format(file, format) else {
        eprintln!(
            "Error: cannot infer the format of {}; pass --format json|csv",
            file.display()
        );
        std::process::exit(2);
    };

    let entries = match load_entries(file, format) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let report = directory::clean_directory(entries);
    for (region, count) in report.by_region() {
        tracing::info!(%region, count, "clinics by region");
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(report.clinics())
    } else {
        serde_json::to_string(report.clinics())
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
