//! tokenlog CLI
//!
//! Decodes metadata words and annotated format strings from the command
//! line. Each subcommand maps to one decoding operation; pairing both
//! halves of a record is the `record` subcommand.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use tokenlog::{BitLayout, FormatString, LogLevel, LogRecord, Metadata, Result, TokenLogError};

/// tokenlog decoder
#[derive(Parser, Debug)]
#[command(name = "tokenlog-cli")]
#[command(about = "Decode tokenized log metadata words and format strings")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a packed metadata word
    Meta {
        /// The word, decimal or 0x-prefixed hex
        word: String,

        /// Log level field width in bits
        #[arg(long, default_value = "3")]
        log_bits: u32,

        /// Module token field width in bits
        #[arg(long, default_value = "16")]
        module_bits: u32,

        /// Flags field width in bits
        #[arg(long, default_value = "2")]
        flag_bits: u32,

        /// Line number field width in bits
        #[arg(long, default_value = "11")]
        line_bits: u32,
    },

    /// Parse an annotated format string
    Format {
        /// The raw format string text
        string: String,
    },

    /// Decode a full record (metadata word + format string)
    Record {
        /// The metadata word, decimal or 0x-prefixed hex
        word: String,

        /// The raw format string text
        string: String,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tokenlog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Meta {
            word,
            log_bits,
            module_bits,
            flag_bits,
            line_bits,
        } => {
            let layout = BitLayout::builder()
                .log_bits(log_bits)
                .module_bits(module_bits)
                .flag_bits(flag_bits)
                .line_bits(line_bits)
                .build()?;
            let meta = Metadata::with_layout(parse_word(&word)?, layout);

            let level = meta.log_level();
            match LogLevel::from_value(level) {
                Some(name) => println!("log_level:    {} ({})", level, name),
                None => println!("log_level:    {}", level),
            }
            println!("module_token: 0x{:04x}", meta.module_token());
            println!("flags:        {}", meta.flags());
            println!("line:         {}", meta.line());
        }

        Command::Format { string } => {
            let format = FormatString::parse(string);

            println!("message: {}", format.message());
            println!("module:  {}", format.module());
            println!("file:    {}", format.file());
            for (key, value) in format.fields() {
                println!("field {}: {}", key, value);
            }
        }

        Command::Record { word, string, json } => {
            let record = LogRecord::new(Metadata::new(parse_word(&word)?), FormatString::parse(string));

            if json {
                println!("{}", serde_json::to_string_pretty(&record.summary())?);
            } else {
                println!("{}", record);
            }
        }
    }

    Ok(())
}

/// Parse a metadata word from decimal or 0x-prefixed hex text
fn parse_word(text: &str) -> Result<u64> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| TokenLogError::InvalidWord(text.to_string()))
}
