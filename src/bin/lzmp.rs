//! CLI entry point for the `lzmp` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use lz4_msgpack::cli::commands;
use lz4_msgpack::{EnvelopeConfig, LzmpError, DEFAULT_MAX_UNCOMPRESSED_LEN};

#[derive(Parser)]
#[command(
    name = "lzmp",
    about = "lzmp: LZ4 envelopes for MessagePack payloads"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a MessagePack file into an LZ4 envelope
    Pack {
        /// Raw MessagePack input file
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Unwrap an LZ4 envelope back into plain MessagePack
    Unpack {
        /// Envelope or plain MessagePack input file
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Largest uncompressed length to accept, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_UNCOMPRESSED_LEN)]
        max_size: usize,
    },
    /// Show the envelope header of a file
    Inspect {
        /// Input file
        input: PathBuf,
    },
    /// Convert a JSON document into a compressed MessagePack file
    FromJson {
        /// JSON input file
        json_file: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a (possibly compressed) MessagePack file as JSON
    ToJson {
        /// Input file
        input: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
        /// Largest uncompressed length to accept, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_UNCOMPRESSED_LEN)]
        max_size: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Pack { input, output } => commands::cmd_pack(&input, output.as_deref()),
        Commands::Unpack {
            input,
            output,
            max_size,
        } => commands::cmd_unpack(
            &input,
            output.as_deref(),
            &EnvelopeConfig::with_max_uncompressed_len(max_size),
        ),
        Commands::Inspect { input } => commands::cmd_inspect(&input, json),
        Commands::FromJson { json_file, output } => {
            commands::cmd_from_json(&json_file, output.as_deref())
        }
        Commands::ToJson {
            input,
            pretty,
            max_size,
        } => commands::cmd_to_json(
            &input,
            pretty,
            &EnvelopeConfig::with_max_uncompressed_len(max_size),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            LzmpError::Io(_) => 1,
            LzmpError::Decompression(_) | LzmpError::TooLarge { .. } => 2,
            LzmpError::Codec(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
