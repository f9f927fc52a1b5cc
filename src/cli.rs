use std::io::Write;
use std::path::PathBuf;

use api_key::{ApiKeyConfig, ApiKeyHandler, KeyHandler, base62, checksum};
use clap::{Parser, Subcommand};

use crate::error::CliError;
use crate::settings::{DEFAULT_SETTINGS_PATH, Settings};

#[derive(Parser, Debug)]
#[command(name = "apikey", about = "Generate and validate prefixed API keys", long_about = None)]
pub struct Args {
    /// Settings file (YAML)
    #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
    pub conf: PathBuf,

    /// Override the configured key prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Override the configured number of entropy characters
    #[arg(long)]
    pub entropy_length: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print fresh keys, one per line
    Generate {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Check a key's structure and checksum
    Validate { key: String },
    /// Print the parts of a key
    Parse { key: String },
    /// Base-62 encode the UTF-8 bytes of TEXT
    Encode { text: String },
    /// Base-62 decode TEXT
    Decode { text: String },
    /// Print the CRC-32C checksum of TEXT
    Checksum { text: String },
}

/// Apply command line overrides on top of the settings file.
pub fn resolve_config(args: &Args, settings: &Settings) -> ApiKeyConfig {
    let mut config = settings.api_key.clone();
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(entropy_length) = args.entropy_length {
        config.entropy_length = entropy_length;
    }
    config
}

/// Execute the selected command, writing results to `out`.
pub fn run<W: Write>(args: &Args, settings: &Settings, out: &mut W) -> Result<(), CliError> {
    match &args.command {
        Command::Generate { count } => {
            let handler = ApiKeyHandler::new(resolve_config(args, settings))?;
            for _ in 0..*count {
                writeln!(out, "{}", handler.generate()?)?;
            }
            log::info!("generated {count} key(s) with prefix '{}'", handler.config().prefix);
        }
        Command::Validate { key } => {
            let handler = ApiKeyHandler::new(resolve_config(args, settings))?;
            handler.validate(key)?;
            writeln!(out, "valid")?;
        }
        Command::Parse { key } => {
            let handler = ApiKeyHandler::new(resolve_config(args, settings))?;
            let parsed = handler.parse(key)?;
            writeln!(out, "prefix:   {}", parsed.prefix())?;
            writeln!(out, "entropy:  {}", parsed.entropy())?;
            writeln!(out, "checksum: {}", parsed.checksum())?;
        }
        Command::Encode { text } => {
            writeln!(out, "{}", base62::encode(text.as_bytes()))?;
        }
        Command::Decode { text } => {
            let bytes = base62::decode(text)?;
            writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;
        }
        Command::Checksum { text } => {
            writeln!(out, "{}", checksum(text))?;
        }
    }
    Ok(())
}
