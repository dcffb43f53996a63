//! `cfgfile` CLI — inspect, edit and normalize INI-style config files.
//!
//! ## Usage
//!
//! ```sh
//! # Re-emit a config file in canonical form (stdin → stdout)
//! cat app.cfg | cfgfile format
//!
//! # Read one option
//! cfgfile get width --section Window -i app.cfg
//!
//! # Update one option in place (creates the file if missing)
//! cfgfile set width 1280 --section Window --file app.cfg
//!
//! # Export as JSON, or list every option with its metadata
//! cfgfile json -i app.cfg
//! cfgfile json --describe -i app.cfg
//!
//! # Decode a flat array value
//! cfgfile split-array '{red, "dark green", blue}'
//! ```
//!
//! Diagnostics (out-of-range options, unreadable files) go to stderr when
//! `--warnings` is given. `RUST_LOG` overrides the log filter.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cfgfile_core::{strutil, ConfigFile, Flags};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cfgfile",
    version,
    about = "Read, edit and normalize INI-style configuration files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Report out-of-range options and unreadable files on stderr
    #[arg(long, global = true)]
    warnings: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a config file and print it in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the raw value of one option
    Get {
        /// Option name
        name: String,
        /// Section to look in (default section if omitted)
        #[arg(short, long, default_value = "")]
        section: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Set one option and rewrite the file
    Set {
        /// Option name
        name: String,
        /// New value; surrounding quotes are kept as a quoting hint
        value: String,
        /// Section to write to (default section if omitted)
        #[arg(short, long, default_value = "")]
        section: String,
        /// Config file to update (created if missing)
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Export the configuration as JSON
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// List every option with its kind, quoting and range instead
        #[arg(long)]
        describe: bool,
    },
    /// Split a flat `{a, b, c}` array value into one element per line
    SplitArray {
        /// The array text
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let flags = Flags {
        warnings: cli.warnings,
        ..Flags::default()
    };

    match cli.command {
        Commands::Format { input, output } => {
            let cfg = load(input.as_deref(), flags)?;
            write_output(output.as_deref(), &cfg.build_string())?;
        }
        Commands::Get {
            name,
            section,
            input,
        } => {
            let cfg = load(input.as_deref(), flags)?;
            let value = cfg.option_in(&name, &section).with_context(|| {
                format!("Option '{}' not found in section '{}'", name, section)
            })?;
            println!("{}", value);
        }
        Commands::Set {
            name,
            value,
            section,
            file,
        } => {
            let mut cfg = ConfigFile::new();
            cfg.set_flags(flags);
            if file.exists() {
                cfg.load_from_file(&file)
                    .with_context(|| format!("Failed to read file: {}", file.display()))?;
            }
            let (text, quoted) = strutil::trim_quotes(&value);
            let option = cfg.option_in_mut(&name, &section);
            option
                .assign(text)
                .with_context(|| format!("Cannot set '{}' to '{}'", name, text))?;
            if quoted {
                option.set_quotes(true);
            }
            cfg.write_to_file(Some(file.as_path()))
                .with_context(|| format!("Failed to write file: {}", file.display()))?;
        }
        Commands::Json {
            input,
            output,
            describe,
        } => {
            let cfg = load(input.as_deref(), flags)?;
            let json = if describe {
                serde_json::to_string_pretty(&cfgfile_core::describe(cfg.store()))?
            } else {
                serde_json::to_string_pretty(&cfgfile_core::to_json(cfg.store()))?
            };
            write_output(output.as_deref(), &format!("{}\n", json))?;
        }
        Commands::SplitArray { text } => {
            for element in cfgfile_core::split_array(&text) {
                println!("{}", element);
            }
        }
    }

    Ok(())
}

/// Load a config from a file, or from stdin when no path is given.
fn load(path: Option<&Path>, flags: Flags) -> Result<ConfigFile> {
    let mut cfg = ConfigFile::new();
    cfg.set_flags(flags);
    match path {
        Some(path) => {
            cfg.load_from_file(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            cfg.load_from_string(&buf);
        }
    }
    Ok(cfg)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
