//! CLI command structure using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stache")]
#[command(version, about = "Render mustache templates against JSON or TOML data", long_about = None)]
pub struct Cli {
    /// Data file (.json or .toml)
    pub data: PathBuf,

    /// Template file
    pub template: PathBuf,

    /// Write the rendered text to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Make a partial available as {{>NAME}} (repeatable)
    #[arg(short, long = "partial", value_name = "NAME=FILE", value_parser = parse_partial)]
    pub partials: Vec<(String, PathBuf)>,

    /// Configuration file (defaults to ./stache.toml when present)
    #[arg(short, long, value_name = "FILE", env = "STACHE_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a `NAME=FILE` partial argument
fn parse_partial(arg: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FILE, got '{arg}'"))?;

    let name = name.trim();
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=FILE, got '{arg}'"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}
