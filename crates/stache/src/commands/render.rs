//! Render command - fill a template with data from a JSON or TOML file

use crate::cli::Cli;
use crate::output::write_rendered;
use anyhow::{Context as _, Result};
use colored::Colorize;
use stache_core::config::StacheConfig;
use stache_core::config::consts::CONFIG_FILE_NAME;
use stache_core::data::{insert_partial, load_context};
use stache_core::TemplateEngine;
use std::fs;
use std::path::Path;

/// Render `cli.template` against `cli.data`
///
/// Partials given with `-p NAME=FILE` are added to the data root before
/// rendering. Progress messages go to stderr so stdout carries only the
/// rendered text.
pub fn run(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;

    // Step 1: Configuration
    let config = load_config(cli.config.as_deref(), verbose)?;

    // Step 2: Data
    if verbose {
        eprintln!("{} Loading data from {}", "→".cyan(), cli.data.display());
    }
    let mut context = load_context(&cli.data)
        .with_context(|| format!("failed to load data '{}'", cli.data.display()))?;

    // Step 3: Partials
    for (name, path) in &cli.partials {
        if verbose {
            eprintln!(
                "{} Adding partial '{}' from {}",
                "→".cyan(),
                name,
                path.display()
            );
        }
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read partial '{}'", path.display()))?;
        insert_partial(&mut context, name, body)?;
    }

    // Step 4: Render
    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("failed to read template '{}'", cli.template.display()))?;

    let engine = TemplateEngine::with_config(config.render);
    let rendered = engine
        .render(&template, &context)
        .with_context(|| format!("failed to render '{}'", cli.template.display()))?;
    log::info!(
        "Rendered {} ({} bytes)",
        cli.template.display(),
        rendered.len()
    );

    // Step 5: Output
    write_rendered(&rendered, cli.output.as_deref()).context("failed to write output")?;

    if verbose {
        if let Some(path) = &cli.output {
            eprintln!("{} Wrote {}", "✓".green().bold(), path.display());
        }
    }

    Ok(())
}

/// Load an explicit config file, or `stache.toml` from the working directory
fn load_config(explicit: Option<&Path>, verbose: bool) -> Result<StacheConfig> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(CONFIG_FILE_NAME).is_file() => Path::new(CONFIG_FILE_NAME),
        None => return Ok(StacheConfig::default()),
    };

    if verbose {
        eprintln!("{} Using config {}", "→".cyan(), path.display());
    }
    StacheConfig::from_file(path)
        .with_context(|| format!("failed to load config '{}'", path.display()))
}
