//! Command-line surface: argument types and the dispatch behind `itemkit`.
//!
//! `main` only parses, installs logging and loads config; everything else
//! goes through [`run`] so it can be driven from tests with any writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::{field_property, or_false, process_as, truncate, FieldCatalog, FieldProperty, Item};

#[derive(Debug, Parser)]
#[command(name = "itemkit", about = "itemkit: custom fields and truncation for CMS templates")]
pub struct Cli {
    /// Write debug logs to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/itemkit/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The config named by `--config`, else the user's config file layered
    /// over the defaults, else the defaults alone.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Ok(Config::load().unwrap_or_else(|_| Config::defaults())),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalise an item's custom fields and print the name-keyed lookup.
    Process {
        /// Item JSON file.
        item: PathBuf,
        /// Field catalog for items that arrive without fields.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print one property of one field, or `false` if the field is missing.
    Field {
        /// Item JSON file.
        item: PathBuf,
        /// Field name.
        name: String,
        /// One of name, value, label, group, options.
        #[arg(long, default_value = "value")]
        property: FieldProperty,
        /// Field catalog for items that arrive without fields.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Strip markup and shorten text without splitting words.
    Truncate {
        text: String,
        /// Approximate length; defaults to render.truncate_limit.
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Execute `command` against `config`, writing its output to `out`.
pub fn run<W: Write>(command: Command, config: &Config, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Process { item, catalog } => {
            let mut item = read_item(&item)?;
            let catalog = open_catalog(catalog.as_deref(), config)?;
            process_as(&mut item, &catalog, &config.render.default_type_alias);
            writeln!(out, "{}", serde_json::to_string_pretty(&item.fields_by_name)?)?;
        }
        Command::Field {
            item,
            name,
            property,
            catalog,
        } => {
            let mut item = read_item(&item)?;
            let catalog = open_catalog(catalog.as_deref(), config)?;
            if !item.processed {
                process_as(&mut item, &catalog, &config.render.default_type_alias);
            }
            let found = field_property(&mut item, &catalog, &name, property);
            writeln!(out, "{}", serde_json::to_string_pretty(&or_false(found))?)?;
        }
        Command::Truncate { text, limit } => {
            let limit = limit.unwrap_or(config.render.truncate_limit);
            writeln!(out, "{}", truncate(&text, limit))?;
        }
    }
    Ok(())
}

fn read_item(path: &Path) -> anyhow::Result<Item> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read item {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse item {}", path.display()))
}

fn open_catalog(flag: Option<&Path>, config: &Config) -> anyhow::Result<FieldCatalog> {
    match flag.or(config.catalog.path.as_deref()) {
        Some(path) => Ok(FieldCatalog::from_path(path)?),
        None => Ok(FieldCatalog::default()),
    }
}
