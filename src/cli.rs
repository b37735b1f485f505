use crate::engine::Duck;
use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "duckt")]
#[command(about = "Resolve the first present attribute of a JSON or YAML document", long_about = None)]
pub struct Args {
    /// Path to the document to probe
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Attribute to try. Repeat to add fallbacks, tried in order.
    #[arg(short, long = "attr", value_name = "NAME", required = true)]
    pub attrs: Vec<String>,

    /// Value printed when no attribute is present (JSON, or a plain string)
    #[arg(short, long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Document format (auto-detected from the extension if not specified)
    #[arg(short, long)]
    pub format: Option<InputFormat>,

    /// Pretty-print the resolved value
    #[arg(long)]
    pub pretty: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.path.is_file() {
            anyhow::bail!("Document does not exist: {}", self.path.display());
        }
        if self.attrs.iter().any(|attr| attr.is_empty()) {
            anyhow::bail!("Attribute names must not be empty");
        }
        Ok(())
    }

    pub fn input_format(&self) -> Result<InputFormat> {
        self.format
            .or_else(|| detect_format(&self.path))
            .context("Could not detect document format. Please specify --format")
    }

    /// `None` when no default was given. A default that is not valid JSON is
    /// taken as a string.
    pub fn default_value(&self) -> Option<Value> {
        self.default.as_deref().map(|raw| {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        })
    }
}

pub fn detect_format(path: &Path) -> Option<InputFormat> {
    path.extension()?.to_str().and_then(|ext| match ext {
        "json" => Some(InputFormat::Json),
        "yaml" | "yml" => Some(InputFormat::Yaml),
        _ => None,
    })
}

pub fn load_document(path: &Path, format: InputFormat) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read document: {}", path.display()))?;

    let document: Value = match format {
        InputFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        InputFormat::Yaml => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
    };
    Ok(document)
}

/// Loads the document and resolves the attributes, returning the rendered
/// value.
pub fn run(args: &Args) -> Result<String> {
    let format = args.input_format()?;
    let document = load_document(&args.path, format)?;
    debug!(path = %args.path.display(), format = format.as_str(), candidates = args.attrs.len(), "probing document");

    let duck = Duck::new(&document);
    let value = match args.default_value() {
        Some(default) => duck.attr_or(&args.attrs, default)?,
        None => duck.attr(&args.attrs)?,
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
        }
    }
}
