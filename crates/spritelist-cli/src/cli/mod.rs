//! CLI for spritelist.

mod generate;

use anyhow::{Context, Result};
use clap::Parser;
use spritelist_core::config::{self, SpritelistConfig};
use spritelist_core::render::{OutputFormat, DEFAULT_ARRAY_NAME};
use spritelist_core::sprite::{SpriteStyle, SpriteTemplate};
use std::path::PathBuf;

pub use generate::run_generate;

/// Input document used when neither flag nor config names one.
const DEFAULT_INPUT: &str = "api.json";

/// Print sprite image URLs for every record of a PokeAPI list document.
#[derive(Debug, Parser)]
#[command(name = "spritelist")]
#[command(about = "Generate a sprite URL array from a PokeAPI list document", long_about = None)]
pub struct Cli {
    /// Path to the list document [default: api.json].
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Built-in sprite source: official-artwork, home or default.
    #[arg(long, value_name = "STYLE")]
    pub sprite: Option<SpriteStyle>,

    /// Custom image URL template containing {id}. Overrides --sprite.
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Output format: java, lines or manifest.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Array variable name for the java format [default: imageEntries].
    #[arg(long, value_name = "NAME")]
    pub array_name: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub template: SpriteTemplate,
    pub format: OutputFormat,
    pub array_name: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let opts = cli.resolve(cfg)?;

        let stdout = std::io::stdout();
        run_generate(&opts, &mut stdout.lock())
    }

    /// Merges flags over `cfg` over built-in defaults.
    pub fn resolve(self, cfg: SpritelistConfig) -> Result<Options> {
        let template = match (self.template, self.sprite, cfg.template) {
            (Some(custom), _, _) => {
                SpriteTemplate::new(custom).context("invalid --template")?
            }
            (None, Some(style), _) => style.template(),
            (None, None, Some(custom)) => {
                SpriteTemplate::new(custom).context("invalid template in config")?
            }
            (None, None, None) => cfg.sprite.unwrap_or_default().template(),
        };

        Ok(Options {
            input: self
                .input
                .or(cfg.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            template,
            format: self.format.or(cfg.format).unwrap_or_default(),
            array_name: self
                .array_name
                .or(cfg.array_name)
                .unwrap_or_else(|| DEFAULT_ARRAY_NAME.to_string()),
        })
    }
}
