pub mod completions;
pub mod generate;
pub mod palette;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::emit::Language;
use crate::error::Result;
use crate::types::AssetFormat;

/// dotgen - Tray status icon generator
#[derive(Parser, Debug)]
#[command(name = "dotgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only report errors on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the icon source document (default)
    Generate(generate::GenerateArgs),

    /// Decode generated icons and check them against the palette
    Validate(validate::ValidateArgs),

    /// Print the state palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(generate::GenerateArgs::default())
    }
}

/// Generator settings shared by `generate` and `validate`.
#[derive(Args, Debug, Default, Clone)]
pub struct GeneratorArgs {
    /// Config file (default: dotgen.yaml in the current directory, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Formats to encode (repeatable or comma separated)
    #[arg(long = "format", value_enum, value_delimiter = ',')]
    pub formats: Vec<AssetFormat>,

    /// Language of the generated document
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Package name for Go output
    #[arg(long)]
    pub package: Option<String>,

    /// Canvas edge length in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Gap between circle and canvas edge in pixels
    #[arg(long)]
    pub margin: Option<u32>,

    /// Edge length of the secondary ICO entry
    #[arg(long)]
    pub small_size: Option<u32>,

    /// Also emit state lookup functions
    #[arg(long)]
    pub lookup: bool,
}

impl GeneratorArgs {
    /// Flags as a config layer; unset flags stay `None`.
    pub fn to_config(&self) -> Config {
        Config {
            size: self.size,
            margin: self.margin,
            small_size: self.small_size,
            formats: (!self.formats.is_empty()).then(|| self.formats.clone()),
            language: self.lang,
            package: self.package.clone(),
            lookup: self.lookup.then_some(true),
            output: None,
        }
    }

    /// Load the config file and overlay the flags on top of it.
    pub fn resolve(&self) -> Result<Config> {
        let base = Config::discover(self.config.as_deref(), std::path::Path::new("."))?;
        Ok(base.overlay(self.to_config()))
    }
}
