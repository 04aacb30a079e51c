//! Generate command implementation.
//!
//! Renders every palette state, encodes it and writes the generated
//! source document to stdout or a file in one write.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{DotgenError, Result};
use crate::generate::generate_assets;
use crate::output::{display_path, plural, Printer};
use crate::types::Palette;

use super::GeneratorArgs;

/// Generate the icon source document
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.generator.resolve()?.overlay(Config {
        output: args.output,
        ..Config::default()
    });

    let palette = Palette::tray_states();
    let options = config.generator_options();
    let emitter = config.emitter()?;

    let assets = generate_assets(&palette, &options)?;
    for asset in &assets {
        printer.asset(asset);
    }

    let document = emitter.emit(&assets);

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DotgenError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, &document).map_err(|e| DotgenError::Io {
                path: path.clone(),
                message: format!("Failed to write document: {}", e),
            })?;
            printer.status("Wrote", &display_path(path));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    printer.status("Finished", &plural(assets.len(), "asset", "assets"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{parse_document, Language};
    use crate::types::AssetFormat;
    use tempfile::tempdir;

    #[test]
    fn test_generate_to_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("icon").join("icon_data.go");
        let config_path = dir.path().join("dotgen.yaml");
        fs::write(&config_path, "language: go\nformats: [ico, png]\n").unwrap();
        let args = GenerateArgs {
            generator: GeneratorArgs {
                config: Some(config_path),
                ..GeneratorArgs::default()
            },
            output: Some(output.clone()),
        };
        run(args, &Printer::plain()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("package icon\n"));
        let arrays = parse_document(&text).unwrap();
        assert_eq!(arrays.len(), 12);
        assert_eq!(arrays[0].0, "DataIdleICO");
        assert_eq!(arrays[6].0, "DataIdlePNG");
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("dotgen.yaml");
        fs::write(&config_path, "language: go\nformats: [png]\n").unwrap();
        let output = dir.path().join("icons.rs");

        let args = GenerateArgs {
            generator: GeneratorArgs {
                config: Some(config_path),
                lang: Some(Language::Rust),
                formats: vec![AssetFormat::Ico],
                ..GeneratorArgs::default()
            },
            output: Some(output.clone()),
        };
        run(args, &Printer::plain()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("pub static DataIdle: &[u8] = &["));
        assert!(!text.contains("PNG"));
    }

    #[test]
    fn test_invalid_options_write_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("icons.rs");

        let args = GenerateArgs {
            generator: GeneratorArgs {
                config: Some(dir.path().join("none.yaml")),
                ..GeneratorArgs::default()
            },
            output: Some(output.clone()),
        };
        // An explicit config path must exist
        assert!(run(args, &Printer::plain()).is_err());
        assert!(!output.exists());

        let config_path = dir.path().join("dotgen.yaml");
        fs::write(&config_path, "size: 300\n").unwrap();
        let args = GenerateArgs {
            generator: GeneratorArgs {
                config: Some(config_path),
                ..GeneratorArgs::default()
            },
            output: Some(output.clone()),
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, DotgenError::Config { .. }));
        assert!(!output.exists());

        let args = GenerateArgs {
            generator: GeneratorArgs {
                config: Some(dir.path().join("dotgen.yaml")),
                size: Some(32),
                lang: Some(Language::Go),
                package: Some("foo-bar".to_string()),
                ..GeneratorArgs::default()
            },
            output: Some(output.clone()),
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, DotgenError::Config { .. }));
        assert!(!output.exists());
    }
}
