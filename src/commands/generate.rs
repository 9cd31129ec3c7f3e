//! @acp:module "Generate Command"
//! @acp:summary "Produce both artifacts, optionally exporting the prompt to a file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use super::overrides::ConfigOverrides;
use crate::config::Configuration;
use crate::document::Section;
use crate::generator::SparcGenerator;

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub overrides: ConfigOverrides,
    /// Output as JSON
    pub json: bool,
    /// Write the prompt text to this file instead of stdout
    pub out: Option<PathBuf>,
}

/// Both artifacts plus the configuration they came from
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedOutput {
    pub config: Configuration,
    pub command: String,
    pub sections: Vec<Section>,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let generator = SparcGenerator::from_config(options.overrides.resolve()?);
    print_artifacts(&generator, options.json, options.out.as_deref())
}

pub(crate) fn print_artifacts(
    generator: &SparcGenerator,
    json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let command = generator.current_command();

    if json {
        let output = GeneratedOutput {
            config: generator.current_config().clone(),
            command,
            sections: generator.current_document(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let prompt = generator.current_document_text();
    println!("{}", style("Command:").bold());
    println!("{}", command);

    match out {
        Some(path) => {
            std::fs::write(path, format!("{}\n", prompt))
                .with_context(|| format!("Failed to write prompt to {:?}", path))?;
            println!(
                "\n{} Prompt written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => {
            println!("\n{}", style("Prompt:").bold());
            println!("{}", prompt);
        }
    }

    Ok(())
}
