//! @acp:module "Interactive Command"
//! @acp:summary "Prompt for every option, then print both artifacts"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Terminal stand-in for the option form. Every answer goes through
//! `set_field`, the same validation path as `--set`.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::generate::print_artifacts;
use super::overrides::ConfigOverrides;
use crate::config::{ConfigField, FieldKind, MAX_COVERAGE_TARGET};
use crate::generator::SparcGenerator;

/// Options for the interactive command
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    pub overrides: ConfigOverrides,
    pub json: bool,
}

/// Execute the interactive command
pub fn execute_interactive(options: InteractiveOptions) -> Result<()> {
    let mut generator = SparcGenerator::from_config(options.overrides.resolve()?);
    println!("{} SPARC Generator Setup\n", style("→").cyan());

    for field in ConfigField::ALL {
        let current = generator.current_config().get(field);
        let answer = ask(field, &current)?;
        generator
            .set_field(field.name(), &answer)
            .with_context(|| format!("Invalid answer for {}", field))?;
    }

    println!();
    print_artifacts(&generator, options.json, None)
}

fn ask(field: ConfigField, current: &str) -> Result<String> {
    let theme = ColorfulTheme::default();
    let prompt = field.description();

    let answer = match field.kind() {
        FieldKind::Text => Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text()?,
        FieldKind::Flag => Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(current == "true")
            .interact()?
            .to_string(),
        FieldKind::Percent => Input::<u8>::with_theme(&theme)
            .with_prompt(prompt)
            .default(current.parse().unwrap_or(MAX_COVERAGE_TARGET))
            .validate_with(|value: &u8| {
                if *value <= MAX_COVERAGE_TARGET {
                    Ok(())
                } else {
                    Err(format!("Must be between 0 and {}", MAX_COVERAGE_TARGET))
                }
            })
            .interact_text()?
            .to_string(),
        FieldKind::Choice(options) => {
            let selected = options.iter().position(|o| *o == current).unwrap_or(0);
            let index = Select::with_theme(&theme)
                .with_prompt(prompt)
                .items(options)
                .default(selected)
                .interact()?;
            options[index].to_string()
        }
    };

    Ok(answer)
}
