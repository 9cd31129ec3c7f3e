//! @acp:module "Fields Command"
//! @acp:summary "List configurable fields with their types and defaults"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::overrides::ConfigOverrides;
use crate::config::ConfigField;

/// Options for the fields command
#[derive(Debug, Clone, Default)]
pub struct FieldsOptions {
    pub overrides: ConfigOverrides,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: String,
    pub default: String,
    pub current: String,
    pub description: &'static str,
}

/// Execute the fields command
pub fn execute_fields(options: FieldsOptions) -> Result<()> {
    let config = options.overrides.resolve()?;
    let fields: Vec<FieldInfo> = ConfigField::ALL
        .into_iter()
        .map(|field| FieldInfo {
            name: field.name(),
            kind: field.kind().to_string(),
            default: field.default_value(),
            current: config.get(field),
            description: field.description(),
        })
        .collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("Fields ({}):\n", fields.len());
    for info in &fields {
        let marker = if info.current == info.default {
            String::new()
        } else {
            format!(" {}", style(format!("= {}", info.current)).yellow())
        };
        println!(
            "  {:20} {:45} default={}{}",
            style(info.name).bold(),
            info.kind,
            info.default,
            marker
        );
        println!("  {:20} {}", "", style(info.description).dim());
    }

    Ok(())
}
