//! @acp:module "Document Command"
//! @acp:summary "Print the SPARC workflow prompt, whole or by section"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::{anyhow, Result};

use super::overrides::ConfigOverrides;
use crate::document::{Document, Phase};

/// Options for the document command
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub overrides: ConfigOverrides,
    /// Only print these section ids
    pub sections: Vec<String>,
    /// Output sections as JSON
    pub json: bool,
}

/// Execute the document command
pub fn execute_document(options: DocumentOptions) -> Result<()> {
    let config = options.overrides.resolve()?;
    let mut document = Document::compose(&config);

    if !options.sections.is_empty() {
        let wanted = options
            .sections
            .iter()
            .map(|id| Phase::from_id(id).ok_or_else(|| anyhow!("Unknown section: {}", id)))
            .collect::<Result<Vec<_>>>()?;
        document
            .sections
            .retain(|section| section.phase().is_some_and(|p| wanted.contains(&p)));
        if document.sections.is_empty() {
            tracing::warn!("None of the requested sections are part of this document");
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&document.sections)?);
    } else if options.sections.is_empty() {
        println!("{}", document.to_text());
    } else {
        let texts: Vec<String> = document.sections.iter().map(|s| s.to_text()).collect();
        println!("{}", texts.join("\n\n"));
    }

    Ok(())
}
