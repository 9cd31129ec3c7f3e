//! @acp:module "Generator"
//! @acp:summary "Collaborator-facing API: update options, read both artifacts"
//! @acp:domain cli
//! @acp:layer api

use crate::command::compose_command;
use crate::config::Configuration;
use crate::document::{compose_document, Document, Section};
use crate::error::Result;

/// Owns the one live configuration and derives artifacts from it on demand.
///
/// Nothing is cached: each `current_*` call recomputes from the current
/// configuration, so artifacts can never be stale.
#[derive(Debug, Clone, Default)]
pub struct SparcGenerator {
    config: Configuration,
}

impl SparcGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Configuration) -> Self {
        Self { config }
    }

    /// Update one field. On error the previous configuration is kept.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.config.set_field(name, value)
    }

    pub fn current_config(&self) -> &Configuration {
        &self.config
    }

    pub fn current_command(&self) -> String {
        compose_command(&self.config)
    }

    pub fn current_document(&self) -> Vec<Section> {
        compose_document(&self.config)
    }

    /// Full prompt text with header and section headings
    pub fn current_document_text(&self) -> String {
        Document::compose(&self.config).to_text()
    }

    pub fn into_config(self) -> Configuration {
        self.config
    }
}
