#![forbid(unsafe_code)]

//! @acp:module "SPARC Library"
//! @acp:summary "Deterministic claude-sparc.sh commands and SPARC workflow prompts"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # SPARC Generator
//!
//! Turns a handful of options into two artifacts: the `claude-sparc.sh`
//! invocation that encodes them, and the multi-phase SPARC prompt
//! (Specification, Pseudocode, Architecture, Refinement, Completion) whose
//! sections change with the same options.
//!
//! Both artifacts are pure functions of a [`Configuration`] and are
//! recomputed in full on every request.
//!
//! ## Example
//!
//! ```rust
//! use sparc::SparcGenerator;
//!
//! let mut generator = SparcGenerator::new();
//! generator.set_field("coverageTarget", "80")?;
//! assert_eq!(generator.current_command(), "./claude-sparc.sh --coverage 80");
//!
//! let sections = generator.current_document();
//! assert_eq!(sections.len(), 8);
//! # Ok::<(), sparc::SparcError>(())
//! ```

pub mod command;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;

// Re-exports
pub use command::{compose_command, compose_command_tokens, PROGRAM};
pub use config::{
    load_preset, CommitFrequency, ConfigField, Configuration, DevelopmentMode, FieldKind,
    OutputFormat, ResearchDepth,
};
pub use document::{compose_document, CommitType, Document, Phase, Section};
pub use error::{Result, SparcError};
pub use generator::SparcGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
