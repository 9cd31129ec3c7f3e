//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod command;
pub mod diff;
pub mod document;
pub mod fields;
pub mod generate;
pub mod interactive;
pub mod overrides;

pub use command::{execute_command, CommandOptions};
pub use diff::{execute_diff, render_diff, DiffOptions};
pub use document::{execute_document, DocumentOptions};
pub use fields::{execute_fields, FieldInfo, FieldsOptions};
pub use generate::{execute_generate, GenerateOptions, GeneratedOutput};
pub use interactive::{execute_interactive, InteractiveOptions};
pub use overrides::ConfigOverrides;
