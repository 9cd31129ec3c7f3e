//! @acp:module "Section Builders"
//! @acp:summary "One pure builder per workflow phase"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Each builder reads only the configuration it is given and returns a
//! fully rendered [`Section`]. Conditional content that does not apply is
//! omitted, never emitted as an empty line.

pub mod architecture;
pub mod completion;
pub mod methodology;
pub mod pseudocode;
pub mod refinement;
pub mod research;
pub mod specification;
pub mod success;

use crate::config::Configuration;
use crate::document::body::Body;
use crate::document::types::{Phase, Section};

/// Build the section for one phase
pub fn build_section(phase: Phase, config: &Configuration) -> Section {
    match phase {
        Phase::Research => research::build(config),
        Phase::Specification => specification::build(config),
        Phase::Pseudocode => pseudocode::build(config),
        Phase::Architecture => architecture::build(config),
        Phase::Refinement => refinement::build(config),
        Phase::Completion => completion::build(config),
        Phase::Methodology => methodology::build(config),
        Phase::SuccessCriteria => success::build(config),
    }
}

fn section(phase: Phase, title: impl Into<String>, body: &Body) -> Section {
    Section {
        id: phase.id().to_string(),
        title: title.into(),
        body: body.render(),
    }
}

/// "Parallel" or "Sequential", as used in several headings
fn execution_label(config: &Configuration) -> &'static str {
    if config.parallel_execution {
        "Parallel"
    } else {
        "Sequential"
    }
}
