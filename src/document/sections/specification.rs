//! @acp:module "Specification Section"
//! @acp:summary "Requirements analysis, shaped by development mode"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::Configuration;
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::section;

pub fn build(config: &Configuration) -> Section {
    let mode = config.development_mode;
    let mut body = Body::new();

    body.heading(format!("Requirements Analysis for {} development:", mode))
        .group("Functional Requirements")
        .bullet(format!(
            "Analyze {} to extract core functionality",
            config.readme_path
        ))
        .bullet("Define user stories and acceptance criteria")
        .bullet("Identify system boundaries and interfaces")
        .bullet_if(config.has_backend(), "Specify API endpoints and data models")
        .bullet_if(
            config.has_frontend(),
            "Define user interface requirements and user experience flows",
        );

    body.group("Non-Functional Requirements")
        .bullet("Security and compliance requirements")
        .bullet("Performance benchmarks and SLAs")
        .bullet("Scalability and availability targets")
        .bullet("Maintainability and extensibility goals");

    body.group("Technical Constraints")
        .bullet("Technology stack decisions based on research")
        .bullet("Integration requirements and dependencies")
        .bullet("Deployment and infrastructure constraints")
        .bullet("Budget and timeline considerations");

    body.commit_if(
        config.commits_per_phase(),
        CommitType::Docs,
        format!(
            "complete specification phase - defined functional/non-functional requirements and technical constraints for {} development",
            mode
        ),
    );

    section(Phase::Specification, "SPECIFICATION PHASE", &body)
}
