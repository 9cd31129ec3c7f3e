//! @acp:module "Completion Section"
//! @acp:summary "System integration, documentation and production readiness"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::Configuration;
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::section;

pub fn build(config: &Configuration) -> Section {
    let commits = config.commits_enabled();
    let mut body = Body::new();

    body.heading(format!(
        "Final Integration & Deployment for {}:",
        config.development_mode
    ))
    .group("System Integration")
    .bullet("Integrate all development tracks")
    .bullet_if(!config.skip_tests, "Run comprehensive end-to-end tests")
    .bullet("Validate against original requirements")
    .bullet_commit_if(
        commits,
        CommitType::Feat,
        "complete system integration with full validation",
    );

    body.group("Documentation & Deployment")
        .bullet_if(
            config.has_backend(),
            "Generate comprehensive API documentation",
        )
        .bullet("Create deployment guides and runbooks")
        .bullet("Setup monitoring and alerting")
        .bullet_commit_if(
            commits,
            CommitType::Docs,
            "complete documentation and deployment preparation",
        );

    body.group("Production Readiness")
        .bullet("Execute production deployment checklist")
        .bullet("Validate monitoring and observability")
        .bullet("Conduct final security review")
        .bullet_commit_if(
            commits,
            CommitType::Deploy,
            "production-ready release with full monitoring and security validation",
        );

    section(Phase::Completion, "COMPLETION PHASE", &body)
}
