//! @acp:module "Pseudocode Section"
//! @acp:summary "High-level architecture, algorithms and test strategy"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::{Configuration, DevelopmentMode};
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::section;

pub fn build(config: &Configuration) -> Section {
    let mode = config.development_mode;
    let mut body = Body::new();

    body.heading(format!("High-Level Architecture Design for {}:", mode))
        .group("System Architecture")
        .bullet_if(
            matches!(mode, DevelopmentMode::Full | DevelopmentMode::BackendOnly),
            "Define backend components and their responsibilities",
        )
        .bullet_if(
            config.has_frontend(),
            "Design frontend architecture and component hierarchy",
        )
        .bullet_if(
            mode == DevelopmentMode::ApiOnly,
            "Define API architecture and endpoint structure",
        )
        .bullet("Design data flow and communication patterns")
        .bullet("Specify APIs and integration points")
        .bullet("Plan error handling and recovery strategies");

    body.group("Algorithm Design")
        .bullet("Core business logic algorithms")
        .bullet("Data processing and transformation logic")
        .bullet("Optimization strategies and performance considerations")
        .bullet("Security and validation algorithms");

    if !config.skip_tests {
        body.group("Test Strategy")
            .bullet("Unit testing approach (TDD London School)")
            .bullet("Integration testing strategy")
            .bullet("End-to-end testing scenarios")
            .bullet(format!("Target: {}% test coverage", config.coverage_target))
            .bullet_if(
                mode == DevelopmentMode::Full,
                "Frontend and backend testing coordination",
            );
    }

    body.commit_if(
        config.commits_per_phase(),
        CommitType::Arch,
        format!(
            "complete pseudocode phase - defined system architecture, algorithms, and test strategy for {}",
            mode
        ),
    );

    section(Phase::Pseudocode, "PSEUDOCODE PHASE", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_strategy_mentions_coverage() {
        let config = Configuration::default()
            .with_field("coverageTarget", "85")
            .unwrap();
        let body = build(&config).body;
        assert!(body.contains("3. **Test Strategy**:"));
        assert!(body.contains("Target: 85% test coverage"));
        assert!(body.contains("Frontend and backend testing coordination"));
    }

    #[test]
    fn test_skip_tests_drops_strategy() {
        let config = Configuration::default()
            .with_field("skipTests", "true")
            .unwrap();
        let body = build(&config).body;
        assert!(!body.contains("Test Strategy"));
        assert!(!body.contains("coverage"));
    }

    #[test]
    fn test_architecture_bullets_per_mode() {
        let config = Configuration::default()
            .with_field("developmentMode", "api-only")
            .unwrap();
        let body = build(&config).body;
        assert!(body.contains("Define API architecture and endpoint structure"));
        assert!(!body.contains("Define backend components"));
        assert!(!body.contains("Design frontend architecture"));
        assert!(!body.contains("Frontend and backend testing coordination"));

        let config = Configuration::default()
            .with_field("developmentMode", "backend-only")
            .unwrap();
        let body = build(&config).body;
        assert!(body.contains("Define backend components"));
        assert!(!body.contains("Define API architecture"));
    }
}
