//! @acp:module "Architecture Section"
//! @acp:summary "Component, data and infrastructure design"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::Configuration;
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::section;

pub fn build(config: &Configuration) -> Section {
    let mode = config.development_mode;
    let mut body = Body::new();

    body.heading(format!("Detailed System Design for {}:", mode))
        .group("Component Architecture")
        .bullet("Detailed component specifications")
        .bullet("Interface definitions and contracts")
        .bullet("Dependency injection and inversion of control")
        .bullet("Configuration management strategy");

    if config.has_backend() {
        body.group("Data Architecture")
            .bullet("Database schema design")
            .bullet("Data access patterns and repositories")
            .bullet("Caching strategies and data flow")
            .bullet("Backup and recovery procedures");
    }

    body.group("Infrastructure Architecture")
        .bullet("Deployment architecture and environments")
        .bullet("CI/CD pipeline design")
        .bullet("Monitoring and logging architecture")
        .bullet("Security architecture and access controls");

    body.commit_if(
        config.commits_per_phase(),
        CommitType::Arch,
        format!(
            "complete architecture phase - detailed component, data, and infrastructure design for {}",
            mode
        ),
    );

    section(Phase::Architecture, "ARCHITECTURE PHASE", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_architecture_follows_backend() {
        let body = build(&Configuration::default()).body;
        assert!(body.contains("2. **Data Architecture**:"));
        assert!(body.contains("3. **Infrastructure Architecture**:"));

        let config = Configuration::default()
            .with_field("developmentMode", "frontend-only")
            .unwrap();
        let body = build(&config).body;
        assert!(!body.contains("Data Architecture"));
        assert!(body.contains("2. **Infrastructure Architecture**:"));
    }
}
