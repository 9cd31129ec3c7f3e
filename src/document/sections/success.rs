//! @acp:module "Success Criteria Section"
//! @acp:summary "Completion checklist and closing directive"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::{CommitFrequency, Configuration};
use crate::document::body::Body;
use crate::document::types::{Phase, Section};

use super::section;

/// Marker the agent prints when the whole lifecycle is done
pub const COMPLETION_MARKER: &str = "<SPARC-COMPLETE>";

pub fn build(config: &Configuration) -> Section {
    let mut body = Body::new();

    body.line_if(
        !config.skip_tests,
        format!("- ✅ {}% test coverage achieved", config.coverage_target),
    )
    .line("- ✅ All quality gates passed")
    .line("- ✅ Production deployment successful")
    .line("- ✅ Comprehensive documentation complete")
    .line("- ✅ Security and performance validated")
    .line("- ✅ Monitoring and observability operational");

    let mut closing = vec!["Continue development until all success criteria are met.".to_string()];
    if config.parallel_execution {
        closing.push(
            "Use parallel execution and subtask orchestration for maximum efficiency.".to_string(),
        );
    }
    if config.commits_enabled() {
        let unit = match config.commit_frequency {
            CommitFrequency::Phase => "phase",
            _ => "feature",
        };
        closing.push(format!("Commit after each {} with detailed messages.", unit));
    }
    closing.push(format!(
        "Display '{}' when the entire development lifecycle is finished.",
        COMPLETION_MARKER
    ));
    body.paragraph(closing.join(" "));

    section(Phase::SuccessCriteria, "SUCCESS CRITERIA", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_closing() {
        let body = build(&Configuration::default()).body;
        assert!(body.starts_with("- ✅ 100% test coverage achieved\n"));
        assert_eq!(
            body.lines().last().unwrap(),
            "Continue development until all success criteria are met. \
             Use parallel execution and subtask orchestration for maximum efficiency. \
             Commit after each phase with detailed messages. \
             Display '<SPARC-COMPLETE>' when the entire development lifecycle is finished."
        );
    }

    #[test]
    fn test_minimal_closing() {
        let config = Configuration::default()
            .with_field("skipTests", "true")
            .and_then(|c| c.with_field("parallelExecution", "false"))
            .and_then(|c| c.with_field("commitFrequency", "manual"))
            .unwrap();
        let body = build(&config).body;
        assert!(body.starts_with("- ✅ All quality gates passed"));
        assert!(!body.contains("coverage"));
        assert_eq!(
            body.lines().last().unwrap(),
            "Continue development until all success criteria are met. \
             Display '<SPARC-COMPLETE>' when the entire development lifecycle is finished."
        );
    }

    #[test]
    fn test_feature_commits() {
        let config = Configuration::default()
            .with_field("commitFrequency", "feature")
            .unwrap();
        assert!(build(&config)
            .body
            .contains("Commit after each feature with detailed messages."));
    }
}
