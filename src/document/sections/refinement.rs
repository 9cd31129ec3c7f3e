//! @acp:module "Refinement Section"
//! @acp:summary "Development tracks with TDD or plain implementation steps"
//! @acp:domain cli
//! @acp:layer logic
//!
//! The most option-sensitive phase. Backend and frontend tracks follow the
//! development mode, each step list switches between red/green/refactor and
//! plain implementation wording on `skip_tests`, tool names switch on
//! `parallel_execution`, and every commit line disappears under manual
//! commits.

use crate::config::Configuration;
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::{execution_label, section};

/// Three steps plus commit summary, in TDD and non-TDD wording
struct Steps {
    tdd: [&'static str; 3],
    plain: [&'static str; 3],
    tdd_outcome: &'static str,
    plain_outcome: &'static str,
}

const API_LAYER: Steps = Steps {
    tdd: [
        "Red: Write API contract tests",
        "Green: Implement API endpoints",
        "Refactor: Optimize API performance",
    ],
    plain: [
        "Implement API endpoints",
        "Add input validation and error handling",
        "Optimize API performance",
    ],
    tdd_outcome: "comprehensive test coverage",
    plain_outcome: "validation and error handling",
};

const UI_COMPONENTS: Steps = Steps {
    tdd: [
        "Red: Write component tests",
        "Green: Implement UI components",
        "Refactor: Optimize for reusability",
    ],
    plain: [
        "Implement UI components",
        "Add component styling and interactions",
        "Optimize for reusability and performance",
    ],
    tdd_outcome: "full test coverage",
    plain_outcome: "optimized components",
};

const APP_LOGIC: Steps = Steps {
    tdd: [
        "Red: Write application flow tests",
        "Green: Implement user interactions",
        "Refactor: Optimize user experience",
    ],
    plain: [
        "Implement user interactions",
        "Add state management and routing",
        "Optimize user experience and performance",
    ],
    tdd_outcome: "end-to-end tests",
    plain_outcome: "optimized user experience",
};

impl Steps {
    fn write(&self, body: &mut Body, config: &Configuration, commit_prefix: &str) {
        let (steps, outcome) = if config.skip_tests {
            (&self.plain, self.plain_outcome)
        } else {
            (&self.tdd, self.tdd_outcome)
        };
        for step in steps {
            body.bullet(*step);
        }
        body.bullet_commit_if(
            config.commits_enabled(),
            CommitType::Feat,
            format!("{} {}", commit_prefix, outcome),
        );
    }
}

pub fn build(config: &Configuration) -> Section {
    let commits = config.commits_enabled();
    let parallel = config.parallel_execution;
    let label = execution_label(config);

    let mut body = Body::new();
    body.heading(format!(
        "{} Development Tracks for {}:",
        label, config.development_mode
    ));

    if config.has_backend() {
        backend_track(&mut body, config);
    }
    if config.has_frontend() {
        frontend_track(&mut body, config);
    }

    body.track("Integration & Quality Assurance")
        .group("Integration Testing")
        .bullet(if parallel {
            "BatchTool: Run parallel integration test suites"
        } else {
            "Bash: Run integration test suites"
        })
        .bullet("Bash: Execute performance benchmarks")
        .bullet("Bash: Run security scans and audits")
        .bullet_commit_if(
            commits,
            CommitType::Test,
            "complete integration testing with performance and security validation",
        );

    body.group("Quality Gates")
        .bullet(if parallel {
            "BatchTool: Run parallel quality checks (linting, analysis, documentation)"
        } else {
            "Bash: Run comprehensive linting and code quality analysis"
        })
        .bullet("Bash: Validate documentation completeness")
        .bullet_commit_if(
            commits,
            CommitType::Quality,
            "pass all quality gates - linting, analysis, and documentation",
        );

    body.heading(format!("{} Subtask Orchestration:", label))
        .line(if parallel {
            "Use BatchTool to execute independent development tracks in parallel where possible."
        } else {
            "Execute development tracks sequentially for thorough validation."
        });

    section(Phase::Refinement, "REFINEMENT PHASE (TDD Implementation)", &body)
}

fn backend_track(body: &mut Body, config: &Configuration) {
    let commits = config.commits_enabled();

    body.track("Backend Development")
        .group("Setup & Infrastructure")
        .bullet("Bash: Initialize project structure")
        .bullet("Bash: Setup development environment")
        .bullet("Bash: Configure CI/CD pipeline")
        .bullet_commit_if(
            commits,
            CommitType::Feat,
            "initialize backend infrastructure and development environment",
        );

    if !config.skip_tests {
        body.group("TDD Core Components (London School)")
            .bullet("Red: Write failing tests for core business logic")
            .bullet("Green: Implement minimal code to pass tests")
            .bullet("Refactor: Optimize while maintaining green tests")
            .bullet(format!("Target: {}% coverage", config.coverage_target))
            .bullet_commit_if(
                commits,
                CommitType::Feat,
                format!(
                    "implement core business logic with TDD - {}% test coverage",
                    config.coverage_target
                ),
            );
    }

    body.group("API Layer Development");
    API_LAYER.write(body, config, "complete API layer with");
}

fn frontend_track(body: &mut Body, config: &Configuration) {
    body.track("Frontend Development").group("UI Component Library");
    UI_COMPONENTS.write(body, config, "complete UI component library with");

    body.group("Application Logic");
    APP_LOGIC.write(body, config, "complete frontend application logic with");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body_with(updates: &[(&str, &str)]) -> String {
        let mut config = Configuration::default();
        for (name, value) in updates {
            config.set_field(name, value).unwrap();
        }
        build(&config).body
    }

    #[test]
    fn test_full_mode_has_all_tracks() {
        let body = body_with(&[]);
        assert!(body.starts_with("### Parallel Development Tracks for full:"));
        assert!(body.contains("#### Track 1: Backend Development"));
        assert!(body.contains("#### Track 2: Frontend Development"));
        assert!(body.contains("#### Track 3: Integration & Quality Assurance"));
        assert!(body.contains("   - Target: 100% coverage"));
        assert!(body.contains("'feat: implement core business logic with TDD - 100% test coverage'"));
    }

    #[test]
    fn test_api_only_has_backend_without_frontend() {
        let body = body_with(&[("developmentMode", "api-only")]);
        assert!(body.contains("Backend Development"));
        assert!(!body.contains("Frontend Development"));
        assert!(body.contains("#### Track 2: Integration & Quality Assurance"));
    }

    #[test]
    fn test_frontend_only_has_frontend_without_backend() {
        let body = body_with(&[("developmentMode", "frontend-only")]);
        assert!(!body.contains("Backend Development"));
        assert!(body.contains("#### Track 1: Frontend Development"));
    }

    #[test]
    fn test_skip_tests_switches_wording() {
        let body = body_with(&[("skipTests", "true")]);
        assert!(!body.contains("TDD Core Components"));
        assert!(!body.contains("Red:"));
        assert!(!body.contains("coverage"));
        assert!(body.contains("1. **Setup & Infrastructure**:"));
        assert!(body.contains("2. **API Layer Development**:"));
        assert!(body.contains("   - Add input validation and error handling"));
        assert!(body.contains("'feat: complete API layer with validation and error handling'"));
        assert!(body.contains("'feat: complete UI component library with optimized components'"));
    }

    #[test]
    fn test_sequential_tools() {
        let body = body_with(&[("parallelExecution", "false")]);
        assert!(body.starts_with("### Sequential Development Tracks"));
        assert!(body.contains("   - Bash: Run integration test suites"));
        assert!(body.contains("### Sequential Subtask Orchestration:"));
        assert!(!body.contains("BatchTool"));
    }

    #[test]
    fn test_manual_commits_only_remove_commit_lines() {
        let with_commits = body_with(&[]);
        let manual = body_with(&[("commitFrequency", "manual")]);
        assert!(!manual.contains("**Commit**"));

        let expected: Vec<&str> = with_commits
            .lines()
            .filter(|line| !line.contains("**Commit**"))
            .collect();
        assert_eq!(manual.lines().collect::<Vec<_>>(), expected);
    }
}
