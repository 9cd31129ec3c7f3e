//! @acp:module "Methodology Section"
//! @acp:summary "Cross-cutting quality, tooling, commit and execution standards"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::{CommitFrequency, Configuration};
use crate::document::body::Body;
use crate::document::types::{Phase, Section};

use super::{execution_label, section};

const PARALLEL_STRATEGY: [&str; 4] = [
    "Use BatchTool for independent operations",
    "Leverage dispatch_agent for complex subtasks",
    "Implement concurrent development tracks",
    "Optimize for maximum development velocity",
];

const SEQUENTIAL_STRATEGY: [&str; 4] = [
    "Execute operations sequentially for thorough validation",
    "Focus on quality over speed",
    "Ensure each step is fully validated before proceeding",
    "Maintain clear development progression",
];

pub fn build(config: &Configuration) -> Section {
    let tests = !config.skip_tests;
    let parallel = config.parallel_execution;
    let mut body = Body::new();

    body.heading("Quality Standards:")
        .line("- **Modularity**: All files ≤ 500 lines, functions ≤ 50 lines")
        .line("- **Security**: No hardcoded secrets, comprehensive input validation")
        .line_if(
            tests,
            format!(
                "- **Testing**: {}% test coverage with TDD London School approach",
                config.coverage_target
            ),
        )
        .line("- **Documentation**: Self-documenting code with strategic comments")
        .line("- **Performance**: Optimized critical paths with benchmarking");

    body.heading("Tool Utilization Strategy:")
        .line_if(
            !config.skip_research,
            "- **WebFetchTool**: Comprehensive research and documentation gathering",
        )
        .line_if(
            parallel,
            "- **BatchTool**: Parallel research, testing, and quality checks",
        )
        .line("- **Bash**: Git operations, CI/CD, testing, and deployment")
        .line("- **Edit/Replace**: Code implementation and refactoring")
        .line("- **GlobTool/GrepTool**: Code analysis and pattern detection")
        .line_if(parallel, "- **dispatch_agent**: Complex subtask delegation");

    body.heading(format!(
        "Commit Standards (Frequency: {}):",
        config.commit_frequency
    ))
    .line("- **feat**: New features and major functionality")
    .line_if(tests, "- **test**: Test implementation and coverage improvements")
    .line("- **fix**: Bug fixes and issue resolution")
    .line("- **docs**: Documentation updates and improvements")
    .line("- **arch**: Architectural changes and design updates")
    .line("- **quality**: Code quality improvements and refactoring")
    .line("- **deploy**: Deployment and infrastructure changes");

    body.heading(format!("{} Execution Strategy:", execution_label(config)));
    let strategy = if parallel {
        PARALLEL_STRATEGY
    } else {
        SEQUENTIAL_STRATEGY
    };
    for step in strategy {
        body.step(step);
    }

    let cadence = match config.commit_frequency {
        CommitFrequency::Phase => "major phase",
        _ => "feature",
    };
    body.heading("Continuous Integration:")
        .line_if(
            config.commits_enabled(),
            format!("- Commit after each {} completion", cadence),
        )
        .line_if(tests, "- Run automated tests on every commit")
        .line("- Validate quality gates continuously")
        .line("- Monitor performance and security metrics");

    section(Phase::Methodology, "SPARC METHODOLOGY ENFORCEMENT", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with(updates: &[(&str, &str)]) -> String {
        let mut config = Configuration::default();
        for (name, value) in updates {
            config.set_field(name, value).unwrap();
        }
        build(&config).body
    }

    #[test]
    fn test_default_body() {
        let body = body_with(&[]);
        assert!(body.contains("- **Testing**: 100% test coverage with TDD London School approach"));
        assert!(body.contains("- **WebFetchTool**"));
        assert!(body.contains("### Parallel Execution Strategy:\n1. Use BatchTool"));
        assert!(body.contains("4. Optimize for maximum development velocity"));
        assert!(body.contains("### Commit Standards (Frequency: phase):"));
        assert!(body.contains("- Commit after each major phase completion"));
        assert!(body.contains("- Run automated tests on every commit"));
    }

    #[test]
    fn test_sequential_strategy() {
        let body = body_with(&[("parallelExecution", "false")]);
        assert!(body.contains("### Sequential Execution Strategy:"));
        assert!(body.contains("2. Focus on quality over speed"));
        assert!(!body.contains("BatchTool"));
        assert!(!body.contains("dispatch_agent"));
    }

    #[test]
    fn test_independent_ci_lines() {
        let body = body_with(&[("commitFrequency", "feature")]);
        assert!(body.contains("- Commit after each feature completion"));

        let body = body_with(&[("commitFrequency", "manual")]);
        assert!(!body.contains("- Commit after each"));
        assert!(body.contains("- Run automated tests on every commit"));

        let body = body_with(&[("skipTests", "true")]);
        assert!(body.contains("- Commit after each major phase completion"));
        assert!(!body.contains("- Run automated tests"));
        assert!(!body.contains("- **test**:"));
        assert!(!body.contains("coverage"));
    }

    #[test]
    fn test_skip_research_drops_web_fetch() {
        let body = body_with(&[("skipResearch", "true")]);
        assert!(!body.contains("WebFetchTool"));
    }
}
