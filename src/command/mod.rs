//! @acp:module "Command Composer"
//! @acp:summary "Derive the claude-sparc.sh invocation from the configuration"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Only options that differ from their defaults appear. Flags come first in a
//! fixed order, followed by the positional project name and research
//! document. Values are joined verbatim; nothing is quoted or escaped.

use crate::config::{
    CommitFrequency, Configuration, DevelopmentMode, OutputFormat, ResearchDepth,
    DEFAULT_COVERAGE_TARGET, DEFAULT_PROJECT_NAME, DEFAULT_README_PATH,
};

/// Program token every command starts with
pub const PROGRAM: &str = "./claude-sparc.sh";

/// Build the command as a token list
pub fn compose_command_tokens(config: &Configuration) -> Vec<String> {
    let mut tokens = vec![PROGRAM.to_string()];

    let switches = [
        (config.verbose, "--verbose"),
        (config.dry_run, "--dry-run"),
        (config.skip_research, "--skip-research"),
        (config.skip_tests, "--skip-tests"),
        (!config.parallel_execution, "--no-parallel"),
    ];
    tokens.extend(
        switches
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, flag)| flag.to_string()),
    );

    let mut option = |flag: &str, value: String| {
        tokens.push(flag.to_string());
        tokens.push(value);
    };
    if config.development_mode != DevelopmentMode::Full {
        option("--mode", config.development_mode.to_string());
    }
    if config.research_depth != ResearchDepth::Standard {
        option("--research-depth", config.research_depth.to_string());
    }
    if config.coverage_target != DEFAULT_COVERAGE_TARGET {
        option("--coverage", config.coverage_target.to_string());
    }
    if config.commit_frequency != CommitFrequency::Phase {
        option("--commit-freq", config.commit_frequency.to_string());
    }
    if config.output_format != OutputFormat::Text {
        option("--output", config.output_format.to_string());
    }

    for (value, default) in [
        (&config.project_name, DEFAULT_PROJECT_NAME),
        (&config.readme_path, DEFAULT_README_PATH),
    ] {
        if value != default {
            tokens.push(value.clone());
        }
    }

    tokens
}

/// Build the single-line command
pub fn compose_command(config: &Configuration) -> String {
    compose_command_tokens(config).join(" ")
}
