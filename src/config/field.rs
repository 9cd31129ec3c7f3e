//! @acp:module "Configuration Fields"
//! @acp:summary "Field names, kinds and allowed values for single-field updates"
//! @acp:domain cli
//! @acp:layer types

use std::fmt;
use std::str::FromStr;

use super::Configuration;
use crate::error::SparcError;

/// One of the twelve generator options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    ProjectName,
    ReadmePath,
    DevelopmentMode,
    SkipTests,
    CoverageTarget,
    ParallelExecution,
    SkipResearch,
    ResearchDepth,
    CommitFrequency,
    OutputFormat,
    Verbose,
    DryRun,
}

/// Value shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Percent,
    Choice(&'static [&'static str]),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Flag => f.write_str("bool"),
            FieldKind::Percent => f.write_str("0-100"),
            FieldKind::Choice(options) => f.write_str(&options.join("|")),
        }
    }
}

const MODES: &[&str] = &["full", "backend-only", "frontend-only", "api-only"];
const DEPTHS: &[&str] = &["basic", "standard", "comprehensive"];
const FREQUENCIES: &[&str] = &["phase", "feature", "manual"];
const FORMATS: &[&str] = &["text", "json", "markdown"];

impl ConfigField {
    /// All fields in form order
    pub const ALL: [ConfigField; 12] = [
        ConfigField::ProjectName,
        ConfigField::ReadmePath,
        ConfigField::DevelopmentMode,
        ConfigField::SkipTests,
        ConfigField::CoverageTarget,
        ConfigField::ParallelExecution,
        ConfigField::SkipResearch,
        ConfigField::ResearchDepth,
        ConfigField::CommitFrequency,
        ConfigField::OutputFormat,
        ConfigField::Verbose,
        ConfigField::DryRun,
    ];

    /// camelCase name, as used in presets
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::ProjectName => "projectName",
            ConfigField::ReadmePath => "readmePath",
            ConfigField::DevelopmentMode => "developmentMode",
            ConfigField::SkipTests => "skipTests",
            ConfigField::CoverageTarget => "coverageTarget",
            ConfigField::ParallelExecution => "parallelExecution",
            ConfigField::SkipResearch => "skipResearch",
            ConfigField::ResearchDepth => "researchDepth",
            ConfigField::CommitFrequency => "commitFrequency",
            ConfigField::OutputFormat => "outputFormat",
            ConfigField::Verbose => "verbose",
            ConfigField::DryRun => "dryRun",
        }
    }

    /// kebab-case name
    pub fn kebab_name(&self) -> &'static str {
        match self {
            ConfigField::ProjectName => "project-name",
            ConfigField::ReadmePath => "readme-path",
            ConfigField::DevelopmentMode => "development-mode",
            ConfigField::SkipTests => "skip-tests",
            ConfigField::CoverageTarget => "coverage-target",
            ConfigField::ParallelExecution => "parallel-execution",
            ConfigField::SkipResearch => "skip-research",
            ConfigField::ResearchDepth => "research-depth",
            ConfigField::CommitFrequency => "commit-frequency",
            ConfigField::OutputFormat => "output-format",
            ConfigField::Verbose => "verbose",
            ConfigField::DryRun => "dry-run",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ConfigField::ProjectName | ConfigField::ReadmePath => FieldKind::Text,
            ConfigField::CoverageTarget => FieldKind::Percent,
            ConfigField::DevelopmentMode => FieldKind::Choice(MODES),
            ConfigField::ResearchDepth => FieldKind::Choice(DEPTHS),
            ConfigField::CommitFrequency => FieldKind::Choice(FREQUENCIES),
            ConfigField::OutputFormat => FieldKind::Choice(FORMATS),
            _ => FieldKind::Flag,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfigField::ProjectName => "Project name passed to the script",
            ConfigField::ReadmePath => "Initial research document",
            ConfigField::DevelopmentMode => "Which parts of the system to build",
            ConfigField::SkipTests => "Skip test-driven development",
            ConfigField::CoverageTarget => "Test coverage target in percent",
            ConfigField::ParallelExecution => "Run independent work in parallel",
            ConfigField::SkipResearch => "Skip the research phase",
            ConfigField::ResearchDepth => "How much web research to do",
            ConfigField::CommitFrequency => "When to commit",
            ConfigField::OutputFormat => "Script output format",
            ConfigField::Verbose => "Verbose script output",
            ConfigField::DryRun => "Show what would run without running it",
        }
    }

    /// Default value in textual form
    pub fn default_value(&self) -> String {
        Configuration::default().get(*self)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = SparcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ConfigField::ALL
            .into_iter()
            .find(|field| field.name() == wanted || field.kebab_name() == wanted)
            .ok_or_else(|| SparcError::UnknownField(s.to_string()))
    }
}
