//! @acp:module "Configuration"
//! @acp:summary "Generator options, their defaults, and single-field updates"
//! @acp:domain cli
//! @acp:layer config
//!
//! Holds the twelve options that drive both generated artifacts. Updates go
//! through [`Configuration::set_field`], which parses the raw value into its
//! typed form before touching the record, so a rejected update never leaves
//! a partially applied configuration behind.

mod field;
mod loader;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SparcError};

pub use field::{ConfigField, FieldKind};
pub use loader::load_preset;

pub const DEFAULT_PROJECT_NAME: &str = "sparc-project";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_COVERAGE_TARGET: u8 = 100;
pub const MAX_COVERAGE_TARGET: u8 = 100;

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_readme_path() -> String {
    DEFAULT_README_PATH.to_string()
}

fn default_coverage_target() -> u8 {
    DEFAULT_COVERAGE_TARGET
}

fn default_true() -> bool {
    true
}

/// @acp:summary "Current generator options (schema-compliant)"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Project name, emitted as the first positional argument when customized
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Research document path, emitted as the second positional argument when customized
    #[serde(default = "default_readme_path")]
    pub readme_path: String,

    #[serde(default)]
    pub development_mode: DevelopmentMode,

    #[serde(default)]
    pub skip_tests: bool,

    /// Test coverage target in percent (0-100)
    #[serde(default = "default_coverage_target")]
    pub coverage_target: u8,

    #[serde(default = "default_true")]
    pub parallel_execution: bool,

    #[serde(default)]
    pub skip_research: bool,

    #[serde(default)]
    pub research_depth: ResearchDepth,

    #[serde(default)]
    pub commit_frequency: CommitFrequency,

    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub dry_run: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            readme_path: default_readme_path(),
            development_mode: DevelopmentMode::default(),
            skip_tests: false,
            coverage_target: default_coverage_target(),
            parallel_execution: true,
            skip_research: false,
            research_depth: ResearchDepth::default(),
            commit_frequency: CommitFrequency::default(),
            output_format: OutputFormat::default(),
            verbose: false,
            dry_run: false,
        }
    }
}

impl Configuration {
    /// @acp:summary "Update exactly one field from its textual form"
    ///
    /// `name` accepts camelCase (`coverageTarget`) or kebab-case
    /// (`coverage-target`). On error the configuration is unchanged.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        let result = name
            .parse::<ConfigField>()
            .and_then(|field| self.apply(field, value));

        if let Err(ref e) = result {
            tracing::warn!(field = name, value, "Rejected field update: {}", e);
        }
        result
    }

    /// Value-returning form of [`set_field`](Self::set_field).
    pub fn with_field(mut self, name: &str, value: &str) -> Result<Self> {
        self.set_field(name, value)?;
        Ok(self)
    }

    /// Apply a `FIELD=VALUE` assignment as typed on the command line
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| SparcError::InvalidAssignment(assignment.to_string()))?;
        self.set_field(name.trim(), value)
    }

    fn apply(&mut self, field: ConfigField, value: &str) -> Result<()> {
        match field {
            ConfigField::ProjectName => {
                self.project_name = text_or_default(field, value, DEFAULT_PROJECT_NAME)
            }
            ConfigField::ReadmePath => {
                self.readme_path = text_or_default(field, value, DEFAULT_README_PATH)
            }
            ConfigField::DevelopmentMode => self.development_mode = parse_choice(field, value)?,
            ConfigField::SkipTests => self.skip_tests = parse_flag(field, value)?,
            ConfigField::CoverageTarget => self.coverage_target = parse_coverage(value)?,
            ConfigField::ParallelExecution => self.parallel_execution = parse_flag(field, value)?,
            ConfigField::SkipResearch => self.skip_research = parse_flag(field, value)?,
            ConfigField::ResearchDepth => self.research_depth = parse_choice(field, value)?,
            ConfigField::CommitFrequency => self.commit_frequency = parse_choice(field, value)?,
            ConfigField::OutputFormat => self.output_format = parse_choice(field, value)?,
            ConfigField::Verbose => self.verbose = parse_flag(field, value)?,
            ConfigField::DryRun => self.dry_run = parse_flag(field, value)?,
        }

        tracing::debug!(field = field.name(), value = %self.get(field), "Field updated");
        Ok(())
    }

    /// Current value of a field in the same textual form `set_field` accepts
    pub fn get(&self, field: ConfigField) -> String {
        match field {
            ConfigField::ProjectName => self.project_name.clone(),
            ConfigField::ReadmePath => self.readme_path.clone(),
            ConfigField::DevelopmentMode => self.development_mode.to_string(),
            ConfigField::SkipTests => self.skip_tests.to_string(),
            ConfigField::CoverageTarget => self.coverage_target.to_string(),
            ConfigField::ParallelExecution => self.parallel_execution.to_string(),
            ConfigField::SkipResearch => self.skip_research.to_string(),
            ConfigField::ResearchDepth => self.research_depth.to_string(),
            ConfigField::CommitFrequency => self.commit_frequency.to_string(),
            ConfigField::OutputFormat => self.output_format.to_string(),
            ConfigField::Verbose => self.verbose.to_string(),
            ConfigField::DryRun => self.dry_run.to_string(),
        }
    }

    /// Reset blank text fields to their defaults, the same way `set_field` does
    pub fn reset_blank_text(&mut self) {
        self.project_name = text_or_default(
            ConfigField::ProjectName,
            &self.project_name,
            DEFAULT_PROJECT_NAME,
        );
        self.readme_path =
            text_or_default(ConfigField::ReadmePath, &self.readme_path, DEFAULT_README_PATH);
    }

    /// Check constraints serde cannot express (used after loading a preset)
    pub fn validate(&self) -> Result<()> {
        if self.coverage_target > MAX_COVERAGE_TARGET {
            return Err(SparcError::invalid(
                ConfigField::CoverageTarget.name(),
                self.coverage_target.to_string(),
                format!("must be between 0 and {}", MAX_COVERAGE_TARGET),
            ));
        }
        Ok(())
    }

    /// True when the backend-facing parts of the workflow apply
    pub fn has_backend(&self) -> bool {
        matches!(
            self.development_mode,
            DevelopmentMode::Full | DevelopmentMode::BackendOnly | DevelopmentMode::ApiOnly
        )
    }

    /// True when the frontend-facing parts of the workflow apply
    pub fn has_frontend(&self) -> bool {
        matches!(
            self.development_mode,
            DevelopmentMode::Full | DevelopmentMode::FrontendOnly
        )
    }

    pub fn commits_enabled(&self) -> bool {
        self.commit_frequency != CommitFrequency::Manual
    }

    pub fn commits_per_phase(&self) -> bool {
        self.commit_frequency == CommitFrequency::Phase
    }
}

// Positional values are emitted unquoted, so whitespace splits them when run.
fn text_or_default(field: ConfigField, value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        return default.to_string();
    }
    if value.chars().any(char::is_whitespace) {
        tracing::warn!(
            field = field.name(),
            value,
            "Value contains whitespace and will split into several arguments"
        );
    }
    value.to_string()
}

fn parse_flag(field: ConfigField, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(SparcError::invalid(
            field.name(),
            value,
            "expected a boolean (true/false)",
        )),
    }
}

fn parse_coverage(value: &str) -> Result<u8> {
    let field = ConfigField::CoverageTarget.name();
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| SparcError::invalid(field, value, "expected an integer"))?;

    u8::try_from(parsed)
        .ok()
        .filter(|n| *n <= MAX_COVERAGE_TARGET)
        .ok_or_else(|| {
            SparcError::invalid(
                field,
                value,
                format!("must be between 0 and {}", MAX_COVERAGE_TARGET),
            )
        })
}

fn parse_choice<T>(field: ConfigField, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|reason| SparcError::invalid(field.name(), value, reason))
}

/// Which slices of the system the workflow covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentMode {
    #[default]
    Full,
    BackendOnly,
    FrontendOnly,
    ApiOnly,
}

impl DevelopmentMode {
    pub const ALL: [DevelopmentMode; 4] = [
        DevelopmentMode::Full,
        DevelopmentMode::BackendOnly,
        DevelopmentMode::FrontendOnly,
        DevelopmentMode::ApiOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentMode::Full => "full",
            DevelopmentMode::BackendOnly => "backend-only",
            DevelopmentMode::FrontendOnly => "frontend-only",
            DevelopmentMode::ApiOnly => "api-only",
        }
    }
}

impl FromStr for DevelopmentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(DevelopmentMode::Full),
            "backend-only" => Ok(DevelopmentMode::BackendOnly),
            "frontend-only" => Ok(DevelopmentMode::FrontendOnly),
            "api-only" => Ok(DevelopmentMode::ApiOnly),
            _ => Err("expected one of: full, backend-only, frontend-only, api-only".to_string()),
        }
    }
}

/// How much web research the Research phase requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchDepth {
    Basic,
    #[default]
    Standard,
    Comprehensive,
}

impl ResearchDepth {
    pub const ALL: [ResearchDepth; 3] = [
        ResearchDepth::Basic,
        ResearchDepth::Standard,
        ResearchDepth::Comprehensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchDepth::Basic => "basic",
            ResearchDepth::Standard => "standard",
            ResearchDepth::Comprehensive => "comprehensive",
        }
    }
}

impl FromStr for ResearchDepth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ResearchDepth::Basic),
            "standard" => Ok(ResearchDepth::Standard),
            "comprehensive" => Ok(ResearchDepth::Comprehensive),
            _ => Err("expected one of: basic, standard, comprehensive".to_string()),
        }
    }
}

/// When the workflow asks for commits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitFrequency {
    #[default]
    Phase,
    Feature,
    Manual,
}

impl CommitFrequency {
    pub const ALL: [CommitFrequency; 3] = [
        CommitFrequency::Phase,
        CommitFrequency::Feature,
        CommitFrequency::Manual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitFrequency::Phase => "phase",
            CommitFrequency::Feature => "feature",
            CommitFrequency::Manual => "manual",
        }
    }
}

impl FromStr for CommitFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phase" => Ok(CommitFrequency::Phase),
            "feature" => Ok(CommitFrequency::Feature),
            "manual" => Ok(CommitFrequency::Manual),
            _ => Err("expected one of: phase, feature, manual".to_string()),
        }
    }
}

/// Output format requested from claude-sparc.sh (`--output`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            _ => Err("expected one of: text, json, markdown".to_string()),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(DevelopmentMode, ResearchDepth, CommitFrequency, OutputFormat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.project_name, "sparc-project");
        assert_eq!(config.readme_path, "README.md");
        assert_eq!(config.development_mode, DevelopmentMode::Full);
        assert_eq!(config.coverage_target, 100);
        assert!(config.parallel_execution);
        assert!(!config.skip_tests);
        assert_eq!(config.research_depth, ResearchDepth::Standard);
        assert_eq!(config.commit_frequency, CommitFrequency::Phase);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_set_field_accepts_both_spellings() {
        let mut config = Configuration::default();
        config.set_field("coverageTarget", "80").unwrap();
        assert_eq!(config.coverage_target, 80);
        config.set_field("coverage-target", "75").unwrap();
        assert_eq!(config.coverage_target, 75);
        config.set_field("development-mode", "API-ONLY").unwrap();
        assert_eq!(config.development_mode, DevelopmentMode::ApiOnly);
    }

    #[test]
    fn test_rejected_update_leaves_config_unchanged() {
        let mut config = Configuration::default();
        config.set_field("coverageTarget", "90").unwrap();
        let before = config.clone();

        assert!(matches!(
            config.set_field("coverageTarget", "abc"),
            Err(SparcError::InvalidFieldValue { .. })
        ));
        assert!(config.set_field("coverageTarget", "101").is_err());
        assert!(config.set_field("coverageTarget", "-1").is_err());
        assert!(config.set_field("researchDepth", "deep").is_err());
        assert!(config.set_field("skipTests", "maybe").is_err());
        assert!(matches!(
            config.set_field("colour", "red"),
            Err(SparcError::UnknownField(_))
        ));

        assert_eq!(config, before);
    }

    #[test]
    fn test_coverage_bounds() {
        let mut config = Configuration::default();
        config.set_field("coverageTarget", "0").unwrap();
        assert_eq!(config.coverage_target, 0);
        config.set_field("coverageTarget", " 100 ").unwrap();
        assert_eq!(config.coverage_target, 100);
    }

    #[test]
    fn test_empty_text_resets_to_default() {
        let mut config = Configuration::default();
        config.set_field("projectName", "shop").unwrap();
        config.set_field("projectName", "   ").unwrap();
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        config.set_field("readmePath", "").unwrap();
        assert_eq!(config.readme_path, DEFAULT_README_PATH);
    }

    #[test]
    fn test_reset_blank_text() {
        let mut config = Configuration {
            project_name: String::new(),
            readme_path: "  ".to_string(),
            ..Configuration::default()
        };
        config.reset_blank_text();
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(config.readme_path, DEFAULT_README_PATH);

        let mut config = Configuration {
            project_name: "my shop".to_string(),
            ..Configuration::default()
        };
        config.reset_blank_text();
        assert_eq!(config.project_name, "my shop");
    }

    #[test]
    fn test_flag_spellings() {
        let mut config = Configuration::default();
        for (raw, expected) in [("yes", true), ("OFF", false), ("1", true), ("false", false)] {
            config.set_field("dryRun", raw).unwrap();
            assert_eq!(config.dry_run, expected, "value {}", raw);
        }
    }

    #[test]
    fn test_with_field_and_assignment() {
        let config = Configuration::default()
            .with_field("skipResearch", "true")
            .unwrap();
        assert!(config.skip_research);

        let mut config = Configuration::default();
        config.apply_assignment("commitFrequency=manual").unwrap();
        assert_eq!(config.commit_frequency, CommitFrequency::Manual);
        assert!(matches!(
            config.apply_assignment("commitFrequency"),
            Err(SparcError::InvalidAssignment(_))
        ));
    }

    #[test]
    fn test_get_round_trips_through_set_field() {
        let mut config = Configuration::default();
        config.set_field("developmentMode", "frontend-only").unwrap();
        let mut copy = Configuration::default();
        for field in ConfigField::ALL {
            copy.set_field(field.name(), &config.get(field)).unwrap();
        }
        assert_eq!(copy, config);
    }

    #[test]
    fn test_mode_predicates() {
        let mut config = Configuration::default();
        assert!(config.has_backend() && config.has_frontend());
        config.development_mode = DevelopmentMode::ApiOnly;
        assert!(config.has_backend() && !config.has_frontend());
        config.development_mode = DevelopmentMode::FrontendOnly;
        assert!(!config.has_backend() && config.has_frontend());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"developmentMode": "backend-only", "coverageTarget": 85}"#)
                .unwrap();
        assert_eq!(config.development_mode, DevelopmentMode::BackendOnly);
        assert_eq!(config.coverage_target, 85);
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        assert!(config.parallel_execution);
    }
}
