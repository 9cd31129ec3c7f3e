//! @acp:module "Document"
//! @acp:summary "SPARC workflow prompt: section builders and document assembly"
//! @acp:domain cli
//! @acp:layer output
//!
//! The document is an ordered list of phase sections. Research is present
//! only when research is enabled; the other seven phases always appear.
//! Sections are rebuilt from the configuration on every call.

pub mod body;
pub mod sections;
pub mod types;

use crate::config::Configuration;

pub use body::Body;
pub use sections::build_section;
pub use types::{CommitType, Phase, Section};

/// Phases included for this configuration, in document order
pub fn phases(config: &Configuration) -> Vec<Phase> {
    Phase::ALL
        .into_iter()
        .filter(|phase| *phase != Phase::Research || !config.skip_research)
        .collect()
}

/// Build all sections in document order
pub fn compose_document(config: &Configuration) -> Vec<Section> {
    phases(config)
        .into_iter()
        .map(|phase| build_section(phase, config))
        .collect()
}

/// Header lines naming the project and the key options
pub fn document_header(config: &Configuration) -> Vec<String> {
    vec![
        "# SPARC Automated Development System".to_string(),
        format!("# Project: {}", config.project_name),
        format!("# Initial Research Document: {}", config.readme_path),
        format!(
            "# Configuration: Mode={}, Coverage={}%, Parallel={}",
            config.development_mode, config.coverage_target, config.parallel_execution
        ),
    ]
}

/// Complete generated prompt
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Document {
    pub header: Vec<String>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn compose(config: &Configuration) -> Self {
        Self {
            header: document_header(config),
            sections: compose_document(config),
        }
    }

    /// Header, then every section with its `##` heading
    pub fn to_text(&self) -> String {
        let mut parts = vec![self.header.join("\n")];
        parts.extend(self.sections.iter().map(Section::to_text));
        parts.join("\n\n")
    }

    /// Section bodies only, one blank line apart
    pub fn body_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.body.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn section(&self, phase: Phase) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == phase.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phase_order() {
        let ids: Vec<String> = compose_document(&Configuration::default())
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "research",
                "specification",
                "pseudocode",
                "architecture",
                "refinement",
                "completion",
                "methodology",
                "success"
            ]
        );
    }

    #[test]
    fn test_skip_research_removes_section() {
        let config = Configuration::default()
            .with_field("skipResearch", "true")
            .unwrap();
        let sections = compose_document(&config);
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[0].id, "specification");
    }

    #[test]
    fn test_header() {
        let config = Configuration::default()
            .with_field("coverageTarget", "90")
            .unwrap();
        assert_eq!(
            document_header(&config),
            vec![
                "# SPARC Automated Development System",
                "# Project: sparc-project",
                "# Initial Research Document: README.md",
                "# Configuration: Mode=full, Coverage=90%, Parallel=true",
            ]
        );
    }

    #[test]
    fn test_text_layout() {
        let document = Document::compose(&Configuration::default());
        let text = document.to_text();
        assert!(text.starts_with("# SPARC Automated Development System\n"));
        assert!(text.contains(
            "Parallel=true\n\n## PHASE 0: COMPREHENSIVE RESEARCH & DISCOVERY (Depth: standard)\n\n### Parallel Web Research Phase"
        ));
        assert!(text.contains("\n\n## SUCCESS CRITERIA\n\n- ✅"));
        assert!(!text.contains("\n\n\n"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_body_text_joins_bodies() {
        let document = Document::compose(&Configuration::default());
        let body_text = document.body_text();
        assert!(body_text.starts_with(&document.sections[0].body));
        assert!(body_text.ends_with(&document.sections[7].body));
        assert!(!body_text.contains("## SPECIFICATION PHASE"));
    }

    #[test]
    fn test_no_blank_artifacts_in_any_section() {
        let mut config = Configuration::default();
        for (name, value) in [
            ("skipTests", "true"),
            ("parallelExecution", "false"),
            ("commitFrequency", "manual"),
            ("developmentMode", "frontend-only"),
            ("researchDepth", "basic"),
        ] {
            config.set_field(name, value).unwrap();
            for section in compose_document(&config) {
                assert!(!section.body.starts_with('\n'), "{}", section.id);
                assert!(!section.body.ends_with('\n'), "{}", section.id);
                assert!(!section.body.contains("\n\n\n"), "{}", section.id);
                assert!(
                    section.body.lines().all(|line| line.trim() != "-"),
                    "{}",
                    section.id
                );
            }
        }
    }
}
