//! @acp:module "Document Types"
//! @acp:summary "Phases, commit types and rendered sections"
//! @acp:domain cli
//! @acp:layer types

use std::fmt;

use serde::Serialize;

/// Workflow phase, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Research,
    Specification,
    Pseudocode,
    Architecture,
    Refinement,
    Completion,
    Methodology,
    SuccessCriteria,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Research,
        Phase::Specification,
        Phase::Pseudocode,
        Phase::Architecture,
        Phase::Refinement,
        Phase::Completion,
        Phase::Methodology,
        Phase::SuccessCriteria,
    ];

    /// Stable section id
    pub fn id(&self) -> &'static str {
        match self {
            Phase::Research => "research",
            Phase::Specification => "specification",
            Phase::Pseudocode => "pseudocode",
            Phase::Architecture => "architecture",
            Phase::Refinement => "refinement",
            Phase::Completion => "completion",
            Phase::Methodology => "methodology",
            Phase::SuccessCriteria => "success",
        }
    }

    pub fn from_id(id: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|phase| phase.id() == id)
    }
}

/// Conventional commit type used in commit directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Arch,
    Quality,
    Test,
    Deploy,
}

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Arch => "arch",
            CommitType::Quality => "quality",
            CommitType::Test => "test",
            CommitType::Deploy => "deploy",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered phase of the workflow document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn phase(&self) -> Option<Phase> {
        Phase::from_id(&self.id)
    }

    /// Heading line plus body, as it appears in the full document
    pub fn to_text(&self) -> String {
        format!("## {}\n\n{}", self.title, self.body)
    }
}
