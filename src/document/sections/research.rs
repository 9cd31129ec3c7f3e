//! @acp:module "Research Section"
//! @acp:summary "Phase 0 web research plan, deepening with research depth"
//! @acp:domain cli
//! @acp:layer logic

use crate::config::{Configuration, ResearchDepth};
use crate::document::body::Body;
use crate::document::types::{CommitType, Phase, Section};

use super::section;

pub fn build(config: &Configuration) -> Section {
    let depth = config.research_depth;
    let beyond_basic = depth >= ResearchDepth::Standard;
    let comprehensive = depth == ResearchDepth::Comprehensive;

    let execution = if config.parallel_execution {
        "BatchTool execution"
    } else {
        "Sequential execution"
    };

    let mut body = Body::new();
    body.heading(format!("Parallel Web Research Phase ({}):", execution));

    body.group("Domain Research")
        .bullet(format!(
            "WebFetchTool: Extract key concepts from {}",
            config.readme_path
        ))
        .bullet("WebFetchTool: Search for latest industry trends and technologies")
        .bullet("WebFetchTool: Research competitive landscape and existing solutions")
        .bullet_if(
            comprehensive,
            "WebFetchTool: Gather academic papers and technical documentation",
        );

    body.group("Technology Stack Research")
        .bullet("WebFetchTool: Research best practices for identified technology domains")
        .bullet("WebFetchTool: Search for framework comparisons and recommendations")
        .bullet("WebFetchTool: Investigate security considerations and compliance requirements")
        .bullet_if(
            beyond_basic,
            "WebFetchTool: Research scalability patterns and architecture approaches",
        );

    body.group("Implementation Research")
        .bullet("WebFetchTool: Search for code examples and implementation patterns")
        .bullet_if(
            !config.skip_tests,
            "WebFetchTool: Research testing frameworks and methodologies",
        )
        .bullet("WebFetchTool: Investigate deployment and DevOps best practices")
        .bullet_if(
            comprehensive,
            "WebFetchTool: Research monitoring and observability solutions",
        );

    body.heading("Research Processing:").line(if config.parallel_execution {
        "Use BatchTool to execute all research queries in parallel for maximum efficiency."
    } else {
        "Execute research queries sequentially for thorough analysis."
    });

    body.commit_if(
        config.commits_enabled(),
        CommitType::Feat,
        "complete comprehensive research phase - gathered domain knowledge, technology insights, and implementation patterns",
    );

    section(
        Phase::Research,
        format!(
            "PHASE 0: COMPREHENSIVE RESEARCH & DISCOVERY (Depth: {})",
            depth
        ),
        &body,
    )
}
