//! @acp:module "Diff Command"
//! @acp:summary "Show how --set overrides change the prompt and command"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use similar::{ChangeTag, TextDiff};

use super::overrides::ConfigOverrides;
use crate::command::compose_command;
use crate::document::Document;

/// Options for the diff command
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub overrides: ConfigOverrides,
    /// Lines of context around each change
    pub context: usize,
}

/// Execute the diff command
pub fn execute_diff(options: DiffOptions) -> Result<()> {
    let base = options.overrides.base()?;
    let changed = options.overrides.resolve()?;

    if base == changed {
        println!("{} No changes: overrides match the base configuration", style("✓").green());
        return Ok(());
    }

    let (before, after) = (compose_command(&base), compose_command(&changed));
    if before != after {
        println!("{}", style("Command:").bold());
        println!("{}", style(format!("-{}", before)).red());
        println!("{}\n", style(format!("+{}", after)).green());
    }

    let old = Document::compose(&base).to_text();
    let new = Document::compose(&changed).to_text();
    print!("{}", render_diff(&old, &new, options.context));

    Ok(())
}

/// Unified diff of two prompt texts, colored when the terminal supports it
pub fn render_diff(old: &str, new: &str, context: usize) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();

    for group in diff.grouped_ops(context) {
        output.push_str(&format!("{}\n", style("@@").cyan()));
        for op in group {
            for change in diff.iter_changes(&op) {
                let line = change.to_string_lossy();
                let line = line.trim_end_matches('\n');
                let rendered = match change.tag() {
                    ChangeTag::Delete => style(format!("-{}", line)).red().to_string(),
                    ChangeTag::Insert => style(format!("+{}", line)).green().to_string(),
                    ChangeTag::Equal => format!(" {}", line),
                };
                output.push_str(&rendered);
                output.push('\n');
            }
        }
    }

    output
}
