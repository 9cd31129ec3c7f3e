//! @acp:module "Section Body"
//! @acp:summary "Ordered content fragments and their flattening to text"
//! @acp:domain cli
//! @acp:layer output
//!
//! Section builders only decide which fragments appear. Layout (blank
//! lines, indentation, list numbering) is applied once in [`Body::render`],
//! so a skipped fragment never leaves an empty line or a numbering gap.

use super::types::CommitType;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    /// `### text`, restarts numbering
    Heading(String),
    /// `#### Track N: text`, restarts numbering
    Track(String),
    /// `N. **label**:` opening a bullet group
    Group(String),
    /// `   - text` inside a group
    Bullet(String),
    /// `N. text`, a compact numbered step
    Step(String),
    /// Plain line directly under the previous one
    Line(String),
    /// Plain line set off by a blank line
    Paragraph(String),
    /// Commit directive inside a group
    BulletCommit(CommitType, String),
    /// Commit directive set off by a blank line
    Commit(CommitType, String),
}

/// Builder for a section body
#[derive(Debug, Default, Clone)]
pub struct Body {
    fragments: Vec<Fragment>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Heading(text.into()))
    }

    pub fn track(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Track(text.into()))
    }

    pub fn group(&mut self, label: impl Into<String>) -> &mut Self {
        self.push(Fragment::Group(label.into()))
    }

    pub fn bullet(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Bullet(text.into()))
    }

    pub fn bullet_if(&mut self, condition: bool, text: impl Into<String>) -> &mut Self {
        if condition {
            self.bullet(text);
        }
        self
    }

    pub fn step(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Step(text.into()))
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Line(text.into()))
    }

    pub fn line_if(&mut self, condition: bool, text: impl Into<String>) -> &mut Self {
        if condition {
            self.line(text);
        }
        self
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Paragraph(text.into()))
    }

    pub fn bullet_commit_if(
        &mut self,
        condition: bool,
        kind: CommitType,
        message: impl Into<String>,
    ) -> &mut Self {
        if condition {
            self.push(Fragment::BulletCommit(kind, message.into()));
        }
        self
    }

    pub fn commit_if(
        &mut self,
        condition: bool,
        kind: CommitType,
        message: impl Into<String>,
    ) -> &mut Self {
        if condition {
            self.push(Fragment::Commit(kind, message.into()));
        }
        self
    }

    fn push(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// Flatten fragments to text
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut number = 0;
        let mut track = 0;
        // True right after a heading line, where a group needs no spacing.
        let mut after_heading = false;

        for fragment in &self.fragments {
            let (spaced, text) = match fragment {
                Fragment::Heading(text) => {
                    number = 0;
                    (true, format!("### {}", text))
                }
                Fragment::Track(text) => {
                    number = 0;
                    track += 1;
                    (true, format!("#### Track {}: {}", track, text))
                }
                Fragment::Group(label) => {
                    number += 1;
                    (!after_heading, format!("{}. **{}**:", number, label))
                }
                Fragment::Step(text) => {
                    number += 1;
                    (false, format!("{}. {}", number, text))
                }
                Fragment::Bullet(text) => (false, format!("   - {}", text)),
                Fragment::Line(text) => (false, text.clone()),
                Fragment::Paragraph(text) => (true, text.clone()),
                Fragment::BulletCommit(kind, message) => {
                    (false, format!("   - {}", commit_directive(*kind, message)))
                }
                Fragment::Commit(kind, message) => (true, commit_directive(*kind, message)),
            };

            if spaced && !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(text);
            after_heading = matches!(fragment, Fragment::Heading(_) | Fragment::Track(_));
        }

        lines.join("\n")
    }
}

fn commit_directive(kind: CommitType, message: &str) -> String {
    format!("**Commit**: '{}: {}'", kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout() {
        let mut body = Body::new();
        body.heading("Plan:")
            .group("First")
            .bullet("a")
            .bullet_commit_if(true, CommitType::Feat, "first")
            .group("Second")
            .bullet("b")
            .heading("Notes:")
            .line("plain")
            .commit_if(true, CommitType::Docs, "notes");

        assert_eq!(
            body.render(),
            "### Plan:\n\
             1. **First**:\n   \
             - a\n   \
             - **Commit**: 'feat: first'\n\
             \n\
             2. **Second**:\n   \
             - b\n\
             \n\
             ### Notes:\n\
             plain\n\
             \n\
             **Commit**: 'docs: notes'"
        );
    }

    #[test]
    fn test_skipped_fragments_leave_no_trace() {
        let mut body = Body::new();
        body.heading("H:")
            .bullet_if(false, "hidden")
            .line_if(false, "hidden")
            .commit_if(false, CommitType::Test, "hidden")
            .line("shown");
        assert_eq!(body.render(), "### H:\nshown");
    }

    #[test]
    fn test_numbering_restarts_per_heading_and_track() {
        let mut body = Body::new();
        body.heading("A:").step("one").step("two");
        body.track("Backend").group("Setup");
        body.track("Frontend").group("UI").group("Logic");
        let text = body.render();
        assert!(text.contains("1. one\n2. two"));
        assert!(text.contains("#### Track 1: Backend\n1. **Setup**:"));
        assert!(text.contains("#### Track 2: Frontend\n1. **UI**:\n\n2. **Logic**:"));
    }

    #[test]
    fn test_paragraph_first_has_no_leading_blank() {
        let mut body = Body::new();
        body.paragraph("hello").paragraph("world");
        assert_eq!(body.render(), "hello\n\nworld");
    }
}
