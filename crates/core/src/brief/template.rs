fn to_strings<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// One bulleted subsection under an analysis stage, e.g. the per-category
/// guidance blocks under "Attack Vector Analysis".
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub bullets: Vec<String>,
}

impl Section {
    pub fn new<I>(heading: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            heading: heading.into(),
            bullets: to_strings(bullets),
        }
    }
}

/// A numbered stage of the analysis process, e.g. "Discovery Phase".
/// A stage carries its own bullets, optional subsections, or both.
#[derive(Debug, Clone)]
pub struct Stage {
    pub heading: String,
    pub bullets: Vec<String>,
    pub subsections: Vec<Section>,
}

impl Stage {
    pub fn new<I>(heading: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            heading: heading.into(),
            bullets: to_strings(bullets),
            subsections: Vec::new(),
        }
    }

    /// Stage that carries only subsections, no bullets of its own.
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets: Vec::new(),
            subsections: Vec::new(),
        }
    }

    pub fn section<I>(mut self, heading: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.subsections.push(Section::new(heading, bullets));
        self
    }
}

/// One field the auditing agent must document per confirmed finding.
#[derive(Debug, Clone)]
pub struct DocField {
    pub name: String,
    pub requirement: String,
}

impl DocField {
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }
}

/// An annotated Solidity example rendered under "Special Focus Areas".
#[derive(Debug, Clone)]
pub struct FocusExample {
    pub title: String,
    pub code: String,
}

/// Structural skeleton of an analysis brief, parameterized by a vector
/// catalog at render time. `new` seeds the documentation requirements and
/// validation criteria shared by all detectors; individual detectors extend
/// or replace them, so the boilerplate lives in exactly one place.
#[derive(Debug, Clone)]
pub struct BriefTemplate {
    pub title: String,
    pub task: String,
    pub process: Vec<Stage>,
    pub documentation: Vec<DocField>,
    pub validation: Vec<String>,
    pub focus: Vec<FocusExample>,
    pub closing: Option<String>,
}

impl BriefTemplate {
    pub fn new(title: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            task: task.into(),
            process: Vec::new(),
            documentation: default_documentation(),
            validation: default_validation(),
            focus: Vec::new(),
            closing: None,
        }
    }

    /// Append an analysis process stage. Stages render numbered in insertion order.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.process.push(stage);
        self
    }

    /// Append a documentation field to the shared defaults.
    pub fn require(mut self, name: impl Into<String>, requirement: impl Into<String>) -> Self {
        self.documentation.push(DocField::new(name, requirement));
        self
    }

    /// Replace the documentation requirements entirely.
    pub fn with_documentation<N, R, I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        self.documentation = fields
            .into_iter()
            .map(|(name, requirement)| DocField::new(name, requirement))
            .collect();
        self
    }

    /// Replace the validation criteria entirely.
    pub fn with_validation<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validation = to_strings(criteria);
        self
    }

    /// Append a validation criterion to the shared defaults.
    pub fn criterion(mut self, criterion: impl Into<String>) -> Self {
        self.validation.push(criterion.into());
        self
    }

    /// Append a Solidity focus example.
    pub fn focus_example(mut self, title: impl Into<String>, code: impl Into<String>) -> Self {
        self.focus.push(FocusExample {
            title: title.into(),
            code: code.into(),
        });
        self
    }

    /// Set the closing paragraph.
    pub fn with_closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = Some(closing.into());
        self
    }
}

fn default_documentation() -> Vec<DocField> {
    vec![
        DocField::new("Attack Vector", "Which catalog vector the finding falls under"),
        DocField::new("Entry Point", "Function or callback that enables the attack"),
        DocField::new(
            "Exploitation Method",
            "How the attack manipulates contract state, step by step",
        ),
        DocField::new("Proof of Concept", "Concrete attack demonstration in Solidity"),
        DocField::new(
            "Impact Assessment",
            "Funds at risk and degree of system compromise",
        ),
        DocField::new("Remediation", "Specific fixes with code examples"),
    ]
}

fn default_validation() -> Vec<String> {
    to_strings([
        "Test with realistic attack scenarios",
        "Confirm actual exploitability, not theoretical issues",
        "Verify economic incentives align with attack costs",
        "Account for gas limitations and real-world constraints",
        "Provide concrete exploit demonstrations",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_shared_boilerplate() {
        let t = BriefTemplate::new("Title", "Task.");
        assert!(!t.documentation.is_empty());
        assert!(!t.validation.is_empty());
        assert!(t.process.is_empty());
        assert!(t.focus.is_empty());
    }

    #[test]
    fn test_require_appends_to_defaults() {
        let base = BriefTemplate::new("Title", "Task.");
        let defaults = base.documentation.len();
        let t = base.require("Call Flow", "Detailed sequence of function calls");
        assert_eq!(t.documentation.len(), defaults + 1);
        assert_eq!(t.documentation.last().unwrap().name, "Call Flow");
    }

    #[test]
    fn test_with_documentation_replaces() {
        let t = BriefTemplate::new("Title", "Task.")
            .with_documentation([("Only Field", "Only requirement")]);
        assert_eq!(t.documentation.len(), 1);
    }

    #[test]
    fn test_stage_subsections() {
        let t = BriefTemplate::new("Title", "Task.").stage(
            Stage::new("Discovery Phase", ["Map external call patterns"])
                .section("Basic Detection", ["Check external calls before state updates"]),
        );
        assert_eq!(t.process.len(), 1);
        assert_eq!(t.process[0].subsections.len(), 1);
    }
}
