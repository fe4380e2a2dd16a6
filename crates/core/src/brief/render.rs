use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::catalog::{Severity, VectorCatalog};

use super::template::BriefTemplate;

/// Template version — bump when the rendered skeleton changes shape.
/// Embedded in every brief so downstream caches can detect stale output.
pub const TEMPLATE_VERSION: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A brief with zero vectors is meaningless; this is an authoring bug,
    /// not a user-facing condition.
    #[error("catalog for brief `{0}` has no vectors")]
    EmptyCatalog(String),
}

/// Render a brief from a template skeleton and a vector catalog.
///
/// Pure function of its inputs: identical (template, catalog) pairs produce
/// byte-identical briefs. Vectors render grouped by severity band in
/// descending severity, preserving catalog order within each band and
/// numbering continuously across bands. Every vector appears exactly once.
pub fn render(template: &BriefTemplate, catalog: &VectorCatalog) -> Result<String, RenderError> {
    if catalog.is_empty() {
        return Err(RenderError::EmptyCatalog(template.title.clone()));
    }

    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", template.title));
    out.push_str(&format!(
        "<!-- vectorguard brief-template v{TEMPLATE_VERSION} -->\n\n"
    ));

    out.push_str("## Task\n");
    out.push_str(&format!("{}\n\n", template.task));

    out.push_str("## Target Attack Vectors\n\n");
    let mut index = 0;
    for severity in Severity::ALL {
        let band: Vec<_> = catalog.in_band(severity).collect();
        if band.is_empty() {
            continue;
        }
        let noun = if band.len() == 1 { "vector" } else { "vectors" };
        out.push_str(&format!(
            "### {} {} Severity ({} {})\n\n",
            severity.marker(),
            severity,
            band.len(),
            noun
        ));
        for vector in band {
            index += 1;
            out.push_str(&format!("{index}. **{}** (`{}`)\n", vector.title, vector.id));
            out.push_str(&format!("   {}\n", vector.summary));
            for note in &vector.notes {
                out.push_str(&format!("   - {note}\n"));
            }
            out.push('\n');
        }
    }

    if !template.process.is_empty() {
        out.push_str("## Analysis Process\n\n");
        for (i, stage) in template.process.iter().enumerate() {
            out.push_str(&format!("### {}. {}\n", i + 1, stage.heading));
            for bullet in &stage.bullets {
                out.push_str(&format!("- {bullet}\n"));
            }
            out.push('\n');
            for section in &stage.subsections {
                out.push_str(&format!("#### {}\n", section.heading));
                for bullet in &section.bullets {
                    out.push_str(&format!("- {bullet}\n"));
                }
                out.push('\n');
            }
        }
    }

    out.push_str("## Documentation Requirements\n\n");
    out.push_str("For each confirmed finding:\n");
    for field in &template.documentation {
        out.push_str(&format!("- **{}**: {}\n", field.name, field.requirement));
    }
    out.push('\n');

    out.push_str("## Validation Criteria\n");
    for criterion in &template.validation {
        out.push_str(&format!("- {criterion}\n"));
    }
    out.push('\n');

    if !template.focus.is_empty() {
        out.push_str("## Special Focus Areas\n\n");
        for example in &template.focus {
            out.push_str(&format!("### {}\n", example.title));
            out.push_str("```solidity\n");
            out.push_str(example.code.trim_matches('\n'));
            out.push_str("\n```\n\n");
        }
    }

    if let Some(closing) = &template.closing {
        out.push_str(&format!("{closing}\n"));
    }

    Ok(out)
}

/// SHA-256 fingerprint of a rendered brief, hex-encoded. External runners
/// pair this with the embedded template version to invalidate cached briefs.
pub fn fingerprint(brief: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(brief.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::template::Stage;
    use crate::catalog::Vector;

    fn sample_template() -> BriefTemplate {
        BriefTemplate::new("Sample Attack Vectors Analysis", "Analyze the sample vectors.")
            .stage(Stage::new("Discovery Phase", ["Map external call patterns"]))
    }

    fn sample_catalog() -> VectorCatalog {
        VectorCatalog::from_vectors(vec![
            Vector::new("low-one", "Low One", Severity::Low, "A low vector."),
            Vector::new("crit-one", "Crit One", Severity::Critical, "A critical vector.")
                .with_notes(["External call before state update"]),
            Vector::new("high-one", "High One", Severity::High, "A high vector."),
            Vector::new("crit-two", "Crit Two", Severity::Critical, "Another critical vector."),
        ])
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = sample_template();
        let catalog = sample_catalog();
        let first = render(&template, &catalog).unwrap();
        let second = render(&template, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_contains_all_ids_once() {
        let brief = render(&sample_template(), &sample_catalog()).unwrap();
        for id in ["crit-one", "crit-two", "high-one", "low-one"] {
            assert_eq!(
                brief.matches(&format!("(`{id}`)")).count(),
                1,
                "{id} should render exactly once"
            );
        }
    }

    #[test]
    fn test_render_orders_bands_by_descending_severity() {
        let brief = render(&sample_template(), &sample_catalog()).unwrap();
        let crit = brief.find("(`crit-one`)").unwrap();
        let crit2 = brief.find("(`crit-two`)").unwrap();
        let high = brief.find("(`high-one`)").unwrap();
        let low = brief.find("(`low-one`)").unwrap();
        assert!(crit < crit2, "catalog order preserved within a band");
        assert!(crit2 < high);
        assert!(high < low);
    }

    #[test]
    fn test_render_numbers_continuously_across_bands() {
        let brief = render(&sample_template(), &sample_catalog()).unwrap();
        assert!(brief.contains("1. **Crit One**"));
        assert!(brief.contains("2. **Crit Two**"));
        assert!(brief.contains("3. **High One**"));
        assert!(brief.contains("4. **Low One**"));
    }

    #[test]
    fn test_render_skips_empty_bands() {
        let brief = render(&sample_template(), &sample_catalog()).unwrap();
        assert!(brief.contains("### 🔴 Critical Severity (2 vectors)"));
        assert!(brief.contains("### 🟡 High Severity (1 vector)"));
        assert!(!brief.contains("Medium Severity"));
    }

    #[test]
    fn test_render_embeds_version_marker() {
        let brief = render(&sample_template(), &sample_catalog()).unwrap();
        assert!(brief.contains(&format!(
            "<!-- vectorguard brief-template v{TEMPLATE_VERSION} -->"
        )));
    }

    #[test]
    fn test_render_empty_catalog_fails() {
        let catalog = VectorCatalog::from_vectors(vec![]);
        let err = render(&sample_template(), &catalog).unwrap_err();
        assert_eq!(
            err,
            RenderError::EmptyCatalog("Sample Attack Vectors Analysis".to_string())
        );
    }

    #[test]
    fn test_render_includes_skeleton_sections() {
        let template = sample_template()
            .focus_example("Sample Vulnerability", "contract Sample {}")
            .with_closing("Focus on the sample.");
        let brief = render(&template, &sample_catalog()).unwrap();
        for heading in [
            "## Task",
            "## Target Attack Vectors",
            "### 1. Discovery Phase",
            "## Documentation Requirements",
            "## Validation Criteria",
            "## Special Focus Areas",
            "```solidity",
        ] {
            assert!(brief.contains(heading), "missing {heading}");
        }
        assert!(brief.ends_with("Focus on the sample.\n"));
    }

    #[test]
    fn test_fingerprint() {
        let h1 = fingerprint("brief text");
        let h2 = fingerprint("brief text");
        let h3 = fingerprint("other text");
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.len(), 64); // SHA256 hex
    }
}
