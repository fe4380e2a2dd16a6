use crate::brief::{render, BriefTemplate, RenderError};
use crate::catalog::VectorCatalog;

/// One audit capability: a brief template paired with the vector catalog it
/// renders. Detectors differ only in data, never in behavior, so a single
/// concrete type covers every catalog. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Detector {
    template: BriefTemplate,
    catalog: VectorCatalog,
}

impl Detector {
    pub fn new(template: BriefTemplate, catalog: VectorCatalog) -> Self {
        Self { template, catalog }
    }

    /// Render the analysis brief consumed by the external runner.
    /// Deterministic: the same detector always yields byte-identical output.
    pub fn produce_brief(&self) -> Result<String, RenderError> {
        render(&self.template, &self.catalog)
    }

    pub fn template(&self) -> &BriefTemplate {
        &self.template
    }

    pub fn catalog(&self) -> &VectorCatalog {
        &self.catalog
    }
}

/// Zero-argument constructor registered under a command name.
pub type DetectorFactory = fn() -> Detector;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Severity, Vector};

    #[test]
    fn test_produce_brief_is_pure() {
        let detector = Detector::new(
            BriefTemplate::new("Mock Analysis", "Analyze the mock vector."),
            VectorCatalog::from_vectors(vec![Vector::new(
                "mock-vector",
                "Mock Vector",
                Severity::Low,
                "A vector for testing.",
            )]),
        );
        let first = detector.produce_brief().unwrap();
        let second = detector.produce_brief().unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
