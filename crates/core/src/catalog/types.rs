use serde::Serialize;

/// Severity levels ordered from most to least severe.
/// IMPORTANT: Variant order matters — derived Ord puts Critical < High < Medium < Low,
/// which drives the band order of rendered briefs (ascending Ord = descending severity).
/// Do NOT reorder these variants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All levels, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Band marker used in rendered brief headings.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Critical => "🔴",
            Severity::High => "🟡",
            Severity::Medium => "🟠",
            Severity::Low => "🟢",
        }
    }
}

/// A single named, severity-tagged attack pattern within a detector's catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Vector {
    /// Stable kebab-case identifier, unique within its catalog.
    pub id: String,
    pub title: String,
    pub severity: Severity,
    /// One-line summary rendered directly under the vector title.
    pub summary: String,
    /// Exploitation patterns and notes, rendered as sub-bullets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Vector {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            severity,
            summary: summary.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_notes<I>(mut self, notes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.notes = notes.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered sequence of attack vectors owned by exactly one detector.
/// Authoring convention: vectors are listed in descending severity so the
/// catalog order matches the rendered band order, but the renderer groups by
/// band regardless.
#[derive(Debug, Clone, Serialize)]
pub struct VectorCatalog {
    vectors: Vec<Vector>,
}

impl VectorCatalog {
    pub fn from_vectors(vectors: Vec<Vector>) -> Self {
        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.vectors.iter()
    }

    /// Vector ids in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.vectors.iter().map(|v| v.id.as_str()).collect()
    }

    /// Vectors in the given severity band, preserving catalog order.
    pub fn in_band(&self, severity: Severity) -> impl Iterator<Item = &Vector> {
        self.vectors.iter().filter(move |v| v.severity == severity)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts {
            critical: self.in_band(Severity::Critical).count(),
            high: self.in_band(Severity::High).count(),
            medium: self.in_band(Severity::Medium).count(),
            low: self.in_band(Severity::Low).count(),
        }
    }

    /// Ids that appear more than once. Non-empty output is an authoring bug.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for v in &self.vectors {
            if !seen.insert(v.id.as_str()) && !dups.contains(&v.id.as_str()) {
                dups.push(v.id.as_str());
            }
        }
        dups
    }
}

/// Per-band vector counts for discovery surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> VectorCatalog {
        VectorCatalog::from_vectors(vec![
            Vector::new("a", "A", Severity::Critical, "First."),
            Vector::new("b", "B", Severity::Low, "Second."),
            Vector::new("c", "C", Severity::Critical, "Third."),
        ])
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn test_band_preserves_catalog_order() {
        let catalog = sample_catalog();
        let critical: Vec<&str> = catalog
            .in_band(Severity::Critical)
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(critical, vec!["a", "c"]);
    }

    #[test]
    fn test_severity_counts() {
        let counts = sample_catalog().severity_counts();
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 0);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_duplicate_ids() {
        assert!(sample_catalog().duplicate_ids().is_empty());

        let catalog = VectorCatalog::from_vectors(vec![
            Vector::new("a", "A", Severity::High, "First."),
            Vector::new("a", "A again", Severity::Low, "Second."),
        ]);
        assert_eq!(catalog.duplicate_ids(), vec!["a"]);
    }
}
