use std::fmt;

use super::types::{Severity, Vector};

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.severity, self.title, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_display() {
        let v = Vector::new(
            "basic-reentrancy",
            "Basic Reentrancy Attack",
            Severity::Critical,
            "Classic single-function reentrancy.",
        );
        assert_eq!(
            v.to_string(),
            "[Critical] Basic Reentrancy Attack (basic-reentrancy)"
        );
    }
}
