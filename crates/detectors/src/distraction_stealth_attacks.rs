use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "distraction-stealth-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Distraction and Stealth Attack Vectors Analysis",
        "Perform comprehensive analysis of 3 attack vectors targeting attention \
         manipulation and stealth exploitation, focusing on distraction attacks, \
         complex multi-layer distraction, and advanced stealth techniques.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map attention-dependent systems",
            "Identify monitoring and alerting mechanisms",
            "Locate user interface vulnerabilities",
            "Find cognitive load dependencies",
            "Analyze human interaction patterns",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Basic Distraction Exploitation",
                [
                    "Check event emission paths usable for alert spam",
                    "Identify false-positive generators that desensitize monitoring",
                ],
            )
            .section(
                "Multi-Layer Distraction",
                [
                    "Look for coordinated sequences that split responder attention",
                    "Check time-based windows where oversight is thinnest",
                ],
            )
            .section(
                "Advanced Stealth Techniques",
                [
                    "Identify state changes that hide inside high-volume activity",
                    "Check for exploit steps distributed across unrelated-looking transactions",
                ],
            ),
    )
    .require("Cover Activity", "The noise generated and what it conceals")
    .with_closing(
        "The exploit itself is usually conventional; the finding is how the noise \
         around it delays detection and response past the point of recovery.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "complex-distraction",
            "Complex Distraction Attack",
            Severity::High,
            "Multi-layer attention distraction coordinated across contracts and time.",
        )
        .with_notes([
            "Coordinated distraction campaigns",
            "Time-based distraction sequences",
            "Cognitive overload exploitation",
        ]),
        Vector::new(
            "enhanced-distraction",
            "Enhanced Distraction Attack",
            Severity::High,
            "Advanced stealth execution under engineered attention manipulation.",
        )
        .with_notes([
            "Multi-vector distraction coordination",
            "Subliminal attack execution",
        ]),
        Vector::new(
            "distraction",
            "Distraction Attack",
            Severity::Medium,
            "Basic misdirection via event spam and false positives.",
        )
        .with_notes([
            "Event spam distraction",
            "UI/UX manipulation",
            "False positive generation",
        ]),
    ])
}
