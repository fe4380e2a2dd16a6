use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "poison-vanity-contract-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Poison and Vanity Contract Attack Vectors Analysis",
        "Perform comprehensive analysis of 3 attack vectors targeting contract \
         identity and address manipulation, focusing on poison contract fake \
         history, vanity address exploitation, and advanced vanity contract attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map vanity address patterns",
            "Identify contract history dependencies",
            "Locate address verification mechanisms",
            "Find user interface address displays",
            "Analyze contract reputation systems",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Poison History Creation",
                [
                    "Check reputation signals derived from forgeable history",
                    "Look for fake audit and transaction trails seeding trust",
                ],
            )
            .section(
                "Vanity Address Exploitation",
                [
                    "Check prefix/suffix-matched addresses against UI truncation",
                    "Analyze address-similarity phishing in transfer flows",
                ],
            )
            .section(
                "Advanced Vanity Attacks",
                [
                    "Check CREATE2 collision and cross-chain address reuse",
                    "Analyze multi-stage vanity campaigns combining social engineering",
                ],
            ),
    )
    .require("Deception Surface", "The UI, explorer, or heuristic the fake identity fools")
    .with_closing(
        "These attacks target trust heuristics rather than code; findings name the \
         heuristic and show how cheaply an attacker can satisfy it.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "advanced-vanity-contract",
            "Advanced Vanity Contract Attack",
            Severity::High,
            "Multi-stage vanity exploitation including collisions and cross-chain reuse.",
        )
        .with_notes([
            "Vanity address collision attacks",
            "Cross-chain vanity exploitation",
            "Vanity-based social engineering",
        ]),
        Vector::new(
            "poison-contract-fake-history",
            "Poison Contract Fake History",
            Severity::Medium,
            "Fabricated contract history and reputation manipulation.",
        )
        .with_notes([
            "Historical transaction injection",
            "Fake audit history creation",
            "Historical event falsification",
        ]),
        Vector::new(
            "vanity-address-manipulation",
            "Vanity Address Manipulation",
            Severity::Medium,
            "Address-similarity impersonation and interface spoofing.",
        )
        .with_notes([
            "Address similarity exploitation",
            "User interface spoofing",
            "Vanity phishing campaigns",
        ]),
    ])
}
