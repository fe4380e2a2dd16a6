use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "event-history-manipulation-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Event and History Manipulation Attack Vectors Analysis",
        "Perform comprehensive analysis of 4 attack vectors targeting blockchain \
         event systems and transaction history, focusing on fake history creation, \
         event log manipulation, event emission exploitation, and advanced event \
         attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map event emission patterns",
            "Identify historical data dependencies",
            "Locate event listeners and indexers",
            "Find transaction history usage",
            "Analyze event-based logic",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Transaction History Manipulation",
                [
                    "Check logic trusting historical data reachable by reorgs",
                    "Identify fake-transaction injection points in indexed views",
                ],
            )
            .section(
                "Event Log Exploitation",
                [
                    "Look for cross-contract event spoofing (same signature, attacker contract)",
                    "Check indexers that trust emitter identity implicitly",
                    "Verify off-chain consumers validate event provenance",
                ],
            )
            .section(
                "Temporal Event Manipulation",
                [
                    "Check multi-block event coordination and timestamp trust",
                    "Analyze event-fed oracles for spoofed-input acceptance",
                ],
            ),
    )
    .require("Downstream Consumer", "Which indexer, oracle, or UI acts on the forged signal")
    .with_closing(
        "Events are unauthenticated by default: any consumer that treats a log as a \
         fact without checking the emitting address inherits these vectors.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "fake-transaction-history",
            "Fake Transaction History Creation",
            Severity::High,
            "Spoofed or reorg-assisted history corrupting state reconstructions.",
        )
        .with_notes([
            "Fake transaction injection",
            "Chain reorganization exploitation",
            "Historical state corruption",
        ]),
        Vector::new(
            "advanced-event-manipulation",
            "Advanced Event Manipulation",
            Severity::High,
            "Event log tampering and cross-contract spoofing against indexers.",
        )
        .with_notes([
            "Cross-contract event spoofing",
            "Event indexing manipulation",
            "Event signature forgery",
        ]),
        Vector::new(
            "enhanced-event-manipulation",
            "Enhanced Event Manipulation Attack",
            Severity::High,
            "Multi-block, cross-chain event coordination feeding event-based oracles.",
        )
        .with_notes([
            "Event timestamp manipulation",
            "Cross-chain event spoofing",
            "Event-based oracle manipulation",
        ]),
        Vector::new(
            "event-emission",
            "Event Emission Attack",
            Severity::Medium,
            "Unauthorized or parameter-manipulated emissions exploiting listeners.",
        )
        .with_notes([
            "Event listener exploitation",
            "Event filtering bypasses",
            "Event replay attacks",
        ]),
    ])
}
