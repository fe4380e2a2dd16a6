use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "time-based-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Time-Based Attack Vectors Analysis",
        "Perform comprehensive analysis of 7 critical attack vectors related to time \
         manipulation, block hash exploitation, and temporal dependencies in smart \
         contracts.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Identify all timestamp dependencies (block.timestamp, now)",
            "Locate block hash usage (block.blockhash, blockhash())",
            "Find timelock mechanisms and delayed executions",
            "Map time-sensitive functions (deadlines, expirations)",
            "Identify admin functions with time dependencies",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Admin-Enhanced Time Attacks",
                [
                    "Check privileged functions that move or bypass time gates",
                    "Analyze emergency powers interacting with governance timing",
                    "Look for time-parameterized admin backdoors",
                ],
            )
            .section(
                "Timestamp Manipulation",
                [
                    "Check proposer drift tolerance in time-sensitive comparisons",
                    "Analyze deadline and window boundaries for same-block games",
                ],
            )
            .section(
                "Block Hash Exploitation",
                [
                    "Flag blockhash-derived decisions and their 256-block horizon",
                    "Check hash-based randomness for proposer influence",
                ],
            )
            .section(
                "Timelock Vulnerabilities",
                [
                    "Verify lock duration arithmetic against manipulation",
                    "Check early-unlock and re-lock paths",
                ],
            ),
    )
    .require("Temporal Dependency", "The timestamp, hash, or delay the logic trusts")
    .with_closing(
        "Block producers own small slices of time; any logic whose outcome flips \
         within proposer-controllable drift belongs in this report.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "enhanced-time-admin",
            "Enhanced Time Manipulation with Admin Features",
            Severity::Critical,
            "Privileged access combined with time manipulation and delayed execution backdoors.",
        )
        .with_notes([
            "Governance timing exploitation with emergency powers",
            "Time-based admin backdoors and delayed execution attacks",
        ]),
        Vector::new(
            "time-manipulation",
            "Time Manipulation Attack",
            Severity::High,
            "Proposer timestamp gaming against time-dependent logic.",
        )
        .with_notes([
            "Time-dependent logic exploitation",
            "Block timestamp gaming for profit",
        ]),
        Vector::new(
            "block-hash",
            "Block Hash Attack",
            Severity::High,
            "Block hash prediction against hash-based decisions.",
        )
        .with_notes([
            "Randomness generation weaknesses",
            "Hash-based decision exploitation",
        ]),
        Vector::new(
            "enhanced-time",
            "Enhanced Time Attack",
            Severity::High,
            "Coordinated multi-block timestamp and time oracle manipulation.",
        )
        .with_notes([
            "Coordinated timestamp attacks",
            "Time oracle manipulation",
        ]),
        Vector::new(
            "timestamp-manipulation",
            "Timestamp Manipulation",
            Severity::High,
            "Miner-controlled timestamps exploiting windows and deadlines.",
        )
        .with_notes([
            "Time window exploitation",
            "Deadline manipulation attacks",
        ]),
        Vector::new(
            "time-lock",
            "Time-Lock Attack",
            Severity::High,
            "Timelock bypasses, duration manipulation, and early unlocks.",
        )
        .with_notes([
            "Lock duration manipulation",
            "Early unlock exploits",
        ]),
        Vector::new(
            "block-hash-manipulation",
            "Block Hash Manipulation",
            Severity::High,
            "Hash influence and multi-block prediction attacks.",
        )
        .with_notes([
            "Hash-based randomness exploitation",
            "Multi-block hash prediction",
        ]),
    ])
}
