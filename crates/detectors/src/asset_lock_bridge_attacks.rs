use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "asset-lock-bridge-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Asset Lock and Bridge Attack Vectors Analysis",
        "Perform comprehensive analysis of 4 critical attack vectors related to asset \
         locking mechanisms and cross-chain bridge protocols, focusing on fund \
         drainage, lock bypasses, and bridge exploits.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map asset locking mechanisms",
            "Identify bridge architectures",
            "Locate validator systems",
            "Find emergency functions",
            "Analyze cross-chain flows",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Asset Lock Mechanisms",
                [
                    "Check lock conditions for bypassable predicates",
                    "Analyze time lock arithmetic and clock assumptions",
                    "Audit emergency unlock paths for privilege and timing abuse",
                ],
            )
            .section(
                "Bridge Protocol Security",
                [
                    "Verify cross-chain message authentication end to end",
                    "Check validator set membership and rotation integrity",
                    "Trace deposit/withdrawal accounting for double-spend windows",
                ],
            )
            .section(
                "Cross-Protocol Attacks",
                [
                    "Map lock state shared across protocols for corruption paths",
                    "Check multi-hop bridge routes and aggregator assumptions",
                    "Test cross-chain reentrancy through callback-bearing messages",
                ],
            ),
    )
    .require("Chains Involved", "Source and destination chains plus trust assumptions between them")
    .criterion("Verify replayed or forged messages are rejected on every hop")
    .with_closing(
        "Locked funds concentrate value; treat every path that releases, redirects, \
         or double-counts a locked balance as a critical finding until proven safe.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "asset-lock-exploit",
            "Asset Lock Exploit",
            Severity::Critical,
            "Lock mechanism bypasses draining funds held behind lock conditions.",
        )
        .with_notes([
            "Time lock manipulation",
            "Lock condition circumvention",
            "Emergency unlock abuse",
        ]),
        Vector::new(
            "enhanced-asset-lock-exploit",
            "Enhanced Asset Lock Exploit",
            Severity::Critical,
            "Advanced bypass techniques against multi-sig and governance-controlled locks.",
        )
        .with_notes([
            "Multi-signature lock manipulation",
            "Governance lock overrides",
            "Lock state corruption across protocols",
        ]),
        Vector::new(
            "bridge-exploit",
            "Bridge Exploit",
            Severity::Critical,
            "Cross-chain message forgery and validator manipulation against bridge funds.",
        )
        .with_notes([
            "Validator set manipulation",
            "Deposit/withdrawal attacks",
            "Double spending exploits",
        ]),
        Vector::new(
            "enhanced-bridge-exploit",
            "Enhanced Bridge Exploit",
            Severity::Critical,
            "Multi-hop and aggregator-level bridge attacks including cross-chain reentrancy.",
        )
        .with_notes([
            "Bridge aggregator exploitation",
            "Cross-chain reentrancy",
            "Bridge liquidity drainage",
        ]),
    ])
}
