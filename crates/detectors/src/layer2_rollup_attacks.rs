use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "layer2-rollup-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Layer 2 and Rollup Attack Vectors Analysis",
        "Perform comprehensive analysis of 10 critical Layer 2 and rollup \
         vulnerabilities that exploit scaling solution architectures, cross-layer \
         interactions, and emerging L2 infrastructure weaknesses.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map Layer 2 infrastructure (Optimistic Rollups, ZK-Rollups, State Channels)",
            "Identify sequencer mechanisms and centralization points",
            "Locate cross-layer bridge contracts and message passing",
            "Find fraud proof systems and challenge mechanisms",
            "Analyze data availability and finality assumptions",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Sequencer and Ordering",
                [
                    "Check exposure to sequencer reordering and censorship",
                    "Analyze cross-layer MEV extraction across L1/L2 boundaries",
                    "Verify fee market assumptions under congestion games",
                ],
            )
            .section(
                "State Commitment Integrity",
                [
                    "Check state root submission against corrupt transitions",
                    "Verify challenge periods cannot be abused or outlasted",
                    "Analyze ZK proof verification for soundness gaps",
                ],
            )
            .section(
                "Data Availability and Finality",
                [
                    "Test data withholding scenarios against reconstruction",
                    "Check finality delay windows for double-spend exposure",
                    "Analyze state channel force-close and liveness games",
                ],
            )
            .section(
                "Cross-Layer Liquidity",
                [
                    "Map liquidity fragmented across layers and its crisis modes",
                    "Check bridge liquidity assumptions under mass exits",
                ],
            ),
    )
    .require("Layer Boundary", "Which L1/L2 seam the attack crosses")
    .with_closing(
        "Rollup security is a chain of assumptions about sequencing, data \
         availability, and finality; the finding identifies which assumption breaks \
         and what the window of exposure is worth.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "sequencer-manipulation",
            "Sequencer Manipulation Attack",
            Severity::Critical,
            "L2 transaction ordering controlled for censorship and extraction.",
        ),
        Vector::new(
            "state-root-manipulation",
            "Rollup State Root Manipulation",
            Severity::Critical,
            "Corrupt L2 state transitions committed to L1.",
        ),
        Vector::new(
            "cross-layer-mev",
            "Cross-Layer MEV Extraction",
            Severity::Critical,
            "MEV harvested across L1/L2 ordering boundaries.",
        ),
        Vector::new(
            "finality-delay-exploitation",
            "Rollup Finality Delay Exploitation",
            Severity::Critical,
            "Delayed finality windows exploited for double spends.",
        ),
        Vector::new(
            "state-channel-force-close",
            "State Channel Force-Close Attack",
            Severity::Critical,
            "Malicious channel closure with stale or withheld states.",
        ),
        Vector::new(
            "data-availability",
            "Rollup Data Availability Attack",
            Severity::Critical,
            "Data withholding preventing state reconstruction and exits.",
        ),
        Vector::new(
            "liquidity-fragmentation",
            "Cross-Layer Liquidity Fragmentation Exploit",
            Severity::Critical,
            "Fragmented cross-layer liquidity driven into a system-wide crisis.",
        ),
        Vector::new(
            "challenge-period-abuse",
            "Optimistic Rollup Challenge Period Abuse",
            Severity::High,
            "Fraudulent or griefing challenges gaming the dispute window.",
        ),
        Vector::new(
            "zk-proof-manipulation",
            "ZK-Rollup Proof Manipulation",
            Severity::High,
            "Invalid zero-knowledge proofs slipped past verification.",
        ),
        Vector::new(
            "l2-fee-market",
            "L2 Fee Market Manipulation",
            Severity::High,
            "L2 fee structure exploitation under engineered congestion.",
        ),
    ])
}
