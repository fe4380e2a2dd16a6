use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "l2-specific-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive L2-Specific Attack Vectors Analysis",
        "Perform comprehensive analysis of 7 critical attack vectors specific to \
         Layer 2 scaling solutions including Optimism, Arbitrum, Polygon, StarkNet, \
         and zkSync.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map L2 architecture and components",
            "Identify fraud proof mechanisms",
            "Locate message passing systems",
            "Find state commitment processes",
            "Analyze economic security models",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Optimistic Rollup Surfaces",
                [
                    "Optimism: challenge period exploitation and state root manipulation",
                    "Arbitrum: delayed inbox, force inclusion, and retryable tickets",
                    "Check sequencer censorship and L1-L2 message forgery",
                ],
            )
            .section(
                "Validity Rollup Surfaces",
                [
                    "StarkNet: Cairo verification and message consumption attacks",
                    "zkSync: block commitment, priority queue, and proof aggregation",
                ],
            )
            .section(
                "Sidechain Checkpointing",
                [
                    "Polygon: checkpoint submission, Heimdall consensus, bridge exit fraud",
                ],
            )
            .section(
                "Generic Fraud Proof Gaming",
                [
                    "Challenge period and bisection protocol exploitation",
                    "Validator collusion and economic incentive manipulation",
                ],
            ),
    )
    .require("L2 Stack", "Which rollup or sidechain and which layer of its pipeline")
    .with_closing(
        "Each L2 relocates trust into a different component, whether sequencer, \
         prover, checkpoint, or inbox; find that component and test the assumptions \
         around it.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "optimism-fraud-proof",
            "Optimism Fraud Proof Attack",
            Severity::Critical,
            "Challenge period exploitation and state root manipulation on Optimism.",
        )
        .with_notes([
            "State root manipulation during challenge",
            "Sequencer censorship attacks",
            "L1-L2 message forgery",
        ]),
        Vector::new(
            "arbitrum-delayed-inbox",
            "Arbitrum Delayed Inbox Attack",
            Severity::Critical,
            "Delayed inbox manipulation and force inclusion exploitation on Arbitrum.",
        )
        .with_notes([
            "Sequencer inbox bypassing",
            "Force inclusion delay exploitation",
            "Retryable ticket attacks",
        ]),
        Vector::new(
            "polygon-checkpoint",
            "Polygon Checkpoint Attack",
            Severity::Critical,
            "Checkpoint submission and consensus manipulation against Polygon bridges.",
        )
        .with_notes([
            "Heimdall consensus attacks",
            "Bor chain state corruption",
            "Bridge exit fraud",
        ]),
        Vector::new(
            "starknet-l1-l2-message",
            "StarkNet L1-L2 Message Attack",
            Severity::Critical,
            "Cairo verification bypass and message consumption attacks on StarkNet.",
        )
        .with_notes([
            "L1-L2 message consumption attacks",
            "State update forgery",
            "STARK proof manipulation",
        ]),
        Vector::new(
            "zksync-commit-block",
            "zkSync Commit Block Attack",
            Severity::Critical,
            "Block commitment and priority queue exploitation on zkSync.",
        )
        .with_notes([
            "Priority queue exploitation",
            "zkEVM state transition attacks",
            "Proof aggregation vulnerabilities",
        ]),
        Vector::new(
            "rollup-fraud-proof-manipulation",
            "Rollup Fraud Proof Manipulation",
            Severity::Critical,
            "Generic fraud proof bypasses via challenge gaming and bisection exploits.",
        )
        .with_notes([
            "Challenge period gaming",
            "Bisection protocol exploitation",
            "Validator collusion attacks",
        ]),
        Vector::new(
            "enhanced-fraud-proof",
            "Enhanced Fraud Proof Attack",
            Severity::Critical,
            "Multi-layer and cross-rollup fraud proof attacks with economic manipulation.",
        )
        .with_notes([
            "Cross-rollup attack vectors",
            "Economic incentive manipulation",
            "Time-based fraud proof exploits",
        ]),
    ])
}
