use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "cross-chain-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Cross-Chain Attack Vectors Analysis",
        "Perform comprehensive analysis of 17 critical cross-chain and bridge \
         vulnerabilities that exploit inter-blockchain communication weaknesses and \
         bridge protocol flaws.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map cross-chain infrastructure (bridges, relayers, validators)",
            "Identify message passing protocols and verification mechanisms",
            "Locate L1/L2 communication patterns and withdrawal systems",
            "Find cross-chain token minting/burning contracts",
            "Analyze multi-chain deployment patterns and chain ID handling",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Cross-Chain Message Security",
                [
                    "Verify messages bind chain ID, nonce, and destination",
                    "Check replay rejection on every receiving chain",
                    "Trace message tampering surfaces between emit and execute",
                ],
            )
            .section(
                "Bridge Accounting",
                [
                    "Audit mint/burn pairing for imbalance windows",
                    "Check deposit/withdrawal reconciliation for double spends",
                    "Verify finality assumptions against source-chain reorgs",
                ],
            )
            .section(
                "State Synchronization",
                [
                    "Map state mirrored across chains and its update ordering",
                    "Check desynchronization recovery and withdrawal blocking",
                    "Test cross-chain reentrancy through callback-bearing transfers",
                ],
            )
            .section(
                "Bridge-Specific Surfaces",
                [
                    "Wormhole: guardian set and VAA verification",
                    "Multichain: MPC custody and router approvals",
                    "Hop: bonder liquidity and AMM wrappers",
                    "Synapse and Across: relayer incentives and optimistic windows",
                ],
            ),
    )
    .require("Chains Involved", "Source and destination chains plus trust assumptions")
    .criterion("Confirm findings hold under source-chain reorganization")
    .with_closing(
        "Bridges fail at the seams: replay, finality, and accounting across chains. \
         Validate each seam independently before trusting the composed system.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "message-replay",
            "Cross-Chain Message Replay Attack",
            Severity::Critical,
            "Messages replayed across chains or re-delivered on the same chain.",
        ),
        Vector::new(
            "bridge-double-spend",
            "Bridge Double-Spending Attack",
            Severity::Critical,
            "Bridge accounting manipulated to spend the same deposit twice.",
        ),
        Vector::new(
            "finality-attack",
            "Finality Attack",
            Severity::Critical,
            "Premature finality assumptions exploited via source-chain reorgs.",
        ),
        Vector::new(
            "state-desynchronization",
            "Cross-Chain State Desynchronization",
            Severity::Critical,
            "Mirrored state driven out of sync to corrupt downstream decisions.",
        ),
        Vector::new(
            "l2-withdrawal-blocking",
            "L2 Withdrawal Blocking",
            Severity::Critical,
            "Layer 2 withdrawal paths censored or wedged to strand funds.",
        ),
        Vector::new(
            "message-manipulation",
            "Cross-Chain Message Manipulation",
            Severity::Critical,
            "Inter-chain messages tampered between emission and execution.",
        ),
        Vector::new(
            "bridge-state-manipulation",
            "Bridge State Manipulation",
            Severity::Critical,
            "Bridge bookkeeping state corrupted directly.",
        ),
        Vector::new(
            "cross-chain-reentrancy",
            "Cross-Chain Reentrancy Attack",
            Severity::Critical,
            "Reentrant flows spanning chains through callback-bearing messages.",
        ),
        Vector::new(
            "validator-compromise",
            "Validator Compromise Attack",
            Severity::Critical,
            "Bridge validator set compromise forging arbitrary transfers.",
        ),
        Vector::new(
            "mint-burn-imbalance",
            "Mint/Burn Imbalance Attack",
            Severity::Critical,
            "Wrapped token supply inflated by unpaired mints or skipped burns.",
        ),
        Vector::new(
            "cross-chain-mev",
            "Cross-Chain MEV Attack",
            Severity::Critical,
            "Extractable value harvested from cross-chain ordering asymmetries.",
        ),
        Vector::new(
            "wormhole-bridge",
            "Wormhole Bridge Attack",
            Severity::Critical,
            "Wormhole guardian and VAA verification exploits.",
        ),
        Vector::new(
            "multichain-bridge",
            "Multichain Bridge Attack",
            Severity::Critical,
            "Multichain MPC custody and router approval exploits.",
        ),
        Vector::new(
            "hop-protocol",
            "Hop Protocol Attack",
            Severity::Critical,
            "Hop bonder liquidity and AMM wrapper exploitation.",
        ),
        Vector::new(
            "synapse-protocol",
            "Synapse Protocol Attack",
            Severity::Critical,
            "Synapse bridge and relayer incentive attacks.",
        ),
        Vector::new(
            "across-bridge",
            "Across Bridge Attack",
            Severity::Critical,
            "Across optimistic relay window exploitation.",
        ),
        Vector::new(
            "chain-id-confusion",
            "Chain ID Confusion Attack",
            Severity::High,
            "Chain identifier confusion replaying signatures or messages on sibling chains.",
        ),
    ])
}
