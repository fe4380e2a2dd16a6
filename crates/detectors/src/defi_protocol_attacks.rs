use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "defi-protocol-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive DeFi Protocol Attack Vectors Analysis",
        "Perform comprehensive analysis of 8 critical DeFi protocol-specific \
         vulnerabilities that exploit unique mechanisms, economic models, and \
         implementation details of major DeFi protocols.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map DeFi protocol integrations and dependencies",
            "Identify protocol-specific mechanisms (lending, vaults, synthetic assets)",
            "Locate economic incentive structures and reward systems",
            "Find governance and parameter update mechanisms",
            "Analyze cross-protocol interactions and composability risks",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Lending Markets",
                [
                    "Compound-style: collateral factor edges, interest accrual timing, liquidation incentives",
                    "Check borrow paths against price feed manipulation",
                ],
            )
            .section(
                "Vault Strategies",
                [
                    "Yearn-style: strategy migration, share pricing, harvest timing",
                    "Check deposit/withdraw round-trips for value extraction",
                ],
            )
            .section(
                "Synthetic Debt Systems",
                [
                    "Synthetix-style: shared debt pool skew manipulation",
                    "MakerDAO/Reflexer: CDP/SAFE liquidation and auction edges",
                    "Liquity: trove ordering, redemption and recovery mode abuse",
                ],
            )
            .section(
                "Reward Layers",
                [
                    "Convex/Alpaca: reward routing, boost delegation, leverage unwinding",
                    "Check reward checkpointing against deposit/withdraw timing games",
                ],
            ),
    )
    .require("Protocol Mechanism", "The protocol-specific invariant the attack violates")
    .criterion("Validate findings against the protocol's deployed parameterization")
    .with_closing(
        "Each protocol encodes its own economic invariants; the finding is the \
         concrete sequence of interactions that breaks one, not a generic pattern \
         match.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "compound-borrow",
            "Compound Borrow Attack",
            Severity::Critical,
            "Compound-style lending exploited via collateral and accrual edges.",
        ),
        Vector::new(
            "yearn-vault",
            "Yearn Vault Attack",
            Severity::Critical,
            "Vault share pricing and strategy migration manipulation.",
        ),
        Vector::new(
            "synthetix-debt-pool",
            "Synthetix Debt Pool Attack",
            Severity::Critical,
            "Shared debt pool skew exploited across synth positions.",
        ),
        Vector::new(
            "makerdao-cdp",
            "MakerDAO CDP Attack",
            Severity::Critical,
            "CDP liquidation and auction mechanics exploitation.",
        ),
        Vector::new(
            "liquity-trove",
            "Liquity Trove Attack",
            Severity::Critical,
            "Trove ordering, redemptions, and recovery mode manipulation.",
        ),
        Vector::new(
            "convex-reward",
            "Convex Reward Attack",
            Severity::High,
            "Reward routing and boost delegation manipulation.",
        ),
        Vector::new(
            "reflexer-safe",
            "Reflexer SAFE Attack",
            Severity::High,
            "SAFE engine and controller parameter exploitation.",
        ),
        Vector::new(
            "alpaca-finance",
            "Alpaca Finance Attack",
            Severity::High,
            "Leveraged yield farming position and liquidation attacks.",
        ),
    ])
}
