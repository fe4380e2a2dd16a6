use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "liquid-restaking-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Liquid Staking and Restaking Attack Vectors Analysis",
        "Perform comprehensive analysis of 8 critical attack vectors related to \
         liquid staking protocols and restaking mechanisms.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map liquid staking protocol architecture",
            "Identify restaking mechanisms and operators",
            "Locate validator management systems",
            "Find withdrawal queue implementations",
            "Analyze cross-protocol dependencies",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Depeg Exploitation",
                [
                    "Model engineered depegs against LST collateral usage",
                    "Check oracle paths that would trigger mass liquidations",
                    "Analyze bank-run dynamics in withdrawal design",
                ],
            )
            .section(
                "Slashing Cascades",
                [
                    "Trace slashing propagation across restaked positions",
                    "Check validator set corruption triggers",
                ],
            )
            .section(
                "Cross-Protocol Arbitrage",
                [
                    "Check reward rate arbitrage across staking venues",
                    "Look for circular staking loops inflating rewards",
                ],
            )
            .section(
                "Queue and Derivative Mechanics",
                [
                    "Analyze withdrawal queue ordering and DoS",
                    "Check LST price oracles against derivative manipulation",
                    "Verify operator delegation against collusion",
                ],
            ),
    )
    .require("Staking Layer", "Base staking, liquid wrapper, or restaking layer affected")
    .with_closing(
        "Restaking stacks leverage on leverage; quantify how far a single slashing \
         or depeg event propagates before a circuit breaker stops it.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "lst-depeg",
            "Liquid Staking Token Depeg Exploitation",
            Severity::Critical,
            "Engineered depegs cascading into mass liquidations and bank runs.",
        )
        .with_notes([
            "Market collapse through engineered depegs",
            "Oracle manipulation for mass liquidations",
            "Cascading withdrawals and bank run scenarios",
        ]),
        Vector::new(
            "slashing-cascade",
            "Restaking Slashing Cascade Attack",
            Severity::Critical,
            "Mass slashing triggers propagating across restaked protocols.",
        )
        .with_notes([
            "Cross-protocol slashing propagation",
            "Validator set corruption attacks",
        ]),
        Vector::new(
            "cross-protocol-staking-arbitrage",
            "Cross-Protocol Staking Arbitrage",
            Severity::Critical,
            "Reward drainage through rate arbitrage and circular staking.",
        )
        .with_notes([
            "Multi-protocol staking reward drainage",
            "Circular staking attacks",
        ]),
        Vector::new(
            "validator-mev-theft",
            "Validator MEV Theft Attack",
            Severity::Critical,
            "Validator reward interception and block proposal theft.",
        )
        .with_notes([
            "MEV extraction manipulation",
            "Block proposal theft",
        ]),
        Vector::new(
            "validator-set-manipulation",
            "Validator Set Manipulation",
            Severity::High,
            "Validator selection gaming and stake concentration attacks.",
        )
        .with_notes([
            "Stake concentration attacks",
            "Governance takeover via validators",
        ]),
        Vector::new(
            "withdrawal-queue",
            "Liquid Staking Withdrawal Queue Attack",
            Severity::High,
            "Queue manipulation, front-running, and exit liquidity crises.",
        )
        .with_notes([
            "Queue manipulation and front-running",
            "Withdrawal DoS attacks",
        ]),
        Vector::new(
            "staking-derivative-price",
            "Staking Derivative Price Manipulation",
            Severity::High,
            "LST price oracle and derivative arbitrage exploitation.",
        )
        .with_notes([
            "LST price oracle attacks",
            "Synthetic staking attacks",
        ]),
        Vector::new(
            "operator-collusion",
            "Restaking Operator Collusion",
            Severity::Medium,
            "Coordinated operator behavior extracting fees and skewing delegation.",
        )
        .with_notes([
            "Delegation manipulation",
            "Fee extraction schemes",
        ]),
    ])
}
