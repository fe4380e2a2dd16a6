use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "perpetual-protocol-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Perpetual Protocol Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 attack vectors targeting decentralized \
         perpetual futures protocols including Perpetual V1, Perpetual V2, dYdX, GMX, \
         and Gains, focusing on funding rate manipulation, liquidation attacks, and \
         oracle exploitation.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map perpetual protocol architectures",
            "Identify funding mechanisms",
            "Locate liquidation systems",
            "Find oracle dependencies",
            "Analyze margin requirements",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Virtual AMM Exploitation",
                [
                    "Check vAMM k-value assumptions under large positions",
                    "Analyze concentrated liquidity and range order edges",
                ],
            )
            .section(
                "Funding Rate Gaming",
                [
                    "Check funding calculation windows for position-timing games",
                    "Analyze funding arbitrage across venues",
                ],
            )
            .section(
                "Liquidation System Attacks",
                [
                    "Check liquidation thresholds against oracle manipulation",
                    "Analyze cascade dynamics and insurance fund drainage",
                    "Verify cross-margin and isolated-margin boundary behavior",
                ],
            )
            .section(
                "Protocol-Specific Surfaces",
                [
                    "GMX: GLP pool pricing and borrowing fee mechanics",
                    "dYdX: liquidation engine and insurance fund",
                    "Gains: DAI vault, spread, and leverage limits",
                ],
            ),
    )
    .require("Position Economics", "Leverage, funding, and margin state the attack exploits")
    .with_closing(
        "Perpetuals transmit oracle noise straight into liquidations; model every \
         finding at maximum leverage against the thinnest oracle input.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "perpetual-v1",
            "Perpetual V1 Attack",
            Severity::Critical,
            "Virtual AMM manipulation, funding gaming, and insurance fund drainage.",
        )
        .with_notes([
            "Virtual AMM manipulation",
            "K-value exploitation",
            "Position liquidation attacks",
        ]),
        Vector::new(
            "perpetual-v2",
            "Perpetual V2 Attack",
            Severity::Critical,
            "Concentrated liquidity and maker position exploitation.",
        )
        .with_notes([
            "Range order attacks",
            "Fee tier gaming",
            "Slippage manipulation",
        ]),
        Vector::new(
            "dydx-perpetual",
            "dYdX Perpetual Attack",
            Severity::Critical,
            "Cross-margin, liquidation engine, and insurance fund exploitation.",
        )
        .with_notes([
            "Cross-margin exploitation",
            "Oracle price manipulation",
            "Liquidation engine gaming",
        ]),
        Vector::new(
            "gmx-perpetual",
            "GMX Perpetual Attack",
            Severity::Critical,
            "GLP pool and price feed exploitation with threshold gaming.",
        )
        .with_notes([
            "GLP pool manipulation",
            "Liquidation threshold gaming",
            "Borrowing fee manipulation",
        ]),
        Vector::new(
            "gains-perpetual",
            "Gains Perpetual Attack",
            Severity::High,
            "DAI vault, referral, and spread manipulation with leverage bypasses.",
        )
        .with_notes([
            "DAI vault manipulation",
            "Spread manipulation",
            "Leverage limit bypasses",
        ]),
    ])
}
