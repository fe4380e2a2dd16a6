use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "options-protocol-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Options Protocol Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 high-severity attack vectors targeting \
         decentralized options protocols including Hegic, Opyn Gamma, Premia 2.0, \
         Dopex, and Lyra, focusing on pricing manipulation, settlement exploits, and \
         liquidity attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map options protocol architectures",
            "Identify pricing mechanisms",
            "Locate settlement processes",
            "Find liquidity provision systems",
            "Analyze collateral requirements",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Pricing Manipulation",
                [
                    "Check premium formulas against implied volatility gaming",
                    "Analyze volatility surface inputs for manipulation",
                    "Verify pricing oracles at exercise boundaries",
                ],
            )
            .section(
                "Settlement and Exercise",
                [
                    "Check settlement price sources at expiry windows",
                    "Analyze exercise timing and epoch boundary gaming",
                    "Verify margin and collateral checks through settlement",
                ],
            )
            .section(
                "Liquidity Pool Exploitation",
                [
                    "Check writer pool drainage through adverse selection",
                    "Analyze liquidity mining and rebate mechanisms for gaming",
                    "Verify delta hedging flows cannot be front-run",
                ],
            ),
    )
    .require("Options Mechanism", "Pricing, settlement, or liquidity component attacked")
    .with_closing(
        "Options protocols concentrate risk at expiry; findings quantify who bears \
         mispriced volatility and how an attacker forces the mispricing.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "hegic-options",
            "Hegic Options Attack",
            Severity::High,
            "Hegic pricing, settlement, and writer pool exploitation.",
        )
        .with_notes([
            "Premium calculation bypasses",
            "Exercise timing exploitation",
            "Liquidity pool drainage",
        ]),
        Vector::new(
            "opyn-gamma",
            "Opyn Gamma Attack",
            Severity::High,
            "Gamma vault collateral and settlement price manipulation.",
        )
        .with_notes([
            "Vault collateral attacks",
            "Settlement price manipulation",
            "Margin requirement bypasses",
        ]),
        Vector::new(
            "premia-v2",
            "Premia 2.0 Attack",
            Severity::High,
            "Premia pricing model and pool token exploitation.",
        )
        .with_notes([
            "Dynamic hedging attacks",
            "Liquidity mining exploitation",
            "Cross-pair arbitrage attacks",
        ]),
        Vector::new(
            "dopex-options",
            "Dopex Options Attack",
            Severity::High,
            "SSOV epoch timing, rebates, and strike gaming.",
        )
        .with_notes([
            "Epoch-based attack timing",
            "Rebate mechanism manipulation",
            "Strike price gaming",
        ]),
        Vector::new(
            "lyra-options",
            "Lyra Options Attack",
            Severity::High,
            "Lyra AMM volatility surface and hedging exploitation.",
        )
        .with_notes([
            "Volatility surface attacks",
            "Delta hedging exploitation",
            "Market maker pool drainage",
        ]),
    ])
}
