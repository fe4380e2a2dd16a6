use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "specialized-token-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Specialized Token Attack Vectors Analysis",
        "Perform comprehensive analysis of 6 high-severity attack vectors related to \
         non-standard token implementations including fee-on-transfer, rebasing, \
         pausable, blacklisted, deflationary, and other non-standard ERC20 tokens.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Identify token implementation patterns",
            "Check for non-standard behaviors",
            "Map special token features",
            "Analyze integration points",
            "Review token economics",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Fee-on-Transfer Exploitation",
                [
                    "Check integrations assuming transferred == received",
                    "Analyze double-fee extraction through routing",
                ],
            )
            .section(
                "Rebasing Token Vulnerabilities",
                [
                    "Check cached balances against supply rebases",
                    "Analyze share/token conversion and pool imbalance windows",
                ],
            )
            .section(
                "Pausable and Blacklist Mechanics",
                [
                    "Check protocol flows that deadlock when a token pauses",
                    "Analyze blacklist additions front-run to trap counterparties",
                ],
            )
            .section(
                "Non-Standard Behaviors",
                [
                    "Check missing-return-value transfers against safe wrappers",
                    "Verify approval race handling and decimal assumptions",
                ],
            ),
    )
    .require("Token Deviation", "The non-standard behavior the integration missed")
    .with_closing(
        "Integrations inherit every token quirk in their universe; test each flow \
         against the most hostile conforming-looking token that can be deployed.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "fee-on-transfer",
            "Fee-on-Transfer Token Manipulation",
            Severity::High,
            "Transfer amount discrepancies breaking balance assumptions.",
        )
        .with_notes([
            "Fee calculation vulnerabilities",
            "Double-fee extraction attacks",
            "DEX integration failures",
        ]),
        Vector::new(
            "rebasing-token",
            "Rebasing Token Manipulation",
            Severity::High,
            "Balance fluctuation exploits across rebase boundaries.",
        )
        .with_notes([
            "Share/token conversion exploits",
            "Oracle price manipulation",
            "Liquidity pool imbalances",
        ]),
        Vector::new(
            "pausable-token",
            "Pausable Token Attack",
            Severity::High,
            "Pause mechanisms weaponized into DoS and locked-fund scenarios.",
        )
        .with_notes([
            "Emergency pause exploitation",
            "Unpause race conditions",
        ]),
        Vector::new(
            "blacklist-token",
            "Blacklist Token Attack",
            Severity::High,
            "Blacklist mechanics gamed for griefing and fund trapping.",
        )
        .with_notes([
            "Front-running blacklist additions",
            "Contract fund trapping",
        ]),
        Vector::new(
            "deflationary-token",
            "Deflationary Token Attack",
            Severity::High,
            "Burn and reflection mechanics exploited against integrations.",
        )
        .with_notes([
            "Supply manipulation attacks",
            "Reflection token vulnerabilities",
            "Auto-liquidity exploits",
        ]),
        Vector::new(
            "non-standard-token",
            "Non-Standard Token Attack",
            Severity::High,
            "Missing return values, approval races, and decimal deviations.",
        )
        .with_notes([
            "Missing return value exploits",
            "Approval race conditions",
            "Decimal manipulation attacks",
        ]),
    ])
}
