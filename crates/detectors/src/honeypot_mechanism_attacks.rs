use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "honeypot-mechanism-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Honeypot Mechanism Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 high-severity attack vectors related to \
         honeypot mechanisms in smart contracts, focusing on trigger manipulation, \
         sell blocking, liquidity traps, progressive taxation, and exit prevention \
         mechanisms.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map honeypot trigger mechanisms",
            "Identify sell/transfer restrictions",
            "Locate liquidity trap functions",
            "Find tax calculation logic",
            "Analyze exit prevention methods",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Trigger Mechanisms",
                [
                    "Check activation conditions for owner-controlled or time-delayed switches",
                    "Analyze threshold logic for gaming and state corruption",
                ],
            )
            .section(
                "Transfer Restrictions",
                [
                    "Find sell paths that can be disabled after launch",
                    "Check whitelist and anti-bot lists for asymmetric treatment",
                ],
            )
            .section(
                "Liquidity and Exit Traps",
                [
                    "Verify LP withdrawal paths cannot be blocked post-deposit",
                    "Check progressive tax escalation against honest exit attempts",
                    "Analyze emergency exits that only insiders can reach",
                ],
            ),
    )
    .require("Trap Mechanism", "The specific restriction and who controls its switch")
    .with_closing(
        "Read these contracts as an adversarial buyer: simulate the full \
         buy-hold-sell round trip and flag every path where exit is worse than \
         entry by owner action.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "honeypot-activation-trigger",
            "Honeypot Activation Trigger",
            Severity::High,
            "Trigger conditions and thresholds manipulated to spring traps on victims.",
        )
        .with_notes([
            "Threshold gaming attacks",
            "Activation timing exploitation",
            "Trigger state corruption",
        ]),
        Vector::new(
            "sell-blocking",
            "Sell Blocking Attack",
            Severity::High,
            "Token sells disabled or restricted after purchase.",
        )
        .with_notes([
            "Transfer restriction bypasses",
            "Whitelist manipulation",
            "Sell function disabling",
        ]),
        Vector::new(
            "liquidity-trap",
            "Liquidity Trap Attack",
            Severity::High,
            "Liquidity removal prevented through LP locks and withdrawal blocks.",
        )
        .with_notes([
            "LP token locking mechanisms",
            "Pool manipulation traps",
            "Emergency exit prevention",
        ]),
        Vector::new(
            "progressive-tax",
            "Progressive Tax Attack",
            Severity::High,
            "Escalating tax rates engineered to confiscate exit value.",
        )
        .with_notes([
            "Tax rate manipulation",
            "Rate escalation gaming",
        ]),
        Vector::new(
            "exit-prevention",
            "Exit Prevention Attack",
            Severity::High,
            "Withdrawal and recovery functions disabled to lock victim funds.",
        )
        .with_notes([
            "Withdrawal function disabling",
            "Fund lockup exploitation",
        ]),
    ])
}
