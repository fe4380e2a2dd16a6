use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "gas-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Gas Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 critical gas and resource-based attack \
         vectors that exploit computational limitations and denial-of-service \
         vulnerabilities in smart contracts.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map gas-intensive operations (loops, external calls, storage operations)",
            "Identify unbounded operations and user-controlled iterations",
            "Locate multi-call patterns and batch operations",
            "Find gas limit dependencies and block gas limit assumptions",
            "Analyze gas estimation and refund mechanisms",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Gas Limit Exploitation",
                [
                    "Find loops whose bound grows with attacker-controlled state",
                    "Check operations that brick when they exceed the block gas limit",
                    "Verify pagination or pull-payment fallbacks exist",
                ],
            )
            .section(
                "Gas Griefing",
                [
                    "Check batch operations where one hostile entry wastes the batch's gas",
                    "Analyze forwarded-call gas stipends for griefable callees",
                    "Look for refund-mechanic abuse",
                ],
            )
            .section(
                "Stealth Gas Patterns",
                [
                    "Identify code paths whose gas cost silently escalates with state growth",
                    "Check estimation-versus-execution divergence attackers can force",
                ],
            ),
    )
    .require("Gas Economics", "Cost to the attacker versus damage inflicted")
    .with_closing(
        "A function that anyone can make too expensive to call is a denial of \
         service; trace every unbounded data structure to the loops that walk it.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "gas-limit",
            "Gas Limit Attack",
            Severity::High,
            "Operations pushed past block gas limits to block execution.",
        ),
        Vector::new(
            "enhanced-gas-griefing",
            "Enhanced Gas Griefing Attack",
            Severity::High,
            "Advanced griefing wasting counterparties' gas at scale.",
        ),
        Vector::new(
            "gas-limit-manipulation",
            "Gas Limit Manipulation",
            Severity::High,
            "Gas boundary conditions gamed around stipends and forwarding.",
        ),
        Vector::new(
            "stealth-gas",
            "Stealth Gas Attack",
            Severity::High,
            "Hidden consumption patterns that escalate costs over time.",
        ),
        Vector::new(
            "gas-griefing",
            "Gas Griefing Attack",
            Severity::Medium,
            "Basic griefing patterns burning victim gas without attacker profit.",
        ),
    ])
}
