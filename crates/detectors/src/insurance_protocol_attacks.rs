use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "insurance-protocol-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Insurance Protocol Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 attack vectors targeting decentralized \
         insurance protocols including Nexus Mutual, Cover Protocol, InsurAce, \
         Unslashed Finance, and Bright Union, focusing on claim manipulation, \
         coverage exploitation, and governance attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map insurance protocol architectures",
            "Identify coverage mechanisms",
            "Locate claim assessment systems",
            "Find governance structures",
            "Analyze risk calculation models",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Claims Assessment Gaming",
                [
                    "Check assessor incentives for collusion with claimants",
                    "Analyze assessment staking and reward manipulation",
                    "Verify fraudulent claims cannot outvote honest assessment",
                ],
            )
            .section(
                "Coverage Manipulation",
                [
                    "Check coverage purchase timing against known-loss events",
                    "Analyze premium calculation for mispricing exploitation",
                    "Verify coverage period boundaries cannot be gamed",
                ],
            )
            .section(
                "Capital Pool Attacks",
                [
                    "Trace capital pool withdrawal paths for drainage",
                    "Check underwriting pool accounting under mass claims",
                    "Analyze cross-protocol aggregator double-claim surfaces",
                ],
            ),
    )
    .require("Claim Path", "The assessment route a fraudulent claim would take")
    .with_closing(
        "Insurance protocols die by correlated gaming: look for any position where \
         the same actor profits on both sides of a claim.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "nexus-mutual",
            "Nexus Mutual Attack",
            Severity::Critical,
            "Mutual governance and claims assessment gaming against the capital pool.",
        )
        .with_notes([
            "Claims assessment gaming",
            "Assessment reward manipulation",
            "Capital pool drainage",
        ]),
        Vector::new(
            "cover-protocol",
            "Cover Protocol Attack",
            Severity::Critical,
            "Coverage and claim token manipulation plus factory exploitation.",
        )
        .with_notes([
            "Claim token exploitation",
            "Liquidity pool drainage",
            "Protocol factory exploitation",
        ]),
        Vector::new(
            "insurace",
            "InsurAce Attack",
            Severity::High,
            "Coverage pool and premium calculation exploitation across chains.",
        )
        .with_notes([
            "Claim validation bypasses",
            "Multi-chain insurance attacks",
            "Underwriting pool drainage",
        ]),
        Vector::new(
            "unslashed-finance",
            "Unslashed Finance Attack",
            Severity::High,
            "Validator slashing insurance and risk assessment manipulation.",
        )
        .with_notes([
            "Coverage period gaming",
            "Staking derivative exploitation",
        ]),
        Vector::new(
            "bright-union",
            "Bright Union Attack",
            Severity::High,
            "Aggregator-level coverage and comparative pricing manipulation.",
        )
        .with_notes([
            "Cross-protocol coverage exploitation",
            "Aggregated claim attacks",
        ]),
    ])
}
