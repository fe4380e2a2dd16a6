use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "advanced-block-building-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Advanced Block Building Attack Vectors Analysis",
        "Perform comprehensive analysis of 6 critical Advanced Block Building \
         vulnerabilities that exploit Proposer-Builder Separation (PBS), cross-block \
         MEV coordination, and sophisticated block construction mechanisms in modern \
         Ethereum infrastructure.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map PBS infrastructure and block builder networks",
            "Identify MEV relay systems and validator connections",
            "Locate block construction pipelines and ordering mechanisms",
            "Find cross-block coordination opportunities and timing windows",
            "Analyze validator incentive structures and kickback mechanisms",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Builder-Relayer Collusion",
                [
                    "Check assumptions that block ordering is neutral across builders",
                    "Identify protocol state observable by colluding infrastructure",
                    "Assess exposure to censored or reordered transactions",
                ],
            )
            .section(
                "Multi-Block MEV Strategies",
                [
                    "Find positions attackable only across consecutive blocks",
                    "Check TWAP windows and auction mechanics against sustained ordering control",
                    "Verify liquidation and settlement logic under adversarial sequencing",
                ],
            )
            .section(
                "Block Stuffing",
                [
                    "Identify deadline-sensitive functions an attacker profits from delaying",
                    "Check gas-auction exposure of keeper and liquidation paths",
                    "Verify fallback behavior when transactions are crowded out",
                ],
            )
            .section(
                "Validator Kickback Schemes",
                [
                    "Map value flows that reward out-of-protocol validator behavior",
                    "Check for consensus-layer trust baked into application logic",
                ],
            ),
    )
    .require("Infrastructure Dependency", "Which block-production actors must cooperate")
    .criterion("Model attacker control over ordering across multiple consecutive blocks")
    .with_closing(
        "Assume block producers are rational and may collude; any protocol property \
         that only holds under honest ordering is a finding.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "builder-relayer-collusion",
            "Builder-Relayer Collusion Attack",
            Severity::Critical,
            "Colluding builders and relayers censoring, reordering, and front-running at scale.",
        ),
        Vector::new(
            "multi-block-mev",
            "Multi-Block MEV Strategy",
            Severity::Critical,
            "Sustained control of consecutive blocks enabling long-horizon market manipulation.",
        ),
        Vector::new(
            "block-stuffing-mev",
            "Block Stuffing for MEV Extraction",
            Severity::Critical,
            "Gas-space denial crowding out victim transactions while extracting stranded value.",
        ),
        Vector::new(
            "validator-kickback",
            "Validator MEV Kickback Scheme",
            Severity::Critical,
            "Out-of-protocol payments corrupting validator behavior and consensus assumptions.",
        ),
        Vector::new(
            "pbs-exploitation",
            "PBS (Proposer-Builder Separation) Exploitation",
            Severity::High,
            "Manipulation of the builder marketplace and its bid/commitment mechanics.",
        ),
        Vector::new(
            "cross-block-coordination",
            "Cross-Block MEV Coordination",
            Severity::High,
            "Coordinated multi-block extraction strategies spanning ordering boundaries.",
        ),
    ])
}
