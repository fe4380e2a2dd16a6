use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "randomness-entropy-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Randomness and Entropy Attack Vectors Analysis",
        "Perform comprehensive analysis of 2 critical severity attack vectors \
         targeting randomness generation and entropy sources, focusing on randomness \
         manipulation and advanced entropy exploitation techniques.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map randomness generation mechanisms",
            "Identify entropy sources and dependencies",
            "Locate random number usage patterns",
            "Find predictable randomness vulnerabilities",
            "Analyze randomness-dependent logic",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Basic Randomness Exploitation",
                [
                    "Flag block hash, timestamp, and difficulty used as entropy",
                    "Check PRNG seeds derivable from chain state",
                    "Verify miner/validator influence over outcome-bearing draws",
                ],
            )
            .section(
                "Advanced Entropy Manipulation",
                [
                    "Check VRF integration for request/fulfillment gaming",
                    "Analyze commit-reveal schemes for last-revealer advantage",
                    "Check cross-chain and multi-block correlation of entropy sources",
                ],
            ),
    )
    .require("Entropy Source", "The randomness input and who can observe or steer it")
    .focus_example(
        "Block-Derived Randomness",
        r#"
contract VulnerableLottery {
    address[] public players;

    // VULNERABLE: every input is known to or influenced by the proposer
    function pickWinner() external {
        uint256 rand = uint256(keccak256(abi.encodePacked(
            block.timestamp,
            block.prevrandao,
            players.length
        )));
        address winner = players[rand % players.length];
        payable(winner).transfer(address(this).balance);
    }
}
"#,
    )
    .with_closing(
        "On-chain entropy is public or producer-controlled by default; any draw \
         worth money must be anchored in a commitment the drawer cannot steer.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "randomness-manipulation",
            "Randomness Manipulation Attack",
            Severity::Critical,
            "Predictable or producer-influenced entropy steering outcome-bearing draws.",
        )
        .with_notes([
            "Pseudorandom number generator (PRNG) manipulation",
            "Block hash prediction attacks",
            "Timestamp manipulation for randomness",
            "Miner-controlled randomness exploitation",
        ]),
        Vector::new(
            "enhanced-randomness",
            "Enhanced Randomness Attack",
            Severity::Critical,
            "VRF, commit-reveal, and cross-chain entropy scheme exploitation.",
        )
        .with_notes([
            "Cross-chain randomness correlation attacks",
            "VRF (Verifiable Random Function) exploitation",
            "Commit-reveal scheme manipulation",
            "Multi-block randomness prediction",
        ]),
    ])
}
