use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "implementation-proxy-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Implementation and Proxy Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 critical severity attack vectors \
         targeting smart contract proxy patterns and implementation contracts, \
         focusing on malicious implementation attacks, proxy upgrade exploits, and \
         unauthorized upgrade mechanisms.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map proxy patterns and implementations",
            "Identify upgrade mechanisms",
            "Locate admin controls and permissions",
            "Find implementation contracts",
            "Analyze delegation patterns",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Implementation Vulnerabilities",
                [
                    "Check implementation contracts for direct-call exploitation",
                    "Verify storage layout compatibility across versions",
                    "Look for backdoors reachable only through the implementation",
                ],
            )
            .section(
                "Upgrade Process Attacks",
                [
                    "Verify upgrade authorization cannot be bypassed or front-run",
                    "Check timelock coverage of every upgrade path",
                    "Analyze emergency upgrade routes for abuse",
                ],
            )
            .section(
                "Proxy Mechanics",
                [
                    "Check fallback dispatch and selector collision surfaces",
                    "Analyze proxy admin takeover paths",
                    "Verify delegatecall storage collision protections",
                ],
            ),
    )
    .require("Upgrade Path", "Authorization chain from proposer to executed upgrade")
    .focus_example(
        "Storage Collision After Upgrade",
        r#"
contract ProxyV1Storage {
    address public owner;      // slot 0
    uint256 public totalFunds; // slot 1
}

// VULNERABLE: new implementation reorders storage, so `feeRate`
// now aliases slot 0 and setting it rewrites `owner`.
contract ImplementationV2 {
    uint256 public feeRate;    // slot 0 — collides with owner
    address public owner;      // slot 1 — collides with totalFunds

    function setFeeRate(uint256 rate) external {
        feeRate = rate; // silently corrupts the proxy's owner slot
    }
}
"#,
    )
    .with_closing(
        "Upgradeability is a standing admin-key risk: audit who can change the \
         implementation, when, and what the storage layout becomes afterward.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "malicious-implementation",
            "Malicious Implementation Attack",
            Severity::Critical,
            "Hostile implementation deployment injecting backdoors behind a trusted proxy.",
        )
        .with_notes([
            "Backdoor implementation injection",
            "Implementation state manipulation",
            "Cross-contract implementation exploitation",
        ]),
        Vector::new(
            "enhanced-implementation",
            "Enhanced Implementation Attack",
            Severity::Critical,
            "Multi-stage implementation corruption and dependency hijacking.",
        )
        .with_notes([
            "Implementation dependency hijacking",
            "Cross-proxy implementation attacks",
            "Implementation storage collision",
        ]),
        Vector::new(
            "proxy-upgrade",
            "Proxy Upgrade Attack",
            Severity::Critical,
            "Unauthorized or front-run proxy upgrades executing malicious code.",
        )
        .with_notes([
            "Upgrade timing manipulation",
            "Proxy upgrade front-running",
            "Upgrade authorization bypass",
        ]),
        Vector::new(
            "enhanced-proxy",
            "Enhanced Proxy Attack",
            Severity::Critical,
            "Proxy delegation, fallback, and admin takeover exploitation.",
        )
        .with_notes([
            "Proxy storage manipulation",
            "Proxy fallback exploitation",
            "Proxy admin takeover",
        ]),
        Vector::new(
            "unauthorized-upgrade",
            "Unauthorized Upgrade Attack",
            Severity::Critical,
            "Upgrade governance subverted via key compromise, timelock bypass, or multi-sig abuse.",
        )
        .with_notes([
            "Upgrade governance manipulation",
            "Timelock bypass attacks",
            "Emergency upgrade abuse",
        ]),
    ])
}
