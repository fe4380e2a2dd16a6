use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "access-control";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Access Control Attack Vectors Analysis",
        "Perform comprehensive analysis of 17 access control vulnerabilities that \
         compromise smart contract permission systems, covering role management, \
         multi-signature protections, timelocks, delegation, and authentication.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map access control architecture (roles, permissions, hierarchies)",
            "Identify authentication mechanisms (modifiers, require statements)",
            "Locate administrative functions and privilege escalation points",
            "Find multi-signature implementations and timelock contracts",
            "Analyze delegation patterns and proxy contracts",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Role-Based Access Control Vulnerabilities",
                [
                    "Look for missing role checks on critical functions",
                    "Check role assignment paths for missing validation",
                    "Verify role hierarchies cannot be confused or circularly granted",
                    "Examine default admin role handling",
                ],
            )
            .section(
                "Multi-Signature Bypass",
                [
                    "Verify signer uniqueness enforcement on threshold checks",
                    "Check for nonce reuse across proposals",
                    "Analyze signature threshold manipulation",
                    "Look for emergency execution backdoors",
                ],
            )
            .section(
                "Timelock Circumvention",
                [
                    "Check delay enforcement against emergency overrides",
                    "Analyze delay parameter manipulation",
                    "Look for queue poisoning attacks",
                    "Verify execution window enforcement",
                ],
            )
            .section(
                "Delegation and Proxy Attacks",
                [
                    "Analyze delegatecall access control context preservation",
                    "Check for storage collision vulnerabilities",
                    "Look for implementation swap attacks",
                    "Verify proxy admin security",
                ],
            )
            .section(
                "Authentication Bypass",
                [
                    "Flag tx.origin used where msg.sender is required",
                    "Check ecrecover usage for malleability and replay protection",
                    "Verify zero-address results from ecrecover are rejected",
                ],
            ),
    )
    .stage(Stage::new(
        "Exploitation Validation",
        [
            "Practical exploitability, not just theoretical",
            "Economic incentives for attackers",
            "Required privileges or conditions",
            "Potential impact on protocol security",
        ],
    ))
    .with_documentation([
        ("Attack Vector Category", "Which of the 17 access control vectors"),
        ("Severity Classification", "Based on privilege level gained"),
        ("Attack Prerequisites", "Required conditions and access levels"),
        ("Exploitation Steps", "Detailed attack sequence"),
        ("Impact Assessment", "Potential damage and affected functions"),
        ("Proof of Concept", "Executable exploit demonstration"),
        ("Remediation Strategy", "Specific security improvements"),
    ])
    .with_validation([
        "Confirm actual exploitability through code analysis",
        "Verify bypass mechanisms work in practice",
        "Ensure economic incentives justify attack complexity",
        "Provide concrete code examples for vulnerabilities",
        "Focus on privilege escalation that leads to fund loss",
    ])
    .focus_example(
        "tx.origin Authentication Bypass",
        r#"
contract VulnerableAuth {
    address public owner;

    // VULNERABLE: tx.origin is the EOA that started the call chain,
    // so any contract the owner calls can relay into this check.
    function withdrawAll(address payable to) external {
        require(tx.origin == owner, "Unauthorized");
        to.transfer(address(this).balance);
    }
}

contract PhishingRelay {
    VulnerableAuth public target;

    // Owner calls an innocuous-looking function; relay drains the vault.
    function claimAirdrop() external {
        target.withdrawAll(payable(address(this)));
    }
}
"#,
    )
    .with_closing(
        "Focus on privilege boundaries: any path from an unprivileged caller to an \
         administrative state change is a finding, whether it crosses roles, \
         signatures, timelocks, or delegatecall context.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "role-escalation",
            "Role Escalation Attack",
            Severity::Critical,
            "Unauthorized privilege elevation through unprotected or misconfigured role assignment.",
        ),
        Vector::new(
            "role-check-bypass",
            "Role Check Bypass Attack",
            Severity::Critical,
            "Role validation bypassed via missing or inverted permission checks.",
        ),
        Vector::new(
            "multisig-bypass",
            "Multi-Signature Bypass Attack",
            Severity::Critical,
            "Multi-sig protection defeated through duplicate signers, nonce reuse, or threshold manipulation.",
        ),
        Vector::new(
            "admin-takeover-scheduling",
            "Admin Takeover Scheduling Attack",
            Severity::Critical,
            "Scheduled ownership transfers abused to stage a future admin takeover.",
        ),
        Vector::new(
            "backdoor-role-escalation",
            "Backdoor Role Escalation Attack",
            Severity::Critical,
            "Hidden privilege escalation paths left in role management code.",
        ),
        Vector::new(
            "timelock-bypass",
            "Timelock Bypass Attack",
            Severity::Critical,
            "Timelock protection circumvented via emergency overrides or delay manipulation.",
        ),
        Vector::new(
            "time-based-admin-takeover",
            "Time-Based Admin Takeover Attack",
            Severity::Critical,
            "Time-dependent admin transitions exploited to seize control.",
        ),
        Vector::new(
            "delegatecall-access-bypass",
            "Access Control Bypass via Delegate Call",
            Severity::Critical,
            "Delegatecall context switching used to evade caller checks.",
        ),
        Vector::new(
            "impersonation",
            "Impersonation Attack",
            Severity::Critical,
            "Identity impersonation through spoofed callers or forged credentials.",
        ),
        Vector::new(
            "backdoor-access",
            "Backdoor Access Attack",
            Severity::Critical,
            "Hidden access mechanisms granting undisclosed parties privileged entry.",
        ),
        Vector::new(
            "role-renounce",
            "Role Renounce Attack",
            Severity::High,
            "Malicious role renunciation that bricks recovery paths or strands privileges.",
        ),
        Vector::new(
            "role-hierarchy",
            "Role Hierarchy Attack",
            Severity::High,
            "Role hierarchy relationships exploited to reach admin capabilities indirectly.",
        ),
        Vector::new(
            "front-run-role-change",
            "Front-Run Role Change Attack",
            Severity::High,
            "Pending role changes front-run to act under soon-to-be-revoked privileges.",
        ),
        Vector::new(
            "role-rotation",
            "Role Rotation Attack",
            Severity::High,
            "Role rotation windows exploited while both old and new holders are active.",
        ),
        Vector::new(
            "low-level-call-bypass",
            "Access Control Bypass via Low-Level Call",
            Severity::High,
            "Low-level calls routed around modifier-protected entry points.",
        ),
        Vector::new(
            "tx-origin-confusion",
            "tx.origin vs msg.sender Attack",
            Severity::High,
            "Transaction origin confusion enabling phishing-relay authorization bypass.",
        ),
        Vector::new(
            "signature-based-bypass",
            "Signature-Based Bypass Attack",
            Severity::High,
            "Signature verification weaknesses (malleability, replay, zero-address) defeating auth.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 17);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 10);
        assert_eq!(counts.high, 7);
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_brief_renders() {
        let brief = detector().produce_brief().unwrap();
        assert!(brief.contains("tx.origin"));
        assert!(brief.contains("(`role-escalation`)"));
    }
}
