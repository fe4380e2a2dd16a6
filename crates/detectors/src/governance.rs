use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "governance";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Governance Attack Vectors Analysis",
        "Perform comprehensive governance vulnerability analysis targeting 8 attack \
         vectors across on-chain, off-chain, and framework-specific DAO designs.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map governance architecture (contracts, roles, permissions)",
            "Identify voting mechanisms (on-chain, off-chain, hybrid)",
            "Locate timelock contracts and delay mechanisms",
            "Find proposal creation and execution functions",
            "Check for flash loan integration points",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Governance Function Attacks",
                [
                    "Search for unprotected admin functions (onlyOwner, onlyGovernance)",
                    "Check access control bypass patterns",
                    "Verify multi-sig requirements and threshold validations",
                    "Look for role escalation vulnerabilities",
                ],
            )
            .section(
                "Timelock Bypass Vulnerabilities",
                [
                    "Analyze timelock delay enforcement",
                    "Check for emergency execution backdoors",
                    "Verify proposal queuing and execution flow",
                    "Look for timestamp manipulation vulnerabilities",
                ],
            )
            .section(
                "Flash Loan Integration Risks",
                [
                    "Identify governance tokens that can be flash borrowed",
                    "Check voting power calculation timing",
                    "Analyze snapshot mechanisms and block-based voting",
                    "Look for same-block governance attacks",
                ],
            )
            .section(
                "DAO Framework Specific Issues",
                [
                    "Compound: delegation, proposal thresholds, quorum manipulation",
                    "Aragon: voting app permissions, forwarding vulnerabilities",
                    "DAOstack: reputation systems, proposal boosting attacks",
                    "Moloch: ragequit mechanics, dilution attacks",
                ],
            )
            .section(
                "Off-Chain Governance Risks",
                [
                    "Verify signature validation in Snapshot-style systems",
                    "Check for replay attacks in off-chain voting",
                    "Analyze IPFS content integrity for proposals",
                    "Look for meta-transaction vulnerabilities",
                ],
            ),
    )
    .stage(Stage::new(
        "Exploitation Validation",
        [
            "Economic feasibility of the attack",
            "Required governance token holdings",
            "Timing constraints and execution windows",
            "Potential impact and fund exposure",
        ],
    ))
    .with_documentation([
        ("Attack Vector Category", "Which of the 8 governance vectors it represents"),
        ("Economic Impact", "Estimated funds at risk"),
        ("Attack Prerequisites", "Required conditions and resources"),
        ("Step-by-step Exploit", "Concrete attack scenario"),
        ("Proof of Concept", "Solidity code demonstrating the attack"),
        ("Remediation Strategy", "Specific fixes and best practices"),
    ])
    .with_validation([
        "Confirm actual exploitability, not theoretical issues",
        "Verify economic incentives align with attack costs",
        "Ensure attack scenarios account for real-world constraints",
        "Provide actionable remediation with code examples",
        "Classify severity based on funds at risk and likelihood",
    ])
    .focus_example(
        "Flash Loan Governance Takeover",
        r#"
contract VulnerableGovernor {
    IERC20 public governanceToken;
    mapping(uint256 => Proposal) public proposals;

    // VULNERABLE: voting power read at vote time, not from a prior snapshot
    function castVote(uint256 proposalId, bool support) external {
        uint256 weight = governanceToken.balanceOf(msg.sender);
        proposals[proposalId].votes[support] += weight;
    }

    function execute(uint256 proposalId) external {
        Proposal storage p = proposals[proposalId];
        require(p.votes[true] > p.votes[false], "Defeated");
        // Executes arbitrary calldata approved in the same block
        (bool ok,) = p.target.call(p.data);
        require(ok, "Execution failed");
    }
}
// Attack: flash borrow governance tokens, vote, execute, repay in one tx.
"#,
    )
    .with_closing(
        "Treat any path where transient token balances, framework quirks, or \
         off-chain signatures can swing a proposal as a critical governance finding.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "governance-function",
            "Governance Function Attack",
            Severity::Critical,
            "Direct exploitation of unprotected or under-protected governance functions.",
        ),
        Vector::new(
            "timelock-bypass",
            "Timelock Bypass",
            Severity::Critical,
            "Governance timelock circumvention through backdoors or queue manipulation.",
        ),
        Vector::new(
            "flashloan-governance",
            "Enhanced Governance Attack with Flash Loans",
            Severity::Critical,
            "Flash-borrowed voting power combined with same-block proposal execution.",
        ),
        Vector::new(
            "compound-governance",
            "Compound Governance Attack",
            Severity::Critical,
            "Compound-style delegation, threshold, and quorum exploits.",
        ),
        Vector::new(
            "aragon-voting",
            "Aragon Voting Attack",
            Severity::Critical,
            "Aragon DAO voting app permission and forwarding manipulation.",
        ),
        Vector::new(
            "daostack-proposal",
            "DAOstack Proposal Attack",
            Severity::Critical,
            "DAOstack reputation and proposal boosting exploitation.",
        ),
        Vector::new(
            "moloch-ragequit",
            "Moloch Ragequit Attack",
            Severity::High,
            "Moloch DAO ragequit mechanics abused to dodge dilution or drain shares.",
        ),
        Vector::new(
            "snapshot-offchain",
            "Snapshot Off-Chain Attack",
            Severity::High,
            "Off-chain vote manipulation via signature replay or content tampering.",
        ),
    ])
}
