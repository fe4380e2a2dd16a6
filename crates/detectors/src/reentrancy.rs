use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "reentrancy";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Reentrancy Attack Vectors Analysis",
        "Perform comprehensive analysis of 10 critical reentrancy attack vectors, \
         covering basic, cross-contract, recursive, flash loan combinations, and \
         specialized variants.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map external call patterns",
            "Identify state change sequences",
            "Locate callback opportunities",
            "Find inter-contract dependencies",
            "Analyze function call flows",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Basic Reentrancy Detection",
                [
                    "Check external calls made before state updates",
                    "Analyze withdrawal patterns for Checks-Effects-Interactions violations",
                    "Test callback possibilities from receiving contracts",
                    "Verify balance manipulation opportunities",
                ],
            )
            .section(
                "Cross-Contract Analysis",
                [
                    "Map inter-contract relationships and shared state dependencies",
                    "Analyze cross-contract calls for chained reentry",
                    "Test multi-contract exploitation sequences",
                ],
            )
            .section(
                "Advanced Pattern Detection",
                [
                    "Check flash loan integrations for callback reentry",
                    "Analyze delegatecall usage and storage context switching",
                    "Look for recursive call patterns and depth limits",
                    "Verify ERC721/ERC777 hook and view function side effects",
                ],
            )
            .section(
                "State Dependency Analysis",
                [
                    "Map state-dependent conditions guarding external calls",
                    "Check conditional reentrancy through state machine transitions",
                    "Test complex multi-step state corruption",
                ],
            ),
    )
    .stage(
        Stage::titled("Reentrancy-Specific Exploit Patterns")
            .section(
                "Classic Reentrancy",
                [
                    "External call before balance update",
                    "Withdrawal function exploitation and balance drain",
                    "State corruption through repeated callbacks",
                ],
            )
            .section(
                "Advanced Reentrancy",
                [
                    "Multi-contract coordination with flash loan amplification",
                    "Cross-function manipulation of not-yet-updated state",
                    "Delegatecall context attacks through proxies",
                ],
            ),
    )
    .require("State Impact", "What state changes are exploited")
    .require("Call Flow", "Detailed sequence of function calls")
    .with_validation([
        "Test with realistic attack scenarios",
        "Verify callback mechanisms exist",
        "Confirm state corruption possibilities",
        "Account for gas limitations",
        "Provide concrete exploit demonstrations",
    ])
    .focus_example(
        "Basic Reentrancy Attack",
        r#"
contract VulnerableWithdrawal {
    mapping(address => uint256) public balances;

    function deposit() external payable {
        balances[msg.sender] += msg.value;
    }

    // VULNERABLE: external call before state update
    function withdraw(uint256 amount) external {
        require(balances[msg.sender] >= amount, "Insufficient balance");

        (bool success,) = msg.sender.call{value: amount}("");
        require(success, "Transfer failed");

        // State update happens after the external call
        balances[msg.sender] -= amount;
    }
}

contract BasicReentrancyAttack {
    VulnerableWithdrawal public target;
    uint256 public attackAmount;

    function attack() external payable {
        attackAmount = msg.value;
        target.deposit{value: attackAmount}();
        target.withdraw(attackAmount);
    }

    // Called by target.withdraw(); reenters while the stale balance persists
    receive() external payable {
        if (address(target).balance >= attackAmount) {
            target.withdraw(attackAmount);
        }
    }
}
"#,
    )
    .focus_example(
        "Cross-Function Reentrancy",
        r#"
contract CrossFunctionVulnerable {
    mapping(address => uint256) public balances;

    function withdraw(uint256 amount) external {
        require(balances[msg.sender] >= amount, "Insufficient balance");

        (bool success,) = msg.sender.call{value: amount}("");
        require(success, "Transfer failed");

        balances[msg.sender] -= amount;
    }

    // VULNERABLE: separate function callable during withdraw reentrancy,
    // reads the balance that withdraw has not yet decremented
    function claimReward() external {
        uint256 reward = balances[msg.sender] / 10;
        (bool success,) = msg.sender.call{value: reward}("");
        require(success, "Reward transfer failed");
    }
}
"#,
    )
    .with_closing(
        "Focus on identifying all types of reentrancy vulnerabilities including \
         callback-based attacks, state manipulation through external calls, and \
         complex multi-step reentrancy scenarios. Pay special attention to the \
         timing of state updates relative to external calls.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "basic-reentrancy",
            "Basic Reentrancy Attack",
            Severity::Critical,
            "Classic single-function reentrancy through an external call made before state updates.",
        )
        .with_notes([
            "External call before state update",
            "Checks-Effects-Interactions pattern violations",
            "Withdrawal function exploitation",
            "Balance manipulation attacks",
        ]),
        Vector::new(
            "cross-contract-reentrancy",
            "Cross-Contract Reentrancy Attack",
            Severity::Critical,
            "Inter-contract reentrancy exploiting shared state across cooperating contracts.",
        )
        .with_notes([
            "Multi-contract state dependencies",
            "Shared state corruption",
            "Cross-system reentrancy chains",
        ]),
        Vector::new(
            "recursive-reentrancy",
            "Recursive Reentrancy Attack",
            Severity::Critical,
            "Deep recursive call exploitation compounding state corruption per level.",
        )
        .with_notes([
            "Stack depth manipulation",
            "Multi-level callback attacks",
            "Compound recursive effects",
        ]),
        Vector::new(
            "flashloan-amplified-reentrancy",
            "Advanced Reentrancy with Flash Loans",
            Severity::Critical,
            "Flash loan liquidity amplifying a reentrancy sequence into a leveraged drain.",
        )
        .with_notes([
            "Temporary liquidity exploitation",
            "Multi-step attack sequences",
            "Flash loan callback manipulation",
        ]),
        Vector::new(
            "cross-function-reentrancy",
            "Cross-Function Reentrancy",
            Severity::Critical,
            "Reentry into a different function that reads state the first call has not yet settled.",
        )
        .with_notes([
            "State inconsistency exploitation across functions",
            "Internal function manipulation",
            "Cross-function state corruption",
        ]),
        Vector::new(
            "delegatecall-reentrancy",
            "Delegated Call Reentrancy",
            Severity::Critical,
            "Delegatecall context manipulation reentering through proxy or library code.",
        )
        .with_notes([
            "Storage layout exploitation",
            "Proxy pattern reentrancy",
            "Library function reentrancy",
        ]),
        Vector::new(
            "flashloan-callback-reentrancy",
            "Flash Loan Reentrancy",
            Severity::Critical,
            "Reentry launched from inside a flash loan callback while pool invariants are suspended.",
        )
        .with_notes([
            "Temporary state manipulation during the loan window",
            "Multi-protocol flash loan attacks",
            "Flash loan oracle manipulation",
        ]),
        Vector::new(
            "state-dependent-reentrancy",
            "State-Dependent Reentrancy",
            Severity::High,
            "Conditional reentrancy reachable only under specific contract states.",
        )
        .with_notes([
            "State machine manipulation",
            "Context-dependent vulnerabilities",
            "Complex state reentrancy patterns",
        ]),
        Vector::new(
            "erc721-reentrancy",
            "ERC721 Reentrancy Attack",
            Severity::High,
            "NFT transfer hooks (onERC721Received) abused to reenter marketplaces and minting flows.",
        )
        .with_notes([
            "Token transfer callback attacks",
            "Minting/burning reentrancy",
            "NFT marketplace exploitation",
        ]),
        Vector::new(
            "view-function-reentrancy",
            "View Function Reentrancy",
            Severity::Medium,
            "Read-only functions with external calls used as indirect reentry points.",
        )
        .with_notes([
            "View function callback attacks",
            "State reading manipulation",
            "Indirect state effects",
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectorguard::detector::CommandRegistry;

    #[test]
    fn test_catalog_severity_split() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 7);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 1);
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_brief_orders_bands_and_keeps_every_vector() {
        let mut registry = CommandRegistry::new();
        registry.register(NAME, detector).unwrap();

        let brief = (registry.resolve(NAME).unwrap())().produce_brief().unwrap();

        let catalog = catalog();
        for id in catalog.ids() {
            assert!(brief.contains(&format!("(`{id}`)")), "missing {id}");
        }

        // All 7 critical entries appear before the 2 high entries, which
        // appear before the 1 medium entry.
        let last_critical = brief.find("(`flashloan-callback-reentrancy`)").unwrap();
        let first_high = brief.find("(`state-dependent-reentrancy`)").unwrap();
        let last_high = brief.find("(`erc721-reentrancy`)").unwrap();
        let medium = brief.find("(`view-function-reentrancy`)").unwrap();
        assert!(last_critical < first_high);
        assert!(last_high < medium);
    }
}
