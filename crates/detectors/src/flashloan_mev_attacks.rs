use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "flashloan-mev-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Flash Loan and MEV Attack Vectors Analysis",
        "Perform comprehensive analysis of 19 critical flash loan and MEV (Maximal \
         Extractable Value) vulnerabilities that exploit atomicity, cross-protocol \
         arbitrage, and sophisticated attack strategies.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map flash loan providers (Aave, Balancer, Uniswap V2, dYdX)",
            "Identify MEV-vulnerable functions and price-dependent operations",
            "Locate governance mechanisms with token-based voting",
            "Find oracle dependencies and price calculation mechanisms",
            "Analyze cross-protocol arbitrage opportunities and routing",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Flash Loan Price Manipulation",
                [
                    "Trace borrowed liquidity into pools that feed pricing logic",
                    "Check manipulate-exploit-reverse atomicity within one transaction",
                    "Verify loan-size economics against pool depth and fees",
                ],
            )
            .section(
                "Governance Flash Loan Attacks",
                [
                    "Check voting power snapshots against same-block borrowing",
                    "Analyze multi-step proposal flows for flash-boosted quorum",
                ],
            )
            .section(
                "Recursive and Reentrant Flash Loans",
                [
                    "Test nested loans across providers",
                    "Check callback surfaces for reentry during active loans",
                ],
            )
            .section(
                "MEV and Sandwich Exploitation",
                [
                    "Check slippage tolerances exploitable by front-running",
                    "Analyze swap path routing for manipulation",
                    "Verify anti-sandwich defenses against evasion patterns",
                ],
            )
            .section(
                "Protocol-Specific Surfaces",
                [
                    "Aave: flash loan callback validation and fee accounting",
                    "Uniswap V4: hook-mediated pool manipulation",
                ],
            ),
    )
    .require("Atomicity Window", "What must complete inside a single transaction")
    .require("Capital Requirements", "Borrowed versus attacker-owned capital")
    .with_validation([
        "Confirm attacks fit within block gas limits",
        "Verify loan repayment still leaves attacker profit",
        "Model MEV competition for the same opportunity",
        "Account for provider fees and slippage in profit math",
        "Provide concrete exploit demonstrations",
    ])
    .focus_example(
        "Flash Loan Governance Vote",
        r#"
contract GovernanceFlashAttack {
    function executeOperation(address asset, uint256 amount, uint256 premium,
                              address, bytes calldata) external returns (bool) {
        // Borrowed tokens grant instant voting power
        governanceToken.delegate(address(this));
        governor.castVote(proposalId, true);

        // Queue execution before repaying
        governor.queue(proposalId);

        IERC20(asset).approve(msg.sender, amount + premium);
        return true;
    }
}
"#,
    )
    .with_closing(
        "Atomicity is the attacker's ally: any invariant that can be broken and \
         restored within one transaction is not an invariant. Evaluate every \
         price, vote, and balance read against flash-borrowed state.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "flashloan-price-manipulation",
            "Flash Loan Price Manipulation",
            Severity::Critical,
            "Pool prices skewed with borrowed liquidity inside one transaction.",
        ),
        Vector::new(
            "governance-token-flashloan",
            "Governance Token Flash Loan Attack",
            Severity::Critical,
            "Voting power flash-borrowed to pass or block proposals.",
        ),
        Vector::new(
            "advanced-flashloan",
            "Advanced Flash Loan Attack",
            Severity::Critical,
            "Multi-step flash loan exploitation chaining several protocols.",
        ),
        Vector::new(
            "multi-step-flashloan-governance",
            "Multi-Step Flash Loan Governance Attack",
            Severity::Critical,
            "Complex governance capture sequences built around borrowed tokens.",
        ),
        Vector::new(
            "flashloan-oracle-manipulation",
            "Flash Loan Oracle Manipulation",
            Severity::Critical,
            "Oracles fed manipulated prices during the loan window.",
        ),
        Vector::new(
            "recursive-flashloan",
            "Recursive Flash Loan Attack",
            Severity::Critical,
            "Nested loans across providers amplifying attack capital.",
        ),
        Vector::new(
            "flashloan-reentrancy",
            "Flash Loan Reentrancy Attack",
            Severity::Critical,
            "Reentry launched from inside flash loan callbacks.",
        ),
        Vector::new(
            "aave-flashloan",
            "Aave Flash Loan Attack",
            Severity::Critical,
            "Aave-specific callback and accounting exploitation.",
        ),
        Vector::new(
            "mev-arbitrage",
            "MEV Arbitrage Attack",
            Severity::Critical,
            "Extractable-value arbitrage against user transactions.",
        ),
        Vector::new(
            "price-manipulation-swap",
            "Price Manipulation Swap",
            Severity::Critical,
            "Swaps sized to move prices for dependent logic.",
        ),
        Vector::new(
            "uniswap-v4-protocol",
            "Protocol-Specific Uniswap V4 Attack",
            Severity::Critical,
            "V4 hook and singleton design exploitation.",
        ),
        Vector::new(
            "malicious-token-swap",
            "Malicious Token Swap",
            Severity::High,
            "Attacker-controlled tokens with hostile transfer hooks in swap paths.",
        ),
        Vector::new(
            "slippage-frontrun",
            "Slippage Front-Running Attack",
            Severity::High,
            "Loose slippage tolerances harvested by front-runners.",
        ),
        Vector::new(
            "swap-path-manipulation",
            "Swap Path Manipulation Attack",
            Severity::High,
            "Routing manipulated through attacker-favorable pools.",
        ),
        Vector::new(
            "ai-evading-sandwich",
            "AI-Evading Sandwich Attack",
            Severity::High,
            "Sandwich patterns shaped to dodge detection heuristics.",
        ),
        Vector::new(
            "sandwich-detection-bypass",
            "Sandwich Detection Attack",
            Severity::High,
            "Anti-sandwich mechanisms probed and bypassed.",
        ),
        Vector::new(
            "frontrun-bot",
            "Front-Running Bot Attack",
            Severity::High,
            "Automated mempool monitoring and priority-fee front-running.",
        ),
        Vector::new(
            "arbitrage-bot",
            "Arbitrage Bot Exploit",
            Severity::High,
            "Cross-protocol arbitrage bots draining mispriced liquidity.",
        ),
        Vector::new(
            "ai-evading-enhanced-sandwich",
            "AI-Evading Enhanced Sandwich",
            Severity::High,
            "Advanced sandwich evasion spreading execution across actors.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 19);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 11);
        assert_eq!(counts.high, 8);
        assert!(catalog.duplicate_ids().is_empty());
    }
}
