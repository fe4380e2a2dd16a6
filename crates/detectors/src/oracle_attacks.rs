use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "oracle-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Oracle Manipulation Attack Vectors Analysis",
        "Perform comprehensive analysis of 9 critical oracle manipulation \
         vulnerabilities that exploit price feed dependencies, data source \
         corruption, and oracle infrastructure weaknesses.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map all oracle dependencies and price feed integrations",
            "Identify oracle providers (Chainlink, Uniswap TWAP, Band, Tellor, DIA)",
            "Locate price-dependent functions (liquidations, minting, swaps)",
            "Find oracle update mechanisms and validation logic",
            "Analyze fallback oracle implementations and circuit breakers",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Direct Price Manipulation",
                [
                    "Flag spot prices consumed without validation",
                    "Check liquidation and minting paths for single-source price trust",
                    "Verify deviation bounds before prices reach economic logic",
                ],
            )
            .section(
                "Flash Loan Oracle Manipulation",
                [
                    "Trace DEX pools that feed oracles reachable within one transaction",
                    "Check for manipulate-exploit-reverse sequences inside loan callbacks",
                    "Verify borrow-size economics against pool depth",
                ],
            )
            .section(
                "Chainlink Integration Issues",
                [
                    "Require staleness checks on latestRoundData timestamps",
                    "Require positive-price and round completeness validation",
                    "Check answeredInRound against roundId progression",
                ],
            )
            .section(
                "TWAP Manipulation",
                [
                    "Analyze observation window length against manipulation cost",
                    "Check for multi-block and just-before-snapshot skewing",
                    "Verify liquidity depth backing the observed pool",
                ],
            ),
    )
    .stage(
        Stage::titled("Protocol-Specific Oracle Analysis")
            .section(
                "Tellor",
                [
                    "Data reporter bribery or takeover",
                    "Dispute mechanism timing exploitation",
                    "Request parameter manipulation",
                ],
            )
            .section(
                "Band Protocol",
                [
                    "Validator set compromise economics",
                    "External data source corruption",
                    "Cross-chain relay manipulation",
                ],
            )
            .section(
                "DIA",
                [
                    "Underlying exchange manipulation and volume-weighting attacks",
                    "Oracle governance parameter changes",
                    "Outlier detection bypass",
                ],
            ),
    )
    .stage(Stage::new(
        "Exploitation Validation",
        [
            "Oracle update frequency and staleness thresholds",
            "Price validation mechanisms and circuit breakers",
            "Economic feasibility of oracle manipulation",
            "Multi-oracle fallback implementations",
            "Cross-oracle arbitrage opportunities",
        ],
    ))
    .with_documentation([
        ("Attack Vector Category", "Which of the 9 oracle vectors"),
        ("Oracle Provider Impact", "Specific oracle affected (Chainlink, TWAP, etc.)"),
        ("Manipulation Requirements", "Conditions needed for successful attack"),
        ("Economic Analysis", "Cost of manipulation vs. potential profit"),
        ("Time Sensitivity", "Update frequency and staleness dependencies"),
        ("Proof of Concept", "Oracle manipulation demonstration"),
        ("Remediation Strategy", "Validation, circuit breakers, multi-oracle systems"),
    ])
    .with_validation([
        "Confirm oracle manipulation feasibility and cost",
        "Verify price validation mechanisms effectiveness",
        "Ensure attack scenarios account for oracle security measures",
        "Provide concrete manipulation cost calculations",
        "Focus on vulnerabilities with significant financial impact potential",
    ])
    .focus_example(
        "Unvalidated Chainlink Round Data",
        r#"
contract ChainlinkOracleVulnerable {
    AggregatorV3Interface internal priceFeed;

    // VULNERABLE: no staleness, validity, or round completeness checks
    function getLatestPrice() public view returns (int) {
        (, int price,,,) = priceFeed.latestRoundData();
        return price;
    }

    function getSecurePrice() public view returns (uint256) {
        (uint80 roundId, int price,, uint timeStamp, uint80 answeredInRound) =
            priceFeed.latestRoundData();

        require(timeStamp > 0, "Round not complete");
        require(block.timestamp - timeStamp <= STALENESS_THRESHOLD, "Price too old");
        require(price > 0, "Invalid price");
        require(answeredInRound >= roundId, "Round not answered");

        return uint256(price);
    }
}
"#,
    )
    .focus_example(
        "Flash Loan Price Manipulation",
        r#"
contract FlashLoanOracleAttack {
    function executeOperation(address asset, uint256 amount, uint256 premium,
                              address, bytes calldata) external {
        // Skew the DEX pool the oracle reads
        swapExactIn(asset, targetToken, amount);

        // Exploit the protocol at the manipulated price
        target.exploit(oracle.getPrice(targetToken));

        // Reverse the swap and repay the loan with profit left over
        swapExactIn(targetToken, asset, profitAmount);
        IERC20(asset).transfer(msg.sender, amount + premium);
    }
}
"#,
    )
    .with_closing(
        "Weight findings by manipulation cost against extractable value; an oracle \
         that is expensive to move but guards a thin safety margin is still critical.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "direct-price-manipulation",
            "Direct Price Manipulation",
            Severity::Critical,
            "Spot price feeds moved directly to trigger liquidations or mispriced mints.",
        ),
        Vector::new(
            "flashloan-oracle",
            "Flash Loan Oracle Attack",
            Severity::Critical,
            "Flash-borrowed liquidity skewing a DEX-derived price within one transaction.",
        ),
        Vector::new(
            "advanced-oracle-manipulation",
            "Advanced Oracle Manipulation",
            Severity::Critical,
            "Cross-oracle arbitrage, update front-running, and sandwiched oracle updates.",
        ),
        Vector::new(
            "chainlink-oracle",
            "Chainlink Oracle Attack",
            Severity::Critical,
            "Missing staleness, validity, and round completeness checks on Chainlink feeds.",
        ),
        Vector::new(
            "uniswap-twap",
            "Uniswap TWAP Attack",
            Severity::Critical,
            "TWAP observation windows skewed by multi-block or just-before-snapshot trades.",
        ),
        Vector::new(
            "oracle-price-setting",
            "Oracle Price Setting",
            Severity::Critical,
            "Privileged or permissionless price-setting paths abused to post false values.",
        ),
        Vector::new(
            "tellor-oracle",
            "Tellor Oracle Attack",
            Severity::High,
            "Tellor reporter and dispute mechanism exploitation.",
        ),
        Vector::new(
            "band-protocol",
            "Band Protocol Attack",
            Severity::High,
            "Band validator, data source, and cross-chain relay attacks.",
        ),
        Vector::new(
            "dia-data",
            "DIA DATA Attack",
            Severity::High,
            "DIA methodology and data feed exploitation.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 9);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 6);
        assert_eq!(counts.high, 3);
        assert!(catalog.duplicate_ids().is_empty());
    }
}
