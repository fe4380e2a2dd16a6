use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "arithmetic-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Arithmetic Attack Vectors Analysis",
        "Perform comprehensive analysis of 9 critical arithmetic and mathematical \
         vulnerabilities that exploit computational weaknesses in smart contracts.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map all arithmetic operations in the codebase",
            "Identify unchecked math operations (especially in older Solidity versions)",
            "Locate price calculation mechanisms and share conversion functions",
            "Find division operations and potential zero denominators",
            "Analyze precision-sensitive calculations (tokens, percentages)",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Integer Overflow and Underflow",
                [
                    "Audit pre-0.8.0 contracts for unguarded additions and subtractions",
                    "Review every unchecked block for justified bounds",
                    "Check multiplications against operand magnitude assumptions",
                ],
            )
            .section(
                "Division by Zero",
                [
                    "Trace denominators to their zero states (empty supply, unset config)",
                    "Check modulo operations for zero divisors",
                    "Verify guards exist before ratios reach economic logic",
                ],
            )
            .section(
                "Precision Loss",
                [
                    "Find fee and reward computations where small amounts round to zero",
                    "Check multiply-before-divide ordering",
                    "Verify rounding direction favors the protocol, not the caller",
                ],
            )
            .section(
                "Share Price Manipulation",
                [
                    "Check vault share math for first-depositor attacks (totalShares = 0)",
                    "Look for inflation attacks via direct asset transfer",
                    "Verify deposit/withdraw round-trip cannot mint value",
                ],
            ),
    )
    .require("Numeric Range", "Concrete operand values that trigger the fault")
    .with_closing(
        "Every arithmetic finding needs concrete numbers: the operand values that \
         overflow, truncate to zero, or divide by zero, and the resulting \
         balance-sheet impact.",
    )
    .focus_example(
        "First Depositor Share Inflation",
        r#"
contract VulnerableVault {
    uint256 public totalShares;
    IERC20 public asset;

    // VULNERABLE: first depositor mints 1 wei of shares, then transfers
    // assets directly to the vault to inflate share price so later
    // depositors round down to zero shares.
    function deposit(uint256 amount) external returns (uint256 shares) {
        uint256 totalAssets = asset.balanceOf(address(this));
        shares = totalShares == 0
            ? amount
            : (amount * totalShares) / totalAssets;
        totalShares += shares;
        asset.transferFrom(msg.sender, address(this), amount);
    }
}
"#,
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "integer-overflow",
            "Integer Overflow Attack",
            Severity::Critical,
            "Unchecked additions wrapping past the type maximum to corrupt balances.",
        ),
        Vector::new(
            "integer-underflow",
            "Integer Underflow Attack",
            Severity::Critical,
            "Unchecked subtractions wrapping below zero into enormous balances.",
        ),
        Vector::new(
            "multiplication-overflow",
            "Multiplication Overflow Attack",
            Severity::Critical,
            "Products exceeding type bounds in price, reward, or interest math.",
        ),
        Vector::new(
            "enhanced-overflow",
            "Enhanced Overflow Attack",
            Severity::Critical,
            "Multi-step overflow techniques routed through unchecked blocks and casts.",
        ),
        Vector::new(
            "share-price-manipulation",
            "Share Price Calculation Manipulation",
            Severity::Critical,
            "Vault share conversion math skewed via first deposits or donated assets.",
        ),
        Vector::new(
            "division-by-zero",
            "Division by Zero Attack",
            Severity::High,
            "Zero denominators from empty supplies or unset parameters reverting or corrupting flows.",
        ),
        Vector::new(
            "precision-loss",
            "Precision Loss Attack",
            Severity::High,
            "Rounding and truncation errors accumulated or directed against the protocol.",
        ),
        Vector::new(
            "enhanced-arithmetic",
            "Enhanced Arithmetic Attack",
            Severity::High,
            "Complex composed arithmetic exploits spanning multiple operations.",
        ),
        Vector::new(
            "modulo-bias",
            "Modulo Bias Attack",
            Severity::Medium,
            "Biased modulo reductions exploited in selection or distribution logic.",
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
        assert_eq!(counts.critical, 5);
        assert_eq!(counts.high, 3);
        assert_eq!(counts.medium, 1);
    }
}
