use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "core-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Core Attack Mechanisms Analysis",
        "Perform comprehensive analysis of 22 critical attack mechanisms that form \
         the foundation of smart contract exploits.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map contract architecture and dependencies",
            "Identify flash loan integration points",
            "Locate cross-chain bridges and message passing",
            "Find administrative functions and upgrade mechanisms",
            "Analyze tokenomics and price calculation mechanisms",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Flash Loan & MEV Attacks",
                [
                    "Trace flash loan callbacks into protocol state transitions",
                    "Check MEV preparation patterns staging multi-transaction attacks",
                ],
            )
            .section(
                "Cross-Chain Attack Vectors",
                [
                    "Verify balance accounting across chains and L2 bridges",
                    "Check message processing for forgery and replay",
                ],
            )
            .section(
                "Price & Share Manipulation",
                [
                    "Audit share price and share-to-asset conversion math",
                    "Check donation and rounding attack surfaces",
                ],
            )
            .section(
                "Administrative Attacks",
                [
                    "Check scheduled admin transitions and configuration update paths",
                    "Look for backdoor parameters reachable post-deployment",
                ],
            )
            .section(
                "Cryptographic Attacks",
                [
                    "Verify merkle roots are set and proofs verified correctly",
                    "Check signature and signer validation end to end",
                ],
            )
            .section(
                "Account Abstraction Attacks",
                [
                    "Check account execution paths and wallet migration flows",
                    "Verify user-operation validation against spoofed senders",
                ],
            )
            .section(
                "Specialized Protocol Attacks",
                [
                    "Audit Uniswap V4 hook integration points",
                    "Check reward processing and event emission integrity",
                ],
            ),
    )
    .with_closing(
        "These mechanisms recur as building blocks inside larger exploits; a hit \
         here usually compounds with protocol-specific vectors elsewhere in the \
         suite.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "advanced-flashloan-actions",
            "Advanced Flash Loan Actions",
            Severity::Critical,
            "Sophisticated flash loan manipulation techniques.",
        ),
        Vector::new(
            "mev-attack-preparation",
            "MEV Attack Preparation",
            Severity::Critical,
            "Staging transactions that position later extractable-value attacks.",
        ),
        Vector::new(
            "cross-chain-balance-manipulation",
            "Cross-Chain Balance Manipulation",
            Severity::Critical,
            "Balance accounting manipulated across chain boundaries.",
        ),
        Vector::new(
            "l2-bridge-state-manipulation",
            "L2 Bridge State Manipulation",
            Severity::Critical,
            "Layer 2 bridge state corruption.",
        ),
        Vector::new(
            "cross-chain-message-processing",
            "Cross-Chain Message Processing",
            Severity::Critical,
            "Inter-chain message forgery and processing exploitation.",
        ),
        Vector::new(
            "share-price-manipulation",
            "Share Price Manipulation",
            Severity::Critical,
            "Asset share price skewed through donations or conversion timing.",
        ),
        Vector::new(
            "share-conversion-manipulation",
            "Share-to-Asset Conversion Manipulation",
            Severity::Critical,
            "Conversion rate manipulation between shares and underlying assets.",
        ),
        Vector::new(
            "admin-takeover-scheduling",
            "Admin Takeover Scheduling",
            Severity::Critical,
            "Scheduled privilege transitions staged into takeover.",
        ),
        Vector::new(
            "configuration-backdoor",
            "Configuration Backdoor Updates",
            Severity::Critical,
            "Hidden configuration paths changing protocol behavior post-deployment.",
        ),
        Vector::new(
            "fake-merkle-root",
            "Fake Merkle Root Setting",
            Severity::Critical,
            "Fraudulent merkle roots admitting attacker-chosen claims.",
        ),
        Vector::new(
            "merkle-proof-bypass",
            "Merkle Proof Verification Bypass",
            Severity::Critical,
            "Proof verification circumvented through encoding or boundary flaws.",
        ),
        Vector::new(
            "uniswap-v4-hook",
            "Uniswap V4 Hook Manipulation",
            Severity::Critical,
            "Malicious or compromised V4 hooks manipulating pool behavior.",
        ),
        Vector::new(
            "signature-verification-manipulation",
            "Signature Verification Manipulation",
            Severity::High,
            "Signature scheme bypass through validation gaps.",
        ),
        Vector::new(
            "signer-address-manipulation",
            "Signer Address Manipulation",
            Severity::High,
            "Signer identity confusion including zero-address recovery results.",
        ),
        Vector::new(
            "reward-processing-manipulation",
            "Reward Processing Manipulation",
            Severity::High,
            "Reward distribution logic exploited for excess payouts.",
        ),
        Vector::new(
            "wallet-migration-manipulation",
            "Wallet Migration Manipulation",
            Severity::High,
            "Wallet migration flows redirected to attacker control.",
        ),
        Vector::new(
            "account-abstraction-targeting",
            "Account Abstraction Targeting",
            Severity::High,
            "ERC-4337-style account abstraction exploitation.",
        ),
        Vector::new(
            "account-execution-manipulation",
            "Account Execution Manipulation",
            Severity::High,
            "Account execution paths abused to run attacker calldata.",
        ),
        Vector::new(
            "honeypot-threshold-manipulation",
            "Honeypot Activation Threshold Manipulation",
            Severity::High,
            "Honeypot trigger thresholds tuned to trap victims.",
        ),
        Vector::new(
            "cryptographic-operation-manipulation",
            "Cryptographic Operation Manipulation",
            Severity::High,
            "Cryptographic primitive misuse enabling forgery or collisions.",
        ),
        Vector::new(
            "event-emission-manipulation",
            "Event Emission Manipulation",
            Severity::Medium,
            "Misleading event logs desynchronizing off-chain observers.",
        ),
        Vector::new(
            "gas-optimization-exploitation",
            "Gas Usage Optimization Exploitation",
            Severity::Medium,
            "Gas-optimization shortcuts bypassing safety checks.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 22);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 12);
        assert_eq!(counts.high, 8);
        assert_eq!(counts.medium, 2);
        assert!(catalog.duplicate_ids().is_empty());
    }
}
