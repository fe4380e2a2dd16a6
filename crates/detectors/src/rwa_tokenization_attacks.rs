use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "rwa-tokenization-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive RWA Tokenization Attack Vectors Analysis",
        "Perform comprehensive analysis of 7 critical Real-World Asset (RWA) \
         tokenization vulnerabilities that exploit the intersection of physical \
         assets, legal frameworks, and blockchain technology.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map RWA tokenization infrastructure and custody mechanisms",
            "Identify asset valuation oracles and pricing mechanisms",
            "Locate regulatory compliance checkpoints and KYC/AML systems",
            "Find cross-border transfer mechanisms and jurisdictional controls",
            "Analyze physical asset verification and audit processes",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Physical-Digital Bridge Security",
                [
                    "Check custody attestations against physical asset reality",
                    "Verify tokens cannot outlive or duplicate the underlying asset",
                    "Analyze verification processes for forged documentation",
                ],
            )
            .section(
                "Valuation and Liquidation",
                [
                    "Check valuation oracles for appraisal manipulation",
                    "Analyze forced liquidation triggers against stale valuations",
                ],
            )
            .section(
                "Jurisdictional Surfaces",
                [
                    "Map compliance checkpoints bypassable by routing",
                    "Check cross-border transfer controls for regulatory arbitrage",
                ],
            ),
    )
    .require("Off-Chain Dependency", "The custodian, registry, or legal process trusted")
    .with_closing(
        "RWA risk concentrates where the chain takes an off-chain fact on faith; \
         every finding names the attestation and what happens when it lies.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "asset-custody-bridge",
            "Asset Custody Bridge Attack",
            Severity::Critical,
            "Custody attestation compromise divorcing tokens from physical assets.",
        ),
        Vector::new(
            "asset-liquidation-manipulation",
            "Asset Liquidation Manipulation",
            Severity::Critical,
            "Forced liquidations triggered against manipulated or stale valuations.",
        ),
        Vector::new(
            "asset-valuation-oracle",
            "Asset Valuation Oracle Manipulation",
            Severity::High,
            "RWA appraisal and valuation feed manipulation.",
        ),
        Vector::new(
            "cross-border-transfer",
            "Cross-Border Asset Transfer Exploit",
            Severity::High,
            "International transfer control exploitation.",
        ),
        Vector::new(
            "legal-jurisdiction-arbitrage",
            "Legal Jurisdiction Arbitrage Attack",
            Severity::Medium,
            "Regulatory arbitrage across conflicting jurisdictions.",
        ),
        Vector::new(
            "regulatory-compliance-bypass",
            "Regulatory Compliance Bypass",
            Severity::Medium,
            "KYC/AML checkpoint circumvention.",
        ),
        Vector::new(
            "physical-verification-bypass",
            "Physical Asset Verification Bypass",
            Severity::Medium,
            "Asset verification process gaming with forged evidence.",
        ),
    ])
}
