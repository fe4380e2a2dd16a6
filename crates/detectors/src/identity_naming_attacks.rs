use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "identity-naming-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Identity and Naming System Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 attack vectors targeting decentralized \
         identity and naming systems including ENS, Unstoppable Domains, BrightID, \
         Civic Identity, and Proof of Humanity, focusing on identity spoofing, domain \
         hijacking, and verification bypasses.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map identity system architectures",
            "Identify verification mechanisms",
            "Locate resolver systems",
            "Find registration processes",
            "Analyze trust assumptions",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Domain System Attacks",
                [
                    "Check resolver and reverse-resolution trust in consuming contracts",
                    "Analyze subdomain delegation for takeover paths",
                    "Verify registrar controller and expiry handling",
                ],
            )
            .section(
                "Identity Verification Bypasses",
                [
                    "Check uniqueness proofs against sybil coordination",
                    "Analyze vouching and challenge systems for collusion",
                    "Verify credential validation against spoofed attestations",
                ],
            )
            .section(
                "Cross-System Identity Conflicts",
                [
                    "Map identities reused across systems with differing guarantees",
                    "Check cross-chain domain state conflicts",
                ],
            ),
    )
    .require("Trust Consumer", "The contract or process that acts on the spoofed identity")
    .with_closing(
        "Naming and identity layers transfer trust; every consumer that resolves a \
         name or accepts a proof inherits the weakest link in that system's \
         registration pipeline.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "ens",
            "ENS Attack",
            Severity::High,
            "ENS domain hijacking, resolver manipulation, and reverse-resolution spoofing.",
        )
        .with_notes([
            "Subdomain takeover exploits",
            "Reverse resolution spoofing",
            "Registrar controller exploitation",
        ]),
        Vector::new(
            "unstoppable-domains",
            "Unstoppable Domains Attack",
            Severity::High,
            "Resolution and metadata manipulation including IPFS content hijacking.",
        )
        .with_notes([
            "Registry controller exploitation",
            "Cross-chain domain conflicts",
            "IPFS content hijacking",
        ]),
        Vector::new(
            "brightid",
            "BrightID Attack",
            Severity::Medium,
            "Identity graph manipulation and coordinated sybil attacks.",
        )
        .with_notes([
            "Verification node compromise",
            "Connection spoofing",
            "Uniqueness proof bypasses",
        ]),
        Vector::new(
            "civic-identity",
            "Civic Identity Attack",
            Severity::Medium,
            "Verification bypasses and credential spoofing against KYC flows.",
        )
        .with_notes([
            "Verifier node manipulation",
            "KYC process gaming",
        ]),
        Vector::new(
            "proof-of-humanity",
            "Proof of Humanity Attack",
            Severity::Medium,
            "Submission, challenge, and vouching system abuse including identity farming.",
        )
        .with_notes([
            "Challenge system exploitation",
            "Vouching system abuse",
            "Identity farming attacks",
        ]),
    ])
}
