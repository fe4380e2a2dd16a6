use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "privacy-zk-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Privacy and Zero-Knowledge Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 critical Privacy and Zero-Knowledge \
         cryptographic vulnerabilities that exploit privacy-preserving mechanisms, \
         ZK proof systems, and anonymous interaction protocols.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map Zero-Knowledge proof systems and circuit implementations",
            "Identify privacy pool mechanisms and anonymity sets",
            "Locate trusted setup ceremonies and parameter generation",
            "Find anonymous voting protocols and verification systems",
            "Analyze privacy-preserving transaction flows and metadata handling",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Proof System Integrity",
                [
                    "Check circuit constraints for under-constrained signals",
                    "Verify on-chain verifiers against malformed proofs",
                    "Analyze trusted setup parameter provenance",
                ],
            )
            .section(
                "Privacy Pool Economics",
                [
                    "Check anonymity set size against deanonymization economics",
                    "Analyze deposit/withdrawal correlation surfaces",
                ],
            )
            .section(
                "Anonymous Voting",
                [
                    "Check nullifier handling against double voting",
                    "Analyze vote-buying enabled by receipt-freeness gaps",
                ],
            ),
    )
    .require("Cryptographic Assumption", "Setup, circuit, or protocol assumption under attack")
    .with_closing(
        "Privacy failures are quiet: a finding may leak identities or admit forged \
         proofs without any visible state change, so verification depth matters \
         more than impact theatrics here.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "privacy-pool-economic",
            "Privacy Pool Economic Attack",
            Severity::Medium,
            "Privacy pool exploitation through anonymity set and fee economics.",
        ),
        Vector::new(
            "anonymous-voting-manipulation",
            "Anonymous Voting Manipulation",
            Severity::Medium,
            "Anonymous vote attacks via nullifier and receipt weaknesses.",
        ),
        Vector::new(
            "zk-circuit-manipulation",
            "Zero-Knowledge Proof Circuit Manipulation",
            Severity::Low,
            "Under-constrained circuits admitting forged witness values.",
        ),
        Vector::new(
            "zk-rollup-privacy-leak",
            "ZK-Rollup Privacy Leak Exploitation",
            Severity::Low,
            "Metadata and state diff leakage deanonymizing rollup users.",
        ),
        Vector::new(
            "zk-snark-trusted-setup",
            "ZK-SNARK Trusted Setup Exploitation",
            Severity::Low,
            "Compromised setup ceremonies enabling universal proof forgery.",
        ),
    ])
}
