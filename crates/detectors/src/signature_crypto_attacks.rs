use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "signature-crypto-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Signature and Cryptographic Attack Vectors Analysis",
        "Perform comprehensive analysis of 9 critical attack vectors related to \
         signature schemes, cryptographic primitives, and verification mechanisms in \
         smart contracts.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map all signature verification functions",
            "Identify cryptographic primitive usage",
            "Locate hash function implementations",
            "Find merkle proof systems",
            "Analyze EIP-712 implementations",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Signature Replay Vulnerabilities",
                [
                    "Check signatures for contract, chain, and time binding",
                    "Verify nonce consumption on every authenticated path",
                    "Analyze cross-chain and fork replay exposure",
                ],
            )
            .section(
                "Signature Manipulation",
                [
                    "Check s-value range enforcement against malleability",
                    "Verify v-value handling and multi-signature aggregation",
                ],
            )
            .section(
                "Ecrecover Vulnerabilities",
                [
                    "Verify zero-address results are rejected",
                    "Check invalid signature acceptance paths",
                ],
            )
            .section(
                "EIP-712 Implementation Flaws",
                [
                    "Check domain separator construction and caching",
                    "Verify type hashes match encoded structures",
                    "Analyze permit functions for forgery surfaces",
                ],
            )
            .section(
                "Hash and Merkle Weaknesses",
                [
                    "Check abi.encodePacked collisions with dynamic types",
                    "Verify merkle leaves are domain-separated from internal nodes",
                    "Analyze proof validation for second-preimage acceptance",
                ],
            ),
    )
    .require("Binding Scope", "What the signature fails to bind (contract, chain, nonce, expiry)")
    .focus_example(
        "Missing Replay Protection",
        r#"
contract VulnerablePayout {
    mapping(address => bool) public operators;

    // VULNERABLE: nothing binds the signature to this contract, a nonce,
    // or an expiry, so one authorization pays out forever, anywhere.
    function claim(uint256 amount, bytes calldata sig) external {
        bytes32 digest = keccak256(abi.encodePacked(msg.sender, amount));
        address signer = recover(digest, sig);
        require(operators[signer], "Bad signer");
        payable(msg.sender).transfer(amount);
    }
}
"#,
    )
    .with_closing(
        "Every accepted signature should answer who signed, for which contract, on \
         which chain, and until when; a finding is any path where one of those \
         answers is missing.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "advanced-cryptographic",
            "Advanced Cryptographic Attack",
            Severity::Critical,
            "Cryptographic primitive exploitation including weak RNG and curve edge cases.",
        )
        .with_notes([
            "Weak random number generation",
            "Elliptic curve vulnerabilities",
            "Side-channel attacks on crypto operations",
        ]),
        Vector::new(
            "hash-collision",
            "Hash Collision Exploit",
            Severity::Critical,
            "Collision attacks against hashes, merkle trees, and storage slots.",
        )
        .with_notes([
            "Birthday attack exploitation",
            "Merkle tree collision generation",
            "Storage slot collision attacks",
        ]),
        Vector::new(
            "signature-replay",
            "Signature Replay Attack",
            Severity::High,
            "Signatures reused across contracts, chains, and time.",
        )
        .with_notes([
            "Cross-contract signature reuse",
            "Nonce-less signature attacks",
            "Time-unbounded signature abuse",
        ]),
        Vector::new(
            "enhanced-signature-manipulation",
            "Enhanced Signature Manipulation",
            Severity::High,
            "Malleability and component-value manipulation of ECDSA signatures.",
        )
        .with_notes([
            "R/S value manipulation",
            "V value confusion attacks",
            "Multi-signature manipulation",
        ]),
        Vector::new(
            "eip1559-chain-id",
            "EIP-1559 Chain ID Manipulation",
            Severity::High,
            "Chain ID confusion enabling cross-chain and fork replay.",
        )
        .with_notes([
            "Cross-chain transaction replay",
            "Chain ID validation bypass",
        ]),
        Vector::new(
            "nonce-manipulation",
            "Nonce Manipulation Attack",
            Severity::High,
            "Nonce reuse, gaps, and overflow in authenticated flows.",
        )
        .with_notes([
            "Nonce gap attacks",
            "Parallel nonce exploitation",
        ]),
        Vector::new(
            "eip712-forgery",
            "EIP-712 Signature Forgery",
            Severity::High,
            "Domain separator and type hash confusion forging structured data.",
        )
        .with_notes([
            "Domain separator manipulation",
            "Type hash confusion",
            "Permit function exploitation",
        ]),
        Vector::new(
            "signature-verification-bypass",
            "Signature Verification Bypass",
            Severity::High,
            "Ecrecover edge cases and verification logic flaws.",
        )
        .with_notes([
            "Zero address returns",
            "Invalid signature acceptance",
        ]),
        Vector::new(
            "merkle-proof-manipulation",
            "Merkle Proof Manipulation",
            Severity::High,
            "False proofs via second preimages and tree structure exploitation.",
        )
        .with_notes([
            "Merkle tree second preimage",
            "Proof validation bypass",
        ]),
    ])
}
