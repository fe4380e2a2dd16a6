use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "intent-aa-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Intent and Account Abstraction Attack Vectors Analysis",
        "Perform comprehensive analysis of 9 critical attack vectors related to \
         intent-based protocols and account abstraction (ERC-4337) implementations.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map intent protocol architecture and solver networks",
            "Identify ERC-4337 components (EntryPoint, Factory, Paymaster)",
            "Locate bundler infrastructure and mempool access",
            "Find signature aggregation implementations",
            "Analyze intent dependency graphs",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Paymaster Exploitation",
                [
                    "Check paymaster validation for drain-inducing user operations",
                    "Analyze stake and withdrawal timing exploits",
                    "Look for backdoored paymaster deployments",
                ],
            )
            .section(
                "Intent System Attacks",
                [
                    "Check intent parameters for post-signature tampering",
                    "Analyze solver bidding for collusion and hidden fees",
                    "Map cross-intent dependencies for cascade and atomicity failures",
                ],
            )
            .section(
                "Bundler Infrastructure",
                [
                    "Check bundler censorship and selective inclusion power",
                    "Analyze bundler-level MEV extraction",
                ],
            )
            .section(
                "UserOperation Security",
                [
                    "Verify nonce handling against replay and gap attacks",
                    "Check cross-chain UserOp replay protection",
                    "Verify expiry enforcement on stale operations",
                ],
            )
            .section(
                "Signature Schemes and Factories",
                [
                    "Check BLS/Schnorr aggregation for rogue key and nonce reuse",
                    "Verify factory creation against predicted-address collisions",
                ],
            ),
    )
    .require("ERC-4337 Component", "EntryPoint, bundler, paymaster, factory, or aggregator involved")
    .with_closing(
        "Account abstraction moves validation into contracts; audit every component \
         that can pay, order, or replay a user operation as if it were a bank teller.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "paymaster-exploitation",
            "Account Abstraction Paymaster Exploitation",
            Severity::Critical,
            "Paymaster fund drainage, stake manipulation, and backdoored deployments.",
        )
        .with_notes([
            "Paymaster fund drainage attacks",
            "Stake manipulation and withdrawal exploits",
            "Malicious paymaster deployment with backdoors",
        ]),
        Vector::new(
            "cross-intent-dependency",
            "Cross-Intent Dependency Attack",
            Severity::Critical,
            "Intent cascade failures, atomicity violations, and circular dependency exploits.",
        )
        .with_notes([
            "Intent cascade failures and atomicity violations",
            "Circular dependency exploits",
            "Multi-intent coordination attacks",
        ]),
        Vector::new(
            "intent-manipulation",
            "Intent Manipulation Attack",
            Severity::High,
            "User intent parameter tampering and solver collusion.",
        )
        .with_notes([
            "Solver collusion and bid manipulation",
            "Intent replay and modification attacks",
        ]),
        Vector::new(
            "bundler-censorship",
            "Bundler Censorship Attack",
            Severity::High,
            "Bundler-level selective censorship, DoS, and MEV extraction.",
        )
        .with_notes([
            "Selective censorship and DoS attacks",
            "Bundler MEV extraction",
        ]),
        Vector::new(
            "intent-frontrunning",
            "Intent Front-Running Attack",
            Severity::High,
            "Intent mempool front-running and solver sandwich attacks.",
        )
        .with_notes([
            "Solver front-running and sandwich attacks",
            "Intent execution timing manipulation",
        ]),
        Vector::new(
            "userop-replay",
            "UserOperation Replay Attack",
            Severity::High,
            "Cross-chain and expired UserOperation replay via nonce weaknesses.",
        )
        .with_notes([
            "Cross-chain UserOp replay exploitation",
            "Nonce manipulation and gaps",
        ]),
        Vector::new(
            "signature-aggregation",
            "Signature Aggregation Manipulation",
            Severity::High,
            "BLS and Schnorr aggregation attacks including rogue keys and nonce reuse.",
        )
        .with_notes([
            "Aggregated signature tampering",
            "Rogue key attacks and nonce reuse",
        ]),
        Vector::new(
            "intent-solver-manipulation",
            "Intent Solver Manipulation",
            Severity::Medium,
            "Solver bid gaming, hidden fees, and coordinated solver behavior.",
        )
        .with_notes([
            "Hidden fees and slippage exploitation",
            "Coordinated solver attacks",
        ]),
        Vector::new(
            "aa-factory-exploit",
            "Account Abstraction Factory Exploit",
            Severity::Medium,
            "Malicious account creation, address collisions, and factory DoS.",
        )
        .with_notes([
            "Predicted address collision attacks",
            "Factory DoS and storage bloat",
        ]),
    ])
}
