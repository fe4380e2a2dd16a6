use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "ai-assisted-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive AI-Assisted Attack Vectors Analysis",
        "Perform comprehensive analysis of 8 attack vectors that leverage artificial \
         intelligence, machine learning, and automated systems to enhance traditional \
         exploits through predictive algorithms, coordinated bot networks, and \
         AI-driven optimization.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map AI/ML integration points",
            "Identify automated trading systems",
            "Locate bot network architectures",
            "Find predictive algorithms",
            "Analyze coordination mechanisms",
        ],
    ))
    .stage(
        Stage::titled("AI Attack Vector Analysis")
            .section(
                "Bot Network Coordination",
                [
                    "Identify state observable and exploitable by synchronized bot swarms",
                    "Check rate limits and per-account protections against distributed actors",
                    "Assess exposure to collective-intelligence probing",
                ],
            )
            .section(
                "ML-Powered Exploitation",
                [
                    "Find deterministic patterns a model can learn and front-run",
                    "Check MEV surfaces against predictive ordering strategies",
                    "Verify randomness sources resist statistical prediction",
                ],
            )
            .section(
                "Cross-Protocol AI Coordination",
                [
                    "Map interdependencies a planner can chain into cascades",
                    "Check contagion boundaries between integrated protocols",
                ],
            )
            .section(
                "Adaptive Strategy Evolution",
                [
                    "Assess whether defenses assume static attacker behavior",
                    "Check monitoring for response-fatigue exploitation",
                ],
            ),
    )
    .require("Automation Level", "Degree of autonomy the attack requires")
    .with_closing(
        "Evaluate defenses against adaptive, automated adversaries rather than \
         single-shot manual exploits; anything learnable from public state is \
         learnable by an attacker's model.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "bot-network-coordination",
            "AI Coordination Between Multiple Bot Networks",
            Severity::Critical,
            "Multi-bot swarm coordination with synchronized exploitation timing.",
        )
        .with_notes([
            "Distributed attack orchestration",
            "Cross-network communication protocols",
            "Collective intelligence attacks",
        ]),
        Vector::new(
            "automated-multi-vector",
            "Automated Multi-Vector Attack Coordination",
            Severity::Critical,
            "AI combining exploit types with real-time discovery and adaptive chaining.",
        )
        .with_notes([
            "Adaptive attack strategy modification",
            "Automated exploit chaining",
            "Self-improving attack algorithms",
        ]),
        Vector::new(
            "cross-protocol-ai-strategy",
            "AI-Driven Cross-Protocol Strategy Coordination",
            Severity::Critical,
            "Orchestrated cross-protocol cascades and multi-chain synchronized exploitation.",
        )
        .with_notes([
            "Protocol interdependency mapping",
            "Automated contagion spreading",
            "Systemic risk amplification",
        ]),
        Vector::new(
            "ai-mev-optimization",
            "AI-Powered MEV Optimization Attack",
            Severity::High,
            "Machine learning maximizing MEV extraction via predictive ordering.",
        )
        .with_notes([
            "Predictive transaction ordering",
            "Dynamic gas optimization",
            "Searcher strategy evolution",
        ]),
        Vector::new(
            "ml-arbitrage-prediction",
            "Machine Learning Arbitrage Prediction Attack",
            Severity::High,
            "Predictive arbitrage models with latency-optimized cross-DEX execution.",
        )
        .with_notes([
            "Market microstructure analysis",
            "Cross-DEX opportunity detection",
        ]),
        Vector::new(
            "nn-oracle-prediction",
            "Neural Network Oracle Prediction Manipulation",
            Severity::High,
            "AI-driven oracle gaming through price prediction and lag exploitation.",
        )
        .with_notes([
            "Market manipulation timing",
            "Oracle lag exploitation",
            "Coordinated price impact attacks",
        ]),
        Vector::new(
            "ai-multi-pool-routing",
            "AI-Enhanced Multi-Pool Route Optimization",
            Severity::Medium,
            "Optimized cross-pool exploitation via dynamic route discovery.",
        )
        .with_notes([
            "Liquidity fragmentation analysis",
            "Slippage minimization and path optimization",
        ]),
        Vector::new(
            "ml-gas-market",
            "Machine Learning Gas Market Manipulation",
            Severity::Medium,
            "Gas price manipulation guided by congestion prediction and mempool analysis.",
        )
        .with_notes([
            "Network congestion prediction",
            "Transaction priority optimization",
        ]),
    ])
}
