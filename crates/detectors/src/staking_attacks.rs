use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "staking-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Staking Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 critical Ethereum staking \
         vulnerabilities that exploit validator mechanisms, liquid staking \
         protocols, and staking pool operations across major staking platforms.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map Ethereum 2.0 validator infrastructure and consensus mechanisms",
            "Identify liquid staking protocols (Lido, RocketPool, StakeWise, Frax)",
            "Locate staking pool mechanisms and reward distribution systems",
            "Find validator slashing conditions and penalty mechanisms",
            "Analyze staking derivative tokens and their backing mechanisms",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Validator Security Assessment",
                [
                    "Check slashing condition exposure and correlated-penalty scenarios",
                    "Analyze validator key management and withdrawal credentials",
                ],
            )
            .section(
                "Liquid Staking Protocol Surfaces",
                [
                    "Lido: stETH accounting, oracle committee, node operator set",
                    "RocketPool: minipool collateral and RPL incentive edges",
                    "StakeWise: pooled rewards and token pair mechanics",
                    "Frax: frxETH minting and redemption backing",
                ],
            )
            .section(
                "Liquid Staking Token Security",
                [
                    "Check derivative backing under mass exit scenarios",
                    "Analyze reward distribution skimming across deposits",
                ],
            ),
    )
    .require("Staking Platform", "Validator layer or liquid staking protocol affected")
    .with_closing(
        "Staking attacks scale with TVL and correlation: a small accounting edge \
         across thousands of validators is a protocol-level event, not a rounding \
         error.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "eth2-validator",
            "ETH2 Validator Attack",
            Severity::Critical,
            "Validator mechanism exploitation with mass slashing potential.",
        ),
        Vector::new(
            "lido-staking",
            "Lido Staking Attack",
            Severity::Critical,
            "Lido stETH accounting, oracle, and operator set exploitation.",
        ),
        Vector::new(
            "rocketpool-node",
            "RocketPool Node Attack",
            Severity::Critical,
            "RocketPool minipool and collateral mechanics exploitation.",
        ),
        Vector::new(
            "stakewise-pool",
            "StakeWise Pool Attack",
            Severity::High,
            "StakeWise pooled staking and reward token manipulation.",
        ),
        Vector::new(
            "frax-eth-minting",
            "Frax ETH Minting Attack",
            Severity::High,
            "frxETH minting and redemption backing exploitation.",
        ),
    ])
}
