use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "mining-pool-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Mining Pool Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 high-severity attack vectors targeting \
         major mining pools including EtherMine, F2Pool, SparkPool, FlexPool, and \
         NanoPool, focusing on reward manipulation, hashrate attacks, and pool \
         infrastructure exploitation.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map mining pool architectures",
            "Identify reward calculation systems",
            "Locate payout mechanisms",
            "Find pool switching logic",
            "Analyze fee structures",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Reward System Manipulation",
                [
                    "Check share accounting against submission gaming",
                    "Analyze payout thresholds and dust handling",
                    "Verify reward splits under pool hopping",
                ],
            )
            .section(
                "Hashrate Gaming",
                [
                    "Check difficulty adjustment against rented hashrate spikes",
                    "Analyze share difficulty manipulation",
                ],
            )
            .section(
                "MEV and Infrastructure",
                [
                    "Check MEV sharing schemes for interception",
                    "Analyze pool APIs and cross-pool arbitrage surfaces",
                ],
            ),
    )
    .require("Pool Mechanism", "Reward, payout, or infrastructure component attacked")
    .with_closing(
        "Pool economics reward whoever measures work; findings center on gaps \
         between claimed shares, actual hashrate, and distributed rewards.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "ethermine",
            "EtherMine Attack",
            Severity::High,
            "Reward calculation and payout system exploitation with pool hopping.",
        )
        .with_notes([
            "Share submission gaming",
            "MEV extraction attacks",
            "Pool hopping strategies",
        ]),
        Vector::new(
            "f2pool",
            "F2Pool Attack",
            Severity::High,
            "Multi-coin pool and cross-chain reward manipulation.",
        )
        .with_notes([
            "Mining difficulty gaming",
            "Pool fee bypasses",
            "Hashrate rental attacks",
        ]),
        Vector::new(
            "sparkpool",
            "SparkPool Attack",
            Severity::High,
            "DeFi integration and liquid staking reward exploitation.",
        )
        .with_notes([
            "Pool token attacks",
            "Governance manipulation",
            "Cross-protocol arbitrage",
        ]),
        Vector::new(
            "flexpool",
            "FlexPool Attack",
            Severity::High,
            "Flexible payout and solo mode exploitation with MEV sharing attacks.",
        )
        .with_notes([
            "Solo mining mode exploitation",
            "Pool switching arbitrage",
        ]),
        Vector::new(
            "nanopool",
            "NanoPool Attack",
            Severity::High,
            "Small-miner targeting via dust payouts and threshold gaming.",
        )
        .with_notes([
            "Dust payout manipulation",
            "Payment threshold gaming",
            "API exploitation",
        ]),
    ])
}
