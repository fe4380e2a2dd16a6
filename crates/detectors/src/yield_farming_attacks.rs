use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "yield-farming-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Yield Farming Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 critical attack vectors specific to \
         yield farming protocols including MasterChef contracts, PancakeSwap, \
         SpiritSwap, QuickSwap farms, and Tomb Finance forks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map farming contract architecture",
            "Identify reward calculation mechanisms",
            "Locate migration and emergency functions",
            "Analyze token emission schedules",
            "Review pool allocation logic",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "MasterChef Exploitation",
                [
                    "Check pool ID handling for collisions and duplicate LP tokens",
                    "Audit migrator functions for rug capability",
                    "Verify emergencyWithdraw accounting",
                ],
            )
            .section(
                "Reward Calculation Errors",
                [
                    "Check accRewardPerShare precision and update ordering",
                    "Analyze harvest timing and deposit/withdraw checkpoint games",
                    "Verify pool weight changes against retroactive drains",
                ],
            )
            .section(
                "Fork-Specific Surfaces",
                [
                    "PancakeSwap: emission and pool weight manipulation",
                    "SpiritSwap: boost mechanics and bridge edges",
                    "QuickSwap: dual rewards and Dragon's Lair staking",
                    "Tomb forks: peg mechanics, bond pricing, death spirals",
                ],
            ),
    )
    .require("Farm Economics", "Emission schedule and pool weights the attack distorts")
    .with_closing(
        "Farm exploits are accounting exploits: reconcile emitted rewards against \
         entitled rewards at every state transition, especially around migrations \
         and weight changes.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "masterchef",
            "MasterChef Attack",
            Severity::Critical,
            "Pool manipulation, migrator abuse, and reward draining in MasterChef forks.",
        )
        .with_notes([
            "Migration function exploits",
            "Emergency withdraw vulnerabilities",
            "Pool ID collision attacks",
        ]),
        Vector::new(
            "tomb-finance",
            "Tomb Finance Attack",
            Severity::Critical,
            "Algorithmic peg and bond/share mechanics driven into death spirals.",
        )
        .with_notes([
            "Bond/Share price exploitation",
            "Death spiral triggers",
            "Boardroom governance attacks",
        ]),
        Vector::new(
            "pancakeswap-farm",
            "PancakeSwap Farm Attack",
            Severity::High,
            "CAKE emission and pool weight exploitation with harvest timing.",
        )
        .with_notes([
            "Pool weight exploitation",
            "Harvest timing attacks",
            "LP token price manipulation",
        ]),
        Vector::new(
            "spiritswap-farm",
            "SpiritSwap Farm Attack",
            Severity::High,
            "SPIRIT reward calculation and boost mechanism exploitation.",
        )
        .with_notes([
            "Boost mechanism exploitation",
            "Cross-chain bridge vulnerabilities",
        ]),
        Vector::new(
            "quickswap-farm",
            "QuickSwap Farm Attack",
            Severity::High,
            "QUICK distribution and dual reward exploitation on Polygon.",
        )
        .with_notes([
            "Dual reward exploitation",
            "Dragon's Lair staking attacks",
            "Polygon bridge timing attacks",
        ]),
    ])
}
