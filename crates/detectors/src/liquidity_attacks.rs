use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "liquidity-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Liquidity Attack Vectors Analysis",
        "Perform comprehensive analysis of 13 critical liquidity manipulation \
         vulnerabilities that exploit automated market makers (AMMs), liquidity \
         pools, and decentralized exchange mechanisms.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map AMM integrations and liquidity pool interactions",
            "Identify DEX protocols used (Uniswap V2/V3, Curve, Balancer, SushiSwap)",
            "Locate flash loan capabilities and arbitrage mechanisms",
            "Find price oracle dependencies and slippage protection",
            "Analyze liquidity provision and withdrawal mechanisms",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "AMM Pool Manipulation",
                [
                    "Check invariant math against skewed reserves",
                    "Analyze donation and sync attacks on reserve accounting",
                    "Verify pool-derived prices are not consumed raw",
                ],
            )
            .section(
                "Flash Loan Pool Attacks",
                [
                    "Uniswap V2 flash swaps and V3 flash callbacks into dependent logic",
                    "Check reserve snapshots taken mid-manipulation",
                ],
            )
            .section(
                "Protocol-Specific Surfaces",
                [
                    "Curve: virtual price and meta pool composability",
                    "Balancer: vault accounting and batch swap edges",
                    "SushiSwap Kashi: isolated lending pair oracle dependencies",
                ],
            )
            .section(
                "Sandwich and Slippage",
                [
                    "Check user slippage tolerances harvestable by ordering",
                    "Analyze impermanent-loss-shifting strategies against LPs",
                ],
            ),
    )
    .require("Pool Economics", "Reserves, fees, and depth assumptions the attack exploits")
    .with_closing(
        "Liquidity is the collateral of the whole system; model every pool \
         interaction with adversarial reserves and hostile ordering before trusting \
         its prices or its depth.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "liquidity-lock",
            "Liquidity Lock Attack",
            Severity::Critical,
            "Liquidity locking mechanisms abused to trap provider funds.",
        ),
        Vector::new(
            "advanced-liquidity-manipulation",
            "Advanced Liquidity Manipulation",
            Severity::Critical,
            "Sophisticated multi-step reserve and position manipulation.",
        ),
        Vector::new(
            "liquidity-drain",
            "Liquidity Drain Attack",
            Severity::Critical,
            "Complete drainage of pool reserves through composed exploits.",
        ),
        Vector::new(
            "amm-pool-manipulation",
            "AMM Pool Manipulation",
            Severity::Critical,
            "Automated market maker invariant and accounting exploitation.",
        ),
        Vector::new(
            "curve-pool-manipulation",
            "Curve Pool Manipulation",
            Severity::Critical,
            "Curve stable-swap and virtual price exploitation.",
        ),
        Vector::new(
            "balancer-vault",
            "Balancer Vault Attack",
            Severity::Critical,
            "Balancer vault accounting and batch swap exploitation.",
        ),
        Vector::new(
            "uniswap-v2-flash-swap",
            "Uniswap V2 Flash Swap Attack",
            Severity::Critical,
            "V2 flash swaps weaponized against reserve-dependent logic.",
        ),
        Vector::new(
            "uniswap-v3-flash",
            "Uniswap V3 Flash Attack",
            Severity::Critical,
            "V3 flash callbacks and concentrated liquidity exploitation.",
        ),
        Vector::new(
            "sushiswap-kashi",
            "SushiSwap Kashi Attack",
            Severity::Critical,
            "Kashi isolated lending pair and oracle exploitation.",
        ),
        Vector::new(
            "curve-meta-pool",
            "Curve Meta Pool Attack",
            Severity::Critical,
            "Meta pool composability attacks through base pool manipulation.",
        ),
        Vector::new(
            "liquidity-sandwich",
            "Liquidity Sandwich Attack",
            Severity::High,
            "Liquidity events sandwiched for extraction.",
        ),
        Vector::new(
            "impermanent-loss-exploit",
            "Impermanent Loss Exploit",
            Severity::High,
            "Impermanent loss deliberately shifted onto passive LPs.",
        ),
        Vector::new(
            "slippage-manipulation",
            "Slippage Manipulation Attack",
            Severity::High,
            "Slippage tolerance exploitation through engineered price movement.",
        ),
    ])
}
