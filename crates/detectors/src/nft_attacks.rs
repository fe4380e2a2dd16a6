use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "nft-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive NFT Attack Vectors Analysis",
        "Perform comprehensive analysis of 4 critical NFT (Non-Fungible Token) \
         vulnerabilities that exploit marketplace mechanisms, royalty systems, and \
         batch operations in NFT ecosystems.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map NFT contract implementations (ERC721, ERC1155)",
            "Identify marketplace integrations (OpenSea, Rarible, LooksRare)",
            "Locate royalty enforcement mechanisms and standards",
            "Find batch operation functions and access controls",
            "Analyze metadata and URI handling systems",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "ERC1155 Batch Operations",
                [
                    "Check batch transfer loops for per-item validation gaps",
                    "Analyze batch callbacks for reentrancy",
                    "Verify id/amount array length handling",
                ],
            )
            .section(
                "Royalty Enforcement",
                [
                    "Check wrapper and private-sale paths that skip royalty hooks",
                    "Analyze marketplace-specific royalty registries for bypasses",
                ],
            )
            .section(
                "Marketplace Protocols",
                [
                    "OpenSea Wyvern: order matching and calldata validation edges",
                    "Rarible: royalty configuration and transfer manager trust",
                    "Check cross-marketplace arbitrage of listing states",
                ],
            ),
    )
    .require("Marketplace Surface", "Which marketplace or standard the bypass traverses")
    .with_closing(
        "Royalties and batch semantics are convention, not consensus; findings show \
         where a conforming-looking path breaks the convention for profit.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "erc1155-batch",
            "ERC1155 Batch Attack",
            Severity::High,
            "Batch operation exploitation through validation gaps and callback reentry.",
        ),
        Vector::new(
            "nft-royalty-bypass",
            "NFT Royalty Bypass Attack",
            Severity::High,
            "Royalty circumvention via wrappers and non-standard transfer paths.",
        ),
        Vector::new(
            "opensea-wyvern",
            "OpenSea Wyvern Attack",
            Severity::High,
            "Wyvern order matching and calldata validation exploitation.",
        ),
        Vector::new(
            "rarible-royalty",
            "Rarible Royalty Attack",
            Severity::High,
            "Rarible royalty configuration and transfer manager bypass.",
        ),
    ])
}
