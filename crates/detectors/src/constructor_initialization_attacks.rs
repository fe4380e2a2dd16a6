use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "constructor-initialization-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Constructor and Initialization Attack Vectors Analysis",
        "Perform comprehensive analysis of 2 high-severity attack vectors targeting \
         smart contract constructor functions and initialization processes, focusing \
         on constructor exploitation and advanced initialization attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map constructor functions",
            "Identify initialization patterns",
            "Locate proxy initialization logic",
            "Find multi-stage init processes",
            "Analyze initialization dependencies",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Constructor Vulnerabilities",
                [
                    "Check constructor parameters for unvalidated trust assignments",
                    "Look for deployment front-running windows before protections arm",
                    "Test constructor-time external calls for reentrancy",
                ],
            )
            .section(
                "Initialization Process Attacks",
                [
                    "Verify initializer functions cannot be called twice or by outsiders",
                    "Check multi-stage initialization for exploitable intermediate states",
                    "Analyze initialization races between deployment and configuration",
                ],
            )
            .section(
                "Proxy Pattern Exploitation",
                [
                    "Check implementation contracts for unprotected initialize functions",
                    "Verify proxies cannot be re-initialized after upgrade",
                    "Analyze cross-contract initialization ordering dependencies",
                ],
            ),
    )
    .focus_example(
        "Unprotected Proxy Initializer",
        r#"
contract VaultImplementation {
    address public owner;
    bool private initialized;

    // VULNERABLE: anyone who calls initialize on the implementation
    // (or on a proxy before the deployer does) becomes owner.
    function initialize(address _owner) external {
        require(!initialized, "Already initialized");
        initialized = true;
        owner = _owner;
    }
}
"#,
    )
    .with_closing(
        "The window between deployment and full initialization is an attack surface \
         of its own; assume every initializer will be raced unless the code proves \
         otherwise.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "constructor-initialization",
            "Constructor Initialization Attack",
            Severity::High,
            "Constructor-time exploitation through parameter manipulation and deployment races.",
        )
        .with_notes([
            "Constructor parameter manipulation",
            "Initialization state corruption",
            "Constructor reentrancy attacks",
            "Deployment front-running",
        ]),
        Vector::new(
            "enhanced-initialization",
            "Enhanced Initialization Attack",
            Severity::High,
            "Multi-stage and proxy initialization abuse including initializer bypasses and races.",
        )
        .with_notes([
            "Proxy initialization attacks",
            "Initializer function bypasses",
            "Cross-contract initialization manipulation",
            "Initialization race conditions",
        ]),
    ])
}
