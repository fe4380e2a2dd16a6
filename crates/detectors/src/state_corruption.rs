use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "state-corruption";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive State Corruption Attack Vectors Analysis",
        "Perform comprehensive analysis of 25 critical state corruption and logic \
         vulnerabilities that exploit low-level EVM mechanisms and storage \
         manipulation.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map contract storage layout and proxy patterns",
            "Identify delegatecall usage and storage context preservation",
            "Locate CREATE2 factories and deployment mechanisms",
            "Find assembly blocks and low-level operations",
            "Analyze upgrade mechanisms and implementation patterns",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Storage Manipulation",
                [
                    "Check assembly sstore targets against layout assumptions",
                    "Verify mapping slot derivations cannot collide",
                    "Analyze state desynchronization between mirrored variables",
                ],
            )
            .section(
                "Delegatecall Vulnerabilities",
                [
                    "Verify storage layout compatibility across delegatecall targets",
                    "Check user-influenced delegatecall destinations",
                ],
            )
            .section(
                "Self-Destruct and Metamorphic Contracts",
                [
                    "Check selfdestruct reachability and forced-ether effects",
                    "Analyze CREATE2 redeployment changing code at a known address",
                ],
            )
            .section(
                "Selector and Calldata Attacks",
                [
                    "Check function selector collisions across proxy facets",
                    "Analyze calldata length and decoding edge cases",
                    "Verify memory safety in assembly blocks",
                ],
            )
            .section(
                "Bytecode-Level Attacks",
                [
                    "Check bytecode hash allowlists against metamorphic swaps",
                    "Analyze runtime code inspection assumptions",
                ],
            ),
    )
    .require("Storage Slot", "The slot or memory region corrupted and its intended owner")
    .with_closing(
        "State corruption findings live below the Solidity abstraction; document \
         them at the slot and opcode level so remediation addresses the mechanism, \
         not the symptom.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "storage-slot-manipulation",
            "Storage Slot Manipulation",
            Severity::Critical,
            "Direct storage writes landing in unintended slots.",
        ),
        Vector::new(
            "state-desynchronization",
            "State Desynchronization",
            Severity::Critical,
            "Mirrored state variables driven inconsistent.",
        ),
        Vector::new(
            "delegatecall-storage",
            "Delegatecall Storage Attack",
            Severity::Critical,
            "Delegatecall corrupting caller storage through layout mismatch.",
        ),
        Vector::new(
            "enhanced-delegatecall",
            "Enhanced Delegatecall Attack",
            Severity::Critical,
            "Advanced delegatecall chains with user-influenced targets.",
        ),
        Vector::new(
            "self-destruct",
            "Self-Destruct Attack",
            Severity::Critical,
            "Contract destruction removing code other contracts depend on.",
        ),
        Vector::new(
            "enhanced-self-destruct",
            "Enhanced Self-Destruct Attack",
            Severity::Critical,
            "Destruction combined with forced ether and dependency breakage.",
        ),
        Vector::new(
            "create2-self-destruct",
            "CREATE2 Self-Destruct Attack",
            Severity::Critical,
            "Destroy-and-redeploy cycles swapping code at a fixed address.",
        ),
        Vector::new(
            "enhanced-create2-self-destruct",
            "Enhanced CREATE2 Self-Destruct",
            Severity::Critical,
            "Metamorphic deployment chains defeating code-based trust.",
        ),
        Vector::new(
            "bytecode-injection",
            "Bytecode Injection Attack",
            Severity::Critical,
            "Runtime bytecode injection through constructor and proxy tricks.",
        ),
        Vector::new(
            "enhanced-bytecode-injection",
            "Enhanced Bytecode Injection",
            Severity::Critical,
            "Multi-stage bytecode attacks evading inspection.",
        ),
        Vector::new(
            "opcode-manipulation",
            "Opcode Manipulation Attack",
            Severity::Critical,
            "Low-level opcode behavior exploited in assembly paths.",
        ),
        Vector::new(
            "enhanced-opcode",
            "Enhanced Opcode Attack",
            Severity::Critical,
            "Advanced opcode-level manipulation across call contexts.",
        ),
        Vector::new(
            "variable-corruption",
            "Variable Corruption",
            Severity::High,
            "State variable corruption via packing and casting edges.",
        ),
        Vector::new(
            "stack-overflow",
            "Stack Overflow Attack",
            Severity::High,
            "Call stack depth exhaustion altering control flow.",
        ),
        Vector::new(
            "function-selector",
            "Function Selector Attack",
            Severity::High,
            "Selector collisions routing calls to unintended functions.",
        ),
        Vector::new(
            "enhanced-function-selector",
            "Enhanced Function Selector Attack",
            Severity::High,
            "Crafted selector collisions across proxy facets.",
        ),
        Vector::new(
            "create2-deployment",
            "CREATE2 Deployment Attack",
            Severity::High,
            "Deterministic deployment races and address squatting.",
        ),
        Vector::new(
            "enhanced-create2",
            "Enhanced CREATE2 Attack",
            Severity::High,
            "Advanced CREATE2 address precomputation attacks.",
        ),
        Vector::new(
            "calldata-manipulation",
            "Calldata Manipulation Attack",
            Severity::High,
            "Calldata crafting exploiting decoding assumptions.",
        ),
        Vector::new(
            "enhanced-calldata",
            "Enhanced Calldata Attack",
            Severity::High,
            "Multi-layer calldata attacks through forwarding contracts.",
        ),
        Vector::new(
            "memory-manipulation",
            "Memory Manipulation Attack",
            Severity::High,
            "Memory corruption in assembly and unchecked regions.",
        ),
        Vector::new(
            "bytecode-hash",
            "Bytecode Hash Attack",
            Severity::High,
            "Code hash checks defeated by metamorphic contracts.",
        ),
        Vector::new(
            "enhanced-hash",
            "Enhanced Hash Attack",
            Severity::High,
            "Advanced hash-based identity attacks.",
        ),
        Vector::new(
            "calldata-length",
            "Calldata Length Attack",
            Severity::Medium,
            "Short or padded calldata exploiting length assumptions.",
        ),
        Vector::new(
            "enhanced-length",
            "Enhanced Length Attack",
            Severity::Medium,
            "Advanced length-boundary decoding attacks.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 25);
        let counts = catalog.severity_counts();
        assert_eq!(counts.critical, 12);
        assert_eq!(counts.high, 11);
        assert_eq!(counts.medium, 2);
        assert!(catalog.duplicate_ids().is_empty());
    }
}
