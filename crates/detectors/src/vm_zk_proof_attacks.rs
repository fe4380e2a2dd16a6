use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "vm-zk-proof-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive VM and ZK Proof Attack Vectors Analysis",
        "Perform comprehensive analysis of 8 critical attack vectors related to \
         virtual machine exploitation and zero-knowledge proof systems including \
         proof manipulation, prover compromise, VM instruction exploitation, and \
         state transition attacks.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map ZK circuit implementations",
            "Identify proof verification logic",
            "Locate VM instruction handlers",
            "Find state transition functions",
            "Analyze trusted setup parameters",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Prover Infrastructure",
                [
                    "Check trusted setup provenance and verification key custody",
                    "Analyze coordinator and distributed-prover compromise paths",
                ],
            )
            .section(
                "Proof System Integrity",
                [
                    "Check circuit constraints for bypassable witness values",
                    "Verify public input binding and aggregation soundness",
                    "Analyze recursive proof composition",
                ],
            )
            .section(
                "VM Execution",
                [
                    "Check instruction handlers for metering and memory faults",
                    "Analyze execution environment assumptions across contexts",
                ],
            )
            .section(
                "State Transitions",
                [
                    "Verify state tree updates against invalid transition proofs",
                    "Check finality and recovery paths after corruption",
                ],
            ),
    )
    .require("Proof System Component", "Circuit, prover, verifier, or VM layer attacked")
    .with_closing(
        "A soundness break anywhere in the proof pipeline forges everything \
         downstream; prioritize findings by how silently they admit invalid state.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "prover-compromise",
            "Prover Compromise Attack",
            Severity::Critical,
            "Prover and trusted setup manipulation enabling forged proofs.",
        )
        .with_notes([
            "Trusted setup exploitation",
            "Proof generation backdoors",
            "Verification key attacks",
        ]),
        Vector::new(
            "enhanced-prover-compromise",
            "Enhanced Prover Compromise",
            Severity::Critical,
            "Prover infrastructure attacks across MPC and coordinator nodes.",
        )
        .with_notes([
            "Multi-party computation exploitation",
            "Coordinator node compromise",
            "Distributed prover attacks",
        ]),
        Vector::new(
            "state-transition-manipulation",
            "State Transition Manipulation",
            Severity::Critical,
            "Invalid transition proofs corrupting rollup state trees.",
        )
        .with_notes([
            "State tree corruption",
            "Rollup state attacks",
            "Finality manipulation",
        ]),
        Vector::new(
            "enhanced-state-transition",
            "Enhanced State Transition Attack",
            Severity::Critical,
            "Cross-layer state manipulation with blocked recovery.",
        )
        .with_notes([
            "Cross-layer state attacks",
            "Persistent state corruption",
            "State recovery prevention",
        ]),
        Vector::new(
            "zk-proof-manipulation",
            "ZK Proof Manipulation",
            Severity::High,
            "Circuit constraint bypasses and witness manipulation.",
        )
        .with_notes([
            "Witness manipulation",
            "Public input attacks",
            "Verification bypass",
        ]),
        Vector::new(
            "enhanced-zk-proof",
            "Enhanced ZK Proof Manipulation",
            Severity::High,
            "Soundness breaks through aggregation and recursion.",
        )
        .with_notes([
            "Zero-knowledge soundness breaks",
            "Proof aggregation exploitation",
            "Recursive proof attacks",
        ]),
        Vector::new(
            "vm-instruction",
            "VM Instruction Exploitation",
            Severity::High,
            "Opcode handler and gas metering exploitation.",
        )
        .with_notes([
            "Gas metering bypasses",
            "Memory corruption attacks",
        ]),
        Vector::new(
            "enhanced-vm-exploit",
            "Enhanced VM Exploit",
            Severity::High,
            "Cross-contract VM exploitation and execution layer bypasses.",
        )
        .with_notes([
            "VM state persistence attacks",
            "Execution layer bypasses",
        ]),
    ])
}
