use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "advanced-compound-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Compound Attack Vectors Analysis",
        "Perform comprehensive analysis of 9 critical compound attack vectors that \
         combine multiple vulnerabilities to achieve system-wide exploitation, \
         cascading failures, and complete protocol compromise.",
    )
    .stage(Stage::new(
        "Attack Composition Analysis",
        [
            "Map all individual vulnerabilities",
            "Identify exploitable combinations",
            "Calculate compound impact potential",
            "Design attack choreography",
            "Assess defense capabilities",
        ],
    ))
    .stage(
        Stage::titled("Compound Attack Patterns")
            .section(
                "Simultaneous Multi-Vector Exploitation",
                [
                    "Identify parallel execution opportunities",
                    "Calculate timing windows and resource requirements",
                    "Assess cumulative impact beyond the sum of parts",
                ],
            )
            .section(
                "Cascade Effect Engineering",
                [
                    "Map protocol dependencies and failure propagation paths",
                    "Calculate amplification factors",
                    "Assess containment barriers between components",
                ],
            )
            .section(
                "System Corruption Techniques",
                [
                    "Identify state manipulation vectors with persistence",
                    "Calculate recovery complexity after corruption",
                ],
            )
            .section(
                "Emergency Function Abuse",
                [
                    "Map all emergency mechanisms and privilege escalation paths",
                    "Design bypass sequences around timelocks and safeguards",
                    "Calculate total extraction potential",
                ],
            )
            .section(
                "Governance Attack Chains",
                [
                    "Map governance processes and acceleration mechanisms",
                    "Calculate voting requirements and execution delays",
                ],
            ),
    )
    .require("Component Vectors", "The individual vulnerabilities composed, in order")
    .require("Choreography", "Timing and sequencing across the composed steps")
    .criterion("Demonstrate each component exploit independently before composing them")
    .with_closing(
        "A compound finding is only as strong as its weakest component; document \
         every link in the chain and the state handed from one step to the next.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "multi-vector-simultaneous",
            "Multi-Vector Simultaneous Attack",
            Severity::Critical,
            "Coordinated parallel exploitation of multiple vulnerabilities for maximum impact.",
        )
        .with_notes([
            "Parallel attack execution across different components",
            "Synchronized timing to maximize impact",
            "Defense evasion through complexity",
        ]),
        Vector::new(
            "cascading-failure",
            "Cascading Failure Attack",
            Severity::Critical,
            "Chain reactions amplifying small faults into cross-protocol collapse.",
        )
        .with_notes([
            "Exploiting interdependencies between protocols",
            "Amplifying small vulnerabilities into system collapse",
            "Cross-protocol contagion effects",
        ]),
        Vector::new(
            "system-wide-corruption",
            "System-Wide Corruption Attack",
            Severity::Critical,
            "Complete state corruption with persistent backdoors and blocked recovery.",
        )
        .with_notes([
            "Persistent backdoor installation",
            "Global invariant violations",
            "Recovery prevention mechanisms",
        ]),
        Vector::new(
            "emergency-drain",
            "Emergency Drain Attack",
            Severity::Critical,
            "Emergency functions combined with admin privileges to extract total value locked.",
        )
        .with_notes([
            "Combining admin privileges with technical vulnerabilities",
            "Bypassing time locks and safeguards",
        ]),
        Vector::new(
            "governance-emergency",
            "Governance Emergency Attack",
            Severity::Critical,
            "Emergency proposals fast-tracking malicious upgrades into protocol takeover.",
        )
        .with_notes([
            "Combining voting manipulation with execution flaws",
            "Fast-track malicious upgrades",
        ]),
        Vector::new(
            "randomized-pattern",
            "Randomized Attack Pattern",
            Severity::Critical,
            "Non-deterministic, adaptive attack sequences evading detection.",
        )
        .with_notes([
            "Adaptive exploitation based on responses",
            "Detection evasion through randomization",
        ]),
        Vector::new(
            "phased-execution",
            "Phased Attack Execution",
            Severity::Critical,
            "Multi-stage attacks with dormant periods and delayed activation.",
        )
        .with_notes([
            "Time-delayed exploit activation",
            "Building trust before exploitation",
            "Long-term persistent threats",
        ]),
        Vector::new(
            "targeted-sequences",
            "Targeted Attack Sequences",
            Severity::Critical,
            "Custom attack chains precision-built for a specific protocol's combination of features.",
        )
        .with_notes([
            "Exploiting unique protocol combinations",
            "Minimal footprint, maximum impact",
        ]),
        Vector::new(
            "complete-suite-execution",
            "Complete Attack Suite Execution",
            Severity::Critical,
            "Overwhelming defenses by deploying every available vector at once.",
        )
        .with_notes([
            "Exploiting response fatigue",
            "Overwhelming defenses through volume",
        ]),
    ])
}
