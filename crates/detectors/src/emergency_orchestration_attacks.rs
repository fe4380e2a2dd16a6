use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "emergency-orchestration-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Emergency Orchestration Attack Vectors Analysis",
        "Perform comprehensive analysis of 4 ultimate critical attack vectors that \
         represent the highest level of protocol exploitation through complete attack \
         orchestration, emergency system abuse, and framework-wide compromise.",
    )
    .stage(Stage::new(
        "Ultimate Orchestration Analysis",
        [
            "Map all available attack surfaces",
            "Design perfect timing sequences",
            "Calculate maximum damage potential",
            "Plan resource optimization",
            "Coordinate multi-vector execution",
        ],
    ))
    .stage(
        Stage::titled("Attack Framework Design")
            .section(
                "Master Attack Coordination",
                [
                    "Identify vectors that compose without interfering",
                    "Check defenses for shared single points of failure",
                ],
            )
            .section(
                "Emergency System Weaponization",
                [
                    "Map pause, shutdown, and rescue functions and their triggers",
                    "Check whether engineered crises unlock privileged paths",
                    "Verify emergency flows cannot be mass-invoked for extraction",
                ],
            )
            .section(
                "Persistent Threat Installation",
                [
                    "Look for footholds that survive incident response",
                    "Check upgrade and configuration channels for re-entry paths",
                ],
            ),
    )
    .require("Orchestration Plan", "Ordering, timing, and dependencies across composed vectors")
    .criterion("Assess whether incident response can interrupt the sequence mid-flight")
    .with_closing(
        "Emergency machinery concentrates privilege by design; findings here describe \
         how an attacker triggers the emergency and then rides the machinery.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "ultimate-orchestration",
            "Ultimate Attack Orchestration",
            Severity::Critical,
            "Master coordination of all vectors into synchronized multi-protocol exploitation.",
        )
        .with_notes([
            "Maximum damage orchestration",
            "Complete ecosystem compromise",
            "Perfect timing execution",
        ]),
        Vector::new(
            "complete-attack-suite",
            "Complete Attack Suite",
            Severity::Critical,
            "Parallel deployment of every available vector to overwhelm defenses.",
        )
        .with_notes([
            "Parallel execution across all surfaces",
            "Total vulnerability exploitation",
        ]),
        Vector::new(
            "emergency-vector-execution",
            "Emergency Vector Execution",
            Severity::Critical,
            "Emergency systems weaponized via crisis-triggered activation and mass abuse.",
        )
        .with_notes([
            "Emergency function mass abuse",
            "Catastrophic failure exploitation",
            "Disaster scenario amplification",
        ]),
        Vector::new(
            "comprehensive-attack-framework",
            "Comprehensive Attack Framework",
            Severity::Critical,
            "Framework-level compromise establishing persistent, infrastructure-wide control.",
        )
        .with_notes([
            "Multi-layer attack coordination",
            "Persistent threat establishment",
            "Complete control acquisition",
        ]),
    ])
}
