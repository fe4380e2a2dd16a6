use vectorguard::brief::{fingerprint, TEMPLATE_VERSION};
use vectorguard::config::Config;
use vectorguard::detector::RegistryError;
use vectorguard_detectors::{builtin_registry, registry_with_config};

#[test]
fn test_resolve_and_render_reentrancy_brief() {
    let registry = builtin_registry().unwrap();
    let factory = registry.resolve("reentrancy").unwrap();
    let brief = factory().produce_brief().unwrap();

    // The external runner's contract: task statement, enumerated severity-tagged
    // vectors, analysis process, documentation requirements, validation criteria.
    for section in [
        "## Task",
        "## Target Attack Vectors",
        "## Analysis Process",
        "## Documentation Requirements",
        "## Validation Criteria",
    ] {
        assert!(brief.contains(section), "brief missing section {section}");
    }
    assert!(brief.contains(&format!("brief-template v{TEMPLATE_VERSION}")));

    // Spec scenario: 7 critical entries, then 2 high, then 1 medium.
    assert!(brief.contains("Critical Severity (7 vectors)"));
    assert!(brief.contains("High Severity (2 vectors)"));
    assert!(brief.contains("Medium Severity (1 vector)"));
}

#[test]
fn test_unknown_command_is_recoverable_via_list() {
    let registry = builtin_registry().unwrap();
    let err = registry.resolve("no-such-detector").unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownCommand("no-such-detector".to_string())
    );

    // The caller's recovery path: the listing still works and is non-empty.
    let names = registry.list();
    assert!(names.contains(&"reentrancy"));
    assert!(names.contains(&"access-control"));
}

#[test]
fn test_config_disables_commands_without_touching_output() {
    let config: Config = toml::from_str(
        r#"
[detectors.governance]
enabled = false
"#,
    )
    .unwrap();

    let filtered = registry_with_config(&config).unwrap();
    assert!(filtered.resolve("governance").is_err());

    // Briefs are unaffected by config: same command renders byte-identical
    // output with and without a config-filtered registry.
    let full = builtin_registry().unwrap();
    let a = (filtered.resolve("reentrancy").unwrap())()
        .produce_brief()
        .unwrap();
    let b = (full.resolve("reentrancy").unwrap())()
        .produce_brief()
        .unwrap();
    assert_eq!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn test_every_command_round_trips_through_the_registry() {
    let registry = builtin_registry().unwrap();
    for name in registry.list() {
        let factory = registry.resolve(name).unwrap();
        let brief = factory().produce_brief().unwrap();
        assert!(!brief.is_empty(), "{name} rendered an empty brief");
        assert!(brief.starts_with("# "), "{name} brief missing title heading");
    }
}
