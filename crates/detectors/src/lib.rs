pub mod access_control;
pub mod advanced_block_building_attacks;
pub mod advanced_compound_attacks;
pub mod ai_assisted_attacks;
pub mod arithmetic_attacks;
pub mod asset_lock_bridge_attacks;
pub mod constructor_initialization_attacks;
pub mod core_attacks;
pub mod cross_chain_attacks;
pub mod defi_protocol_attacks;
pub mod distraction_stealth_attacks;
pub mod emergency_orchestration_attacks;
pub mod event_history_manipulation_attacks;
pub mod flashloan_mev_attacks;
pub mod gas_attacks;
pub mod governance;
pub mod honeypot_mechanism_attacks;
pub mod identity_naming_attacks;
pub mod implementation_proxy_attacks;
pub mod insurance_protocol_attacks;
pub mod intent_aa_attacks;
pub mod l2_specific_attacks;
pub mod layer2_rollup_attacks;
pub mod liquid_restaking_attacks;
pub mod liquidity_attacks;
pub mod mining_pool_attacks;
pub mod nft_attacks;
pub mod options_protocol_attacks;
pub mod oracle_attacks;
pub mod perpetual_protocol_attacks;
pub mod poison_vanity_contract_attacks;
pub mod privacy_zk_attacks;
pub mod randomness_entropy_attacks;
pub mod reentrancy;
pub mod rwa_tokenization_attacks;
pub mod signature_crypto_attacks;
pub mod specialized_token_attacks;
pub mod staking_attacks;
pub mod state_corruption;
pub mod time_based_attacks;
pub mod token_vesting_attacks;
pub mod vm_zk_proof_attacks;
pub mod yield_farming_attacks;

use vectorguard::config::Config;
use vectorguard::detector::{CommandRegistry, DetectorFactory, RegistryError};

/// All builtin commands as (name, factory) pairs, in the stable order they
/// register. This list is the single startup source of truth; nothing
/// registers as an import side effect.
pub fn builtin_commands() -> Vec<(&'static str, DetectorFactory)> {
    vec![
        (access_control::NAME, access_control::detector),
        (
            advanced_block_building_attacks::NAME,
            advanced_block_building_attacks::detector,
        ),
        (
            advanced_compound_attacks::NAME,
            advanced_compound_attacks::detector,
        ),
        (ai_assisted_attacks::NAME, ai_assisted_attacks::detector),
        (arithmetic_attacks::NAME, arithmetic_attacks::detector),
        (
            asset_lock_bridge_attacks::NAME,
            asset_lock_bridge_attacks::detector,
        ),
        (
            constructor_initialization_attacks::NAME,
            constructor_initialization_attacks::detector,
        ),
        (core_attacks::NAME, core_attacks::detector),
        (cross_chain_attacks::NAME, cross_chain_attacks::detector),
        (defi_protocol_attacks::NAME, defi_protocol_attacks::detector),
        (
            distraction_stealth_attacks::NAME,
            distraction_stealth_attacks::detector,
        ),
        (
            emergency_orchestration_attacks::NAME,
            emergency_orchestration_attacks::detector,
        ),
        (
            event_history_manipulation_attacks::NAME,
            event_history_manipulation_attacks::detector,
        ),
        (flashloan_mev_attacks::NAME, flashloan_mev_attacks::detector),
        (gas_attacks::NAME, gas_attacks::detector),
        (governance::NAME, governance::detector),
        (
            honeypot_mechanism_attacks::NAME,
            honeypot_mechanism_attacks::detector,
        ),
        (identity_naming_attacks::NAME, identity_naming_attacks::detector),
        (
            implementation_proxy_attacks::NAME,
            implementation_proxy_attacks::detector,
        ),
        (
            insurance_protocol_attacks::NAME,
            insurance_protocol_attacks::detector,
        ),
        (intent_aa_attacks::NAME, intent_aa_attacks::detector),
        (l2_specific_attacks::NAME, l2_specific_attacks::detector),
        (layer2_rollup_attacks::NAME, layer2_rollup_attacks::detector),
        (
            liquid_restaking_attacks::NAME,
            liquid_restaking_attacks::detector,
        ),
        (liquidity_attacks::NAME, liquidity_attacks::detector),
        (mining_pool_attacks::NAME, mining_pool_attacks::detector),
        (nft_attacks::NAME, nft_attacks::detector),
        (
            options_protocol_attacks::NAME,
            options_protocol_attacks::detector,
        ),
        (oracle_attacks::NAME, oracle_attacks::detector),
        (
            perpetual_protocol_attacks::NAME,
            perpetual_protocol_attacks::detector,
        ),
        (
            poison_vanity_contract_attacks::NAME,
            poison_vanity_contract_attacks::detector,
        ),
        (privacy_zk_attacks::NAME, privacy_zk_attacks::detector),
        (
            randomness_entropy_attacks::NAME,
            randomness_entropy_attacks::detector,
        ),
        (reentrancy::NAME, reentrancy::detector),
        (
            rwa_tokenization_attacks::NAME,
            rwa_tokenization_attacks::detector,
        ),
        (
            signature_crypto_attacks::NAME,
            signature_crypto_attacks::detector,
        ),
        (
            specialized_token_attacks::NAME,
            specialized_token_attacks::detector,
        ),
        (staking_attacks::NAME, staking_attacks::detector),
        (state_corruption::NAME, state_corruption::detector),
        (time_based_attacks::NAME, time_based_attacks::detector),
        (token_vesting_attacks::NAME, token_vesting_attacks::detector),
        (vm_zk_proof_attacks::NAME, vm_zk_proof_attacks::detector),
        (yield_farming_attacks::NAME, yield_farming_attacks::detector),
    ]
}

/// Build the registry of every builtin detector. The explicit loop here is
/// the only startup mutation of the registry; a duplicate or invalid name is
/// a configuration bug and aborts startup via the returned error.
pub fn builtin_registry() -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    for (name, factory) in builtin_commands() {
        registry.register(name, factory)?;
    }
    Ok(registry)
}

/// Build the registry with config-driven filtering: commands disabled in the
/// config are simply not registered.
pub fn registry_with_config(config: &Config) -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    for (name, factory) in builtin_commands() {
        if config.is_command_enabled(name) {
            registry.register(name, factory)?;
        }
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use vectorguard::brief::{fingerprint, TEMPLATE_VERSION};
    use vectorguard::catalog::Severity;

    #[test]
    fn test_every_command_registers_and_renders() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), builtin_commands().len());

        for name in registry.list() {
            let factory = registry.resolve(name).unwrap();
            let brief = factory().produce_brief().unwrap();
            assert!(!brief.is_empty(), "{name} produced an empty brief");
            assert!(
                brief.contains(&format!("brief-template v{TEMPLATE_VERSION}")),
                "{name} brief missing version marker"
            );
        }
    }

    #[test]
    fn test_command_names_are_unique_and_ordered() {
        let commands = builtin_commands();
        let names: Vec<&str> = commands.iter().map(|(n, _)| *n).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len(), "duplicate command names");

        let registry = builtin_registry().unwrap();
        assert_eq!(registry.list(), names, "registration order not preserved");
    }

    #[test]
    fn test_every_catalog_has_unique_nonempty_vectors() {
        for (name, factory) in builtin_commands() {
            let detector = factory();
            let catalog = detector.catalog();
            assert!(!catalog.is_empty(), "{name} has an empty catalog");
            assert!(
                catalog.duplicate_ids().is_empty(),
                "{name} has duplicate vector ids: {:?}",
                catalog.duplicate_ids()
            );
        }
    }

    #[test]
    fn test_briefs_render_every_vector_exactly_once() {
        for (name, factory) in builtin_commands() {
            let detector = factory();
            let brief = detector.produce_brief().unwrap();
            for id in detector.catalog().ids() {
                assert_eq!(
                    brief.matches(&format!("(`{id}`)")).count(),
                    1,
                    "{name}: vector {id} not rendered exactly once"
                );
            }
        }
    }

    #[test]
    fn test_briefs_order_vectors_by_descending_severity() {
        for (name, factory) in builtin_commands() {
            let detector = factory();
            let brief = detector.produce_brief().unwrap();
            let positions: Vec<(usize, Severity)> = detector
                .catalog()
                .iter()
                .map(|v| {
                    let pos = brief
                        .find(&format!("(`{}`)", v.id))
                        .unwrap_or_else(|| panic!("{name}: {} missing", v.id));
                    (pos, v.severity)
                })
                .collect();

            let mut by_position = positions.clone();
            by_position.sort_by_key(|(pos, _)| *pos);
            let severities: Vec<Severity> =
                by_position.into_iter().map(|(_, sev)| sev).collect();
            assert!(
                severities.windows(2).all(|w| w[0] <= w[1]),
                "{name}: severities not non-increasing in rendered order"
            );
        }
    }

    #[test]
    fn test_briefs_are_deterministic() {
        for (name, factory) in builtin_commands() {
            let first = factory().produce_brief().unwrap();
            let second = factory().produce_brief().unwrap();
            assert_eq!(
                fingerprint(&first),
                fingerprint(&second),
                "{name} brief not deterministic"
            );
        }
    }

    #[test]
    fn test_registry_with_config_filters_disabled() {
        let toml = r#"
[detectors.reentrancy]
enabled = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let registry = registry_with_config(&config).unwrap();
        assert_eq!(registry.len(), builtin_commands().len() - 1);
        assert!(registry.resolve("reentrancy").is_err());
        assert!(registry.resolve("access-control").is_ok());
    }
}
