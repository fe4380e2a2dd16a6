use thiserror::Error;

use super::types::DetectorFactory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Fatal at startup: two detectors claimed the same command name.
    /// An unavailable command beats an ambiguous one, so initialization halts.
    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),

    /// Recoverable: nobody registered this name. Callers typically answer
    /// with the output of [`CommandRegistry::list`].
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// Fatal at startup: command names must be non-empty kebab-case.
    #[error("invalid command name `{0}`")]
    InvalidName(String),
}

/// A registered command: unique kebab-case name plus the factory it resolves to.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub name: String,
    pub factory: DetectorFactory,
}

/// Append-only table mapping command names to detector factories.
///
/// Populated once during a fixed startup phase, read-only for the remainder
/// of the process. No descriptor is ever removed. Plain data plus `fn`
/// pointers, so the registry is `Send + Sync` and concurrent readers need no
/// locking once registration is complete.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a factory under a unique command name.
    /// The registry is unchanged when registration fails.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: DetectorFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        if self.commands.iter().any(|c| c.name == name) {
            return Err(RegistryError::DuplicateCommand(name));
        }
        self.commands.push(CommandDescriptor { name, factory });
        Ok(())
    }

    /// Resolve a command name to its registered factory. No side effects.
    pub fn resolve(&self, name: &str) -> Result<DetectorFactory, RegistryError> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.factory)
            .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))
    }

    /// All registered command names in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Command names are non-empty kebab-case: lowercase alphanumerics separated
/// by single hyphens.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::BriefTemplate;
    use crate::catalog::{Severity, Vector, VectorCatalog};
    use crate::detector::Detector;

    fn mock_detector() -> Detector {
        Detector::new(
            BriefTemplate::new("Mock Analysis", "Analyze the mock vector."),
            VectorCatalog::from_vectors(vec![Vector::new(
                "mock-vector",
                "Mock Vector",
                Severity::Low,
                "A vector for testing.",
            )]),
        )
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = CommandRegistry::new();
        registry.register("mock-command", mock_detector).unwrap();

        let factory = registry.resolve("mock-command").unwrap();
        let brief = factory().produce_brief().unwrap();
        assert!(brief.contains("mock-vector"));
    }

    #[test]
    fn test_duplicate_leaves_registry_unchanged() {
        let mut registry = CommandRegistry::new();
        registry.register("mock-command", mock_detector).unwrap();

        let err = registry.register("mock-command", mock_detector).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCommand("mock-command".to_string())
        );
        assert_eq!(registry.list(), vec!["mock-command"]);
    }

    #[test]
    fn test_unknown_command() {
        let registry = CommandRegistry::new();
        let err = registry.resolve("nonexistent").unwrap_err();
        assert_eq!(err, RegistryError::UnknownCommand("nonexistent".to_string()));
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = CommandRegistry::new();
        for name in ["c-command", "a-command", "b-command"] {
            registry.register(name, mock_detector).unwrap();
        }
        assert_eq!(registry.list(), vec!["c-command", "a-command", "b-command"]);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut registry = CommandRegistry::new();
        for bad in ["", "Bad-Case", "double--dash", "-leading", "trailing-", "под"] {
            let err = registry.register(bad, mock_detector).unwrap_err();
            assert_eq!(err, RegistryError::InvalidName(bad.to_string()));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let mut registry = CommandRegistry::new();
        registry.register("mock-command", mock_detector).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let factory = registry.resolve("mock-command").unwrap();
                    assert!(factory().produce_brief().is_ok());
                });
            }
        });
    }
}
