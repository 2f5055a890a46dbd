// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::errors::RegistryError;
use crate::observability::messages::registry::{ProcessorNotFound, RegistryBuilt};
use crate::observability::messages::StructuredLog;
use crate::processors::BUILTIN_PROCESSORS;
use crate::traits::Processor;

/// Ordered catalog of processors keyed by name and alias.
///
/// Iteration order is registration order and is the presentation order used by
/// `list` and the interactive picker. The catalog never changes after it is built.
pub struct Registry {
    processors: Vec<&'static dyn Processor>,
    index: HashMap<&'static str, usize>,
}

/// Accumulates registrations, rejecting any token already taken.
#[derive(Default)]
pub struct RegistryBuilder {
    processors: Vec<&'static dyn Processor>,
    index: HashMap<&'static str, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor under its name and every alias.
    pub fn register(mut self, processor: &'static dyn Processor) -> Result<Self, RegistryError> {
        let position = self.processors.len();
        let tokens = std::iter::once(processor.name()).chain(processor.alias().iter().copied());

        for token in tokens {
            if self.index.insert(token, position).is_some() {
                return Err(RegistryError::DuplicateToken(token.to_string()));
            }
        }

        self.processors.push(processor);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            processors: self.processors,
            index: self.index,
        }
    }
}

impl Registry {
    /// Build a registry from a fixed list.
    pub fn from_processors(
        processors: &[&'static dyn Processor],
    ) -> Result<Self, RegistryError> {
        processors
            .iter()
            .try_fold(RegistryBuilder::new(), |builder, processor| builder.register(*processor))
            .map(RegistryBuilder::build)
    }

    /// The process-wide registry of built-in processors.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();

        BUILTIN.get_or_init(|| {
            // A clash here is a mistake in the static list, not a runtime condition.
            let registry = Registry::from_processors(BUILTIN_PROCESSORS)
                .unwrap_or_else(|e| panic!("built-in processor list is inconsistent: {}", e));

            RegistryBuilt {
                processor_count: registry.len(),
                token_count: registry.index.len(),
            }
            .log();

            registry
        })
    }

    /// Find a processor by name or alias.
    pub fn lookup(&self, token: &str) -> Result<&'static dyn Processor, RegistryError> {
        match self.index.get(token) {
            Some(&position) => Ok(self.processors[position]),
            None => {
                ProcessorNotFound { token }.log();
                Err(RegistryError::NotFound(token.to_string()))
            }
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// All processors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Processor> + '_ {
        self.processors.iter().copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("processor_count", &self.processors.len())
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{Base64Encode, Lower, Upper};
    use std::collections::HashSet;

    #[test]
    fn test_builtin_registry_builds() {
        let registry = Registry::builtin();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), BUILTIN_PROCESSORS.len());
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = Registry::builtin();
        assert_eq!(registry.lookup("base64-encode").unwrap().name(), "base64-encode");
        assert_eq!(registry.lookup("b64-enc").unwrap().name(), "base64-encode");
        assert_eq!(registry.lookup("upper").unwrap().name(), "upper");
    }

    #[test]
    fn test_lookup_unknown_token() {
        let err = Registry::builtin().lookup("rot47").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("rot47".to_string()));
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let registry = Registry::from_processors(&[&Upper, &Lower, &Base64Encode]).unwrap();
        assert_eq!(registry.names(), vec!["upper", "lower", "base64-encode"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = Registry::from_processors(&[&Upper, &Lower, &Upper]);
        assert!(matches!(result, Err(RegistryError::DuplicateToken(token)) if token == "upper"));
    }

    #[test]
    fn test_names_are_lowercase_hyphenated() {
        for processor in Registry::builtin().iter() {
            let name = processor.name();
            assert!(!name.is_empty());
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad processor name: {}",
                name
            );
            assert!(!name.starts_with('-') && !name.ends_with('-'));
        }
    }

    #[test]
    fn test_flag_short_keys_unique_per_processor() {
        for processor in Registry::builtin().iter() {
            let mut seen = HashSet::new();
            for flag in processor.flags() {
                assert!(
                    seen.insert(flag.short),
                    "processor '{}' declares short key '{}' twice",
                    processor.name(),
                    flag.short
                );
            }
        }
    }

    #[test]
    fn test_presentation_metadata_present() {
        for processor in Registry::builtin().iter() {
            assert!(!processor.title().is_empty(), "{} has no title", processor.name());
            assert!(!processor.description().is_empty(), "{} has no description", processor.name());
            assert!(processor.filter_value().contains(processor.name()));
        }
    }
}
