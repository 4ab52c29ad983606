//! Persona registry: an immutable, injected lookup table.
//!
//! The registry is constructed once from a catalog of personas and
//! passed into the session controller -- no module-level singleton, so
//! tests can substitute a small fixture catalog. The reserved
//! `"default"` key resolves to the built-in neutral Reading Coach and is
//! never part of the injected catalog.

use std::collections::BTreeMap;

use readpal_types::persona::{Persona, DEFAULT_PERSONA_KEY};

/// Immutable persona lookup table.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: BTreeMap<String, Persona>,
}

impl PersonaRegistry {
    /// Build a registry from a catalog of personas.
    ///
    /// A persona keyed `"default"` in the input is ignored; that key is
    /// reserved for the built-in coach.
    pub fn new(catalog: impl IntoIterator<Item = Persona>) -> Self {
        let personas = catalog
            .into_iter()
            .filter(|p| p.key != DEFAULT_PERSONA_KEY)
            .map(|p| (p.key.clone(), p))
            .collect();
        Self { personas }
    }

    /// Look up a catalog persona by key. Does not resolve `"default"`.
    pub fn lookup(&self, key: &str) -> Option<&Persona> {
        self.personas.get(key)
    }

    /// Resolve a persona key, including the reserved `"default"` key.
    pub fn resolve(&self, key: &str) -> Option<Persona> {
        if key == DEFAULT_PERSONA_KEY {
            Some(Self::neutral_coach())
        } else {
            self.lookup(key).cloned()
        }
    }

    /// Iterate catalog personas in key order (for selection screens).
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.values()
    }

    /// Number of catalog personas (excludes the built-in coach).
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// The built-in neutral persona behind the `"default"` key.
    pub fn neutral_coach() -> Persona {
        Persona {
            key: DEFAULT_PERSONA_KEY.to_string(),
            name: "Reading Coach".to_string(),
            description: "A neutral, focused guide for reading and comprehension.".to_string(),
            greeting: "Hi! I'm your reading coach. Ask me questions about the text, \
                       and I'll help with hints, summaries, and questions."
                .to_string(),
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(key: &str, name: &str) -> Persona {
        Persona {
            key: key.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            greeting: format!("Hello from {name}!"),
            avatar: None,
        }
    }

    #[test]
    fn test_lookup_known_key() {
        let registry = PersonaRegistry::new(vec![persona("kratos", "Kratos")]);
        assert_eq!(registry.lookup("kratos").unwrap().name, "Kratos");
        assert!(registry.lookup("elsa").is_none());
    }

    #[test]
    fn test_resolve_default_is_builtin_coach() {
        let registry = PersonaRegistry::new(Vec::new());
        let coach = registry.resolve("default").unwrap();
        assert_eq!(coach.name, "Reading Coach");
        // The coach never appears in the catalog itself.
        assert!(registry.lookup("default").is_none());
    }

    #[test]
    fn test_new_ignores_reserved_key() {
        let registry = PersonaRegistry::new(vec![persona("default", "Impostor")]);
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("default").unwrap().name, "Reading Coach");
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = PersonaRegistry::new(vec![persona("kratos", "Kratos")]);
        assert!(registry.resolve("dracula").is_none());
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let registry = PersonaRegistry::new(vec![
            persona("sonic", "Sonic"),
            persona("elsa", "Elsa"),
            persona("kratos", "Kratos"),
        ]);
        let keys: Vec<&str> = registry.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["elsa", "kratos", "sonic"]);
        assert_eq!(registry.len(), 3);
    }
}
