//! Persona types for readpal.
//!
//! A persona is the character profile the agent role-plays during a chat:
//! display name, short description, greeting template, and an optional
//! avatar reference. Personas are immutable data supplied by an injected
//! catalog; the reserved `"default"` key selects the built-in neutral
//! coach resolved by the registry itself.

use serde::{Deserialize, Serialize};

/// Reserved persona key for the built-in neutral coach.
///
/// This key is never present in the injected catalog; the registry
/// resolves it internally.
pub const DEFAULT_PERSONA_KEY: &str = "default";

/// Placeholder token substituted into greeting templates.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Opaque reference to a persona avatar asset.
///
/// The front-end decides how (and whether) to render it; the core never
/// interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRef(pub String);

/// A named character profile the agent role-plays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Stable lookup key (e.g., "kratos"). Sent to the backend as the
    /// `character` field on every request.
    pub key: String,
    /// Display name (e.g., "Kratos").
    pub name: String,
    /// One-line description shown on the selection screen.
    pub description: String,
    /// Greeting template, optionally containing `{username}`.
    pub greeting: String,
    /// Optional avatar asset reference.
    pub avatar: Option<AvatarRef>,
}

impl Persona {
    /// Render the greeting for a user.
    ///
    /// Substitutes `{username}` when a username is present; otherwise the
    /// template is returned verbatim (including any placeholder literal).
    pub fn render_greeting(&self, username: Option<&str>) -> String {
        match username {
            Some(name) => self.greeting.replace(USERNAME_PLACEHOLDER, name),
            None => self.greeting.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona_with_greeting(greeting: &str) -> Persona {
        Persona {
            key: "test".to_string(),
            name: "Test".to_string(),
            description: "A test persona".to_string(),
            greeting: greeting.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_render_greeting_substitutes_username() {
        let persona = persona_with_greeting("Hello, {username}! Ready to read?");
        assert_eq!(
            persona.render_greeting(Some("Maria")),
            "Hello, Maria! Ready to read?"
        );
    }

    #[test]
    fn test_render_greeting_verbatim_without_username() {
        let persona = persona_with_greeting("Hello, {username}!");
        assert_eq!(persona.render_greeting(None), "Hello, {username}!");
    }

    #[test]
    fn test_render_greeting_no_placeholder() {
        let persona = persona_with_greeting("Speak, mortal.");
        assert_eq!(persona.render_greeting(Some("Maria")), "Speak, mortal.");
        assert_eq!(persona.render_greeting(None), "Speak, mortal.");
    }

    #[test]
    fn test_persona_serde_roundtrip() {
        let persona = Persona {
            key: "kratos".to_string(),
            name: "Kratos".to_string(),
            description: "The God of War".to_string(),
            greeting: "Speak your question, mortal.".to_string(),
            avatar: Some(AvatarRef("assets/kratos.png".to_string())),
        };
        let json = serde_json::to_string(&persona).unwrap();
        let parsed: Persona = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.key, "kratos");
        assert_eq!(parsed.avatar, Some(AvatarRef("assets/kratos.png".to_string())));
    }
}
