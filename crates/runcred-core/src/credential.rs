//! Read-only view over a credential's named input fields
//!
//! Injectors consume this view; they never mutate it. How the fields were
//! stored or decrypted is the credential store's concern, not this crate's.

use std::collections::HashMap;

/// A single credential input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    Text(String),
    Bool(bool),
}

impl InputValue {
    /// The text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Truthiness: booleans as-is, text by non-emptiness
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Read-only view over one credential's named, typed input fields.
///
/// `input` is the only way to distinguish "absent" from "present but equal
/// to the default" — the convenience accessors fold absence into a default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credential {
    inputs: HashMap<String, InputValue>,
}

impl Credential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<InputValue>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Presence predicate for a named field
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    /// The field's value, or `None` when absent
    pub fn input(&self, name: &str) -> Option<&InputValue> {
        self.inputs.get(name)
    }

    /// The field's text content; empty when absent or non-text
    pub fn text(&self, name: &str) -> &str {
        self.input(name).and_then(InputValue::as_text).unwrap_or("")
    }

    /// The field's truthiness, or `None` when absent
    pub fn truthy(&self, name: &str) -> Option<bool> {
        self.input(name).map(InputValue::truthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults_to_empty_when_absent() {
        let cred = Credential::new().with_input("username", "alice");
        assert_eq!(cred.text("username"), "alice");
        assert_eq!(cred.text("password"), "");
    }

    #[test]
    fn test_has_input_distinguishes_absent_from_empty() {
        let cred = Credential::new().with_input("token", "");
        assert!(cred.has_input("token"));
        assert!(!cred.has_input("missing"));
        // Both read as empty text
        assert_eq!(cred.text("token"), "");
        assert_eq!(cred.text("missing"), "");
    }

    #[test]
    fn test_truthy() {
        let cred = Credential::new()
            .with_input("on", true)
            .with_input("off", false)
            .with_input("name", "x")
            .with_input("blank", "");
        assert_eq!(cred.truthy("on"), Some(true));
        assert_eq!(cred.truthy("off"), Some(false));
        assert_eq!(cred.truthy("name"), Some(true));
        assert_eq!(cred.truthy("blank"), Some(false));
        assert_eq!(cred.truthy("absent"), None);
    }

    #[test]
    fn test_bool_input_is_not_text() {
        let cred = Credential::new().with_input("verify_ssl", true);
        assert_eq!(cred.text("verify_ssl"), "");
        assert_eq!(cred.input("verify_ssl"), Some(&InputValue::Bool(true)));
    }
}
