use serde::Serialize;

/// Name to greet
///
/// An empty name is valid and is greeted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Greeting produced by a use case, serialized as `{"value": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    value: String,
}

impl Message {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_is_empty() {
        assert_eq!(Name::default().value(), "");
    }

    #[test]
    fn test_message_serializes_as_value_object() {
        let message = Message::new("Hello, World!");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "Hello, World!" }));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Name::from("Ada"), Name::new(String::from("Ada")));
        assert_ne!(Message::new("a"), Message::new("b"));
    }
}
