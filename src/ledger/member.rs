use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person sharing the flat. Everything else references members by id;
/// the email only resurfaces at the wire boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

impl Member {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: Uuid::new_v4(),
            name: None,
            email: normalize_email(&email),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name when present, email otherwise.
    pub fn display_label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Trims and lowercases an email for roster comparisons.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_email() {
        let member = Member::new("  Anna@Flat.Test ");
        assert_eq!(member.email, "anna@flat.test");
    }

    #[test]
    fn display_label_prefers_name() {
        let member = Member::new("anna@flat.test").with_name("Anna");
        assert_eq!(member.display_label(), "Anna");

        let unnamed = Member::new("bo@flat.test");
        assert_eq!(unnamed.display_label(), "bo@flat.test");
    }
}
