use serde::{Deserialize, Serialize};

/// Identity projection consumed by authorization checks.
///
/// The session layer owns the identity lifecycle; authorization only reads the
/// role binding and the superuser flag. `subject` is carried for audit
/// attribution and log context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    subject: Option<String>,
    role_name: String,
    is_superuser: bool,
}

impl Identity {
    /// Creates an identity bound to a role name.
    #[must_use]
    pub fn new(role_name: impl Into<String>, is_superuser: bool) -> Self {
        Self {
            subject: None,
            role_name: role_name.into(),
            is_superuser,
        }
    }

    /// Attaches the stable subject claim used for audit attribution.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Returns the role name this identity is bound to.
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role_name.as_str()
    }

    /// Returns whether the identity carries the superuser flag.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    /// Returns the subject claim, if the session provided one.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns a label suitable for audit rows and log fields.
    #[must_use]
    pub fn actor_label(&self) -> &str {
        self.subject().unwrap_or(self.role_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Identity;

    #[test]
    fn actor_label_prefers_subject() {
        let identity = Identity::new("Editor", false).with_subject("jane.smith@example.com");
        assert_eq!(identity.actor_label(), "jane.smith@example.com");
    }

    #[test]
    fn actor_label_falls_back_to_role_name() {
        let identity = Identity::new("Viewer", false);
        assert_eq!(identity.actor_label(), "Viewer");
        assert!(!identity.is_superuser());
    }

    #[test]
    fn identity_roundtrips_through_json() {
        let identity = Identity::new("Admin", true).with_subject("1");
        let encoded = serde_json::to_string(&identity).unwrap_or_default();
        let decoded = serde_json::from_str::<Identity>(encoded.as_str()).ok();
        assert_eq!(decoded, Some(identity));
    }
}
