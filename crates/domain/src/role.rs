use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use adminhub_core::{AppError, AppResult, NonEmptyString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Action, PageCatalog, PermissionRecord};

/// Stable role identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleId(String);

impl RoleId {
    /// Creates a validated role identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?.into()))
    }

    /// Creates a random role identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for RoleId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoleId> for String {
    fn from(value: RoleId) -> Self {
        value.0
    }
}

impl Display for RoleId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unvalidated role fields, used to rebuild roles from storage or seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInput {
    /// Stable role identifier.
    pub id: String,
    /// Unique role name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// One record per catalog page.
    pub permissions: Vec<PermissionRecord>,
    /// Seeded role exempt from deletion.
    pub is_system: bool,
    /// Role whose effective grant is always full access.
    pub is_super: bool,
    /// Informational member counter.
    pub user_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Named bundle of page permissions plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoleInput")]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
    description: String,
    permissions: Vec<PermissionRecord>,
    is_system: bool,
    is_super: bool,
    user_count: u32,
    created_at: DateTime<Utc>,
}

impl Role {
    /// Rebuilds a role from raw fields.
    ///
    /// A super role must also be a system role, and each page may carry at
    /// most one permission record.
    pub fn new(input: RoleInput) -> AppResult<Self> {
        if input.is_super && !input.is_system {
            return Err(AppError::Validation(format!(
                "super role '{}' must be a system role",
                input.name
            )));
        }

        let mut seen = HashSet::with_capacity(input.permissions.len());
        if let Some(duplicate) = input
            .permissions
            .iter()
            .find(|record| !seen.insert(record.page.as_str()))
        {
            return Err(AppError::Validation(format!(
                "role '{}' has more than one permission record for page '{}'",
                input.name, duplicate.page
            )));
        }

        Ok(Self {
            id: RoleId::new(input.id)?,
            name: NonEmptyString::new(input.name)?,
            description: input.description,
            permissions: input.permissions,
            is_system: input.is_system,
            is_super: input.is_super,
            user_count: input.user_count,
            created_at: input.created_at,
        })
    }

    /// Creates a custom role with no access on any catalog page.
    #[must_use]
    pub fn custom(
        name: NonEmptyString,
        description: impl Into<String>,
        catalog: &PageCatalog,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RoleId::generate(),
            name,
            description: description.into(),
            permissions: catalog.default_permissions(false),
            is_system: false,
            is_super: false,
            user_count: 0,
            created_at,
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the role description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns stored page permissions.
    #[must_use]
    pub fn permissions(&self) -> &[PermissionRecord] {
        &self.permissions
    }

    /// Returns the stored record for one page.
    #[must_use]
    pub fn permission_for(&self, page: &str) -> Option<&PermissionRecord> {
        self.permissions.iter().find(|record| record.page == page)
    }

    /// Returns whether the role is seeded and protected from deletion.
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.is_system
    }

    /// Returns whether the role always resolves to full access.
    #[must_use]
    pub fn is_super(&self) -> bool {
        self.is_super
    }

    /// Returns the informational member counter.
    #[must_use]
    pub fn user_count(&self) -> u32 {
        self.user_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renames the role. Uniqueness is checked by the store.
    pub fn rename(&mut self, name: NonEmptyString) {
        self.name = name;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the member counter.
    pub fn set_user_count(&mut self, user_count: u32) {
        self.user_count = user_count;
    }

    /// Sets one action flag on one page, leaving every other flag untouched.
    pub fn set_permission(&mut self, page: &str, action: Action, value: bool) -> AppResult<()> {
        let Some(record) = self
            .permissions
            .iter_mut()
            .find(|record| record.page == page)
        else {
            return Err(AppError::NotFound(format!(
                "role '{}' has no permission record for page '{page}'",
                self.id
            )));
        };

        record.set(action, value);
        Ok(())
    }

    /// Replaces the whole permission set. Completeness is checked by the store.
    pub fn replace_permissions(&mut self, permissions: Vec<PermissionRecord>) {
        self.permissions = permissions;
    }

    /// Fills pages missing from the stored set with all-false records and
    /// drops records outside the catalog.
    ///
    /// Used when reloading roles persisted against an older catalog.
    pub fn align_with_catalog(&mut self, catalog: &PageCatalog) {
        let mut aligned = Vec::with_capacity(catalog.list_pages().len());
        for page in catalog.list_pages() {
            let record = self
                .permission_for(page)
                .cloned()
                .unwrap_or_else(|| PermissionRecord::uniform(page.as_str(), false));
            aligned.push(record);
        }
        self.permissions = aligned;
    }
}

impl TryFrom<RoleInput> for Role {
    type Error = AppError;

    fn try_from(value: RoleInput) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Role> for RoleInput {
    fn from(value: Role) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.into(),
            description: value.description,
            permissions: value.permissions,
            is_system: value.is_system,
            is_super: value.is_super,
            user_count: value.user_count,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use adminhub_core::{AppError, NonEmptyString};
    use chrono::Utc;
    use proptest::prelude::*;

    use crate::catalog::{Action, PageCatalog, PermissionRecord, STANDARD_PAGES};

    use super::{Role, RoleInput};

    fn custom_role(name: &str) -> Role {
        let catalog = PageCatalog::standard();
        let name = match NonEmptyString::new(name) {
            Ok(name) => name,
            Err(error) => panic!("invalid test role name: {error}"),
        };
        Role::custom(name, "test role", &catalog, Utc::now())
    }

    #[test]
    fn custom_role_starts_without_access() {
        let role = custom_role("Support");
        let catalog = PageCatalog::standard();

        assert!(catalog.is_complete(role.permissions()));
        assert!(!role.is_system());
        assert!(!role.is_super());
        assert_eq!(role.user_count(), 0);
        assert!(
            role.permissions()
                .iter()
                .all(|record| Action::all().iter().all(|action| !record.allows(*action)))
        );
    }

    #[test]
    fn super_role_must_be_system() {
        let role = Role::new(RoleInput {
            id: "rogue".to_owned(),
            name: "Rogue".to_owned(),
            description: String::new(),
            permissions: Vec::new(),
            is_system: false,
            is_super: true,
            user_count: 0,
            created_at: Utc::now(),
        });

        assert!(role.is_err());
    }

    #[test]
    fn duplicate_page_records_are_rejected() {
        let role = Role::new(RoleInput {
            id: "dup".to_owned(),
            name: "Dup".to_owned(),
            description: String::new(),
            permissions: vec![
                PermissionRecord::uniform("reports", false),
                PermissionRecord::uniform("reports", true),
            ],
            is_system: false,
            is_super: false,
            user_count: 0,
            created_at: Utc::now(),
        });

        assert!(matches!(role, Err(AppError::Validation(_))));
    }

    #[test]
    fn set_permission_rejects_unknown_page() {
        let mut role = custom_role("Support");
        assert!(
            role.set_permission("nonexistent-page", Action::View, true)
                .is_err()
        );
    }

    #[test]
    fn role_roundtrips_through_json() {
        let mut role = custom_role("Support");
        let _ = role.set_permission("support", Action::Edit, true);

        let encoded = serde_json::to_string(&role).unwrap_or_default();
        let decoded = serde_json::from_str::<Role>(encoded.as_str()).ok();

        assert_eq!(decoded, Some(role));
        assert!(encoded.contains("\"delete\":false"));
    }

    #[test]
    fn json_with_blank_name_is_rejected() {
        let payload = r#"{
            "id": "r1",
            "name": " ",
            "description": "",
            "permissions": [],
            "is_system": false,
            "is_super": false,
            "user_count": 0,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Role>(payload).is_err());
    }

    #[test]
    fn align_with_catalog_fills_missing_pages_with_false() {
        let catalog = PageCatalog::new(["users", "roles", "content"]).unwrap_or_default();
        let mut role = custom_role("Support");
        role.replace_permissions(vec![PermissionRecord::uniform("users", true)]);

        role.align_with_catalog(&catalog);

        assert!(catalog.is_complete(role.permissions()));
        assert_eq!(role.permission_for("users").map(|record| record.view), Some(true));
        assert_eq!(role.permission_for("roles").map(|record| record.view), Some(false));
    }

    proptest! {
        #[test]
        fn set_permission_touches_only_one_flag(
            page_index in 0..STANDARD_PAGES.len(),
            action_index in 0..4usize,
            value in any::<bool>(),
        ) {
            let mut role = custom_role("Support");
            let before = role.clone();
            let page = STANDARD_PAGES[page_index];
            let action = Action::all()[action_index];

            prop_assert!(role.set_permission(page, action, value).is_ok());

            for (after_record, before_record) in role.permissions().iter().zip(before.permissions()) {
                for candidate in Action::all() {
                    let expected = if after_record.page == page && *candidate == action {
                        value
                    } else {
                        before_record.allows(*candidate)
                    };
                    prop_assert_eq!(after_record.allows(*candidate), expected);
                }
            }
        }
    }
}
