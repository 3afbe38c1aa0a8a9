use adminhub_domain::Action;

/// Partial update for role metadata.
///
/// Identifier, system flag and super tag are immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRoleInput {
    /// New unique name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New informational member count.
    pub user_count: Option<u32>,
}

impl UpdateRoleInput {
    /// Returns whether no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.user_count.is_none()
    }
}

/// Action flags a caller holds on one page, for in-page control gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCapabilities {
    /// View access.
    pub can_view: bool,
    /// Edit access.
    pub can_edit: bool,
    /// Create access.
    pub can_create: bool,
    /// Delete access.
    pub can_delete: bool,
}

impl PageCapabilities {
    /// Returns whether an action is allowed by this capability.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.can_view,
            Action::Edit => self.can_edit,
            Action::Create => self.can_create,
            Action::Delete => self.can_delete,
        }
    }
}
