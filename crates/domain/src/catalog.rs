//! Page catalog, action vocabulary and per-page permission records.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use adminhub_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Page keys protected by the standard console build, in navigation order.
pub const STANDARD_PAGES: &[&str] = &[
    "dashboard",
    "users",
    "roles",
    "analytics",
    "content",
    "reports",
    "notifications",
    "security",
    "api",
    "activity",
    "settings",
    "products",
    "marketing",
    "orders",
    "media-plans",
    "support",
    "inventory",
    "sales-reports",
    "content-library",
    "team",
    "projects",
];

/// Actions a role may be granted on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// See the page and its contents.
    View,
    /// Modify existing items on the page.
    Edit,
    /// Add new items on the page.
    Create,
    /// Remove items on the page.
    Delete,
}

impl Action {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Action] = &[Action::View, Action::Edit, Action::Create, Action::Delete];

        ALL
    }

    /// Parses a transport value into an action.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!("unknown action value '{value}'"))),
        }
    }
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Grant of the four actions on one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Page key from the catalog.
    pub page: String,
    /// View flag.
    pub view: bool,
    /// Edit flag.
    pub edit: bool,
    /// Create flag.
    pub create: bool,
    /// Delete flag.
    pub delete: bool,
}

impl PermissionRecord {
    /// Creates a record with all four actions set to `full_access`.
    #[must_use]
    pub fn uniform(page: impl Into<String>, full_access: bool) -> Self {
        Self {
            page: page.into(),
            view: full_access,
            edit: full_access,
            create: full_access,
            delete: full_access,
        }
    }

    /// Returns whether an action is allowed by this record.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Edit => self.edit,
            Action::Create => self.create,
            Action::Delete => self.delete,
        }
    }

    /// Sets the flag for exactly one action.
    pub fn set(&mut self, action: Action, value: bool) {
        match action {
            Action::View => self.view = value,
            Action::Edit => self.edit = value,
            Action::Create => self.create = value,
            Action::Delete => self.delete = value,
        }
    }
}

/// Closed, ordered set of protected pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Arc<[String]>,
}

impl PageCatalog {
    /// Returns the catalog shipped with the standard console.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pages: STANDARD_PAGES
                .iter()
                .map(|page| (*page).to_owned())
                .collect(),
        }
    }

    /// Creates a catalog from page keys, rejecting blanks and duplicates.
    pub fn new<I, S>(pages: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for page in pages {
            let page = NonEmptyString::new(page.into().trim().to_owned())?;
            if !seen.insert(page.as_str().to_owned()) {
                return Err(AppError::Validation(format!(
                    "page '{}' is listed more than once in the catalog",
                    page.as_str()
                )));
            }
            ordered.push(String::from(page));
        }

        if ordered.is_empty() {
            return Err(AppError::Validation(
                "page catalog must contain at least one page".to_owned(),
            ));
        }

        Ok(Self {
            pages: ordered.into(),
        })
    }

    /// Returns catalog pages in navigation order.
    #[must_use]
    pub fn list_pages(&self) -> &[String] {
        &self.pages
    }

    /// Returns whether the page belongs to the catalog.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.pages.iter().any(|known| known == page)
    }

    /// Fails with `NotFound` when the page is outside the catalog.
    pub fn require_page(&self, page: &str) -> AppResult<()> {
        if self.contains(page) {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "page '{page}' is not part of the catalog"
        )))
    }

    /// Returns one record per catalog page with every action set to `full_access`.
    #[must_use]
    pub fn default_permissions(&self, full_access: bool) -> Vec<PermissionRecord> {
        self.pages
            .iter()
            .map(|page| PermissionRecord::uniform(page.as_str(), full_access))
            .collect()
    }

    /// Returns whether records cover every catalog page exactly once.
    #[must_use]
    pub fn is_complete(&self, records: &[PermissionRecord]) -> bool {
        self.validate_complete(records).is_ok()
    }

    /// Validates that records cover every catalog page exactly once and nothing else.
    pub fn validate_complete(&self, records: &[PermissionRecord]) -> AppResult<()> {
        let mut seen = HashSet::new();
        for record in records {
            if !self.contains(record.page.as_str()) {
                return Err(AppError::Validation(format!(
                    "page '{}' is not part of the catalog",
                    record.page
                )));
            }
            if !seen.insert(record.page.as_str()) {
                return Err(AppError::Validation(format!(
                    "page '{}' appears more than once in the permission set",
                    record.page
                )));
            }
        }

        if let Some(missing) = self
            .pages
            .iter()
            .find(|page| !seen.contains(page.as_str()))
        {
            return Err(AppError::Validation(format!(
                "permission set is missing page '{missing}'"
            )));
        }

        Ok(())
    }

    /// Reorders complete records into catalog order.
    ///
    /// Callers must validate completeness first; unknown pages are dropped.
    #[must_use]
    pub fn in_catalog_order(&self, mut records: Vec<PermissionRecord>) -> Vec<PermissionRecord> {
        records.sort_by_key(|record| {
            self.pages
                .iter()
                .position(|page| page == &record.page)
                .unwrap_or(usize::MAX)
        });
        records.retain(|record| self.contains(record.page.as_str()));
        records
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
