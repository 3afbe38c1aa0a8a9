use std::sync::Arc;

use adminhub_core::{AppError, AppResult, Identity};
use adminhub_domain::{Action, PageCatalog, PermissionRecord};
use tracing::{debug, warn};

use crate::role_ports::{PageCapabilities, RoleRepository};

mod navigation;
mod permissions;


/// Resolves the effective permissions of an identity.
///
/// Nothing is cached: every query reads the role repository, so a committed
/// role mutation is visible to the next call. Queries never fail; an
/// unknown role or a storage error resolves to no access.
#[derive(Clone)]
pub struct AuthorizationService {
    catalog: PageCatalog,
    repository: Arc<dyn RoleRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(catalog: PageCatalog, repository: Arc<dyn RoleRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Returns the page catalog used for resolution.
    #[must_use]
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }
}

enum Resolution {
    FullAccess,
    Stored(Vec<PermissionRecord>),
    Denied,
}

/// The first record for a page wins. Every query goes through this lookup so
/// navigation, capabilities and guards agree on duplicated records.
fn record_for<'a>(records: &'a [PermissionRecord], page: &str) -> Option<&'a PermissionRecord> {
    records.iter().find(|record| record.page == page)
}

fn grants(records: &[PermissionRecord], page: &str, action: Action) -> bool {
    record_for(records, page).is_some_and(|record| record.allows(action))
}
