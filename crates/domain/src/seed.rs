//! System roles seeded on startup.

use adminhub_core::AppResult;
use chrono::{DateTime, Utc};

use crate::catalog::{PageCatalog, PermissionRecord};
use crate::role::{Role, RoleInput};

/// Identifier of the seeded super role.
pub const SUPER_ADMIN_ROLE_ID: &str = "super-admin";

const SEEDED_AT_UNIX_SECONDS: i64 = 1_704_067_200;

const ADMIN_RESTRICTED_PAGES: &[&str] = &["settings", "security", "api"];
const ADMIN_NO_DELETE_PAGES: &[&str] = &["settings", "security", "api", "users"];

const EDITOR_VIEW_PAGES: &[&str] = &[
    "dashboard",
    "content",
    "content-library",
    "reports",
    "products",
    "marketing",
];
const EDITOR_WRITE_PAGES: &[&str] = &["content", "content-library", "products"];

const VIEWER_VIEW_PAGES: &[&str] = &["dashboard", "analytics", "reports", "products", "orders"];

/// Returns the standard system roles shaped against `catalog`.
///
/// Pages absent from the catalog are skipped, so every seeded role stays
/// complete for the active catalog.
pub fn standard_system_roles(catalog: &PageCatalog) -> AppResult<Vec<Role>> {
    let seeded_at = DateTime::<Utc>::from_timestamp(SEEDED_AT_UNIX_SECONDS, 0).unwrap_or_default();

    let admin = matrix(catalog, |page| PermissionRecord {
        page: page.to_owned(),
        view: true,
        edit: !ADMIN_RESTRICTED_PAGES.contains(&page),
        create: !ADMIN_RESTRICTED_PAGES.contains(&page),
        delete: !ADMIN_NO_DELETE_PAGES.contains(&page),
    });
    let editor = matrix(catalog, |page| PermissionRecord {
        page: page.to_owned(),
        view: EDITOR_VIEW_PAGES.contains(&page),
        edit: EDITOR_WRITE_PAGES.contains(&page),
        create: EDITOR_WRITE_PAGES.contains(&page),
        delete: false,
    });
    let viewer = matrix(catalog, |page| PermissionRecord {
        page: page.to_owned(),
        view: VIEWER_VIEW_PAGES.contains(&page),
        edit: false,
        create: false,
        delete: false,
    });

    [
        (
            SUPER_ADMIN_ROLE_ID,
            "Super Admin",
            "Full system access with all permissions",
            catalog.default_permissions(true),
            true,
            1,
        ),
        (
            "admin",
            "Admin",
            "Administrative access with most permissions",
            admin,
            false,
            2,
        ),
        (
            "editor",
            "Editor",
            "Content management and editing permissions",
            editor,
            false,
            5,
        ),
        (
            "viewer",
            "Viewer",
            "Read-only access to most areas",
            viewer,
            false,
            8,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, permissions, is_super, user_count)| {
        Role::new(RoleInput {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            permissions,
            is_system: true,
            is_super,
            user_count,
            created_at: seeded_at,
        })
    })
    .collect()
}

fn matrix(catalog: &PageCatalog, record: impl Fn(&str) -> PermissionRecord) -> Vec<PermissionRecord> {
    catalog
        .list_pages()
        .iter()
        .map(|page| record(page.as_str()))
        .collect()
}
