use adminhub_application::PageCapabilities;
use serde::Serialize;
use ts_rs::TS;

/// Pages the caller may see, in navigation order.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/navigation-response.ts"
)]
pub struct NavigationResponse {
    pub pages: Vec<String>,
}

/// Capabilities the caller holds on one page.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/page-access-response.ts"
)]
pub struct PageAccessResponse {
    pub page: String,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_create: bool,
    pub can_delete: bool,
}

impl PageAccessResponse {
    pub fn new(page: String, capabilities: PageCapabilities) -> Self {
        Self {
            page,
            can_view: capabilities.can_view,
            can_edit: capabilities.can_edit,
            can_create: capabilities.can_create,
            can_delete: capabilities.can_delete,
        }
    }
}
