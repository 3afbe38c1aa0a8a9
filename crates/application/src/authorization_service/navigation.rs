use super::*;

impl AuthorizationService {
    /// Returns the catalog pages the identity may see, in catalog order.
    pub async fn visible_pages(&self, identity: Option<&Identity>) -> Vec<String> {
        let records = self.resolve(identity).await;

        self.catalog
            .list_pages()
            .iter()
            .filter(|page| grants(&records, page, Action::View))
            .cloned()
            .collect()
    }

    /// Returns the action flags the identity holds on one page.
    ///
    /// A page the identity cannot view yields no capabilities at all.
    pub async fn page_capabilities(
        &self,
        identity: Option<&Identity>,
        page: &str,
    ) -> PageCapabilities {
        let records = self.resolve(identity).await;
        if !grants(&records, page, Action::View) {
            return PageCapabilities::default();
        }

        PageCapabilities {
            can_view: true,
            can_edit: grants(&records, page, Action::Edit),
            can_create: grants(&records, page, Action::Create),
            can_delete: grants(&records, page, Action::Delete),
        }
    }
}
