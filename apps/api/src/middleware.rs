use adminhub_application::IdentityProvider;
use adminhub_core::{AppError, Identity};
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

pub const SUBJECT_HEADER: &str = "x-adminhub-subject";
pub const ROLE_HEADER: &str = "x-adminhub-role";
pub const SUPERUSER_HEADER: &str = "x-adminhub-superuser";

/// Identity attached to a request by the upstream session gateway.
///
/// Absent when the gateway supplied no role, which resolves to no access.
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity(Option<Identity>);

impl RequestIdentity {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let Some(role_name) = header(ROLE_HEADER) else {
            return Self(None);
        };
        let is_superuser = header(SUPERUSER_HEADER)
            .is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1");

        let mut identity = Identity::new(role_name, is_superuser);
        if let Some(subject) = header(SUBJECT_HEADER) {
            identity = identity.with_subject(subject);
        }

        Self(Some(identity))
    }

    /// Returns the identity or `Unauthorized` for administrative routes.
    pub fn require(&self) -> Result<&Identity, AppError> {
        self.0
            .as_ref()
            .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))
    }
}

impl IdentityProvider for RequestIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}

pub async fn attach_identity(mut request: Request, next: Next) -> Response {
    let identity = RequestIdentity::from_headers(request.headers());
    request.extensions_mut().insert(identity);
    next.run(request).await
}
