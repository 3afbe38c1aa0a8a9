use adminhub_core::Identity;

/// Port supplying the identity of the current caller.
///
/// `None` means unauthenticated and resolves to no access.
pub trait IdentityProvider: Send + Sync {
    /// Returns the current identity, if any.
    fn current_identity(&self) -> Option<Identity>;
}
