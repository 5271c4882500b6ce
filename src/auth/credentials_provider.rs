///
/// Capability supplying the bearer credential of the current admin session.
///
/// Injected into every component that talks to the backend,
/// so a missing credential is handled in one place
/// instead of being read from ambient state at call sites.
///
#[cfg_attr(test, mockall::automock)]
pub trait CredentialsProvider: Send + Sync {
    ///
    /// ### Returns
    /// Bearer token of the logged in admin,
    /// [None] when no admin session is active
    ///
    fn bearer_token(&self) -> Option<String>;
}
