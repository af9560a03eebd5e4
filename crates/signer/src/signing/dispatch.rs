/// Outcome of asking one signing candidate to handle a request.
///
/// Exactly one variant holds per call. `Signed` always carries a
/// non-empty signature string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome {
    /// The candidate owns the identifier and produced a signature.
    Signed(String),
    /// The candidate does not own the identifier; the next candidate
    /// bound to the route should be tried.
    NotApplicable,
    /// The identifier or payload failed the candidate's precondition
    /// checks. Terminal for the whole request.
    InvalidInput,
}

/// A signing candidate consulted by the sign route.
///
/// Candidates are tried in registration order. `Err` is reserved for
/// unexpected backend failures and propagates to the server's generic
/// error handling rather than being folded into an outcome.
pub trait SignerDispatch: Send + Sync {
    fn attempt_sign(&self, identifier: &str, data: &str) -> anyhow::Result<SignOutcome>;
}
