/// Snapshot of the visitor's challenge ownership.
///
/// Only meaningful for authenticated visitors; re-fetched whenever the
/// identity transitions to authenticated and cleared on sign-out. While
/// `loading` is true the `active` flag must not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeStatus {
    pub active: bool,
    pub loading: bool,
}

impl ChallengeStatus {
    /// The state while the challenge source is still being fetched.
    pub fn resolving() -> Self {
        Self {
            active: false,
            loading: true,
        }
    }

    /// A resolved status, with or without an active challenge.
    pub fn resolved(active: bool) -> Self {
        Self {
            active,
            loading: false,
        }
    }
}
