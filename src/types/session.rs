use crate::types::challenge::ChallengeStatus;
use crate::types::identity::Identity;

/// An internally consistent pair of state snapshots taken at the start of a
/// navigation.
///
/// Guards receive the whole session and never re-read the sources
/// mid-evaluation, so a state change while a decision is being computed
/// cannot mix an old and a new value. Sessions are not cached across
/// navigations; every navigation is evaluated from a fresh snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub challenge: ChallengeStatus,
}

impl Session {
    pub fn new(identity: Identity, challenge: ChallengeStatus) -> Self {
        Self {
            identity,
            challenge,
        }
    }
}
