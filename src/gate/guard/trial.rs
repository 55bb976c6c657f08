use crate::paths;
use crate::types::decision::Decision;
use crate::types::session::Session;

use super::Guard;

/// Gate for the promotional free-trial entry point.
///
/// Identities that already hold a challenge are sent to their accounts;
/// everyone else renders, including signed-out visitors, since the trial
/// flow performs its own sign-up.
pub struct TrialGuard;

impl TrialGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Guard for TrialGuard {
    fn decide(&self, session: &Session) -> Decision {
        if session.challenge.loading {
            return Decision::Pending;
        }
        if session.identity.authenticated && session.challenge.active {
            return Decision::redirect(paths::ACCOUNTS);
        }

        Decision::Render
    }
}

#[cfg(test)]
mod tests {
    use crate::types::challenge::ChallengeStatus;
    use crate::types::identity::{Identity, Role};

    use super::*;

    #[test]
    fn test_trial_guard() {
        let guard = TrialGuard::new();

        let session = Session::new(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolving(),
        );
        assert_eq!(guard.decide(&session), Decision::Pending);

        let session = Session::new(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolved(true),
        );
        assert_eq!(guard.decide(&session), Decision::redirect("/accounts"));

        let session = Session::new(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolved(false),
        );
        assert_eq!(guard.decide(&session), Decision::Render);
    }

    #[test]
    fn test_signed_out_visitors_pass() {
        let guard = TrialGuard::new();

        let session = Session::new(Identity::anonymous(), ChallengeStatus::resolved(false));
        assert_eq!(guard.decide(&session), Decision::Render);

        // An unresolved identity does not hold up the page either; the
        // audience that matters is signed out anyway.
        let session = Session::new(Identity::resolving(), ChallengeStatus::resolved(false));
        assert_eq!(guard.decide(&session), Decision::Render);
    }
}
