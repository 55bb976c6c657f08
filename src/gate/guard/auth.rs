use crate::paths;
use crate::types::decision::Decision;
use crate::types::session::Session;

use super::Guard;

/// Gate for routes that need a signed-in identity but have no relationship
/// to challenge status. Never consults the challenge source, so these
/// routes do not block on an unrelated fetch.
pub struct AuthGuard;

impl AuthGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Guard for AuthGuard {
    fn decide(&self, session: &Session) -> Decision {
        let identity = &session.identity;

        if identity.loading {
            return Decision::Pending;
        }
        if !identity.authenticated {
            return Decision::redirect(paths::LOGIN);
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
    fn test_auth_guard() {
        let guard = AuthGuard::new();

        let session = Session::new(Identity::resolving(), ChallengeStatus::resolving());
        assert_eq!(guard.decide(&session), Decision::Pending);

        let session = Session::new(Identity::anonymous(), ChallengeStatus::resolved(false));
        assert_eq!(guard.decide(&session), Decision::redirect("/login"));

        // A still-loading challenge source must not delay rendering.
        let session = Session::new(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolving(),
        );
        assert_eq!(guard.decide(&session), Decision::Render);
    }
}
