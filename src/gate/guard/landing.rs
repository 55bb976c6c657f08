use crate::paths;
use crate::types::decision::Decision;
use crate::types::session::Session;

use super::Guard;

/// Destination resolver for the site root.
///
/// Signed-out visitors render the public landing page; everyone else is
/// forwarded to the area matching their role and challenge state. This is
/// the only guard whose render branch is reached by design rather than by
/// passing checks.
pub struct HomeLanding;

impl HomeLanding {
    pub fn new() -> Self {
        Self
    }
}

impl Guard for HomeLanding {
    fn decide(&self, session: &Session) -> Decision {
        let identity = &session.identity;
        let challenge = &session.challenge;

        if identity.loading {
            return Decision::Pending;
        }
        if !identity.authenticated {
            return Decision::Render;
        }
        // Staff resolve before the challenge source is consulted; they must
        // never wait on a fetch they do not need.
        if identity.is_staff() {
            return Decision::redirect(paths::role_home(identity.role));
        }
        if challenge.loading {
            return Decision::Pending;
        }
        if challenge.active {
            return Decision::redirect(paths::ACCOUNTS);
        }

        Decision::redirect(paths::PLANS)
    }
}

/// Destination resolver for the `/home` alias.
///
/// The same resolution as [`HomeLanding`] restricted to signed-in callers;
/// signed-out visitors go to the sign-in page and nothing ever renders
/// here.
pub struct AuthHomeLanding;

impl AuthHomeLanding {
    pub fn new() -> Self {
        Self
    }
}

impl Guard for AuthHomeLanding {
    fn decide(&self, session: &Session) -> Decision {
        let identity = &session.identity;
        let challenge = &session.challenge;

        if identity.loading {
            return Decision::Pending;
        }
        if !identity.authenticated {
            return Decision::redirect(paths::LOGIN);
        }
        if identity.is_staff() {
            return Decision::redirect(paths::role_home(identity.role));
        }
        if challenge.loading {
            return Decision::Pending;
        }
        if challenge.active {
            return Decision::redirect(paths::ACCOUNTS);
        }

        Decision::redirect(paths::PLANS)
    }
}
