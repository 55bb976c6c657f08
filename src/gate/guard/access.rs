use crate::paths;
use crate::types::decision::Decision;
use crate::types::route::RouteRule;
use crate::types::session::Session;

use super::Guard;

/// The general-purpose gate.
///
/// The route's declared requirements are evaluated as an ordered rule list;
/// the first matching rule decides and the rest are never consulted:
///
/// 1. Unresolved identity, or unresolved challenge on a challenge-gated
///    route, waits.
/// 2. Missing authentication redirects to the sign-in page.
/// 3. On challenge-gated routes without an admin flag, staff are bounced to
///    their own console instead of the challenge check.
/// 4. A missing challenge redirects to the route's override target, or the
///    plans page. Staff are exempt; on routes that combine a challenge
///    requirement with an admin flag they fall through to the admin gates.
/// 5. Non-super-admins on super-admin routes go to their canonical home.
/// 6. Non-staff on admin routes go to their canonical home.
/// 7. Anything left renders.
pub struct AccessGuard {
    rule: RouteRule,
}

impl AccessGuard {
    pub fn new(rule: RouteRule) -> Self {
        Self { rule }
    }
}

impl Guard for AccessGuard {
    fn decide(&self, session: &Session) -> Decision {
        let identity = &session.identity;
        let challenge = &session.challenge;
        let rule = &self.rule;

        // Challenge loading only blocks routes that actually read the
        // challenge flag.
        if identity.loading || (rule.require_challenge && challenge.loading) {
            return Decision::Pending;
        }

        if rule.require_auth && !identity.authenticated {
            return Decision::redirect(paths::LOGIN);
        }

        // Staff never hold trading challenges, so a challenge-gated route
        // that is not itself an admin route is meaningless to them.
        if rule.require_challenge
            && !rule.admin_only
            && !rule.super_admin_only
            && identity.is_staff()
        {
            return Decision::redirect(paths::role_home(identity.role));
        }

        // Staff are exempt from the challenge check; on admin-declared
        // routes they answer to the admin gates below instead.
        if rule.require_challenge && !challenge.active && !identity.is_staff() {
            let target = rule.redirect_to.as_deref().unwrap_or(paths::PLANS);
            return Decision::redirect(target);
        }

        if rule.super_admin_only && !identity.is_super_admin() {
            return Decision::redirect(paths::role_home(identity.role));
        }

        if rule.admin_only && !identity.is_staff() {
            return Decision::redirect(paths::role_home(identity.role));
        }

        Decision::Render
    }
}
