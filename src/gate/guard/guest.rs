use crate::paths;
use crate::types::decision::Decision;
use crate::types::session::Session;

use super::Guard;

/// Gate for pages only signed-out visitors may see (sign-in, sign-up).
///
/// Signed-in visitors are bounced to their canonical home. A per-route
/// override may send plain users somewhere context-appropriate instead,
/// e.g. the plans page after landing on sign-in; staff always land on
/// their dashboard, override or not.
pub struct GuestGuard {
    authed_redirect: Option<String>,
}

impl GuestGuard {
    pub fn new(authed_redirect: Option<String>) -> Self {
        Self { authed_redirect }
    }
}

impl Guard for GuestGuard {
    fn decide(&self, session: &Session) -> Decision {
        let identity = &session.identity;

        if identity.loading {
            return Decision::Pending;
        }

        if identity.authenticated {
            if !identity.is_staff() {
                if let Some(target) = self.authed_redirect.as_deref() {
                    return Decision::redirect(target);
                }
            }
            return Decision::redirect(paths::role_home(identity.role));
        }

        Decision::Render
    }
}

#[cfg(test)]
mod tests {
    use crate::types::challenge::ChallengeStatus;
    use crate::types::identity::{Identity, Role};

    use super::*;

    fn session(identity: Identity) -> Session {
        Session::new(identity, ChallengeStatus::resolved(false))
    }

    #[test]
    fn test_guest_round_trip() {
        let guard = GuestGuard::new(None);

        let decision = guard.decide(&session(Identity::signed_in(Role::User)));
        assert_eq!(decision, Decision::redirect("/home"));

        let decision = guard.decide(&session(Identity::signed_in(Role::Admin)));
        assert_eq!(decision, Decision::redirect("/admin/dashboard"));

        let decision = guard.decide(&session(Identity::signed_in(Role::SuperAdmin)));
        assert_eq!(decision, Decision::redirect("/superadmin/dashboard"));
    }

    #[test]
    fn test_override_applies_to_users_only() {
        let guard = GuestGuard::new(Some("/plans".to_string()));

        let decision = guard.decide(&session(Identity::signed_in(Role::User)));
        assert_eq!(decision, Decision::redirect("/plans"));

        // Staff ignore the override and land on their dashboard.
        let decision = guard.decide(&session(Identity::signed_in(Role::Admin)));
        assert_eq!(decision, Decision::redirect("/admin/dashboard"));

        let decision = guard.decide(&session(Identity::signed_in(Role::SuperAdmin)));
        assert_eq!(decision, Decision::redirect("/superadmin/dashboard"));
    }

    #[test]
    fn test_signed_out_renders() {
        let guard = GuestGuard::new(Some("/plans".to_string()));
        assert_eq!(guard.decide(&session(Identity::anonymous())), Decision::Render);
    }

    #[test]
    fn test_loading_waits() {
        let guard = GuestGuard::new(None);
        assert_eq!(guard.decide(&session(Identity::resolving())), Decision::Pending);
    }
}
