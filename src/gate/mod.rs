pub mod config;
pub mod factory;
pub mod guard;

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::gate::guard::union::UnionGuard;
use crate::gate::guard::Guard;
use crate::nav::Navigator;
use crate::types::decision::Decision;
use crate::types::session::Session;

/// Redirect chains longer than this are treated as a cyclic route table.
/// The deepest legitimate chain in the default table is two hops.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("route '{0}' is not registered")]
    RouteNotFound(String),

    #[error("redirect chain from '{from}' did not settle after {hops} hops")]
    RedirectLoop { from: String, hops: usize },
}

/// Where a navigation settled after its redirect chain was followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// A state source is still resolving at this path.
    Pending(String),

    /// This path may mount its view.
    Render(String),
}

/// The route registry: every registered path bound to its guard.
///
/// Decisions are computed fresh on every call; nothing is cached across
/// navigations, since role and challenge status can change between visits.
pub struct Gate {
    routes: HashMap<String, UnionGuard>,
}

impl Gate {
    pub fn new(routes: HashMap<String, UnionGuard>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Evaluates a single navigation to `path` against its guard.
    pub fn decide(&self, path: &str, session: &Session) -> Result<Decision, GateError> {
        let guard = self
            .routes
            .get(path)
            .ok_or_else(|| GateError::RouteNotFound(path.to_string()))?;

        let decision = guard.decide(session);
        debug!("Route '{}' decision: {:?}", path, decision);
        Ok(decision)
    }

    /// Navigates to `path` and follows redirect decisions until the chain
    /// settles.
    ///
    /// The initial navigation is pushed onto the history; every redirect is
    /// applied with `replace`, so the net effect on the stack is a single
    /// new entry no matter how many hops the chain takes.
    pub fn resolve(
        &self,
        path: &str,
        session: &Session,
        nav: &mut dyn Navigator,
    ) -> Result<Resolution, GateError> {
        nav.push(path);

        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match self.decide(&current, session)? {
                Decision::Pending => return Ok(Resolution::Pending(current)),
                Decision::Render => return Ok(Resolution::Render(current)),
                Decision::Redirect(target) => {
                    nav.replace(&target);
                    current = target;
                }
            }
        }

        Err(GateError::RedirectLoop {
            from: path.to_string(),
            hops: MAX_REDIRECTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use crate::gate::config::{GuardKind, RouteEntry, RoutesConfig};
    use crate::gate::factory::GateFactory;
    use crate::nav::History;
    use crate::types::challenge::ChallengeStatus;
    use crate::types::identity::{Identity, Role};

    use super::*;

    static GATE: Lazy<Gate> = Lazy::new(|| {
        let cfg = RoutesConfig {
            routes: RoutesConfig::default_routes(),
        };
        GateFactory::new().build_gate(&cfg).unwrap()
    });

    fn make_session(identity: Identity, challenge: ChallengeStatus) -> Session {
        Session::new(identity, challenge)
    }

    #[test]
    fn test_unknown_route() {
        let session = make_session(Identity::anonymous(), ChallengeStatus::resolved(false));
        let result = GATE.decide("/nope", &session);
        assert_eq!(result, Err(GateError::RouteNotFound("/nope".to_string())));
    }

    #[test]
    fn test_resolve_signed_out_dashboard() {
        let session = make_session(Identity::anonymous(), ChallengeStatus::resolved(false));
        let mut history = History::new();
        history.push("/");

        let resolution = GATE.resolve("/accounts", &session, &mut history).unwrap();
        assert_eq!(resolution, Resolution::Render("/login".to_string()));

        // One navigation, one net history entry; the guarded route is not a
        // back target.
        assert_eq!(history.entries(), &["/", "/login"]);
    }

    #[test]
    fn test_resolve_funded_user_home() {
        let session = make_session(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolved(true),
        );
        let mut history = History::new();

        let resolution = GATE.resolve("/home", &session, &mut history).unwrap();
        assert_eq!(resolution, Resolution::Render("/accounts".to_string()));
    }

    #[test]
    fn test_resolve_unfunded_user_home() {
        let session = make_session(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolved(false),
        );
        let mut history = History::new();

        let resolution = GATE.resolve("/home", &session, &mut history).unwrap();
        assert_eq!(resolution, Resolution::Render("/plans".to_string()));
    }

    #[test]
    fn test_resolve_admin_everywhere() {
        // Guest and landing routes settle on the admin console even while
        // the challenge fetch is still in flight.
        let session = make_session(
            Identity::signed_in(Role::Admin),
            ChallengeStatus::resolving(),
        );
        for path in ["/", "/home", "/login"] {
            let mut history = History::new();
            let resolution = GATE.resolve(path, &session, &mut history).unwrap();
            assert_eq!(
                resolution,
                Resolution::Render("/admin/dashboard".to_string()),
                "path {path}"
            );
        }

        // Challenge-gated trader routes bounce the admin once the fetch
        // has resolved.
        let session = make_session(
            Identity::signed_in(Role::Admin),
            ChallengeStatus::resolved(false),
        );
        let mut history = History::new();
        let resolution = GATE.resolve("/accounts", &session, &mut history).unwrap();
        assert_eq!(resolution, Resolution::Render("/admin/dashboard".to_string()));
    }

    #[test]
    fn test_resolve_pending_settles_in_place() {
        let session = make_session(Identity::resolving(), ChallengeStatus::resolving());
        let mut history = History::new();

        let resolution = GATE.resolve("/accounts", &session, &mut history).unwrap();
        assert_eq!(resolution, Resolution::Pending("/accounts".to_string()));
        assert_eq!(history.entries(), &["/accounts"]);
    }

    #[test]
    fn test_redirect_loop_detected() {
        let cfg = RoutesConfig {
            routes: vec![
                RouteEntry {
                    authed_redirect: Some("/b".to_string()),
                    ..minimal("/a", GuardKind::Guest)
                },
                RouteEntry {
                    authed_redirect: Some("/a".to_string()),
                    ..minimal("/b", GuardKind::Guest)
                },
            ],
        };
        let gate = GateFactory::new().build_gate(&cfg).unwrap();

        let session = make_session(
            Identity::signed_in(Role::User),
            ChallengeStatus::resolved(false),
        );
        let mut history = History::new();
        let result = gate.resolve("/a", &session, &mut history);
        assert_eq!(
            result,
            Err(GateError::RedirectLoop {
                from: "/a".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
    }

    fn minimal(path: &str, guard: GuardKind) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            guard,
            require_auth: true,
            require_challenge: false,
            admin_only: false,
            super_admin_only: false,
            redirect_to: None,
            authed_redirect: None,
        }
    }
}
