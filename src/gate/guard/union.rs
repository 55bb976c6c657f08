use crate::types::decision::Decision;
use crate::types::session::Session;

use super::access::AccessGuard;
use super::auth::AuthGuard;
use super::guest::GuestGuard;
use super::landing::{AuthHomeLanding, HomeLanding};
use super::trial::TrialGuard;
use super::Guard;

pub enum UnionGuard {
    Access(AccessGuard),
    Auth(AuthGuard),
    Guest(GuestGuard),
    Trial(TrialGuard),
    Home(HomeLanding),
    AuthHome(AuthHomeLanding),
}

impl Guard for UnionGuard {
    fn decide(&self, session: &Session) -> Decision {
        match self {
            UnionGuard::Access(g) => g.decide(session),
            UnionGuard::Auth(g) => g.decide(session),
            UnionGuard::Guest(g) => g.decide(session),
            UnionGuard::Trial(g) => g.decide(session),
            UnionGuard::Home(g) => g.decide(session),
            UnionGuard::AuthHome(g) => g.decide(session),
        }
    }
}
