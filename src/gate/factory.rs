use std::collections::HashMap;

use anyhow::{bail, Result};

use super::config::{GuardKind, RouteEntry, RoutesConfig};
use super::guard::access::AccessGuard;
use super::guard::auth::AuthGuard;
use super::guard::guest::GuestGuard;
use super::guard::landing::{AuthHomeLanding, HomeLanding};
use super::guard::trial::TrialGuard;
use super::guard::union::UnionGuard;
use super::Gate;

pub struct GateFactory;

impl GateFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn build_gate(&self, cfg: &RoutesConfig) -> Result<Gate> {
        let mut routes = HashMap::with_capacity(cfg.routes.len());
        for entry in cfg.routes.iter() {
            let guard = self.build_guard(entry);
            if routes.insert(entry.path.clone(), guard).is_some() {
                bail!("duplicate route '{}'", entry.path);
            }
        }

        Ok(Gate::new(routes))
    }

    fn build_guard(&self, entry: &RouteEntry) -> UnionGuard {
        match entry.guard {
            GuardKind::Access => UnionGuard::Access(AccessGuard::new(entry.rule())),
            GuardKind::Auth => UnionGuard::Auth(AuthGuard::new()),
            GuardKind::Guest => UnionGuard::Guest(GuestGuard::new(entry.authed_redirect.clone())),
            GuardKind::Trial => UnionGuard::Trial(TrialGuard::new()),
            GuardKind::Home => UnionGuard::Home(HomeLanding::new()),
            GuardKind::AuthHome => UnionGuard::AuthHome(AuthHomeLanding::new()),
        }
    }
}
