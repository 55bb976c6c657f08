use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{CommonConfig, PathSet};
use crate::display::TerminalDisplay;
use crate::paths;
use crate::types::route::RouteRule;

/// The route registry configuration. Each entry binds a path to a guard
/// variant and its declared requirements. When no config file is present
/// the platform's built-in route map is used.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RoutesConfig {
    #[serde(default = "RoutesConfig::default_routes")]
    pub routes: Vec<RouteEntry>,
}

impl CommonConfig for RoutesConfig {
    fn default() -> Self {
        Self {
            routes: Self::default_routes(),
        }
    }

    fn complete(&mut self, _ps: &PathSet) -> Result<()> {
        for route in self.routes.iter() {
            route.validate()?;
        }
        Ok(())
    }
}

impl RoutesConfig {
    pub fn default_routes() -> Vec<RouteEntry> {
        DEFAULT_ROUTES.clone()
    }
}

/// Guard variant a route is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardKind {
    /// General-purpose gate driven by the requirement flags.
    #[serde(rename = "access")]
    Access,

    /// Signed-in identity required, challenge state irrelevant.
    #[serde(rename = "auth")]
    Auth,

    /// Signed-out visitors only.
    #[serde(rename = "guest")]
    Guest,

    /// Free-trial entry point, blocked for challenge holders.
    #[serde(rename = "trial")]
    Trial,

    /// Site-root destination resolver.
    #[serde(rename = "home")]
    Home,

    /// Auth-wrapped destination resolver for the home alias.
    #[serde(rename = "auth-home")]
    AuthHome,
}

impl GuardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardKind::Access => "access",
            GuardKind::Auth => "auth",
            GuardKind::Guest => "guest",
            GuardKind::Trial => "trial",
            GuardKind::Home => "home",
            GuardKind::AuthHome => "auth-home",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RouteEntry {
    pub path: String,

    #[serde(default = "RouteEntry::default_guard")]
    pub guard: GuardKind,

    #[serde(default = "RouteEntry::default_require_auth")]
    pub require_auth: bool,

    #[serde(default = "RouteEntry::default_disable")]
    pub require_challenge: bool,

    #[serde(default = "RouteEntry::default_disable")]
    pub admin_only: bool,

    #[serde(default = "RouteEntry::default_disable")]
    pub super_admin_only: bool,

    /// Destination when the challenge requirement fails; defaults to the
    /// plans page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,

    /// Guest-guard override destination for signed-in plain users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authed_redirect: Option<String>,
}

impl RouteEntry {
    pub fn default_guard() -> GuardKind {
        GuardKind::Access
    }

    pub fn default_require_auth() -> bool {
        true
    }

    pub fn default_disable() -> bool {
        false
    }

    /// The requirement flags as the access guard consumes them.
    pub fn rule(&self) -> RouteRule {
        RouteRule {
            require_auth: self.require_auth,
            require_challenge: self.require_challenge,
            admin_only: self.admin_only,
            super_admin_only: self.super_admin_only,
            redirect_to: self.redirect_to.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            bail!("route path cannot be empty");
        }
        if !self.path.starts_with('/') {
            bail!("route path '{}' must start with '/'", self.path);
        }
        for target in [self.redirect_to.as_deref(), self.authed_redirect.as_deref()]
            .into_iter()
            .flatten()
        {
            if !target.starts_with('/') {
                bail!("redirect target '{}' on route '{}' must start with '/'", target, self.path);
            }
        }
        if self.authed_redirect.is_some() && self.guard != GuardKind::Guest {
            bail!("authed_redirect is only valid on guest routes, found on '{}'", self.path);
        }
        if (self.admin_only || self.super_admin_only) && self.guard != GuardKind::Access {
            bail!("admin flags are only valid on access routes, found on '{}'", self.path);
        }
        Ok(())
    }
}

impl TerminalDisplay for RouteEntry {
    fn titles() -> Vec<&'static str> {
        vec!["Path", "Guard", "Auth", "Challenge", "Admin", "Super", "Redirect"]
    }

    fn row(self) -> Vec<String> {
        let redirect = self
            .redirect_to
            .or(self.authed_redirect)
            .unwrap_or_else(|| "-".to_string());
        vec![
            self.path,
            self.guard.as_str().to_string(),
            self.require_auth.to_string(),
            self.require_challenge.to_string(),
            self.admin_only.to_string(),
            self.super_admin_only.to_string(),
            redirect,
        ]
    }
}

fn route(path: &str, guard: GuardKind) -> RouteEntry {
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

fn public(path: &str) -> RouteEntry {
    RouteEntry {
        require_auth: false,
        ..route(path, GuardKind::Access)
    }
}

fn funded(path: &str) -> RouteEntry {
    RouteEntry {
        require_challenge: true,
        ..route(path, GuardKind::Access)
    }
}

fn admin(path: &str) -> RouteEntry {
    RouteEntry {
        admin_only: true,
        ..route(path, GuardKind::Access)
    }
}

fn superadmin(path: &str) -> RouteEntry {
    RouteEntry {
        super_admin_only: true,
        ..route(path, GuardKind::Access)
    }
}

static DEFAULT_ROUTES: Lazy<Vec<RouteEntry>> = Lazy::new(|| {
    vec![
        // Landing resolvers.
        route("/", GuardKind::Home),
        route(paths::HOME, GuardKind::AuthHome),
        // Public marketing pages.
        public("/about"),
        public("/how-it-works"),
        public("/faq"),
        public("/contact"),
        // Guest-only entry points. Sign-in and sign-up forward signed-in
        // users to the plans page instead of the generic home.
        RouteEntry {
            authed_redirect: Some(paths::PLANS.to_string()),
            ..route(paths::LOGIN, GuardKind::Guest)
        },
        RouteEntry {
            authed_redirect: Some(paths::PLANS.to_string()),
            ..route("/register", GuardKind::Guest)
        },
        route("/forgot-password", GuardKind::Guest),
        // One-time free-trial offer.
        route("/free-trial", GuardKind::Trial),
        // Signed-in pages independent of challenge state.
        route(paths::PLANS, GuardKind::Auth),
        route("/checkout", GuardKind::Auth),
        route("/profile", GuardKind::Auth),
        route("/settings", GuardKind::Auth),
        route("/support", GuardKind::Auth),
        // Trader dashboard, needs an active challenge.
        funded(paths::ACCOUNTS),
        funded("/analytics"),
        funded("/trades"),
        funded("/payouts"),
        funded("/certificates"),
        RouteEntry {
            redirect_to: Some("/free-trial".to_string()),
            ..funded("/competitions")
        },
        // Admin console.
        admin(paths::ADMIN_DASHBOARD),
        admin("/admin/users"),
        admin("/admin/challenges"),
        admin("/admin/payouts"),
        admin("/admin/coupons"),
        // Super-admin console.
        superadmin(paths::SUPERADMIN_DASHBOARD),
        superadmin("/superadmin/admins"),
        superadmin("/superadmin/config"),
        superadmin("/superadmin/logs"),
    ]
});
