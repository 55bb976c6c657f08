use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;

use crate::display::display_json;
use crate::gate::factory::GateFactory;
use crate::gate::Resolution;
use crate::nav::Navigator;
use crate::types::challenge::ChallengeStatus;
use crate::types::decision::Decision;
use crate::types::identity::{Identity, Role};
use crate::types::session::Session;

use super::{ConfigArgs, RunCommand};

/// Evaluate a navigation against the registered route table and print the
/// decision. The session is synthesized from flags, so route authors can
/// probe any combination of role, challenge and loading state.
#[derive(Args)]
pub struct CheckArgs {
    /// The path being navigated to.
    pub path: String,

    /// Signed-in role; omit to check as a signed-out visitor.
    #[arg(short, long)]
    pub role: Option<RoleArg>,

    /// The signed-in user holds an active challenge.
    #[arg(long)]
    pub challenge: bool,

    /// Treat the identity source as still resolving.
    #[arg(long)]
    pub identity_loading: bool,

    /// Treat the challenge source as still resolving.
    #[arg(long)]
    pub challenge_loading: bool,

    /// Follow redirects until the navigation settles.
    #[arg(short, long)]
    pub follow: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    User,
    Admin,
    Superadmin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
            RoleArg::Superadmin => Role::SuperAdmin,
        }
    }
}

#[derive(Serialize)]
struct CheckReport {
    path: String,
    decision: Decision,

    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    settled: Option<Resolution>,
}

/// Navigator that records the full chain of visited paths, including the
/// entries a real history stack would have replaced.
#[derive(Default)]
struct TraceNav {
    visited: Vec<String>,
}

impl Navigator for TraceNav {
    fn push(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }

    fn current(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl RunCommand for CheckArgs {
    fn run(&self) -> Result<()> {
        let cfg = self.config.load_routes()?;
        let gate = GateFactory::new().build_gate(&cfg)?;
        let session = self.build_session();

        let decision = gate.decide(&self.path, &session)?;

        let mut chain = None;
        let mut settled = None;
        if self.follow {
            let mut nav = TraceNav::default();
            let resolution = gate.resolve(&self.path, &session, &mut nav)?;
            chain = Some(nav.visited);
            settled = Some(resolution);
        }

        if self.json {
            return display_json(CheckReport {
                path: self.path.clone(),
                decision,
                chain,
                settled,
            });
        }

        show_decision(&decision);
        if let Some(chain) = chain {
            for pair in chain.windows(2) {
                println!("  {} {} {}", pair[0], style("->").dim(), pair[1]);
            }
        }
        if let Some(settled) = settled {
            match settled {
                Resolution::Pending(path) => {
                    println!("settled: {} {}", style("pending").yellow(), path)
                }
                Resolution::Render(path) => {
                    println!("settled: {} {}", style("render").green(), path)
                }
            }
        }

        Ok(())
    }
}

impl CheckArgs {
    fn build_session(&self) -> Session {
        let identity = if self.identity_loading {
            Identity::resolving()
        } else {
            match self.role {
                Some(role) => Identity::signed_in(role.into()),
                None => Identity::anonymous(),
            }
        };

        let challenge = if self.challenge_loading {
            ChallengeStatus::resolving()
        } else {
            ChallengeStatus::resolved(self.challenge)
        };

        Session::new(identity, challenge)
    }
}

fn show_decision(decision: &Decision) {
    match decision {
        Decision::Pending => println!("{}", style("pending").yellow()),
        Decision::Render => println!("{}", style("render").green()),
        Decision::Redirect(target) => println!("{} {}", style("redirect").cyan(), target),
    }
}
