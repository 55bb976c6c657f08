/// Declared access requirements for a single route, fixed at registration
/// time.
///
/// The flags are not evaluated independently; the guard applies them in a
/// fixed precedence order (see the access guard). Combining
/// `require_challenge` with an admin flag is legal: staff then skip the
/// challenge check and answer to the admin gates instead of being bounced
/// to their console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub require_auth: bool,
    pub require_challenge: bool,
    pub admin_only: bool,
    pub super_admin_only: bool,

    /// Override destination when the challenge requirement fails. Unset
    /// falls back to the plans page.
    pub redirect_to: Option<String>,
}
