use serde::{Deserialize, Serialize};

/// Authorization tier of a signed-in visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,

    #[serde(rename = "admin")]
    Admin,

    #[serde(rename = "superadmin")]
    SuperAdmin,
}

/// Snapshot of the visitor's authentication state.
///
/// While `loading` is true the identity is still being resolved (session
/// restore, token refresh) and the other fields must not be trusted. The
/// identity is replaced wholesale on sign-in and sign-out; `role` is `None`
/// only for signed-out visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub loading: bool,
}

impl Identity {
    /// The state at application start, before the identity source resolves.
    pub fn resolving() -> Self {
        Self {
            authenticated: false,
            role: None,
            loading: true,
        }
    }

    /// A resolved, signed-out visitor.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
            loading: false,
        }
    }

    /// A resolved, signed-in visitor with the given role.
    pub fn signed_in(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
            loading: false,
        }
    }

    /// True for the two staff tiers. Staff never hold trading challenges.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Some(Role::Admin | Role::SuperAdmin))
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self.role, Some(Role::SuperAdmin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_states() {
        let identity = Identity::resolving();
        assert!(identity.loading);
        assert!(!identity.authenticated);

        let identity = Identity::anonymous();
        assert!(!identity.loading);
        assert!(!identity.authenticated);
        assert_eq!(identity.role, None);

        let identity = Identity::signed_in(Role::User);
        assert!(identity.authenticated);
        assert!(!identity.is_staff());
        assert!(!identity.is_super_admin());

        let identity = Identity::signed_in(Role::Admin);
        assert!(identity.is_staff());
        assert!(!identity.is_super_admin());

        let identity = Identity::signed_in(Role::SuperAdmin);
        assert!(identity.is_staff());
        assert!(identity.is_super_admin());
    }
}
