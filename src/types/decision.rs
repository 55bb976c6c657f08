use serde::Serialize;

/// Outcome of a guard evaluation. Exactly one of the three applies to any
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// A state source is still resolving; mount the loading placeholder.
    Pending,

    /// Mount the requested view.
    Render,

    /// Replace the current history entry with the given path. Redirects
    /// never push, so repeated back-navigation cannot cycle between a
    /// guarded route and its redirect target.
    Redirect(String),
}

impl Decision {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}
