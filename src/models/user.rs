use serde::{Deserialize, Serialize};

/// A user reference as embedded in issues, comments and events.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct User {
    #[serde(default)]
    pub login: String,
}

/// Resolves an optional user reference to its login, empty when absent.
pub fn login_of(user: Option<User>) -> String {
    user.map(|u| u.login).unwrap_or_default()
}

/// Like `login_of`, but keeps absence (and an empty login) as `None`.
pub fn optional_login(user: Option<User>) -> Option<String> {
    user.map(|u| u.login).filter(|login| !login.is_empty())
}
