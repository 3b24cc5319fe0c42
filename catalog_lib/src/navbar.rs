//! Login-state presenter.

use crate::session::Session;
use crate::storage::SessionStorage;

/// What the header shows for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navbar {
    pub greeting: Option<String>,
    pub show_login: bool,
    pub show_logout: bool,
}

impl Navbar {
    /// Greets the user by first name when both a named user and a token are stored.
    pub fn from_session<S: SessionStorage>(session: &Session<S>) -> Self {
        match session.logged_in_as() {
            Some(first) => Self {
                greeting: Some(format!("Hello, {}", first)),
                show_login: false,
                show_logout: true,
            },
            _ => Self {
                greeting: None,
                show_login: true,
                show_logout: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ACCESS_TOKEN_KEY, USER_KEY};
    use crate::storage::MemoryStorage;

    fn session_with(pairs: &[(&str, &str)]) -> Session<MemoryStorage> {
        let storage = MemoryStorage::new();
        for (key, value) in pairs {
            storage.set(key, value).unwrap();
        }
        Session::new(storage)
    }

    #[test]
    fn greets_by_first_name() {
        let session = session_with(&[
            (ACCESS_TOKEN_KEY, "tok"),
            (USER_KEY, r#"{"full_name": "Ana Maria Souza", "email": "a@b.c"}"#),
        ]);
        let navbar = Navbar::from_session(&session);
        assert_eq!(navbar.greeting.as_deref(), Some("Hello, Ana"));
        assert!(navbar.show_logout);
        assert!(!navbar.show_login);
    }

    #[test]
    fn no_token_shows_login() {
        let session = session_with(&[(USER_KEY, r#"{"full_name": "Ana"}"#)]);
        let navbar = Navbar::from_session(&session);
        assert_eq!(navbar.greeting, None);
        assert!(navbar.show_login);
        assert!(!navbar.show_logout);
    }

    #[test]
    fn blank_name_shows_login() {
        let session = session_with(&[
            (ACCESS_TOKEN_KEY, "tok"),
            (USER_KEY, r#"{"full_name": ""}"#),
        ]);
        assert!(Navbar::from_session(&session).show_login);
    }

    #[test]
    fn malformed_user_shows_login() {
        let session = session_with(&[(ACCESS_TOKEN_KEY, "tok"), (USER_KEY, "oops")]);
        assert!(Navbar::from_session(&session).show_login);
    }
}
