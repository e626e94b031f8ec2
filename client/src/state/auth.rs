//! Identity of the local community member.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no login flow; the front-end acts as a single local member whose
//! id stamps sent messages and reactions. Other members are known only by the
//! small directory used to label conversations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// A community member as shown in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// The member driving this browser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: User,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: User { id: "u-me".to_owned(), name: "You".to_owned() } }
    }
}

const DIRECTORY: [(&str, &str); 3] = [("u-ana", "Ana"), ("u-ben", "Ben"), ("u-cy", "Cy")];

impl AuthState {
    /// Display name for `user_id`, falling back to the raw id.
    #[must_use]
    pub fn display_name(&self, user_id: &str) -> String {
        if user_id == self.user.id {
            return self.user.name.clone();
        }
        DIRECTORY
            .iter()
            .find(|(id, _)| *id == user_id)
            .map_or_else(|| user_id.to_owned(), |(_, name)| (*name).to_owned())
    }

    /// Other members the local user can start a conversation with.
    #[must_use]
    pub fn contacts(&self) -> Vec<User> {
        DIRECTORY
            .iter()
            .filter(|(id, _)| *id != self.user.id)
            .map(|(id, name)| User { id: (*id).to_owned(), name: (*name).to_owned() })
            .collect()
    }
}
