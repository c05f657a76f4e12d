// Session management: the persisted login state and the reactive context
// pages read it through.
use leptos::*;

use crate::api;
use crate::types::{Role, UserRecord};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// The current login state. `user` and `token` are written and cleared as a
/// pair; a session is authenticated exactly when a token is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
}

impl Session {
    /// Build a session from raw storage entries. A malformed user record is
    /// treated as absent.
    pub fn from_entries(user_json: Option<String>, token: Option<String>) -> Self {
        let user = user_json.as_deref().and_then(|raw| {
            match serde_json::from_str::<UserRecord>(raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("discarding malformed persisted user record: {err}");
                    None
                }
            }
        });
        Self { user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn email(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.email.clone())
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session. Missing storage yields a logged-out session.
pub fn read_session() -> Session {
    let Some(storage) = local_storage() else {
        return Session::default();
    };
    let user = storage.get_item(USER_KEY).ok().flatten();
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    Session::from_entries(user, token)
}

fn store_session(user: &UserRecord, token: &str) {
    if let Some(storage) = local_storage() {
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
                let _ = storage.set_item(TOKEN_KEY, token);
            }
            Err(err) => log::error!("failed to serialize user record: {err}"),
        }
    }
    api::set_bearer_token(Some(token.to_string()));
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(TOKEN_KEY);
    }
    api::set_bearer_token(None);
}

pub type SessionState = RwSignal<Session>;

/// Restore the persisted session and install it as the session context.
/// Called once, at the top of the app.
pub fn provide_session() -> SessionState {
    let session = read_session();
    if let Some(token) = session.token.clone() {
        api::set_bearer_token(Some(token));
    }
    let state = create_rw_signal(session);
    provide_context(state);
    state
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("session context must be provided")
}

pub fn login_session(state: SessionState, user: UserRecord, token: String) {
    store_session(&user, &token);
    state.set(Session {
        user: Some(user),
        token: Some(token),
    });
}

pub fn logout_session(state: SessionState) {
    clear_session();
    state.set(Session::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> String {
        r#"{"id": 1, "email": "s@example.com", "role": "student"}"#.to_string()
    }

    #[test]
    fn authenticated_iff_token_present() {
        let with_token = Session::from_entries(Some(user_json()), Some("tok".to_string()));
        assert!(with_token.is_authenticated());

        let without_token = Session::from_entries(Some(user_json()), None);
        assert!(!without_token.is_authenticated());

        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn role_is_derived_from_the_user_record() {
        let session = Session::from_entries(Some(user_json()), Some("tok".to_string()));
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.email().as_deref(), Some("s@example.com"));

        assert_eq!(Session::default().role(), None);
    }

    #[test]
    fn malformed_user_record_reads_as_absent() {
        let session = Session::from_entries(Some("{not json".to_string()), Some("tok".to_string()));
        assert_eq!(session.user, None);
        assert_eq!(session.role(), None);
        // The token still counts; the pair invariant is kept by the writers.
        assert!(session.is_authenticated());
    }

    #[test]
    fn user_record_round_trips() {
        let user = UserRecord {
            id: 9,
            email: "r@example.com".to_string(),
            role: Role::Recruiter,
        };
        let json = serde_json::to_string(&user).unwrap();
        let session = Session::from_entries(Some(json), Some("tok".to_string()));
        assert_eq!(session.user, Some(user));
    }
}
