use std::rc::Rc;

use yew::prelude::*;

use crate::models::SpendEntry;

/// Fixed localStorage key for the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub fn read_stored_token() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_STORAGE_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }
    None
}

pub fn write_stored_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
}

pub fn clear_stored_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Session state held by the root component.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub user: Option<serde_json::Value>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Builds the initial state from a token read out of persisted storage
    /// once at startup. An existing token is trusted without server
    /// confirmation, matching how the session survives a page reload.
    pub fn restore(token: Option<String>) -> Self {
        AuthState {
            is_authenticated: token.is_some(),
            token,
            ..AuthState::default()
        }
    }
}

pub enum AuthAction {
    LoginStart,
    LoginSuccess {
        user: serde_json::Value,
        token: String,
    },
    LoginFailure(String),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        match action {
            AuthAction::LoginStart => Rc::new(AuthState {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess { user, token } => Rc::new(AuthState {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
                loading: false,
                error: None,
            }),
            AuthAction::LoginFailure(message) => Rc::new(AuthState {
                loading: false,
                error: Some(message),
                ..(*self).clone()
            }),
            AuthAction::Logout => Rc::new(AuthState::default()),
        }
    }
}

/// Cached transaction list, same shape as the auth slice. The spend-history
/// view drives it through the fetch lifecycle below.
#[derive(Clone, PartialEq, Default)]
pub struct TransactionsState {
    pub items: Vec<SpendEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum TransactionsAction {
    FetchStart,
    FetchSuccess(Vec<SpendEntry>),
    FetchFailure(String),
}

impl Reducible for TransactionsState {
    type Action = TransactionsAction;

    fn reduce(self: Rc<Self>, action: TransactionsAction) -> Rc<Self> {
        match action {
            TransactionsAction::FetchStart => Rc::new(TransactionsState {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            TransactionsAction::FetchSuccess(items) => Rc::new(TransactionsState {
                items,
                loading: false,
                error: None,
            }),
            TransactionsAction::FetchFailure(message) => Rc::new(TransactionsState {
                loading: false,
                error: Some(message),
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AuthState, action: AuthAction) -> AuthState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn restore_trusts_a_persisted_token() {
        let state = AuthState::restore(Some("tok-123".to_string()));
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("tok-123"));
        assert!(state.user.is_none());

        let empty = AuthState::restore(None);
        assert!(!empty.is_authenticated);
        assert!(empty.token.is_none());
    }

    #[test]
    fn login_start_sets_loading_and_clears_error() {
        let mut state = AuthState::default();
        state.error = Some("previous failure".to_string());
        let next = reduce(state, AuthAction::LoginStart);
        assert!(next.loading);
        assert!(next.error.is_none());
        assert!(!next.is_authenticated);
    }

    #[test]
    fn login_success_stores_session() {
        let start = reduce(AuthState::default(), AuthAction::LoginStart);
        let next = reduce(
            start,
            AuthAction::LoginSuccess {
                user: serde_json::json!({"email": "kim@trancendos.com"}),
                token: "tok-456".to_string(),
            },
        );
        assert!(next.is_authenticated);
        assert!(!next.loading);
        assert_eq!(next.token.as_deref(), Some("tok-456"));
        assert_eq!(next.user.unwrap()["email"], "kim@trancendos.com");
    }

    #[test]
    fn login_failure_surfaces_message_and_stays_logged_out() {
        let start = reduce(AuthState::default(), AuthAction::LoginStart);
        let next = reduce(start, AuthAction::LoginFailure("Invalid credentials".to_string()));
        assert!(!next.is_authenticated);
        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn logout_is_idempotent() {
        let logged_in = reduce(
            AuthState::default(),
            AuthAction::LoginSuccess {
                user: serde_json::json!({}),
                token: "tok-789".to_string(),
            },
        );
        let once = reduce(logged_in, AuthAction::Logout);
        let twice = reduce(once.clone(), AuthAction::Logout);
        assert_eq!(once, twice);
        assert!(!twice.is_authenticated);
        assert!(twice.token.is_none());
        assert!(twice.user.is_none());
    }

    fn reduce_tx(state: TransactionsState, action: TransactionsAction) -> TransactionsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn transactions_fetch_lifecycle() {
        let start = reduce_tx(TransactionsState::default(), TransactionsAction::FetchStart);
        assert!(start.loading);

        let loaded = reduce_tx(
            start,
            TransactionsAction::FetchSuccess(crate::models::sample_spend_history()),
        );
        assert!(!loaded.loading);
        assert_eq!(loaded.items.len(), 3);

        let failed = reduce_tx(loaded, TransactionsAction::FetchFailure("network error".to_string()));
        assert_eq!(failed.error.as_deref(), Some("network error"));
        // The previously cached list is kept on failure.
        assert_eq!(failed.items.len(), 3);
    }
}
