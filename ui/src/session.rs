//! Session context: the bearer token and its persistence.
//!
//! The token is the only piece of client state that outlives a view. It is
//! persisted under a fixed key in the browser's local storage (an in-process
//! slot on native builds) and mirrored into a [`Signal`] provided through
//! Dioxus context, so dependents re-render on login and logout. There is no
//! expiry or refresh logic: a stale token surfaces as ordinary per-request
//! server errors.

use dioxus::prelude::*;

/// Storage key for the bearer token. Absence of the key means "logged out".
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// The session signal provided by [`SessionProvider`].
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component managing the session token. Wrap the app with this to
/// make [`use_session`] available; the persisted token is read once at
/// startup.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        token: storage::load(),
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued token and publish it to dependents. Used by the
/// login view.
pub fn store_token(mut session: Signal<SessionState>, token: String) {
    storage::save(&token);
    session.set(SessionState { token: Some(token) });
}

/// Drop the persisted token and publish the logged-out state. Used by the
/// logout control. Requests already in flight keep the token they read at
/// call time and fail normally on the server side.
pub fn clear_token(mut session: Signal<SessionState>) {
    storage::clear();
    session.set(SessionState { token: None });
}

#[cfg(target_arch = "wasm32")]
mod storage {
    //! Browser `localStorage` backend.

    use super::TOKEN_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load() -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    pub fn save(token: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("local storage unavailable; session will not survive a reload");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            tracing::warn!("failed to persist session token");
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod storage {
    //! In-process fallback for native builds and tests.

    use std::sync::Mutex;

    static TOKEN: Mutex<Option<String>> = Mutex::new(None);

    pub fn load() -> Option<String> {
        TOKEN.lock().unwrap().clone()
    }

    pub fn save(token: &str) {
        *TOKEN.lock().unwrap() = Some(token.to_string());
    }

    pub fn clear() {
        *TOKEN.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the storage slot is shared process state, and splitting
    // this up would let the default parallel test runner interleave writes.
    #[test]
    fn token_round_trips_and_clear_logs_out() {
        storage::clear();
        assert_eq!(storage::load(), None);

        storage::save("t0k3n");
        assert_eq!(storage::load().as_deref(), Some("t0k3n"));

        let state = SessionState {
            token: storage::load(),
        };
        assert!(state.is_logged_in());

        storage::clear();
        assert_eq!(storage::load(), None);
        assert!(!SessionState { token: None }.is_logged_in());
    }
}
