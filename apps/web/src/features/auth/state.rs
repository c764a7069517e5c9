//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount using a cookie-based API call and exposes derived
//! auth signals for the route gate and layouts. Only non-sensitive metadata
//! is stored in memory; cookies remain `HttpOnly`.

use crate::features::auth::guard::AuthSnapshot;
use crate::features::auth::{client, types::UserSession};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided signals.
    fn new(session: RwSignal<Option<UserSession>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let is_admin =
            Signal::derive(move || session.get().map(|s| s.is_admin()).unwrap_or(false));
        Self {
            session,
            is_loading,
            is_authenticated,
            is_admin,
        }
    }

    /// Reads the current state as one immutable snapshot for the gate.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_loading: self.is_loading.get(),
            user: self.session.get(),
        }
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount. The loading
/// flag starts true and clears only after the hydration call resolves, so
/// guards never see a half-initialized state.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let is_loading = RwSignal::new(true);
    let auth = AuthContext::new(session, is_loading);
    provide_context(auth);

    spawn_local(async move {
        if let Ok(Some(session)) = client::fetch_session().await {
            auth.set_session(session);
        }
        // A failed fetch reads as signed out; resolution is over either way.
        auth.is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(None), RwSignal::new(false)))
}
