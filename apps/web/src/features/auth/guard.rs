//! Client-side route gate. Maps one route registration and one session
//! snapshot to exactly one render outcome, then lets the `Protected`
//! component act on it. Navigation gating is UX only; the API enforces real
//! access control on every call.

use crate::components::ui::Spinner;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{ADMIN_ROLE, UserSession};
use crate::routes::{DeniedContent, paths};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Snapshot of the session state read per evaluation. The provider owns and
/// mutates the live signals; the gate only ever reads a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_loading: bool,
    pub user: Option<UserSession>,
}

/// One protected route registration, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    pub path: String,
    pub admin_only: bool,
}

impl RouteRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            admin_only: false,
        }
    }

    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }
}

/// Exactly one of these is produced per evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session resolution is still in flight; show a neutral indicator.
    Loading,
    /// No session; navigate to the login route.
    RedirectToLogin,
    /// Signed in but missing the admin role; static denial, no redirect.
    Denied,
    /// Render the requested view with its route parameters untouched.
    Render,
}

/// Decides the outcome for a route registration against a session snapshot.
///
/// The checks run in a fixed order. A still-resolving session outranks an
/// already-present user so the wrong view never flashes during hydration.
pub fn gate(request: &RouteRequest, auth: &AuthSnapshot) -> GateOutcome {
    if auth.is_loading {
        return GateOutcome::Loading;
    }

    let Some(user) = &auth.user else {
        return GateOutcome::RedirectToLogin;
    };

    if request.admin_only && user.role != ADMIN_ROLE {
        return GateOutcome::Denied;
    }

    GateOutcome::Render
}

/// Gates children behind the session state, re-evaluating whenever the auth
/// provider updates its signals.
#[component]
pub fn Protected(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let evaluation = Signal::derive(move || {
        let mut request = RouteRequest::new(pathname.get());
        if admin_only {
            request = request.admin_only();
        }
        let outcome = gate(&request, &auth.snapshot());
        (request, outcome)
    });

    Effect::new(move |_| {
        let (request, outcome) = evaluation.get();
        match outcome {
            GateOutcome::RedirectToLogin => {
                navigate(paths::AUTH, Default::default());
            }
            GateOutcome::Denied => {
                leptos::logging::warn!("blocked non-admin access to {}", request.path);
            }
            GateOutcome::Loading | GateOutcome::Render => {}
        }
    });

    view! {
        {move || match evaluation.get().1 {
            GateOutcome::Loading => {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <Spinner />
                    </div>
                }
                .into_any()
            }
            // The navigation effect is the only observable output here.
            GateOutcome::RedirectToLogin => ().into_any(),
            GateOutcome::Denied => view! { <DeniedContent /> }.into_any(),
            GateOutcome::Render => children().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthSnapshot, GateOutcome, RouteRequest, gate};
    use crate::features::auth::types::UserSession;

    fn member() -> UserSession {
        UserSession {
            user_id: "usr_02".to_string(),
            email: "member@atrium.dev".to_string(),
            role: "member".to_string(),
        }
    }

    fn admin() -> UserSession {
        UserSession {
            user_id: "usr_01".to_string(),
            email: "op@atrium.dev".to_string(),
            role: "admin".to_string(),
        }
    }

    fn resolved(user: Option<UserSession>) -> AuthSnapshot {
        AuthSnapshot {
            is_loading: false,
            user,
        }
    }

    #[test]
    fn loading_outranks_present_user() {
        // Still-resolving sessions show the loading view even when a cached
        // user is already in the snapshot, for every flag combination.
        for user in [None, Some(member()), Some(admin())] {
            let snapshot = AuthSnapshot {
                is_loading: true,
                user,
            };

            assert_eq!(
                gate(&RouteRequest::new("/"), &snapshot),
                GateOutcome::Loading
            );
            assert_eq!(
                gate(&RouteRequest::new("/admin").admin_only(), &snapshot),
                GateOutcome::Loading
            );
        }
    }

    #[test]
    fn missing_session_redirects_to_login() {
        let snapshot = resolved(None);

        assert_eq!(
            gate(&RouteRequest::new("/"), &snapshot),
            GateOutcome::RedirectToLogin
        );
        assert_eq!(
            gate(&RouteRequest::new("/admin").admin_only(), &snapshot),
            GateOutcome::RedirectToLogin
        );
    }

    #[test]
    fn non_admin_is_denied_on_admin_routes() {
        let outcome = gate(
            &RouteRequest::new("/admin/users").admin_only(),
            &resolved(Some(member())),
        );

        assert_eq!(outcome, GateOutcome::Denied);
    }

    #[test]
    fn admin_renders_admin_routes() {
        let outcome = gate(
            &RouteRequest::new("/admin/users").admin_only(),
            &resolved(Some(admin())),
        );

        assert_eq!(outcome, GateOutcome::Render);
    }

    #[test]
    fn any_session_renders_plain_routes() {
        assert_eq!(
            gate(&RouteRequest::new("/"), &resolved(Some(member()))),
            GateOutcome::Render
        );
        assert_eq!(
            gate(&RouteRequest::new("/"), &resolved(Some(admin()))),
            GateOutcome::Render
        );
    }

    #[test]
    fn role_comparison_is_exact() {
        let mut user = member();
        user.role = "Admin".to_string();

        let outcome = gate(
            &RouteRequest::new("/admin").admin_only(),
            &resolved(Some(user)),
        );

        assert_eq!(outcome, GateOutcome::Denied);
    }

    #[test]
    fn gate_constants_are_fixed() {
        // Both values are externally visible contract points: the redirect
        // target and the role string the admin check compares against.
        assert_eq!(crate::routes::paths::AUTH, "/auth");
        assert_eq!(crate::features::auth::types::ADMIN_ROLE, "admin");
    }

    #[test]
    fn evaluation_is_idempotent_and_non_mutating() {
        let request = RouteRequest::new("/admin/users/usr_02").admin_only();
        let snapshot = resolved(Some(admin()));
        let request_before = request.clone();
        let snapshot_before = snapshot.clone();

        let first = gate(&request, &snapshot);
        let second = gate(&request, &snapshot);

        assert_eq!(first, second);
        assert_eq!(request, request_before);
        assert_eq!(snapshot, snapshot_before);
    }
}
