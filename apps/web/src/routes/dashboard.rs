//! Default landing page for signed-in users. It is intentionally minimal and
//! does not expose sensitive data.

use crate::components::AppShell;
use crate::features::auth::{Protected, state::use_auth};
use leptos::prelude::*;

/// Renders the dashboard behind the session gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let email = Signal::derive(move || auth.session.get().map(|s| s.email).unwrap_or_default());

    view! {
        <AppShell>
            <Protected>
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Home"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Signed in as " {move || email.get()}
                    </p>
                </div>
            </Protected>
        </AppShell>
    }
}
