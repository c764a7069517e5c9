use crate::components::layout::AppShell;
use crate::features::auth::Protected;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Layout wrapper for the admin subtree. Every nested route renders through
/// the gate with the admin requirement set; route parameters flow through the
/// outlet untouched.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <AppShell>
            <Protected admin_only=true>
                <Outlet />
            </Protected>
        </AppShell>
    }
}
