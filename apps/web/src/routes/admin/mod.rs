//! Admin route group. Every page here renders inside `AdminLayout`, which
//! already gates the subtree on the admin role.

mod user_detail;
mod users;

pub(crate) use user_detail::UserDetailPage;
pub(crate) use users::AdminUsersPage;

use crate::app_lib::theme::Theme;
use crate::components::ui::{Alert, AlertKind, Spinner};
use crate::features::users::client;
use crate::features::users::types::UserStats;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the admin overview with platform stats.
#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let stats = LocalResource::new(move || async move { client::user_stats().await });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Admin Dashboard"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Platform accounts at a glance."
                    </p>
                </div>
                <button
                    on:click=move |_| stats.refetch()
                    class="p-2 text-gray-500 hover:text-blue-600 transition-colors"
                >
                    <span class="material-symbols-outlined">"refresh"</span>
                </button>
            </div>

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match stats.get().map(|w| w.take()) {
                    Some(Ok(data)) => render_stats_grid(data).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
                <A href={paths::ADMIN_USERS} {..} class="group p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:border-blue-500 transition-all">
                    <div class="flex items-center gap-4">
                        <div class="p-3 bg-blue-50 dark:bg-blue-900/30 rounded-lg text-blue-600 dark:text-blue-400 group-hover:scale-110 transition-transform">
                            <span class="material-symbols-outlined">"group"</span>
                        </div>
                        <div>
                            <h2 class="font-semibold text-gray-900 dark:text-white">"Users"</h2>
                            <p class="text-sm text-gray-500">"Manage platform users and invitations."</p>
                        </div>
                    </div>
                </A>
            </div>
        </div>
    }
}

fn render_stats_grid(data: UserStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class=Theme::CARD_HEADING>"Users"</h3>
                    <span class="material-symbols-outlined text-blue-500">"group"</span>
                </div>
                <div class="text-3xl font-semibold text-gray-900 dark:text-white">
                    {data.total}
                </div>
            </div>

            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class=Theme::CARD_HEADING>"Administrators"</h3>
                    <span class="material-symbols-outlined text-amber-500">"shield_person"</span>
                </div>
                <div class="text-3xl font-semibold text-gray-900 dark:text-white">
                    {data.admins}
                </div>
            </div>

            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class=Theme::CARD_HEADING>"Pending Invites"</h3>
                    <span class="material-symbols-outlined text-emerald-500">"mail"</span>
                </div>
                <div class="text-3xl font-semibold text-gray-900 dark:text-white">
                    {data.pending_invites}
                </div>
            </div>
        </div>
    }
}
