//! Static access-denied content rendered by the gate for signed-in users
//! without the admin role. No redirect happens here.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;

#[component]
pub fn DeniedContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="p-4 bg-red-50 dark:bg-red-900/20 rounded-full">
                <span class="material-symbols-outlined text-4xl text-red-600 dark:text-red-400">
                    "block"
                </span>
            </div>
            <div class="mt-4 space-y-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Access denied"
                </h1>
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "This area requires administrator access. Your account is signed in but does not have the admin role."
                </p>
                <A
                    href={paths::DASHBOARD}
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 transition-all"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
