use leptos::prelude::*;

/// Card chrome around a form: heading, description, then the form children.
/// Routes keep their inputs and submit handling; this only provides the
/// shared wrapper markup.
#[component]
pub fn FormCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700 space-y-1">
                <h2 class="font-semibold text-gray-900 dark:text-white">{title}</h2>
                <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
            </div>
            <div class="p-6">{children()}</div>
        </div>
    }
}
