use leptos::prelude::*;

/// Placeholder for views with nothing to show yet. The optional children slot
/// carries a call-to-action button.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center text-center px-4 py-16">
            <div class="flex items-center justify-center w-20 h-20 bg-gray-100 dark:bg-gray-800 rounded-full mb-6">
                <span class="material-symbols-outlined text-4xl text-gray-400 dark:text-gray-500">
                    {icon}
                </span>
            </div>
            <h2 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">{title}</h2>
            <p class="text-sm text-gray-500 dark:text-gray-400 max-w-sm leading-relaxed">
                {description}
            </p>
            <div class="mt-6">{children.map(|children| children())}</div>
        </div>
    }
}
