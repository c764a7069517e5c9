use crate::features::theme::{ThemeMode, use_theme};
use leptos::prelude::*;

/// Header button that cycles the theme mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let icon = move || match theme.mode.get() {
        ThemeMode::Light => "light_mode",
        ThemeMode::Dark => "dark_mode",
        ThemeMode::System => "contrast",
    };
    let label = move || format!("Theme: {}", theme.mode.get().as_str());

    view! {
        <button
            type="button"
            class="inline-flex items-center p-2 text-sm text-gray-500 rounded-lg hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
            aria-label=label
            title=label
            on:click=move |_| theme.cycle()
        >
            <span class="material-symbols-outlined">{icon}</span>
        </button>
    }
}
