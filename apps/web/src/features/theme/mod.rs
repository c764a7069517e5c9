//! Theme-switching wrapper. The provider restores the stored mode on mount
//! and keeps the document's `dark` class in sync with it, which is what every
//! `dark:` Tailwind class in the app keys off. The mode persists in
//! localStorage; `System` defers to the `prefers-color-scheme` media query at
//! apply time.

use leptos::prelude::*;

/// localStorage key holding the persisted mode.
const STORAGE_KEY: &str = "atrium_theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parses a stored value, falling back to `System` for anything unknown.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    /// Whether the document should be dark under this mode.
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark,
        }
    }

    /// Next mode in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy)]
/// Theme context shared through Leptos.
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Advances the mode through the Light -> Dark -> System cycle.
    pub fn cycle(&self) {
        self.mode.update(|mode| *mode = mode.next());
    }
}

/// Provides theme context, restoring the persisted mode and applying it to
/// the document whenever it changes.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = RwSignal::new(stored_mode());
    provide_context(ThemeContext { mode });

    Effect::new(move |_| {
        let mode = mode.get();
        persist_mode(mode);
        apply_mode(mode);
    });

    view! { {children()} }
}

/// Returns the current theme context or a fallback `System` context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        mode: RwSignal::new(ThemeMode::System),
    })
}

fn stored_mode() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten();

    ThemeMode::parse(stored.as_deref())
}

fn persist_mode(mode: ThemeMode) {
    if let Some(storage) = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(STORAGE_KEY, mode.as_str());
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_mode(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = if mode.resolve(system_prefers_dark()) {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn parse_falls_back_to_system() {
        assert_eq!(ThemeMode::parse(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(Some("solarized")), ThemeMode::System);
        assert_eq!(ThemeMode::parse(None), ThemeMode::System);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(Some(mode.as_str())), mode);
        }
    }

    #[test]
    fn resolve_only_consults_system_preference_for_system_mode() {
        assert!(!ThemeMode::Light.resolve(true));
        assert!(ThemeMode::Dark.resolve(false));
        assert!(ThemeMode::System.resolve(true));
        assert!(!ThemeMode::System.resolve(false));
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        let mut mode = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }

        assert_eq!(mode, start);
        assert!(seen.contains(&ThemeMode::Light));
        assert!(seen.contains(&ThemeMode::Dark));
        assert!(seen.contains(&ThemeMode::System));
    }
}
