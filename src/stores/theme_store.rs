use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

const STORAGE_KEY: &str = "theme";
#[cfg(target_arch = "wasm32")]
const DARK_CLASS: &str = "dark-mode";

/// String key/value persistence, `localStorage` in the browser
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Raw browser `localStorage` (values stored unquoted)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("Failed to persist {}: {:?}", key, e);
        }
    }
}

/// Application theme setting, loaded once at startup and saved on every change
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeSettings {
    pub dark: bool,
}

impl ThemeSettings {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let dark = store.get(STORAGE_KEY).as_deref() == Some("dark");
        log::info!("Loaded theme from storage: {}", if dark { "dark" } else { "light" });
        Self { dark }
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(STORAGE_KEY, self.as_str());
    }

    /// Flip between light and dark and persist the result
    pub fn toggle(&mut self, store: &impl KeyValueStore) {
        self.dark = !self.dark;
        self.save(store);
        log::info!("Theme changed to: {}", self.as_str());
    }

    pub fn as_str(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }

    /// Label for the button that switches away from the current theme
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

/// Provide the theme setting to the tree below and keep `<body>` in sync with it
pub fn use_theme_provider() -> Signal<ThemeSettings> {
    let theme = use_context_provider(|| Signal::new(ThemeSettings::load(&BrowserStorage)));

    use_effect(move || {
        apply_theme(&theme.read());
    });

    theme
}

/// Theme setting provided by `use_theme_provider`
pub fn use_theme() -> Signal<ThemeSettings> {
    use_context::<Signal<ThemeSettings>>()
}

/// Apply theme to document
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn apply_theme(settings: &ThemeSettings) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.class_list()
                .toggle_with_force(DARK_CLASS, settings.dark)
                .ok();
        }
    }
}
