//! Theme flag store (light/dark), persisted as a bare string.

use crate::storage::KeyValueStorage;
use log::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub struct ThemeStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Resolves the initial theme and writes it back.
    ///
    /// A valid stored value wins; otherwise `prefers_dark` (the platform
    /// color-scheme preference) decides. Read failures fall back to light.
    pub fn load(storage: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let theme = match storage.get(&key) {
            Ok(stored) => stored
                .as_deref()
                .and_then(Theme::parse)
                .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light }),
            Err(err) => {
                warn!("event=theme_load module=theme status=fallback reason=read_failed error={err}");
                Theme::Light
            }
        };

        let store = Self {
            storage,
            key,
            theme,
        };
        store.persist();
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    fn persist(&self) {
        if let Err(err) = self.storage.set(&self.key, self.theme.as_str()) {
            warn!(
                "event=theme_persist module=theme status=ignored key={} error={err}",
                self.key
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeStore};
    use crate::storage::{KeyValueStorage, MemoryStorage};

    const KEY: &str = "planner-theme";

    #[test]
    fn stored_value_beats_system_preference() {
        let storage = MemoryStorage::with_entries([(KEY, "light")]);
        assert_eq!(ThemeStore::load(&storage, KEY, true).theme(), Theme::Light);
    }

    #[test]
    fn invalid_value_uses_system_preference_and_is_written_back() {
        let storage = MemoryStorage::with_entries([(KEY, "sepia")]);
        let store = ThemeStore::load(&storage, KEY, true);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(&storage, KEY, false);
        assert_eq!(store.theme(), Theme::Light);

        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("dark"));

        store.toggle_theme();
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("light"));
    }
}
