//! Theme selection and persistence
//!
//! The applied theme is a single string attribute on the page root; the
//! stylesheet (here: the render palette) keys off it. The preference is
//! persisted under a fixed key so it survives restarts.
//!
//! Storage sits behind the small [`PrefStore`] trait so the switching logic
//! can be tested without touching the filesystem.

use anyhow::Result;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "portfolio-theme";

/// Theme applied when nothing was ever stored.
pub const DEFAULT_THEME: &str = "light";

/// Durable key-value store for preferences.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Owns the applied theme attribute and keeps the store in sync with it.
#[derive(Debug)]
pub struct ThemeController<S: PrefStore> {
    store: S,
    /// The attribute currently applied to the page root. `None` means the
    /// attribute was never set.
    applied: Option<String>,
}

impl<S: PrefStore> ThemeController<S> {
    /// Read the stored preference (defaulting to light) and apply it. The
    /// value is written back through [`set_theme`](Self::set_theme), so a
    /// fresh store ends up holding the default explicitly.
    pub fn init(store: S) -> Result<Self> {
        let saved = store
            .get(THEME_KEY)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let mut ctl = Self {
            store,
            applied: None,
        };
        ctl.set_theme(&saved)?;
        Ok(ctl)
    }

    /// Apply `value` verbatim and persist it, overwriting any previous
    /// entry. Values outside light/dark are not validated here; the palette
    /// decides what to do with them at render time.
    pub fn set_theme(&mut self, value: &str) -> Result<()> {
        self.applied = Some(value.to_string());
        self.store.set(THEME_KEY, value)
    }

    /// Flip between light and dark. The decision reads the *applied*
    /// attribute, not the stored preference; if the attribute was never
    /// set it counts as light. Any value other than exactly "light"
    /// toggles to light.
    pub fn toggle(&mut self) -> Result<()> {
        let current = self.applied.as_deref().unwrap_or(DEFAULT_THEME);
        let next = if current == "light" { "dark" } else { "light" };
        self.set_theme(next)
    }

    /// The applied theme, or the default when the attribute is unset.
    pub fn current(&self) -> &str {
        self.applied.as_deref().unwrap_or(DEFAULT_THEME)
    }
}

#[cfg(test)]
pub mod mem {
    //! In-memory store for tests.

    use super::PrefStore;
    use anyhow::Result;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct MemStore {
        pub entries: HashMap<String, String>,
    }

    impl PrefStore for MemStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mem::MemStore;
    use super::*;

    #[test]
    fn test_init_defaults_to_light() {
        let ctl = ThemeController::init(MemStore::default()).unwrap();
        assert_eq!(ctl.current(), "light");
    }

    #[test]
    fn test_init_writes_default_back() {
        let ctl = ThemeController::init(MemStore::default()).unwrap();
        assert_eq!(ctl.store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_init_applies_stored_value() {
        let mut store = MemStore::default();
        store.set(THEME_KEY, "dark").unwrap();
        let ctl = ThemeController::init(store).unwrap();
        assert_eq!(ctl.current(), "dark");
    }

    #[test]
    fn test_set_theme_round_trip() {
        let mut ctl = ThemeController::init(MemStore::default()).unwrap();
        ctl.set_theme("dark").unwrap();

        assert_eq!(ctl.current(), "dark");
        assert_eq!(ctl.store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_sequence() {
        let mut ctl = ThemeController::init(MemStore::default()).unwrap();

        ctl.toggle().unwrap();
        assert_eq!(ctl.current(), "dark");

        ctl.toggle().unwrap();
        assert_eq!(ctl.current(), "light");
    }

    #[test]
    fn test_toggle_from_unset_attribute() {
        // No attribute applied yet: first toggle lands on dark.
        let mut ctl = ThemeController {
            store: MemStore::default(),
            applied: None,
        };
        ctl.toggle().unwrap();
        assert_eq!(ctl.current(), "dark");
    }

    #[test]
    fn test_unknown_value_applied_verbatim() {
        let mut store = MemStore::default();
        store.set(THEME_KEY, "sepia").unwrap();
        let mut ctl = ThemeController::init(store).unwrap();

        assert_eq!(ctl.current(), "sepia");

        // Anything other than "light" toggles to light.
        ctl.toggle().unwrap();
        assert_eq!(ctl.current(), "light");
    }
}
