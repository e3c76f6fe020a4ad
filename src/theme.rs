//! Light/dark preference shared by the whole page.
//!
//! The store is created once when the app starts and handed to components as
//! context. It reads persisted storage only during [`ThemeStore::init`]; after
//! that the only writer is [`ThemeStore::toggle`].

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    Unknown(String),
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Persistent storage is unavailable")]
    Unavailable,
    #[error("Couldn't write to storage: {0}")]
    Write(String),
}

/// Key-value persistence for the theme preference.
pub trait ThemeStorage: Send + Sync + 'static {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str) -> Result<(), StorageError>;
}

type Subscriber = Arc<dyn Fn(Theme) + Send + Sync>;

struct ThemeInner<S> {
    storage: S,
    current: Theme,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber)>,
}

pub struct ThemeStore<S> {
    inner: Arc<Mutex<ThemeInner<S>>>,
}

impl<S> Clone for ThemeStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Resolution order: persisted value, then `system_hint`, then dark.
    pub fn init(storage: S, system_hint: Option<Theme>) -> Self {
        let persisted = storage.load().and_then(|raw| match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        });
        let current = persisted.or(system_hint).unwrap_or_default();
        log::debug!("theme resolved to {current}");

        Self {
            inner: Arc::new(Mutex::new(ThemeInner {
                storage,
                current,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Theme {
        self.lock().current
    }

    /// Flips the theme, persists it and notifies subscribers before returning.
    pub fn toggle(&self) -> Theme {
        let (next, subscribers) = {
            let mut inner = self.lock();
            let next = inner.current.toggled();
            inner.current = next;
            if let Err(e) = inner.storage.store(next.as_str()) {
                log::warn!("theme not persisted: {e}");
            }
            let subscribers = inner
                .subscribers
                .iter()
                .map(|(_, f)| f.clone())
                .collect::<Vec<_>>();
            (next, subscribers)
        };
        for notify in subscribers {
            notify(next);
        }
        next
    }

    pub fn subscribe(&self, f: impl Fn(Theme) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(f)));

        let weak = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let Ok(mut inner) = inner.lock() {
                        inner.subscribers.retain(|(sid, _)| *sid != id);
                    }
                }
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ThemeInner<S>> {
        self.inner
            .lock()
            .expect("should be able to lock theme store")
    }
}

/// Registration returned by [`ThemeStore::subscribe`]; dropping it unsubscribes.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.localStorage` under [`THEME_STORAGE_KEY`]. Without a browser it
/// never has a value and accepts writes silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok_or(StorageError::Unavailable)?
                .set_item(THEME_STORAGE_KEY, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }
}

/// The OS colour-scheme preference, if the browser exposes one.
pub fn system_theme_hint() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(if query.matches() {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sets `data-theme` on `<html>` so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("couldn't apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        value: Arc<Mutex<Option<String>>>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        fn with(value: &str) -> Self {
            Self {
                value: Arc::new(Mutex::new(Some(value.to_string()))),
                fail_writes: false,
            }
        }

        fn value(&self) -> Option<String> {
            self.value.lock().unwrap().clone()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.value()
        }

        fn store(&self, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Unavailable);
            }
            *self.value.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_persisted_value_wins() {
        let store = ThemeStore::init(MemoryStorage::with("light"), Some(Theme::Dark));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_system_hint_used_without_persisted_value() {
        let store = ThemeStore::init(MemoryStorage::default(), Some(Theme::Light));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_fallback_is_dark() {
        let store = ThemeStore::init(MemoryStorage::default(), None);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_garbage_in_storage_falls_through_to_hint() {
        let store = ThemeStore::init(MemoryStorage::with("sepia"), Some(Theme::Light));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists_each_step() {
        let storage = MemoryStorage::default();
        let store = ThemeStore::init(storage.clone(), None);
        let original = store.current();

        let first = store.toggle();
        assert_eq!(first, original.toggled());
        assert_eq!(storage.value().as_deref(), Some(first.as_str()));

        let second = store.toggle();
        assert_eq!(second, original);
        assert_eq!(store.current(), original);
        assert_eq!(storage.value().as_deref(), Some(original.as_str()));
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let store = ThemeStore::init(MemoryStorage::default(), Some(Theme::Dark));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            store.subscribe(move |t| seen.lock().unwrap().push(t))
        };

        store.toggle();
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light]);
        store.toggle();
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let store = ThemeStore::init(MemoryStorage::default(), None);
        let calls = Arc::new(AtomicUsize::new(0));
        let sub = {
            let calls = calls.clone();
            store.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        store.toggle();
        drop(sub);
        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_storage_failure_still_flips_theme() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let store = ThemeStore::init(storage, Some(Theme::Light));
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_theme_parses_trimmed_names() {
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark!".parse::<Theme>().is_err());
    }
}
