use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;

pub const CONSENT_KEY: &str = "cookieConsent";
pub const PREFERENCES_KEY: &str = "cookiePreferences";

#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    Write(String),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl CookiePreferences {
    pub fn all() -> Self {
        Self { necessary: true, analytics: true, marketing: true }
    }

    pub fn necessary_only() -> Self {
        Self { necessary: true, analytics: false, marketing: false }
    }
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

/// True when `current` allows analytics and `previous` (the stored choice
/// before this decision, if any) did not.
pub fn analytics_newly_allowed(previous: Option<CookiePreferences>, current: &CookiePreferences) -> bool {
    current.analytics && !previous.map(|p| p.analytics).unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
    Custom,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "accepted",
            Decision::Rejected => "rejected",
            Decision::Custom => "custom",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(Decision::Accepted),
            "rejected" => Some(Decision::Rejected),
            "custom" => Some(Decision::Custom),
            _ => None,
        }
    }
}

/// Key-value storage the consent choice is persisted in.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError>;
    fn remove(&self, key: &str);
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
        let storage = Self::storage().ok_or(ConsentError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| ConsentError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub struct ConsentManager<S: PreferenceStore> {
    store: S,
}

impl ConsentManager<LocalStorage> {
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }
}

impl<S: PreferenceStore> ConsentManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn decision(&self) -> Option<Decision> {
        self.store.get(CONSENT_KEY).as_deref().and_then(Decision::parse)
    }

    /// Stored preferences, or `None` while the visitor hasn't decided.
    /// Unreadable JSON counts as no decision so the banner asks again.
    pub fn load(&self) -> Option<CookiePreferences> {
        self.decision()?;
        let raw = self.store.get(PREFERENCES_KEY)?;
        match serde_json::from_str::<CookiePreferences>(&raw) {
            Ok(prefs) => Some(CookiePreferences { necessary: true, ..prefs }),
            Err(e) => {
                log::warn!("Ignoring unreadable cookie preferences: {}", e);
                None
            }
        }
    }

    pub fn has_decided(&self) -> bool {
        self.load().is_some()
    }

    pub fn analytics_allowed(&self) -> bool {
        self.load().map(|p| p.analytics).unwrap_or(false)
    }

    pub fn accept_all(&self) -> Result<CookiePreferences, ConsentError> {
        self.persist(Decision::Accepted, CookiePreferences::all())
    }

    pub fn reject_all(&self) -> Result<CookiePreferences, ConsentError> {
        self.persist(Decision::Rejected, CookiePreferences::necessary_only())
    }

    pub fn save_custom(&self, prefs: CookiePreferences) -> Result<CookiePreferences, ConsentError> {
        self.persist(Decision::Custom, prefs)
    }

    pub fn clear(&self) {
        self.store.remove(CONSENT_KEY);
        self.store.remove(PREFERENCES_KEY);
    }

    fn persist(&self, decision: Decision, prefs: CookiePreferences) -> Result<CookiePreferences, ConsentError> {
        let prefs = CookiePreferences { necessary: true, ..prefs };
        let json = serde_json::to_string(&prefs)?;
        self.store.set(PREFERENCES_KEY, &json)?;
        self.store.set(CONSENT_KEY, decision.as_str())?;
        log::info!("Cookie consent saved: {} {:?}", decision.as_str(), prefs);
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for &MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }

    #[test]
    fn undecided_by_default() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        assert!(!manager.has_decided());
        assert!(!manager.analytics_allowed());
        assert_eq!(manager.decision(), None);
    }

    #[test]
    fn accept_all_writes_both_keys() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        manager.accept_all().unwrap();
        assert_eq!(store.items.borrow().get(CONSENT_KEY).map(String::as_str), Some("accepted"));
        assert!(manager.analytics_allowed());
        assert_eq!(manager.load(), Some(CookiePreferences::all()));
    }

    #[test]
    fn reject_keeps_only_necessary() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        let prefs = manager.reject_all().unwrap();
        assert_eq!(prefs, CookiePreferences::necessary_only());
        assert!(manager.has_decided());
        assert!(!manager.analytics_allowed());
    }

    #[test]
    fn necessary_cannot_be_switched_off() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        let saved = manager
            .save_custom(CookiePreferences { necessary: false, analytics: true, marketing: false })
            .unwrap();
        assert!(saved.necessary);
        assert_eq!(manager.decision(), Some(Decision::Custom));

        store
            .items
            .borrow_mut()
            .insert(PREFERENCES_KEY.into(), r#"{"necessary":false,"analytics":false,"marketing":true}"#.into());
        assert_eq!(manager.load().map(|p| p.necessary), Some(true));
    }

    #[test]
    fn corrupt_preferences_read_as_undecided() {
        let store = MemoryStore::default();
        store.items.borrow_mut().insert(CONSENT_KEY.into(), "accepted".into());
        store.items.borrow_mut().insert(PREFERENCES_KEY.into(), "{not json".into());
        let manager = ConsentManager::new(&store);
        assert!(!manager.has_decided());
        assert!(!manager.analytics_allowed());
    }

    #[test]
    fn clear_forgets_the_decision() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        manager.accept_all().unwrap();
        manager.clear();
        assert!(!manager.has_decided());
        assert!(store.items.borrow().is_empty());
    }

    #[test]
    fn first_accept_newly_allows_analytics() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        let previous = manager.load();
        let current = manager.accept_all().unwrap();
        assert!(analytics_newly_allowed(previous, &current));

        let previous = manager.load();
        let current = manager.accept_all().unwrap();
        assert!(!analytics_newly_allowed(previous, &current));
    }

    #[test]
    fn rejecting_never_newly_allows_analytics() {
        let store = MemoryStore::default();
        let manager = ConsentManager::new(&store);
        let previous = manager.load();
        let current = manager.reject_all().unwrap();
        assert!(!analytics_newly_allowed(previous, &current));

        let custom = CookiePreferences { analytics: true, ..CookiePreferences::necessary_only() };
        let previous = manager.load();
        let current = manager.save_custom(custom).unwrap();
        assert!(analytics_newly_allowed(previous, &current));
    }
}
