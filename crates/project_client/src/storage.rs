//! Token storage port.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

/// Key-value storage for the session token.
pub trait TokenStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, token: &str) -> Result<()>;
}

/// In-memory store, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), token.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, token: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), token.to_string());
        Ok(())
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, token: &str) -> Result<()> {
        (**self).save(key, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();

        assert_eq!(store.load("token").unwrap(), None);
        store.save("token", "abc").unwrap();
        assert_eq!(store.load("token").unwrap().as_deref(), Some("abc"));
    }
}
