//! In-memory [`KeySelector`] for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use crate::error::Result;
use crate::port::{ApiKey, KeySelector};

/// A selector holding its key in memory.
///
/// `open_key_selection` stores `next_key` (when set) and counts invocations.
pub struct MemorySelector {
    selected: Mutex<Option<ApiKey>>,
    next_key: Option<ApiKey>,
    opened: AtomicU32,
    queries: AtomicU32,
}

impl MemorySelector {
    /// A selector with no key selected.
    pub fn empty() -> Self {
        Self {
            selected: Mutex::new(None),
            next_key: None,
            opened: AtomicU32::new(0),
            queries: AtomicU32::new(0),
        }
    }

    /// A selector that already holds `key`.
    pub fn with_key(key: &str) -> Self {
        let selector = Self::empty();
        *selector.selected.lock() = ApiKey::new(key);
        selector
    }

    /// Key stored by the next `open_key_selection` call.
    pub fn selecting(mut self, key: &str) -> Self {
        self.next_key = ApiKey::new(key);
        self
    }

    /// Number of times the selection flow was opened.
    pub fn opened(&self) -> u32 {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of `has_selected_key` queries.
    pub fn queries(&self) -> u32 {
        self.queries.load(Ordering::SeqCst)
    }
}

impl KeySelector for MemorySelector {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn has_selected_key(&self) -> Result<bool> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.selected.lock().is_some())
    }

    fn open_key_selection(&self) -> Result<()> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        if let Some(key) = &self.next_key {
            *self.selected.lock() = Some(key.clone());
        }
        Ok(())
    }

    fn selected_key(&self) -> Result<Option<ApiKey>> {
        Ok(self.selected.lock().clone())
    }
}
