//! In-process collaborators for the theme store (test builds only).
//!
//! Drive OS preference changes by hand and inspect what was persisted and
//! applied.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::store::{ColorSchemeSignal, ListenerId, PreferenceStorage, SchemeListener, ThemeRoot};

/// `HashMap`-backed preference storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// OS colour-scheme signal whose value is set explicitly.
#[derive(Default)]
pub struct ManualColorScheme {
    prefers_dark: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, SchemeListener)>>,
}

impl ManualColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
            ..Self::default()
        }
    }

    /// Change the OS value and notify listeners when it actually changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.prefers_dark.replace(prefers_dark) == prefers_dark {
            return;
        }
        let listeners: Vec<SchemeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ColorSchemeSignal for ManualColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn add_listener(&self, listener: SchemeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}

/// Root that only remembers the last applied flag.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    dark: Cell<bool>,
    applications: Cell<usize>,
}

impl MemoryRoot {
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Number of times a flag has been applied.
    pub fn applications(&self) -> usize {
        self.applications.get()
    }
}

impl ThemeRoot for MemoryRoot {
    fn apply_dark(&self, dark: bool) {
        self.dark.set(dark);
        self.applications.set(self.applications.get() + 1);
    }
}
