//! Theme preference store.
//!
//! DESIGN
//! ======
//! The store is constructed explicitly and handed to consumers (the Leptos
//! theme context in the app, a fresh instance per test). Its three
//! collaborators sit behind traits: persisted storage, the OS colour-scheme
//! signal, and the document root that receives the `dark` marker class.
//!
//! All mutation happens on the UI thread. `set_preference` stores, persists
//! and applies under one borrow of the state cell; an OS callback that fires
//! re-entrantly in that window finds the cell busy and is dropped, which is
//! safe because the apply step reads the live OS value itself. Observers run
//! only after every effect has completed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::preference::{STORAGE_KEY, ThemePreference};

/// Key/value persistence for the preference (`localStorage` in the browser).
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Identifier handed out by [`ColorSchemeSignal::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback receiving the new "prefers dark" value.
pub type SchemeListener = Rc<dyn Fn(bool)>;

/// The OS `prefers-color-scheme: dark` media feature.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
    fn add_listener(&self, listener: SchemeListener) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Document-level style scope toggled by the effective dark flag.
pub trait ThemeRoot {
    fn apply_dark(&self, dark: bool);
}

/// Observable state of the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub is_dark: bool,
}

type Observer = Rc<dyn Fn(ThemeSnapshot)>;

struct Inner {
    storage: Rc<dyn PreferenceStorage>,
    signal: Rc<dyn ColorSchemeSignal>,
    root: Rc<dyn ThemeRoot>,
    state: RefCell<ThemeSnapshot>,
    observers: RefCell<Vec<Observer>>,
}

impl Inner {
    fn notify(&self, snapshot: ThemeSnapshot) {
        let observers: Vec<Observer> = self.observers.borrow().clone();
        for observer in observers {
            observer(snapshot);
        }
    }

    fn on_scheme_change(&self, prefers_dark: bool) {
        let snapshot = {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                return;
            };
            if state.preference != ThemePreference::System {
                return;
            }
            state.is_dark = prefers_dark;
            self.root.apply_dark(prefers_dark);
            *state
        };
        self.notify(snapshot);
    }
}

/// Shared handle to the theme state. Clones refer to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    /// Build a store over its collaborators. State starts as `System` and is
    /// not applied until [`ThemeStore::initialize`] runs.
    pub fn new(
        storage: Rc<dyn PreferenceStorage>,
        signal: Rc<dyn ColorSchemeSignal>,
        root: Rc<dyn ThemeRoot>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                storage,
                signal,
                root,
                state: RefCell::new(ThemeSnapshot::default()),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Load the persisted preference, apply it, and start following the OS
    /// signal. The returned guard stops following when dropped.
    pub fn initialize(&self) -> SchemeSubscription {
        let stored = self.inner.storage.load(STORAGE_KEY);
        let preference = ThemePreference::from_stored(stored.as_deref());
        if stored.as_deref().is_some_and(|raw| raw != preference.as_str()) {
            leptos::logging::debug_warn!("ignoring unrecognized theme preference {stored:?}");
        }
        self.commit(preference, false);

        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let id = self.inner.signal.add_listener(Rc::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                inner.on_scheme_change(prefers_dark);
            }
        }));

        SchemeSubscription {
            signal: Rc::clone(&self.inner.signal),
            id: Some(id),
        }
    }

    /// Store, persist and apply `preference`.
    pub fn set_preference(&self, preference: ThemePreference) {
        self.commit(preference, true);
    }

    /// Flip between explicit light and dark. See [`ThemePreference::toggled`].
    pub fn toggle_preference(&self) {
        let next = self.preference().toggled();
        self.set_preference(next);
    }

    /// Forget the persisted preference and return to following the OS.
    pub fn reset(&self) {
        self.inner.storage.remove(STORAGE_KEY);
        self.commit(ThemePreference::System, false);
    }

    pub fn preference(&self) -> ThemePreference {
        self.inner.state.borrow().preference
    }

    pub fn is_dark(&self) -> bool {
        self.inner.state.borrow().is_dark
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        *self.inner.state.borrow()
    }

    /// Register an observer called with the new snapshot after each change.
    pub fn watch(&self, observer: impl Fn(ThemeSnapshot) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    fn commit(&self, preference: ThemePreference, persist: bool) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            state.preference = preference;
            if persist {
                self.inner.storage.save(STORAGE_KEY, preference.as_str());
            }
            let dark = preference.resolve(self.inner.signal.prefers_dark());
            state.is_dark = dark;
            self.inner.root.apply_dark(dark);
            *state
        };
        self.inner.notify(snapshot);
    }
}

/// Active OS colour-scheme subscription. Deregisters its listener on drop.
#[must_use = "dropping the subscription stops following OS colour-scheme changes"]
pub struct SchemeSubscription {
    signal: Rc<dyn ColorSchemeSignal>,
    id: Option<ListenerId>,
}

impl SchemeSubscription {
    /// Deregister now instead of at drop.
    pub fn dispose(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.signal.remove_listener(id);
        }
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
