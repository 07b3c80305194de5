//! Browser-backed theme collaborators (`hydrate` only).
//!
//! `localStorage` for persistence, `matchMedia` for the OS signal and the
//! `<html>` class list for the style scope.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryListEvent;

use super::store::{ColorSchemeSignal, ListenerId, PreferenceStorage, SchemeListener, ThemeRoot};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

/// `window.localStorage`. Every operation is best-effort: private browsing
/// or a disabled storage API simply behaves like an empty store.
#[derive(Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

type ChangeClosure = Closure<dyn Fn(MediaQueryListEvent)>;

/// `matchMedia("(prefers-color-scheme: dark)")` with change listeners.
pub struct MediaQuerySignal {
    query: Option<web_sys::MediaQueryList>,
    next_id: Cell<u64>,
    closures: RefCell<HashMap<ListenerId, ChangeClosure>>,
}

impl MediaQuerySignal {
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten());
        if query.is_none() {
            log::warn!("matchMedia unavailable; OS colour scheme treated as light");
        }
        Self {
            query,
            next_id: Cell::new(0),
            closures: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(web_sys::MediaQueryList::matches)
    }

    fn add_listener(&self, listener: SchemeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let Some(query) = &self.query else {
            return id;
        };
        let closure: ChangeClosure = Closure::new(move |event: MediaQueryListEvent| listener(event.matches()));
        if query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to subscribe to colour-scheme changes");
            return id;
        }
        self.closures.borrow_mut().insert(id, closure);
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let Some(closure) = self.closures.borrow_mut().remove(&id) else {
            return;
        };
        if let Some(query) = &self.query {
            let _ = query.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    }
}

/// Toggles the `dark` class on `document.documentElement`.
#[derive(Debug, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn apply_dark(&self, dark: bool) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let _ = if dark {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
    }
}
