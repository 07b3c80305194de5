use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::theme::memory::{ManualColorScheme, MemoryRoot, MemoryStorage};

struct Harness {
    storage: Rc<MemoryStorage>,
    signal: Rc<ManualColorScheme>,
    root: Rc<MemoryRoot>,
    store: ThemeStore,
}

fn harness(os_dark: bool) -> Harness {
    let storage = Rc::new(MemoryStorage::default());
    let signal = Rc::new(ManualColorScheme::new(os_dark));
    let root = Rc::new(MemoryRoot::default());
    let store = ThemeStore::new(storage.clone(), signal.clone(), root.clone());
    Harness { storage, signal, root, store }
}

/// Simulates a page reload: a new store over the same storage and OS signal.
fn reload(h: &Harness) -> (ThemeStore, Rc<MemoryRoot>) {
    let root = Rc::new(MemoryRoot::default());
    let store = ThemeStore::new(h.storage.clone(), h.signal.clone(), root.clone());
    (store, root)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_stored_value_follows_os() {
    let h = harness(true);
    let _sub = h.store.initialize();
    assert_eq!(h.store.preference(), ThemePreference::System);
    assert!(h.store.is_dark());
    assert!(h.root.is_dark());
}

#[test]
fn initialize_with_corrupt_value_treats_as_system() {
    let h = harness(false);
    h.storage.save(STORAGE_KEY, "purple");
    let _sub = h.store.initialize();
    assert_eq!(h.store.preference(), ThemePreference::System);
    assert!(!h.store.is_dark());
}

#[test]
fn initialize_does_not_write_storage() {
    let h = harness(false);
    let _sub = h.store.initialize();
    assert_eq!(h.storage.get(STORAGE_KEY), None);
}

#[test]
fn initialize_registers_one_listener_and_dispose_removes_it() {
    let h = harness(false);
    let sub = h.store.initialize();
    assert!(sub.is_active());
    assert_eq!(h.signal.listener_count(), 1);
    sub.dispose();
    assert_eq!(h.signal.listener_count(), 0);
}

#[test]
fn dropping_subscription_removes_listener() {
    let h = harness(false);
    {
        let _sub = h.store.initialize();
        assert_eq!(h.signal.listener_count(), 1);
    }
    assert_eq!(h.signal.listener_count(), 0);
}

// =============================================================
// set_preference / persistence
// =============================================================

#[test]
fn set_preference_persists_and_applies() {
    let h = harness(false);
    let _sub = h.store.initialize();
    h.store.set_preference(ThemePreference::Dark);
    assert_eq!(h.storage.get(STORAGE_KEY).as_deref(), Some("dark"));
    assert!(h.store.is_dark());
    assert!(h.root.is_dark());
}

#[test]
fn preference_survives_reload_for_every_value() {
    for os_dark in [false, true] {
        for pref in ThemePreference::ALL {
            let h = harness(os_dark);
            let _sub = h.store.initialize();
            h.store.set_preference(pref);
            let before = h.store.is_dark();

            let (reloaded, root) = reload(&h);
            let _sub2 = reloaded.initialize();
            assert_eq!(reloaded.preference(), pref);
            assert_eq!(reloaded.is_dark(), before, "pref={pref} os_dark={os_dark}");
            assert_eq!(root.is_dark(), before);
        }
    }
}

#[test]
fn observers_see_complete_state() {
    let h = harness(false);
    let _sub = h.store.initialize();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let storage = h.storage.clone();
    let root = h.root.clone();
    let sink = seen.clone();
    h.store.watch(move |snapshot| {
        sink.borrow_mut().push((
            snapshot,
            storage.get(STORAGE_KEY),
            root.is_dark(),
        ));
    });

    h.store.set_preference(ThemePreference::Dark);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let (snapshot, persisted, applied) = &seen[0];
    assert_eq!(snapshot.preference, ThemePreference::Dark);
    assert!(snapshot.is_dark);
    assert_eq!(persisted.as_deref(), Some("dark"));
    assert!(*applied);
}

// =============================================================
// OS signal
// =============================================================

#[test]
fn os_change_updates_flag_while_system() {
    let h = harness(false);
    let _sub = h.store.initialize();
    h.signal.set_prefers_dark(true);
    assert!(h.store.is_dark());
    assert!(h.root.is_dark());
    h.signal.set_prefers_dark(false);
    assert!(!h.store.is_dark());
    assert!(!h.root.is_dark());
}

#[test]
fn os_change_ignored_with_explicit_preference() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        let h = harness(false);
        let _sub = h.store.initialize();
        h.store.set_preference(pref);
        let before = h.store.is_dark();
        let applications = h.root.applications();

        h.signal.set_prefers_dark(true);
        h.signal.set_prefers_dark(false);
        h.signal.set_prefers_dark(true);

        assert_eq!(h.store.is_dark(), before);
        assert_eq!(h.root.applications(), applications);
    }
}

#[test]
fn os_change_after_dispose_has_no_effect() {
    let h = harness(false);
    let sub = h.store.initialize();
    sub.dispose();
    h.signal.set_prefers_dark(true);
    assert!(!h.store.is_dark());
}

#[test]
fn returning_to_system_picks_up_current_os_value() {
    let h = harness(false);
    let _sub = h.store.initialize();
    h.store.set_preference(ThemePreference::Light);
    h.signal.set_prefers_dark(true);
    assert!(!h.store.is_dark());
    h.store.set_preference(ThemePreference::System);
    assert!(h.store.is_dark());
}

// =============================================================
// toggle / reset
// =============================================================

#[test]
fn toggle_flips_between_light_and_dark() {
    let h = harness(false);
    let _sub = h.store.initialize();
    h.store.set_preference(ThemePreference::Dark);
    h.store.toggle_preference();
    assert_eq!(h.store.preference(), ThemePreference::Light);
    h.store.toggle_preference();
    assert_eq!(h.store.preference(), ThemePreference::Dark);
}

#[test]
fn toggle_from_system_goes_dark_even_when_os_is_dark() {
    let h = harness(true);
    let _sub = h.store.initialize();
    h.store.toggle_preference();
    assert_eq!(h.store.preference(), ThemePreference::Dark);
    assert_eq!(h.storage.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn reset_clears_storage_and_follows_os() {
    let h = harness(true);
    let _sub = h.store.initialize();
    h.store.set_preference(ThemePreference::Light);
    h.store.reset();
    assert_eq!(h.storage.get(STORAGE_KEY), None);
    assert_eq!(h.store.preference(), ThemePreference::System);
    assert!(h.store.is_dark());
}

#[test]
fn stores_are_isolated() {
    let a = harness(false);
    let b = harness(false);
    let _sa = a.store.initialize();
    let _sb = b.store.initialize();
    a.store.set_preference(ThemePreference::Dark);
    assert!(!b.store.is_dark());
    assert_eq!(b.store.preference(), ThemePreference::System);
}
