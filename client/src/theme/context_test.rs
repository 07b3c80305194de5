use std::rc::Rc;

use super::*;
use crate::theme::STORAGE_KEY;
use crate::theme::memory::{ManualColorScheme, MemoryRoot, MemoryStorage};

struct Attached {
    storage: Rc<MemoryStorage>,
    root: Rc<MemoryRoot>,
}

fn attach_memory_store(ctx: ThemeContext, os_dark: bool) -> Attached {
    let storage = Rc::new(MemoryStorage::default());
    let root = Rc::new(MemoryRoot::default());
    ctx.attach(ThemeStore::new(
        storage.clone(),
        Rc::new(ManualColorScheme::new(os_dark)),
        root.clone(),
    ));
    Attached { storage, root }
}

#[test]
fn attach_mirrors_store_into_signals() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new();
        attach_memory_store(ctx, true);
        assert_eq!(ctx.preference.get_untracked(), ThemePreference::System);
        assert!(ctx.is_dark.get_untracked());
    });
}

#[test]
fn choice_before_attach_is_persisted_and_applied() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new();
        ctx.toggle();
        assert_eq!(ctx.preference.get_untracked(), ThemePreference::Dark);

        let attached = attach_memory_store(ctx, false);
        assert_eq!(attached.storage.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert!(attached.root.is_dark());
        assert_eq!(ctx.preference.get_untracked(), ThemePreference::Dark);
        assert!(ctx.is_dark.get_untracked());
    });
}

#[test]
fn latest_early_choice_wins() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new();
        ctx.set_preference(ThemePreference::Dark);
        ctx.set_preference(ThemePreference::Light);

        let attached = attach_memory_store(ctx, true);
        assert_eq!(attached.storage.get(STORAGE_KEY).as_deref(), Some("light"));
        assert!(!attached.root.is_dark());
    });
}

#[test]
fn without_early_choice_storage_is_untouched() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new();
        let attached = attach_memory_store(ctx, false);
        assert_eq!(attached.storage.get(STORAGE_KEY), None);
    });
}

#[test]
fn choice_after_attach_goes_straight_to_store() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new();
        let attached = attach_memory_store(ctx, false);
        ctx.toggle();
        assert_eq!(attached.storage.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert!(attached.root.is_dark());
        assert!(ctx.is_dark.get_untracked());
    });
}
