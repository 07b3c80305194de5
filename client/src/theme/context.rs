//! Leptos context bridging the theme store into reactive signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering has no storage, OS signal or document, so the context
//! renders the `system`/light defaults there. In the browser the store is
//! built once the app has mounted, mirrors every snapshot into the signals
//! below, and keeps its OS subscription alive until the owning scope is
//! disposed. A choice made before the store exists is held and committed as
//! soon as it attaches.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::preference::ThemePreference;
#[cfg(any(feature = "hydrate", test))]
use super::store::{SchemeSubscription, ThemeStore};

/// Reactive theme state shared with every component.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    is_dark: RwSignal<bool>,
    #[cfg(any(feature = "hydrate", test))]
    store: StoredValue<Option<ThemeStore>, LocalStorage>,
    #[cfg(any(feature = "hydrate", test))]
    subscription: StoredValue<Option<SchemeSubscription>, LocalStorage>,
    #[cfg(any(feature = "hydrate", test))]
    pending: StoredValue<Option<ThemePreference>>,
}

impl ThemeContext {
    fn new() -> Self {
        Self {
            preference: RwSignal::new(ThemePreference::System),
            is_dark: RwSignal::new(false),
            #[cfg(any(feature = "hydrate", test))]
            store: StoredValue::new_local(None),
            #[cfg(any(feature = "hydrate", test))]
            subscription: StoredValue::new_local(None),
            #[cfg(any(feature = "hydrate", test))]
            pending: StoredValue::new(None),
        }
    }

    /// Create the context, provide it, and schedule browser initialization.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);

        #[cfg(feature = "hydrate")]
        Effect::new(move |_| ctx.initialize_browser());

        ctx
    }

    #[cfg(feature = "hydrate")]
    fn initialize_browser(self) {
        use std::rc::Rc;

        use super::browser::{DocumentRoot, LocalStorage as BrowserStorage, MediaQuerySignal};

        if self.store.with_value(Option::is_some) {
            return;
        }
        self.attach(ThemeStore::new(
            Rc::new(BrowserStorage),
            Rc::new(MediaQuerySignal::new()),
            Rc::new(DocumentRoot),
        ));
        log::debug!(
            "theme initialized: {:?}, dark={}",
            self.preference.get_untracked(),
            self.is_dark.get_untracked()
        );
    }

    /// Mirror `store` into the signals, initialize it, and commit any choice
    /// made while no store was attached.
    #[cfg(any(feature = "hydrate", test))]
    fn attach(self, store: ThemeStore) {
        let preference = self.preference;
        let is_dark = self.is_dark;
        store.watch(move |snapshot| {
            preference.set(snapshot.preference);
            is_dark.set(snapshot.is_dark);
        });
        let subscription = store.initialize();
        if let Some(choice) = self.pending.try_update_value(Option::take).flatten() {
            store.set_preference(choice);
        }
        self.store.set_value(Some(store));
        self.subscription.set_value(Some(subscription));
    }

    /// Effective dark flag (tracked).
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    /// Current preference (tracked).
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        #[cfg(any(feature = "hydrate", test))]
        {
            if let Some(store) = self.store.with_value(Clone::clone) {
                store.set_preference(preference);
                return;
            }
            self.pending.set_value(Some(preference));
        }
        self.preference.set(preference);
        self.is_dark.set(preference.resolve(false));
    }

    pub fn toggle(&self) {
        let next = self.preference.get_untracked().toggled();
        self.set_preference(next);
    }
}

/// Fetch the theme context provided by the app shell.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
