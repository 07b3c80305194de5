//! Light/dark theming.
//!
//! SYSTEM CONTEXT
//! ==============
//! `preference` defines the persisted value, `store` owns the state machine
//! over injected collaborators, `browser` (and `memory`, in tests) provide those
//! collaborators, and `context` exposes the store to Leptos components.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod context;
#[cfg(test)]
pub mod memory;
pub mod preference;
pub mod store;

pub use context::{ThemeContext, use_theme};
pub use preference::{STORAGE_KEY, ThemePreference};
pub use store::{SchemeSubscription, ThemeSnapshot, ThemeStore};
