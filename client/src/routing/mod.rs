//! Client-side routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pattern` parses and matches path patterns, `table` resolves a path to a
//! named route (with the root guard), `scroll` decides where the document
//! lands, and `navigation` ties them into a state machine. `outlet` is the
//! Leptos component that renders the resolved route; `browser` holds the
//! window side effects and only exists in the hydrate build.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod navigation;
pub mod outlet;
pub mod pattern;
pub mod scroll;
pub mod table;

pub use navigation::{NavigationKind, Navigator, RouterState, TargetLocation, Transition};
pub use outlet::{RouteOutlet, RouterHandle};
pub use pattern::{PatternError, RoutePattern};
pub use scroll::{EntryId, ScrollOffset, ScrollTarget};
pub use table::{RouteDefinition, RouteName, RouteTable, RouteTableError};
