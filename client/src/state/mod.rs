//! Application state shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain data with pure transitions; the Leptos wrappers
//! that components consume are provided as context by the app shell.

pub mod contact;
