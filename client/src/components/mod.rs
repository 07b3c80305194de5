//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and read/write shared state (theme, booking
//! dialog) from Leptos context providers.

pub mod book_call_button;
pub mod button;
pub mod contact_modal;
pub mod site_header;
pub mod theme_toggle;
