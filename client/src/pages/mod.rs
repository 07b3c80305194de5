//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a black box to the router: `routing::outlet` picks one by
//! route name and renders it after the route's head tags.

pub mod home;
pub mod not_found;
pub mod showcase;
