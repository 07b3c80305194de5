//! SEO metadata table and the step that applies it to the document head.
//!
//! DESIGN
//! ======
//! `metadata` is pure data keyed by route name; `head` is the only place that
//! touches `leptos_meta`. The router hands a resolved record to `SeoHead`
//! ahead of the view, so tags are in place before the view paints.

pub mod head;
pub mod metadata;

pub use head::SeoHead;
pub use metadata::{BASE_URL, HeadTag, Robots, SeoMetadata, for_route};
