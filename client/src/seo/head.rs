//! Applies a metadata record to the document head through `leptos_meta`.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use super::metadata::{HeadTag, SeoMetadata};

/// Writes every tag of `meta`. Tags are removed again when the component
/// unmounts, so rendering one per resolved route keeps the head in sync.
#[component]
pub fn SeoHead(meta: SeoMetadata) -> impl IntoView {
    meta.head_tags()
        .into_iter()
        .map(|tag| match tag {
            HeadTag::Title(text) => view! { <Title text=text/> }.into_any(),
            HeadTag::Name { name, content } => view! { <Meta name=name content=content/> }.into_any(),
            HeadTag::Property { property, content } => {
                view! { <Meta property=property content=content/> }.into_any()
            }
            HeadTag::Canonical(href) => view! { <Link rel="canonical" href=href/> }.into_any(),
        })
        .collect_view()
}
