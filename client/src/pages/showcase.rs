//! Button showcase: every variant, size and state side by side.
//!
//! Sections carry stable anchor ids so `/showcase#sizes` lands on them.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

pub const SECTION_IDS: [&str; 3] = ["variants", "sizes", "states"];

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <main class="showcase">
            <h1>"Button Showcase"</h1>
            <nav class="showcase__toc" aria-label="Sections">
                {SECTION_IDS
                    .iter()
                    .map(|id| view! { <a href=format!("#{id}")>{*id}</a> })
                    .collect_view()}
            </nav>

            <section id="variants">
                <h2>"Variants"</h2>
                <div class="showcase__row">
                    {ButtonVariant::ALL
                        .iter()
                        .map(|&variant| view! { <Button variant>{variant.to_string()}</Button> })
                        .collect_view()}
                </div>
            </section>

            <section id="sizes">
                <h2>"Sizes"</h2>
                <div class="showcase__row">
                    {ButtonSize::ALL
                        .iter()
                        .map(|&size| view! { <Button size>{size.as_str()}</Button> })
                        .collect_view()}
                </div>
            </section>

            <section id="states">
                <h2>"States"</h2>
                <div class="showcase__row">
                    <Button>"Default"</Button>
                    <Button disabled=true>"Disabled"</Button>
                    <Button loading=true>"Loading"</Button>
                </div>
            </section>
        </main>
    }
}
