//! Header button switching between light and dark.

use leptos::prelude::*;

use crate::theme::{ThemePreference, use_theme};

/// Label announced for the control given the current preference.
fn toggle_label(preference: ThemePreference) -> &'static str {
    match preference.toggled() {
        ThemePreference::Light => "Switch to light mode",
        _ => "Switch to dark mode",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let icon = move || if theme.is_dark() { "\u{263E}" } else { "\u{2600}" };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || toggle_label(theme.preference())
            title=move || toggle_label(theme.preference())
            on:click=move |_| theme.toggle()
        >
            {icon}
        </button>
    }
}
