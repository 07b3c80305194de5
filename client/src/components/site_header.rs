//! Site header: logo, navigation, theme toggle and booking trigger.

use leptos::prelude::*;

use super::book_call_button::BookCallButton;
use super::button::ButtonSize;
use super::theme_toggle::ThemeToggle;
use crate::theme::use_theme;

/// Logo fill for the effective theme.
pub fn logo_fill(is_dark: bool) -> &'static str {
    if is_dark { "#fff" } else { "#000" }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = use_theme();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__logo" aria-label="Martin Greenwood, home">
                <svg viewBox="0 0 48 48" width="40" height="40" aria-hidden="true">
                    <path
                        fill=move || logo_fill(theme.is_dark())
                        d="M6 40V8h6l12 16L36 8h6v32h-6V18L24 34 12 18v22z"
                    />
                </svg>
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/showcase">"Showcase"</a>
            </nav>
            <div class="site-header__actions">
                <ThemeToggle/>
                <BookCallButton size=ButtonSize::Small/>
            </div>
        </header>
    }
}
