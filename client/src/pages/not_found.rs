//! Fallback page for paths no route claims.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for doesn't exist or has moved."</p>
            <a href="/" class="btn btn--primary btn--md">"Back to home"</a>
        </main>
    }
}
