//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::contact_modal::ContactModal;
use crate::components::site_header::SiteHeader;
use crate::routing::{RouteOutlet, RouteTable, RouterHandle};
use crate::state::contact::ContactChannel;
use crate::theme::ThemeContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en-GB">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, booking channel and navigator contexts. Leptos' router
/// only forwards every path to `RouteOutlet`; which page renders is decided
/// by the site route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ThemeContext::provide();
    ContactChannel::provide();

    let router = RouterHandle::new(RouteTable::site());
    #[cfg(feature = "hydrate")]
    crate::routing::browser::install_history_tracking(&router);
    provide_context(router);

    view! {
        <Stylesheet id="leptos" href="/pkg/greenwood-site.css"/>

        <Router>
            <SiteHeader/>
            <Routes fallback=RouteOutlet>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("path") view=RouteOutlet/>
            </Routes>
            <ContactModal/>
        </Router>
    }
}
