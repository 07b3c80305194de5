//! Route outlet: renders the resolved view with its metadata and, in the
//! browser, commits each navigation through the shared navigator.

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::navigation::Navigator;
use super::table::{RouteName, RouteTable};
use crate::pages::{home::HomePage, not_found::NotFoundPage, showcase::ShowcasePage};
use crate::seo::SeoHead;

/// Shared navigator, provided as context by the app shell.
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Navigator>>);

impl RouterHandle {
    pub fn new(table: RouteTable) -> Self {
        #[cfg(feature = "hydrate")]
        let navigator = Navigator::starting_at(table, super::browser::entry_seed());
        #[cfg(not(feature = "hydrate"))]
        let navigator = Navigator::new(table);
        Self(Arc::new(Mutex::new(navigator)))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> R {
        let mut navigator = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut navigator)
    }
}

fn render_route(route: RouteName) -> AnyView {
    match route {
        RouteName::Home => view! { <HomePage/> }.into_any(),
        RouteName::Showcase => view! { <ShowcasePage/> }.into_any(),
        RouteName::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Renders whichever route the current location resolves to.
///
/// The head tags are emitted ahead of the view in the same render, so a new
/// page never paints with the previous page's metadata. Scrolling and history
/// corrections run in an effect, i.e. after the view has mounted.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = expect_context::<RouterHandle>();
    let location = use_location();
    let pathname = location.pathname;

    let resolution = Memo::new({
        let router = router.clone();
        move |_| {
            let path = pathname.get();
            router.with(|nav| nav.table().resolve(&path))
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use super::navigation::TargetLocation;

        let navigate = use_navigate();
        Effect::new(move |_| {
            let target = TargetLocation::from_parts(
                &location.pathname.get(),
                &location.search.get(),
                &location.hash.get(),
            );
            let Some(transition) = router.with(|nav| nav.observe(target)) else {
                return;
            };
            log::debug!(
                "navigated {:?} -> {} at {} ({:?}, entry {})",
                transition.from,
                transition.route(),
                transition.location.key(),
                transition.kind,
                transition.entry.0
            );

            if let Some(correction) = &transition.resolution.correction {
                if correction.path != location.pathname.get_untracked() {
                    navigate(
                        &correction.path,
                        NavigateOptions {
                            replace: correction.replaces(),
                            scroll: false,
                            ..NavigateOptions::default()
                        },
                    );
                    return;
                }
            }

            if transition.new_entry {
                super::browser::stamp_entry(transition.entry);
            }
            let scroll = transition.scroll;
            request_animation_frame(move || super::browser::apply_scroll(&scroll));
        });
    }

    move || {
        let resolved = resolution.get();
        view! {
            <SeoHead meta=resolved.meta/>
            {render_route(resolved.name)}
        }
    }
}
