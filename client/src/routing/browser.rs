//! Browser side effects of routing (`hydrate` only): applying scroll targets,
//! tagging history entries with their id, and feeding traversals and scroll
//! offsets back to the navigator.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::outlet::RouterHandle;
use super::scroll::{EntryId, ScrollOffset, ScrollTarget};

/// Move the document to `target`.
pub fn apply_scroll(target: &ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match target {
        ScrollTarget::Restore(offset) => window.scroll_to_with_x_and_y(offset.x, offset.y),
        ScrollTarget::Anchor(id) => {
            let element = window.document().and_then(|doc| doc.get_element_by_id(id));
            if let Some(element) = element {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            } else {
                log::debug!("no element with id {id:?}; scrolling to top");
                scroll_top(&window);
            }
        }
        ScrollTarget::Top => scroll_top(&window),
    }
}

fn scroll_top(window: &web_sys::Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// First entry id for this page load: the load time in milliseconds, scaled
/// so ids from earlier loads still sitting in history never collide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entry_seed() -> u64 {
    (js_sys::Date::now() as u64).saturating_mul(1024)
}

/// Write `entry` into the current history entry's state.
pub fn stamp_entry(entry: EntryId) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if history.replace_state(&JsValue::from_f64(entry.to_state()), "").is_err() {
        log::warn!("failed to record history entry {}", entry.0);
    }
}

/// Install window listeners for the lifetime of the page:
/// `popstate` marks the next navigation as a traversal to the entry id in
/// its state, and `scroll` keeps the current entry's offset up to date.
pub fn install_history_tracking(router: &RouterHandle) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_popstate = {
        let router = router.clone();
        Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let entry = event
                .dyn_ref::<web_sys::PopStateEvent>()
                .and_then(|event| event.state().as_f64())
                .and_then(EntryId::from_state);
            router.with(|nav| nav.mark_traversal(entry));
        })
    };
    let on_scroll = {
        let router = router.clone();
        Closure::<dyn Fn(web_sys::Event)>::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let offset = ScrollOffset::new(
                window.scroll_x().unwrap_or_default(),
                window.scroll_y().unwrap_or_default(),
            );
            router.with(|nav| nav.remember_scroll(offset));
        })
    };

    for (event, closure) in [("popstate", on_popstate), ("scroll", on_scroll)] {
        if window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to listen for {event}");
        }
        closure.forget();
    }
}
