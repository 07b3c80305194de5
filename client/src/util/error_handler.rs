//! Last-resort error reporting for the hydrated app.
//!
//! Panics are forwarded to the console (with a stack trace from
//! `console_error_panic_hook`) and, in release builds, surfaced to the visitor
//! as a generic alert. Unhandled promise rejections are logged and marked as
//! handled so the browser does not report them twice.

#[cfg(test)]
#[path = "error_handler_test.rs"]
mod error_handler_test;

pub const USER_ALERT: &str = "An unexpected error occurred. Please refresh the page and try again.";

/// Message shown to the visitor after a panic, if any.
pub fn user_alert_message(release: bool) -> Option<&'static str> {
    release.then_some(USER_ALERT)
}

/// Install the console logger, the panic hook and the rejection listener.
#[cfg(feature = "hydrate")]
pub fn install() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log_level());

    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        log::error!("unhandled panic: {info}");
        if let Some(message) = user_alert_message(!cfg!(debug_assertions)) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }));

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_rejection = Closure::<dyn Fn(web_sys::PromiseRejectionEvent)>::new(
        |event: web_sys::PromiseRejectionEvent| {
            log::error!("unhandled promise rejection: {}", describe_reason(&event.reason()));
            event.prevent_default();
        },
    );
    if window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to listen for unhandledrejection");
    }
    on_rejection.forget();
}

#[cfg(feature = "hydrate")]
fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn }
}

#[cfg(feature = "hydrate")]
fn describe_reason(reason: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = reason.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    reason.as_string().unwrap_or_else(|| format!("{reason:?}"))
}
