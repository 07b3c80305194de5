//! Booking dialog.
//!
//! Visibility comes from the contact channel; the close button, a click on
//! the overlay and Escape all send `Close` back through it. The panel takes
//! keyboard focus when it opens so Escape works straight away.

#[cfg(test)]
#[path = "contact_modal_test.rs"]
mod contact_modal_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::contact::{ContactCommand, use_contact};

pub const BOOKING_URL: &str = "https://calendly.com/martingreenwood";

/// Command a key press inside the dialog sends, if any.
pub fn command_for_key(key: &str) -> Option<ContactCommand> {
    (key == "Escape").then_some(ContactCommand::Close)
}

/// The panel is focused once the dialog is open and its element exists.
pub fn takes_focus(open: bool, mounted: bool) -> bool {
    open && mounted
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let contact = use_contact();
    let panel_ref = NodeRef::<html::Div>::new();
    let close = move || contact.send(ContactCommand::Close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(command) = command_for_key(&ev.key()) {
            ev.prevent_default();
            contact.send(command);
        }
    };

    Effect::new(move |_| {
        let panel = panel_ref.get();
        if takes_focus(contact.is_open(), panel.is_some()) {
            if let Some(panel) = panel {
                let _ = panel.focus();
            }
        }
    });

    view! {
        <Show when=move || contact.is_open()>
            <div class="contact-modal" on:keydown=on_keydown>
                <div class="contact-modal__overlay" on:click=move |_| close()></div>
                <div
                    node_ref=panel_ref
                    class="contact-modal__panel"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-modal-title"
                    tabindex="-1"
                >
                    <div class="contact-modal__header">
                        <h2 id="contact-modal-title">"Book a free consultation"</h2>
                        <button
                            type="button"
                            class="contact-modal__close"
                            aria-label="Close booking modal"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>
                    <p>
                        "Pick a time that suits you for a 30 minute call. We'll talk through \
                         what you're building, where it's stuck, and whether I can help."
                    </p>
                    <a class="btn btn--primary btn--lg" href=BOOKING_URL target="_blank" rel="noopener noreferrer">
                        "Open the booking calendar"
                    </a>
                </div>
            </div>
        </Show>
    }
}
