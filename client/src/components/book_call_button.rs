//! "Book a Call" trigger for the booking dialog.

use leptos::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::state::contact::{ContactCommand, use_contact};

#[component]
pub fn BookCallButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
) -> impl IntoView {
    let contact = use_contact();
    let on_click = Callback::new(move |()| contact.send(ContactCommand::Open));

    view! {
        <Button variant size on_click>
            "Book a Call"
        </Button>
    }
}
