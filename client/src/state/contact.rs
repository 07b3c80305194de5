//! Booking dialog state and the command channel that drives it.
//!
//! DESIGN
//! ======
//! Any component may ask for the booking dialog; only the dialog reads its
//! visibility. Requests travel as `ContactCommand` values through a channel
//! provided by the app shell, so senders and the dialog never reference each
//! other and there is no page-global event name to collide with.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

/// Request sent to the booking dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactCommand {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactModalState {
    pub visible: bool,
}

impl ContactModalState {
    /// Fold one command into the state. Returns whether visibility changed.
    pub fn apply(&mut self, command: ContactCommand) -> bool {
        let visible = command == ContactCommand::Open;
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// Shell-owned channel carrying `ContactCommand`s.
#[derive(Clone, Copy)]
pub struct ContactChannel {
    state: RwSignal<ContactModalState>,
}

impl ContactChannel {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ContactModalState::default()) }
    }

    /// Create a channel and provide it to descendants.
    pub fn provide() -> Self {
        let channel = Self::new();
        provide_context(channel);
        channel
    }

    pub fn send(&self, command: ContactCommand) {
        let mut state = self.state.get_untracked();
        if state.apply(command) {
            self.state.set(state);
        }
    }

    pub fn open(&self) {
        self.send(ContactCommand::Open);
    }

    pub fn close(&self) {
        self.send(ContactCommand::Close);
    }

    /// Reactive read of the dialog visibility.
    pub fn is_open(&self) -> bool {
        self.state.get().visible
    }
}

impl Default for ContactChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel provided by the app shell.
///
/// # Panics
///
/// Panics when called outside the app shell.
pub fn use_contact() -> ContactChannel {
    expect_context::<ContactChannel>()
}
