//! Site button with variants, sizes and disabled/loading states.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use std::fmt;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Outline, Self::Ghost];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

/// Class list for a button in the given state.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, disabled: bool, loading: bool) -> String {
    let mut classes = format!("btn btn--{} btn--{}", variant.as_str(), size.as_str());
    if disabled {
        classes.push_str(" btn--disabled");
    }
    if loading {
        classes.push_str(" btn--loading");
    }
    classes
}

/// A disabled or loading button swallows clicks.
pub fn accepts_click(disabled: bool, loading: bool) -> bool {
    !disabled && !loading
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = move || button_classes(variant, size, disabled.get(), loading.get());
    let on_press = move |_| {
        if accepts_click(disabled.get_untracked(), loading.get_untracked()) {
            if let Some(on_click) = on_click {
                on_click.run(());
            }
        }
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            aria-busy=move || loading.get().then_some("true")
            on:click=on_press
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
