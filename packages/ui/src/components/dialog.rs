use dioxus::prelude::*;

use super::{Button, ButtonVariant, Spinner};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn Modal(
    title: String,
    #[props(default)] description: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                header {
                    class: "modal-header",
                    h2 { "{title}" }
                    if !description.is_empty() {
                        p { class: "modal-description", "{description}" }
                    }
                }
                {children}
            }
        }
    }
}

/// "Are you sure?" dialog in front of every delete.
#[component]
pub fn ConfirmDialog(
    message: String,
    busy: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: "Confirm Deletion",
            description: message,
            on_close: move |_| on_cancel.call(()),
            footer {
                class: "modal-footer",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy {
                        Spinner {}
                    }
                    "Delete"
                }
            }
        }
    }
}
