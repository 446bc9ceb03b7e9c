use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { icon: FaSpinner, width: size, height: size }
        }
    }
}

/// Centered spinner filling the viewport; shown while the session loads.
#[component]
pub fn FullPageSpinner() -> Element {
    rsx! {
        div {
            class: "full-page-spinner",
            Spinner { size: 32 }
        }
    }
}
