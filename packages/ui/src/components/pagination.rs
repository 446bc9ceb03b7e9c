use dioxus::prelude::*;

use crate::listing::{clamp_page, page_count, page_window, show_pagination};

/// Previous / numbered window / next. Renders nothing for a single page.
///
/// `page` may point past the last page after the list shrank; the control
/// shows the same clamped page the rows are cut from.
#[component]
pub fn Pagination(len: usize, page: Signal<usize>) -> Element {
    let mut page = page;
    if !show_pagination(len) {
        return rsx! {};
    }
    let total = page_count(len);
    let current = clamp_page(page(), len);

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "page-link",
                disabled: current <= 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                "Previous"
            }
            for n in page_window(current, total) {
                button {
                    key: "{n}",
                    class: if n == current { "page-link active" } else { "page-link" },
                    onclick: move |_| page.set(n),
                    "{n}"
                }
            }
            button {
                class: "page-link",
                disabled: current >= total,
                onclick: move |_| page.set((current + 1).min(total)),
                "Next"
            }
        }
    }
}
