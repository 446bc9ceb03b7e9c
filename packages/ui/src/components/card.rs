use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "card {class}",
            if !title.is_empty() {
                header {
                    class: "card-header",
                    h2 { class: "card-title", "{title}" }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// A headline number with a caption.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] caption: String) -> Element {
    rsx! {
        section {
            class: "card stat-card",
            p { class: "stat-title", "{title}" }
            p { class: "stat-value", "{value}" }
            if !caption.is_empty() {
                p { class: "stat-caption", "{caption}" }
            }
        }
    }
}
