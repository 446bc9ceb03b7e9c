use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {path}");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Page not found: {path}" }
            Link { to: Route::Root {}, class: "btn btn-primary", "Go home" }
        }
    }
}
