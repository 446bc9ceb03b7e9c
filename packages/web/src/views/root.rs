use dioxus::prelude::*;
use ui::components::FullPageSpinner;
use ui::use_auth;

use super::Redirect;
use crate::Route;

/// Send `/` to the signed-in role's landing page, or to the login page.
#[component]
pub fn Root() -> Element {
    let auth = use_auth();
    let state = auth.read();

    if state.loading {
        return rsx! { FullPageSpinner {} };
    }
    let to = match state.role() {
        Some(role) => Route::landing(role),
        None => Route::login(false),
    };
    rsx! { Redirect { to } }
}
