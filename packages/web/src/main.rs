use dioxus::prelude::*;

use store::Role;
use ui::{SessionProvider, ToastProvider};
use views::{
    AdminDashboard, AdminShell, Attendance, Chat, EmployeeDashboard, EmployeeShell, Employees,
    Login, MyAttendance, NotFound, Root, Teams,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:session")]
    Login { session: String },
    #[layout(EmployeeShell)]
        #[route("/dashboard")]
        EmployeeDashboard {},
        #[route("/attendance")]
        MyAttendance {},
    #[end_layout]
    #[nest("/admin")]
        #[layout(AdminShell)]
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/employees")]
            Employees {},
            #[route("/teams")]
            Teams {},
            #[route("/attendance")]
            Attendance {},
            #[route("/chat")]
            Chat {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Where `role` lands after signing in.
    pub fn landing(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::Employee => Route::EmployeeDashboard {},
        }
    }

    /// The login page, flagged when the previous session expired.
    pub fn login(expired: bool) -> Self {
        Route::Login {
            session: if expired { "expired".to_string() } else { String::new() },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting AttendOps against {}", api::settings().api.base_url);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "AttendOps" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_routes_match_sidebar_paths() {
        for role in Role::ALL {
            assert_eq!(Route::landing(role).to_string(), ui::landing_path(role));
            let first = ui::nav_items(role)[0].path;
            assert_eq!(first.parse::<Route>().ok(), Some(Route::landing(role)));
        }
    }

    #[test]
    fn test_login_route_carries_expiry() {
        let route: Route = "/login?session=expired".parse().unwrap();
        assert_eq!(route, Route::login(true));
        assert!(matches!(
            "/nowhere".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_every_nav_item_is_routable() {
        for role in Role::ALL {
            for item in ui::nav_items(role) {
                let route = item.path.parse::<Route>().ok();
                assert!(
                    !matches!(route, None | Some(Route::NotFound { .. })),
                    "{} does not resolve",
                    item.path
                );
            }
        }
    }
}
