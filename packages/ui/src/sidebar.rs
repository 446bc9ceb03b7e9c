use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaCalendarCheck, FaChevronLeft, FaGaugeHigh, FaPeopleGroup, FaRightFromBracket,
    FaRobot, FaUsers,
};
use dioxus_free_icons::Icon;
use store::Role;

pub const APP_TITLE: &str = "AttendOps";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Employees,
    Teams,
    Attendance,
    Chat,
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

const EMPLOYEE_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/dashboard", icon: NavIcon::Dashboard },
    NavItem { label: "My Attendance", path: "/attendance", icon: NavIcon::Attendance },
];

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem { label: "Admin Dashboard", path: "/admin/dashboard", icon: NavIcon::Dashboard },
    NavItem { label: "Employees", path: "/admin/employees", icon: NavIcon::Employees },
    NavItem { label: "Teams", path: "/admin/teams", icon: NavIcon::Teams },
    NavItem { label: "Attendance", path: "/admin/attendance", icon: NavIcon::Attendance },
    NavItem { label: "AI Chat", path: "/admin/chat", icon: NavIcon::Chat },
];

/// Navigation entries visible to `role`.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_ITEMS,
        Role::Employee => EMPLOYEE_ITEMS,
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaGaugeHigh, width: 16, height: 16 } },
        NavIcon::Employees => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavIcon::Teams => rsx! { Icon { icon: FaPeopleGroup, width: 16, height: 16 } },
        NavIcon::Attendance => rsx! { Icon { icon: FaCalendarCheck, width: 16, height: 16 } },
        NavIcon::Chat => rsx! { Icon { icon: FaRobot, width: 16, height: 16 } },
    }
}

/// Collapsible navigation column. Items come from [`nav_items`].
#[component]
pub fn Sidebar(
    role: Role,
    active_path: String,
    collapsed: Signal<bool>,
    on_navigate: EventHandler<&'static str>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut collapsed = collapsed;
    let items = nav_items(role);
    let class = if collapsed() { "sidebar collapsed" } else { "sidebar" };

    rsx! {
        aside {
            class: "{class}",

            div {
                class: "sidebar-header",
                if !collapsed() {
                    span { class: "sidebar-title", "{APP_TITLE}" }
                }
                button {
                    class: "sidebar-toggle",
                    title: if collapsed() { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| collapsed.toggle(),
                    if collapsed() {
                        Icon { icon: FaBars, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaChevronLeft, width: 16, height: 16 }
                    }
                }
            }

            nav {
                class: "sidebar-nav",
                for item in items.iter().copied() {
                    button {
                        key: "{item.path}",
                        class: if active_path == item.path { "sidebar-item active" } else { "sidebar-item" },
                        title: "{item.label}",
                        onclick: move |_| on_navigate.call(item.path),
                        NavGlyph { icon: item.icon }
                        if !collapsed() {
                            span { "{item.label}" }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-item",
                    title: "Logout",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    if !collapsed() {
                        span { "Logout" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_sees_only_own_items() {
        let paths: Vec<_> = nav_items(Role::Employee).iter().map(|i| i.path).collect();
        assert_eq!(paths, ["/dashboard", "/attendance"]);
    }

    #[test]
    fn test_admin_items_stay_under_admin() {
        let items = nav_items(Role::Admin);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.path.starts_with("/admin/")));
        assert_eq!(items[4].label, "AI Chat");
    }
}
