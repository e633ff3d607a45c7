//! Application shell: sidebar navigation around every protected screen.

use dioxus::prelude::*;
use store::Role;
use ui::{use_session, RolePill};

use crate::guard::Guarded;
use crate::Route;

struct NavEntry {
    label: &'static str,
    route: Route,
    admin_only: bool,
}

fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Dashboard", route: Route::Dashboard {}, admin_only: false },
        NavEntry { label: "Students", route: Route::Students {}, admin_only: false },
        NavEntry { label: "Cases", route: Route::Cases {}, admin_only: false },
        NavEntry { label: "Offense Types", route: Route::OffenseTypes {}, admin_only: true },
        NavEntry { label: "Punishments", route: Route::Punishments {}, admin_only: true },
        NavEntry { label: "Members", route: Route::Members {}, admin_only: true },
        NavEntry { label: "Audit Logs", route: Route::AuditLogs {}, admin_only: true },
        NavEntry { label: "My Profile", route: Route::MyProfile {}, admin_only: false },
    ]
}

/// Entries the given role is allowed to see in the sidebar.
fn visible_entries(role: Role) -> Vec<NavEntry> {
    nav_entries()
        .into_iter()
        .filter(|e| !e.admin_only || role.is_admin())
        .collect()
}

#[component]
fn NavLink(label: &'static str, route: Route, active: bool) -> Element {
    let nav = use_navigator();
    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| {
                nav.push(route.clone());
            },
            "{label}"
        }
    }
}

#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let current = use_route::<Route>();
    let user = session.user();
    let role = user.as_ref().map(|u| u.role).unwrap_or(Role::Committee);

    rsx! {
        Guarded {
            div { class: "shell",
                aside { class: "sidebar",
                    div { class: "brand", "Discipline Tracker" }
                    nav {
                        for entry in visible_entries(role) {
                            NavLink {
                                label: entry.label,
                                active: entry.route == current,
                                route: entry.route,
                            }
                        }
                    }
                    div { class: "sidebar-footer",
                        if let Some(user) = user {
                            div { class: "whoami",
                                span { "{user.full_name}" }
                                RolePill { role: user.role }
                            }
                        }
                        button {
                            class: "logout",
                            onclick: move |_| async move {
                                session.logout().await;
                                nav.replace(Route::Login {});
                            },
                            "Sign out"
                        }
                    }
                }
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        visible_entries(role).into_iter().map(|e| e.label).collect()
    }

    #[test]
    fn committee_sees_only_shared_screens() {
        assert_eq!(
            labels(Role::Committee),
            vec!["Dashboard", "Students", "Cases", "My Profile"],
        );
    }

    #[test]
    fn admin_sees_every_screen() {
        let admin = labels(Role::Admin);
        for label in ["Offense Types", "Punishments", "Members", "Audit Logs"] {
            assert!(admin.contains(&label), "missing {label}");
        }
    }
}
