//! Route guard mapping [`store::decide`] onto navigation.

use dioxus::prelude::*;
use store::{decide, AccessDecision, Role};
use ui::use_session;

use crate::Route;

/// Wraps a protected screen. Renders nothing while the session is still
/// hydrating, navigates away when the session or role requirement fails,
/// and renders the children otherwise.
#[component]
pub fn Guarded(#[props(default)] required_roles: Option<Vec<Role>>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let snapshot = session.session();

    match decide(&snapshot, required_roles.as_deref()) {
        AccessDecision::Wait => rsx! {
            div { class: "loading", "Loading…" }
        },
        AccessDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        AccessDecision::RedirectHome => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
        AccessDecision::Render => rsx! {
            {children}
        },
    }
}

/// Convenience wrapper for admin-only screens.
#[component]
pub fn AdminOnly(children: Element) -> Element {
    rsx! {
        Guarded { required_roles: Some(vec![Role::Admin]), {children} }
    }
}
