//! Small widgets shared across screens.

use api::models::CaseStatus;
use dioxus::prelude::*;
use store::Role;

/// Colored pill for a case's lifecycle status.
#[component]
pub fn StatusPill(status: CaseStatus) -> Element {
    let class = match status {
        CaseStatus::Pending => "pill pending",
        CaseStatus::Approved => "pill approved",
        CaseStatus::Resolved => "pill resolved",
    };
    rsx! {
        span { class: class, "{status.as_str()}" }
    }
}

#[component]
pub fn RolePill(role: Role) -> Element {
    let class = if role.is_admin() { "pill admin" } else { "pill" };
    rsx! {
        span { class: class, "{role.as_str()}" }
    }
}

/// Shown in place of an admin-only listing when the server answers 403,
/// distinct from the generic error notice.
#[component]
pub fn AccessDeniedCard() -> Element {
    rsx! {
        div { class: "card access-denied",
            h2 { "Access denied" }
            p { "This section is restricted to administrators." }
        }
    }
}
