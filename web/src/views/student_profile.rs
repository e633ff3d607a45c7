use api::models::{Case, CaseStatus, Student};
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, NoticeKind, StatusPill};

use super::short_timestamp;
use crate::Route;

#[component]
pub fn StudentProfile(id: ReadOnlySignal<String>) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notices();
    let mut student = use_signal(|| Option::<Student>::None);
    let mut cases = use_signal(Vec::<Case>::new);
    let mut loading = use_signal(|| true);

    let load = move || async move {
        let id = id();
        let client = session.client();
        loading.set(true);
        match client.get_student(&id).await {
            Ok(found) => student.set(Some(found)),
            Err(err) => {
                push_notice(&mut notices, NoticeKind::Error, err.to_string());
                loading.set(false);
                return;
            }
        }
        // the cases endpoint has no per-student filter, so filter client-side
        match client.list_cases().await {
            Ok(res) => {
                let own: Vec<Case> = res
                    .data
                    .into_iter()
                    .filter(|case| case.student.id() == Some(id.as_str()))
                    .collect();
                cases.set(own);
            }
            Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
        }
        loading.set(false);
    };

    let _loader = use_resource(move || load());

    let transition = move |(action, case_id): (CaseAction, String)| {
        spawn(async move {
            let client = session.client();
            let result = match action {
                CaseAction::Approve => client.approve_case(&case_id).await,
                CaseAction::Resolve => client.resolve_case(&case_id, None).await,
                CaseAction::Unapprove => client.unapprove_case(&case_id).await,
                CaseAction::Unresolve => client.unresolve_case(&case_id).await,
            };
            match result {
                Ok(()) => load().await,
                Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
            }
        });
    };

    if loading() && student().is_none() {
        return rsx! {
            div { class: "loading", "Loading profile…" }
        };
    }

    let Some(student) = student() else {
        return rsx! {
            div { class: "card", "Student not found" }
        };
    };

    let all_cases = cases();
    let total_points: u32 = all_cases.iter().map(|c| c.point_value()).sum();
    let open_cases = all_cases
        .iter()
        .filter(|c| !c.is_resolved && c.status == CaseStatus::Approved)
        .count();
    let points_class = if total_points > 20 {
        "stat-value danger"
    } else if total_points > 10 {
        "stat-value warning"
    } else {
        "stat-value"
    };

    rsx! {
        a {
            class: "back-link",
            onclick: move |_| {
                nav.push(Route::Students {});
            },
            "← Back to Students"
        }

        div { class: "card profile-header",
            h1 { {student.full_name()} }
            div { class: "profile-details",
                span { "ID: {student.student_id}" }
                span { "Class: {student.class_name}" }
                span { "Status: {student.status.as_str()}" }
            }
        }

        div { class: "stat-grid",
            div { class: "card stat",
                h3 { "Total Points" }
                strong { class: points_class, "{total_points}" }
            }
            div { class: "card stat",
                h3 { "Total Cases" }
                strong { "{all_cases.len()}" }
            }
            div { class: "card stat",
                h3 { "Open Approved" }
                strong { "{open_cases}" }
            }
        }

        div { class: "card",
            h2 { "Disciplinary History" }
            table {
                thead {
                    tr {
                        th { "Date" }
                        th { "Offense" }
                        th { "Points" }
                        th { "Status" }
                        th { "Details" }
                        th { "Action" }
                    }
                }
                tbody {
                    if all_cases.is_empty() {
                        tr {
                            td { colspan: "6", class: "empty", "No disciplinary records found." }
                        }
                    }
                    for case in all_cases {
                        HistoryRow { case: case.clone(), on_action: transition }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum CaseAction {
    Approve,
    Resolve,
    Unapprove,
    Unresolve,
}

#[component]
fn HistoryRow(case: Case, on_action: EventHandler<(CaseAction, String)>) -> Element {
    let id = case.id.clone();
    let act = move |action: CaseAction| {
        let id = id.clone();
        move |_| on_action.call((action, id.clone()))
    };

    rsx! {
        tr {
            td { {short_timestamp(&case.created_at)} }
            td { {case.offense_name().unwrap_or("Unknown Offense").to_string()} }
            td { "+{case.point_value()}" }
            td {
                StatusPill { status: case.status }
            }
            td { class: "muted",
                if case.description.is_empty() { "—" } else { "{case.description}" }
            }
            td {
                if !case.is_resolved && case.status == CaseStatus::Pending {
                    button { class: "secondary", onclick: act(CaseAction::Approve), "Approve" }
                }
                if !case.is_resolved && case.status == CaseStatus::Approved {
                    button { class: "secondary", onclick: act(CaseAction::Resolve), "Resolve" }
                    button { class: "secondary", onclick: act(CaseAction::Unapprove), "Unapprove" }
                }
                if case.is_resolved {
                    button { class: "secondary", onclick: act(CaseAction::Unresolve), "Unresolve" }
                }
            }
        }
    }
}
