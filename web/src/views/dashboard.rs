use api::aggregate::{dashboard_stats, DashboardStats};
use api::models::Case;
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, NoticeKind, StatusPill};

use super::short_timestamp;

const RECENT_CASES: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut student_count = use_signal(|| 0u64);
    let mut stats = use_signal(|| Option::<DashboardStats>::None);

    let _loader = use_resource(move || async move {
        let client = session.client();
        let students = client.list_students().await;
        let cases = client.list_cases().await;
        match (students, cases) {
            (Ok(students), Ok(cases)) => {
                student_count.set(students.total());
                stats.set(Some(dashboard_stats(&cases.data, RECENT_CASES)));
            }
            (students, cases) => {
                let err = students.err().map(|e| e.to_string()).or_else(|| {
                    cases.err().map(|e| e.to_string())
                });
                if let Some(message) = err {
                    push_notice(&mut notices, NoticeKind::Error, message);
                }
            }
        }
    });

    let user = session.user();
    let greeting = user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    rsx! {
        h1 { "Welcome, {greeting}" }

        if let Some(stats) = stats() {
            div { class: "stat-grid",
                div { class: "card stat",
                    h3 { "Students" }
                    strong { "{student_count}" }
                }
                div { class: "card stat",
                    h3 { "Cases" }
                    strong { "{stats.total_cases}" }
                }
                div { class: "card stat",
                    h3 { "Pending" }
                    strong { "{stats.pending_count}" }
                }
                div { class: "card stat",
                    h3 { "Resolved" }
                    strong { "{stats.resolved_count}" }
                }
            }

            div { class: "card",
                div { class: "toolbar",
                    h3 { "Recent Cases" }
                }
                RecentCasesTable { cases: stats.recent_cases.clone() }
            }
        } else {
            div { class: "loading", "Loading…" }
        }
    }
}

#[component]
fn RecentCasesTable(cases: Vec<Case>) -> Element {
    rsx! {
        table {
            thead {
                tr {
                    th { "Student" }
                    th { "Offense" }
                    th { "Status" }
                    th { "Reporter" }
                    th { "When" }
                }
            }
            tbody {
                for case in cases {
                    tr { key: "{case.id}",
                        td { {case.student_name().unwrap_or_else(|| "Unknown Student".to_string())} }
                        td { {case.offense_name().unwrap_or("—")} }
                        td {
                            StatusPill { status: case.status }
                        }
                        td { {case.reporter_name().unwrap_or("—")} }
                        td { {short_timestamp(&case.created_at)} }
                    }
                }
            }
        }
    }
}
