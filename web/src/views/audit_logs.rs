use api::models::AuditLogEntry;
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, AccessDeniedCard, NoticeKind};

use super::short_timestamp;
use crate::guard::AdminOnly;

#[component]
pub fn AuditLogs() -> Element {
    rsx! {
        AdminOnly {
            AuditLogsInner {}
        }
    }
}

#[component]
fn AuditLogsInner() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut logs = use_signal(Vec::<AuditLogEntry>::new);
    let mut forbidden = use_signal(|| false);
    let mut filter = use_signal(String::new);

    let _loader = use_resource(move || async move {
        match session.client().list_audit_logs().await {
            Ok(res) => {
                forbidden.set(false);
                logs.set(res.data);
            }
            Err(err) if err.is_forbidden() => forbidden.set(true),
            Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
        }
    });

    if forbidden() {
        return rsx! {
            AccessDeniedCard {}
        };
    }

    let filtered: Vec<AuditLogEntry> = {
        let needle = filter().to_lowercase();
        logs()
            .into_iter()
            .filter(|entry| {
                format!(
                    "{} {} {} {}",
                    entry.action,
                    entry
                        .user
                        .as_ref()
                        .and_then(|u| u.embedded())
                        .map(|u| u.full_name.as_str())
                        .unwrap_or_default(),
                    entry.target_type,
                    entry.target_id.as_deref().unwrap_or_default(),
                )
                .to_lowercase()
                .contains(&needle)
            })
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Audit Logs" }
            div { class: "pill admin", "Admin Only" }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Filter logs...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Action" }
                        th { "User" }
                        th { "Target" }
                        th { "When" }
                    }
                }
                tbody {
                    for entry in filtered {
                        tr { key: "{entry.id}",
                            td { "{entry.action}" }
                            td {
                                {entry
                                    .user
                                    .as_ref()
                                    .and_then(|u| u.embedded())
                                    .map(|u| u.full_name.clone())
                                    .unwrap_or_else(|| "—".to_string())}
                            }
                            td { "{entry.target_type}" }
                            td { {short_timestamp(&entry.created_at)} }
                        }
                    }
                }
            }
        }
    }
}
