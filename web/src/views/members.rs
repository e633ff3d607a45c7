use api::models::{Member, MemberInput, MemberStatus};
use dioxus::prelude::*;
use store::Role;
use ui::{push_notice, use_notices, use_session, AccessDeniedCard, NoticeKind, RolePill, SequenceGuard};

use crate::guard::AdminOnly;

#[component]
pub fn Members() -> Element {
    rsx! {
        AdminOnly {
            MembersInner {}
        }
    }
}

#[component]
fn MembersInner() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut members = use_signal(Vec::<Member>::new);
    let mut forbidden = use_signal(|| false);
    let mut form = use_signal(MemberInput::default);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);
    let seq = use_hook(SequenceGuard::new);

    let load = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            async move {
                let ticket = seq.begin();
                match session.client().list_members().await {
                    Ok(res) if seq.is_current(ticket) => {
                        forbidden.set(false);
                        members.set(res.data);
                    }
                    Ok(_) => {}
                    // a 403 gets its own presentation, not an error banner
                    Err(err) if err.is_forbidden() => forbidden.set(true),
                    Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
                }
            }
        }
    };

    let _loader = use_resource({
        let load = load.clone();
        move || load()
    });

    let submit = {
        let load = load.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let load = load.clone();
            async move {
                let input = form();
                let result = match editing_id() {
                    Some(id) => session.client().update_member(&id, &input).await,
                    None => session.client().create_member(&input).await,
                };
                match result {
                    Ok(()) => {
                        form.set(MemberInput::default());
                        editing_id.set(None);
                        load().await;
                    }
                    Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
                }
            }
        }
    };

    if forbidden() {
        return rsx! {
            AccessDeniedCard {}
        };
    }

    let filtered: Vec<Member> = {
        let needle = filter().to_lowercase();
        members()
            .into_iter()
            .filter(|m| {
                format!("{} {}", m.full_name, m.email)
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Committee Members" }
            div { class: "pill admin", "Admin Only" }
        }

        div { class: "card",
            h3 { if editing_id().is_some() { "Edit Member" } else { "Add Member" } }
            form { onsubmit: submit,
                div { class: "field",
                    label { "Full Name" }
                    input {
                        required: true,
                        value: "{form().full_name}",
                        oninput: move |evt| form.write().full_name = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        required: true,
                        value: "{form().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                div { class: "field",
                    label {
                        if editing_id().is_some() { "New Password (blank keeps current)" } else { "Password" }
                    }
                    input {
                        r#type: "password",
                        required: editing_id().is_none(),
                        value: form().password.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let value = evt.value();
                            form.write().password = (!value.is_empty()).then_some(value);
                        },
                    }
                }
                div { class: "field",
                    label { "Role" }
                    select {
                        value: "{form().role.as_str()}",
                        onchange: move |evt| {
                            form.write().role = if evt.value() == "admin" {
                                Role::Admin
                            } else {
                                Role::Committee
                            };
                        },
                        option { value: "committee", "Committee" }
                        option { value: "admin", "Admin" }
                    }
                }
                div { class: "field",
                    label { "Status" }
                    select {
                        value: "{form().status.as_str()}",
                        onchange: move |evt| {
                            form.write().status = if evt.value() == "suspended" {
                                MemberStatus::Suspended
                            } else {
                                MemberStatus::Active
                            };
                        },
                        option { value: "active", "Active" }
                        option { value: "suspended", "Suspended" }
                    }
                }
                button { r#type: "submit",
                    if editing_id().is_some() { "Update" } else { "Create" }
                }
                if editing_id().is_some() {
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| {
                            editing_id.set(None);
                            form.set(MemberInput::default());
                        },
                        "Cancel"
                    }
                }
            }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Search members...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for member in filtered {
                        tr { key: "{member.id}",
                            td { "{member.full_name}" }
                            td { "{member.email}" }
                            td {
                                RolePill { role: member.role() }
                            }
                            td {
                                span { class: "pill", "{member.status.as_str()}" }
                            }
                            td {
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let member = member.clone();
                                        move |_| {
                                            editing_id.set(Some(member.id.clone()));
                                            form.set(MemberInput {
                                                full_name: member.full_name.clone(),
                                                email: member.email.clone(),
                                                password: None,
                                                role: member.role(),
                                                status: member.status,
                                            });
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let load = load.clone();
                                        let id = member.id.clone();
                                        move |_| {
                                            let load = load.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match session.client().delete_member(&id).await {
                                                    Ok(()) => load().await,
                                                    Err(err) => push_notice(
                                                        &mut notices,
                                                        NoticeKind::Error,
                                                        err.to_string(),
                                                    ),
                                                }
                                            });
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
