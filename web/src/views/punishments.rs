use api::models::{Punishment, PunishmentInput};
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, AccessDeniedCard, NoticeKind, SequenceGuard};

use crate::guard::AdminOnly;

#[derive(Clone, Default, PartialEq)]
struct PunishmentForm {
    name: String,
    description: String,
    points_required: String,
    duration_days: String,
}

impl PunishmentForm {
    fn to_input(&self) -> PunishmentInput {
        PunishmentInput {
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            points_required: self.points_required.parse().unwrap_or(0),
            duration_days: self.duration_days.parse().unwrap_or(0),
        }
    }

    fn from_entity(entity: &Punishment) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            points_required: entity.points_required.to_string(),
            duration_days: entity.duration_days.to_string(),
        }
    }
}

#[component]
pub fn Punishments() -> Element {
    rsx! {
        AdminOnly {
            PunishmentsInner {}
        }
    }
}

#[component]
fn PunishmentsInner() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut list = use_signal(Vec::<Punishment>::new);
    let mut forbidden = use_signal(|| false);
    let mut form = use_signal(PunishmentForm::default);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);
    let seq = use_hook(SequenceGuard::new);

    let load = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            async move {
                let ticket = seq.begin();
                match session.client().list_punishments().await {
                    Ok(res) if seq.is_current(ticket) => {
                        forbidden.set(false);
                        list.set(res.data);
                    }
                    Ok(_) => {}
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
                let input = form().to_input();
                let result = match editing_id() {
                    Some(id) => session.client().update_punishment(&id, &input).await,
                    None => session.client().create_punishment(&input).await,
                };
                match result {
                    Ok(()) => {
                        form.set(PunishmentForm::default());
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

    let filtered: Vec<Punishment> = {
        let needle = filter().to_lowercase();
        list()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Punishment Templates" }
        }

        div { class: "card",
            h3 { if editing_id().is_some() { "Edit Punishment" } else { "Create Punishment" } }
            form { onsubmit: submit,
                div { class: "field",
                    label { "Name" }
                    input {
                        required: true,
                        value: "{form().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Description" }
                    textarea {
                        value: "{form().description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Points Required" }
                    input {
                        r#type: "number",
                        min: "0",
                        required: true,
                        value: "{form().points_required}",
                        oninput: move |evt| form.write().points_required = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Duration (days)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{form().duration_days}",
                        oninput: move |evt| form.write().duration_days = evt.value(),
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
                            form.set(PunishmentForm::default());
                        },
                        "Cancel"
                    }
                }
            }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Filter punishments...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Points Required" }
                        th { "Duration" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for punishment in filtered {
                        tr { key: "{punishment.id}",
                            td { "{punishment.name}" }
                            td { "{punishment.points_required}" }
                            td { "{punishment.duration_days} days" }
                            td {
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let punishment = punishment.clone();
                                        move |_| {
                                            editing_id.set(Some(punishment.id.clone()));
                                            form.set(PunishmentForm::from_entity(&punishment));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let load = load.clone();
                                        let id = punishment.id.clone();
                                        move |_| {
                                            let load = load.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match session.client().delete_punishment(&id).await {
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
