use api::models::{OffenseType, OffenseTypeInput};
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, AccessDeniedCard, NoticeKind, SequenceGuard};

use crate::guard::AdminOnly;

/// Form state mirrors the inputs; the punishment list is edited as a
/// comma-separated string and split on submit.
#[derive(Clone, Default, PartialEq)]
struct OffenseForm {
    name: String,
    description: String,
    point_value: String,
    suggested_punishments: String,
}

impl OffenseForm {
    fn to_input(&self) -> OffenseTypeInput {
        OffenseTypeInput {
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            point_value: self.point_value.parse().unwrap_or(0),
            suggested_punishments: if self.suggested_punishments.is_empty() {
                Vec::new()
            } else {
                self.suggested_punishments
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            },
        }
    }

    fn from_entity(entity: &OffenseType) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            point_value: entity.point_value.to_string(),
            suggested_punishments: entity.suggested_punishments.join(", "),
        }
    }
}

#[component]
pub fn OffenseTypes() -> Element {
    rsx! {
        AdminOnly {
            OffenseTypesInner {}
        }
    }
}

#[component]
fn OffenseTypesInner() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut list = use_signal(Vec::<OffenseType>::new);
    let mut forbidden = use_signal(|| false);
    let mut form = use_signal(OffenseForm::default);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);
    let seq = use_hook(SequenceGuard::new);

    let load = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            async move {
                let ticket = seq.begin();
                match session.client().list_offense_types().await {
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
                    Some(id) => session.client().update_offense_type(&id, &input).await,
                    None => session.client().create_offense_type(&input).await,
                };
                match result {
                    Ok(()) => {
                        form.set(OffenseForm::default());
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

    let filtered: Vec<OffenseType> = {
        let needle = filter().to_lowercase();
        list()
            .into_iter()
            .filter(|o| o.name.to_lowercase().contains(&needle))
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Offense Types" }
        }

        div { class: "card",
            h3 { if editing_id().is_some() { "Edit Offense Type" } else { "Create Offense Type" } }
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
                    label { "Point Value" }
                    input {
                        r#type: "number",
                        min: "0",
                        required: true,
                        value: "{form().point_value}",
                        oninput: move |evt| form.write().point_value = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Suggested Punishments (comma separated)" }
                    input {
                        value: "{form().suggested_punishments}",
                        oninput: move |evt| form.write().suggested_punishments = evt.value(),
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
                            form.set(OffenseForm::default());
                        },
                        "Cancel"
                    }
                }
            }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Filter offense types...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Points" }
                        th { "Suggested Punishments" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for offense in filtered {
                        tr { key: "{offense.id}",
                            td { "{offense.name}" }
                            td { "{offense.point_value}" }
                            td { {offense.suggested_punishments.join(", ")} }
                            td {
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let offense = offense.clone();
                                        move |_| {
                                            editing_id.set(Some(offense.id.clone()));
                                            form.set(OffenseForm::from_entity(&offense));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let load = load.clone();
                                        let id = offense.id.clone();
                                        move |_| {
                                            let load = load.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match session.client().delete_offense_type(&id).await {
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
