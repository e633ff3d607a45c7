use api::models::{Case, CaseInput, CaseStatus, OffenseType, Punishment, Student};
use dioxus::prelude::*;
use store::Profile;
use ui::{push_notice, use_notices, use_session, NoticeKind, SequenceGuard, StatusPill};

#[component]
pub fn Cases() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut cases = use_signal(Vec::<Case>::new);
    let mut students = use_signal(Vec::<Student>::new);
    let mut offenses = use_signal(Vec::<OffenseType>::new);
    let mut punishments = use_signal(Vec::<Punishment>::new);
    let mut form = use_signal(CaseInput::default);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);
    let seq = use_hook(SequenceGuard::new);

    let load = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            async move {
                let ticket = seq.begin();
                let client = session.client();
                let fetched = async {
                    let cases = client.list_cases().await?;
                    let students = client.list_students().await?;
                    let offenses = client.list_offense_types().await?;
                    let punishments = client.list_punishments().await?;
                    Ok::<_, api::ApiError>((cases, students, offenses, punishments))
                }
                .await;
                match fetched {
                    Ok((c, s, o, p)) if seq.is_current(ticket) => {
                        cases.set(c.data);
                        students.set(s.data);
                        offenses.set(o.data);
                        punishments.set(p.data);
                    }
                    Ok(_) => {}
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
                    Some(id) => session.client().update_case(&id, &input).await,
                    None => session.client().create_case(&input).await,
                };
                match result {
                    Ok(()) => {
                        editing_id.set(None);
                        form.set(CaseInput::default());
                        load().await;
                    }
                    Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
                }
            }
        }
    };

    let user = session.user();
    let filtered: Vec<Case> = {
        let needle = filter().to_lowercase();
        cases()
            .into_iter()
            .filter(|case| {
                format!(
                    "{} {} {} {}",
                    case.student_name().unwrap_or_default(),
                    case.offense_name().unwrap_or_default(),
                    case.status.as_str(),
                    case.reporter_name().unwrap_or_default(),
                )
                .to_lowercase()
                .contains(&needle)
            })
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Disciplinary Cases" }
        }

        div { class: "card",
            h3 { if editing_id().is_some() { "Edit Case" } else { "Report Case" } }
            form { onsubmit: submit,
                div { class: "field",
                    label { "Student" }
                    select {
                        required: true,
                        value: "{form().student}",
                        onchange: move |evt| form.write().student = evt.value(),
                        option { value: "", "Select student" }
                        for s in students() {
                            option { value: "{s.id}", key: "{s.id}",
                                "{s.first_name} {s.last_name} ({s.student_id})"
                            }
                        }
                    }
                }
                div { class: "field",
                    label { "Offense Type" }
                    select {
                        required: true,
                        value: "{form().offense_type}",
                        onchange: move |evt| form.write().offense_type = evt.value(),
                        option { value: "", "Select offense" }
                        for o in offenses() {
                            option { value: "{o.id}", key: "{o.id}",
                                "{o.name} (pts: {o.point_value})"
                            }
                        }
                    }
                }
                div { class: "field",
                    label { "Description" }
                    textarea {
                        required: true,
                        value: "{form().description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Event Date" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{form().event_date}",
                        oninput: move |evt| form.write().event_date = evt.value(),
                    }
                }
                div { class: "field",
                    label { "Location" }
                    input {
                        value: form().location.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let value = evt.value();
                            form.write().location = (!value.is_empty()).then_some(value);
                        },
                    }
                }
                div { class: "field",
                    label { "Suggested Punishment" }
                    select {
                        value: form().suggested_punishment.clone().unwrap_or_default(),
                        onchange: move |evt| {
                            let value = evt.value();
                            form.write().suggested_punishment = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", "Optional" }
                        for p in punishments() {
                            option { value: "{p.id}", key: "{p.id}",
                                "{p.name} (pts: {p.points_required})"
                            }
                        }
                    }
                }
                button { r#type: "submit",
                    if editing_id().is_some() { "Update" } else { "Submit" }
                }
                if editing_id().is_some() {
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| {
                            editing_id.set(None);
                            form.set(CaseInput::default());
                        },
                        "Cancel"
                    }
                }
            }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Filter by student, offense, status, reporter...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Student" }
                        th { "Offense" }
                        th { "Status" }
                        th { "Reporter" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for case in filtered {
                        CaseRow {
                            case: case.clone(),
                            user: user.clone(),
                            on_edit: move |case: Case| {
                                editing_id.set(Some(case.id.clone()));
                                form.set(CaseInput {
                                    student: case.student.id().unwrap_or_default().to_string(),
                                    offense_type: case
                                        .offense_type
                                        .as_ref()
                                        .and_then(|o| o.id())
                                        .unwrap_or_default()
                                        .to_string(),
                                    description: case.description.clone(),
                                    event_date: case
                                        .event_date
                                        .as_deref()
                                        .map(|d| d.chars().take(10).collect())
                                        .unwrap_or_default(),
                                    location: case.location.clone(),
                                    suggested_punishment: case
                                        .suggested_punishment
                                        .as_ref()
                                        .and_then(|p| p.id())
                                        .map(str::to_string),
                                });
                            },
                            on_mutate: {
                                let load = load.clone();
                                move |mutation: CaseMutation| {
                                    let load = load.clone();
                                    spawn(async move {
                                        let client = session.client();
                                        let result = match &mutation {
                                            CaseMutation::Approve(id) => client.approve_case(id).await,
                                            CaseMutation::Resolve(id) => {
                                                client.resolve_case(id, Some("Resolved")).await
                                            }
                                            CaseMutation::Delete(id) => client.delete_case(id).await,
                                        };
                                        match result {
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
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
enum CaseMutation {
    Approve(String),
    Resolve(String),
    Delete(String),
}

#[component]
fn CaseRow(
    case: Case,
    user: Option<Profile>,
    on_edit: EventHandler<Case>,
    on_mutate: EventHandler<CaseMutation>,
) -> Element {
    let Some(user) = user else {
        return rsx! {};
    };
    let can_edit = case.editable_by(&user);
    let can_resolve = case.resolvable_by(&user) && case.status != CaseStatus::Resolved;
    let can_approve = user.role.is_admin() && case.status == CaseStatus::Pending;
    let can_delete = user.role.is_admin();

    let edit_target = case.clone();
    let id = case.id.clone();
    let resolve_id = case.id.clone();
    let delete_id = case.id.clone();

    rsx! {
        tr {
            td { {case.student_name().unwrap_or_else(|| "Unknown Student".to_string())} }
            td { {case.offense_name().unwrap_or("—").to_string()} }
            td {
                StatusPill { status: case.status }
            }
            td { {case.reporter_name().unwrap_or("—").to_string()} }
            td {
                if can_edit {
                    button {
                        class: "secondary",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                }
                if can_approve {
                    button {
                        onclick: move |_| on_mutate.call(CaseMutation::Approve(id.clone())),
                        "Approve"
                    }
                }
                if can_resolve {
                    button {
                        onclick: move |_| on_mutate.call(CaseMutation::Resolve(resolve_id.clone())),
                        "Mark Resolved"
                    }
                }
                if can_delete {
                    button {
                        class: "danger",
                        onclick: move |_| on_mutate.call(CaseMutation::Delete(delete_id.clone())),
                        "Delete"
                    }
                }
            }
        }
    }
}
