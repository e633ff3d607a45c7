use std::collections::HashMap;

use api::aggregate::group_cases_by_student;
use api::models::{Case, Student, StudentInput, StudentStatus};
use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, NoticeKind, SequenceGuard};

use crate::Route;

#[component]
pub fn Students() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notices();
    let mut students = use_signal(Vec::<Student>::new);
    let mut cases = use_signal(Vec::<Case>::new);
    let mut filter = use_signal(String::new);
    let mut form = use_signal(StudentInput::default);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let seq = use_hook(SequenceGuard::new);

    let is_admin = session.user().map(|u| u.role.is_admin()).unwrap_or(false);

    let load = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            async move {
                let ticket = seq.begin();
                let client = session.client();
                let fetched = async {
                    let students = client.list_students().await?;
                    let cases = client.list_cases().await?;
                    Ok::<_, api::ApiError>((students, cases))
                }
                .await;
                match fetched {
                    Ok((s, c)) if seq.is_current(ticket) => {
                        students.set(s.data);
                        cases.set(c.data);
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
                if !is_admin {
                    return;
                }
                let input = form();
                let result = match editing_id() {
                    Some(id) => session.client().update_student(&id, &input).await,
                    None => session.client().create_student(&input).await,
                };
                match result {
                    Ok(()) => {
                        form.set(StudentInput::default());
                        editing_id.set(None);
                        load().await;
                    }
                    Err(err) => push_notice(&mut notices, NoticeKind::Error, err.to_string()),
                }
            }
        }
    };

    // Per-student rollup for the Cases and Points columns
    let rollup: HashMap<String, (usize, u32)> = {
        let cases = cases();
        let students = students();
        group_cases_by_student(&cases, &students)
            .into_iter()
            .map(|g| (g.student_id, (g.total_cases, g.total_points)))
            .collect()
    };

    let filtered: Vec<Student> = {
        let needle = filter().to_lowercase();
        students()
            .into_iter()
            .filter(|s| {
                format!("{} {} {} {}", s.first_name, s.last_name, s.student_id, s.class_name)
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    };

    rsx! {
        div { class: "toolbar",
            h1 { "Students" }
            div { class: if is_admin { "pill admin" } else { "pill" },
                if is_admin { "Admin can add/remove" } else { "Read only for committee" }
            }
        }

        if is_admin {
            div { class: "card",
                h3 { if editing_id().is_some() { "Edit Student" } else { "Add Student" } }
                form { onsubmit: submit,
                    div { class: "field",
                        label { "First Name" }
                        input {
                            value: "{form().first_name}",
                            required: true,
                            oninput: move |evt| form.write().first_name = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { "Last Name" }
                        input {
                            value: "{form().last_name}",
                            required: true,
                            oninput: move |evt| form.write().last_name = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { "Student ID" }
                        input {
                            value: "{form().student_id}",
                            required: true,
                            oninput: move |evt| form.write().student_id = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { "Class" }
                        input {
                            value: "{form().class_name}",
                            required: true,
                            oninput: move |evt| form.write().class_name = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { "Status" }
                        select {
                            value: "{form().status.as_str()}",
                            onchange: move |evt| {
                                form.write().status = if evt.value() == "Boarder" {
                                    StudentStatus::Boarder
                                } else {
                                    StudentStatus::Day
                                };
                            },
                            option { value: "Day", "Day" }
                            option { value: "Boarder", "Boarder" }
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
                                form.set(StudentInput::default());
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }

        div { class: "card",
            div { class: "table-filter",
                input {
                    placeholder: "Search students...",
                    value: "{filter}",
                    oninput: move |evt| filter.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "ID" }
                        th { "Class" }
                        th { "Status" }
                        th { "Cases" }
                        th { "Points" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for student in filtered {
                        StudentRow {
                            student: student.clone(),
                            case_totals: rollup.get(&student.id).copied().unwrap_or((0, 0)),
                            is_admin,
                            on_view: move |id: String| {
                                nav.push(Route::StudentProfile { id });
                            },
                            on_edit: move |student: Student| {
                                editing_id.set(Some(student.id.clone()));
                                form.set(StudentInput {
                                    first_name: student.first_name,
                                    last_name: student.last_name,
                                    student_id: student.student_id,
                                    class_name: student.class_name,
                                    status: student.status,
                                });
                            },
                            on_delete: {
                                let load = load.clone();
                                move |id: String| {
                                    let load = load.clone();
                                    spawn(async move {
                                        match session.client().delete_student(&id).await {
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

#[component]
fn StudentRow(
    student: Student,
    case_totals: (usize, u32),
    is_admin: bool,
    on_view: EventHandler<String>,
    on_edit: EventHandler<Student>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = student.id.clone();
    let edit_target = student.clone();
    let delete_id = student.id.clone();
    let (case_count, points) = case_totals;
    rsx! {
        tr {
            td { {student.full_name()} }
            td { "{student.student_id}" }
            td { "{student.class_name}" }
            td {
                span { class: "pill", "{student.status.as_str()}" }
            }
            td { "{case_count}" }
            td { "{points}" }
            td {
                button {
                    class: "secondary",
                    onclick: move |_| on_view.call(id.clone()),
                    "View"
                }
                if is_admin {
                    button {
                        class: "secondary",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
