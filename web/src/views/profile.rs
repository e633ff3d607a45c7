use api::endpoints::ProfileUpdate;
use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn MyProfile() -> Element {
    let session = use_session();
    let mut full_name = use_signal(|| {
        session
            .user()
            .map(|u| u.full_name)
            .unwrap_or_default()
    });
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let update = ProfileUpdate {
                full_name: full_name(),
                password: {
                    let value = password();
                    (!value.is_empty()).then_some(value)
                },
            };
            match session.update_profile(&update).await {
                Ok(_) => {
                    password.set(String::new());
                    status.set(Some(Ok("Updated successfully".to_string())));
                }
                Err(err) => status.set(Some(Err(err.to_string()))),
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            h1 { "My Profile" }
        }

        div { class: "card narrow",
            form { onsubmit: submit,
                div { class: "field",
                    label { "Full Name" }
                    input {
                        required: true,
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "New Password (optional)" }
                    input {
                        r#type: "password",
                        placeholder: "Leave blank to keep current",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { r#type: "submit", "Save" }
                if let Some(Ok(message)) = status() {
                    p { class: "success", "{message}" }
                }
                if let Some(Err(message)) = status() {
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}
