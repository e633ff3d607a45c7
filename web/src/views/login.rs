use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let snapshot = session.session();

    // Already signed in: go straight to the dashboard
    if !snapshot.initializing && snapshot.user.is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            error.set(None);
            match session.login(&email(), &password()).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
        }
    };

    rsx! {
        div { class: "login-wrapper",
            div { class: "card login-card",
                h1 { "Discipline Tracker" }
                p { class: "subtitle", "Sign in to the disciplinary committee portal" }
                form { onsubmit: submit,
                    div { class: "field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            required: true,
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Password" }
                        div { class: "password-row",
                            input {
                                r#type: if show_password() { "text" } else { "password" },
                                value: "{password}",
                                required: true,
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "secondary",
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: snapshot.loading,
                        if snapshot.loading { "Signing in…" } else { "Sign in" }
                    }
                    if let Some(message) = error() {
                        p { class: "error", "{message}" }
                    }
                }
            }
        }
    }
}
