use dioxus::prelude::*;

use ui::{NoticeBoard, SessionProvider};
use views::{
    AuditLogs, Cases, Dashboard, Login, Members, MyProfile, OffenseTypes, Punishments,
    StudentProfile, Students,
};

mod guard;
mod shell;
mod views;

use shell::AppShell;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
        #[route("/students")]
        Students {},
        #[route("/students/:id")]
        StudentProfile { id: String },
        #[route("/cases")]
        Cases {},
        #[route("/offense-types")]
        OffenseTypes {},
        #[route("/punishments")]
        Punishments {},
        #[route("/members")]
        Members {},
        #[route("/audit-logs")]
        AuditLogs {},
        #[route("/profile")]
        MyProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown paths land back on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            NoticeBoard {
                Router::<Route> {}
            }
        }
    }
}
