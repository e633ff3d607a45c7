//! Shared client state for the Discipline Tracker frontends: the session
//! context, per-screen fetch sequencing, notices, and small common widgets.

mod auth;
pub use auth::{use_session, SessionContext, SessionProvider};

mod storage;
pub use storage::{make_storage, PlatformStorage};

mod notices;
pub use notices::{push_notice, use_notices, Notice, NoticeKind, NoticeBoard};

mod seq;
pub use seq::SequenceGuard;

mod components;
pub use components::{AccessDeniedCard, RolePill, StatusPill};
