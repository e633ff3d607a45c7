mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod students;
pub use students::Students;

mod student_profile;
pub use student_profile::StudentProfile;

mod cases;
pub use cases::Cases;

mod offense_types;
pub use offense_types::OffenseTypes;

mod punishments;
pub use punishments::Punishments;

mod members;
pub use members::Members;

mod audit_logs;
pub use audit_logs::AuditLogs;

mod profile;
pub use profile::MyProfile;

/// Short display form of an ISO timestamp: the `YYYY-MM-DD HH:MM` prefix.
pub(crate) fn short_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
