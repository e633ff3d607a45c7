//! Entity models, as the Mongo-backed API serves them (camelCase keys,
//! `_id` identifiers, referenced documents either populated or left as a
//! bare id string).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::Profile;

/// Residency status for a student.
///
/// `Day`/`Boarder` is the canonical vocabulary. The legacy `active`/`inactive`
/// pair still appears in older records and is migrated to `Day` on decode:
/// the legacy values tracked enrolment and carry no residency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StudentStatus {
    #[default]
    Day,
    Boarder,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Day => "Day",
            StudentStatus::Boarder => "Boarder",
        }
    }
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "Day" | "day" => Ok(StudentStatus::Day),
            "Boarder" | "boarder" => Ok(StudentStatus::Boarder),
            // legacy vocabulary, migrated on read
            "active" | "inactive" => Ok(StudentStatus::Day),
            other => Err(serde::de::Error::unknown_variant(other, &["Day", "Boarder"])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub status: StudentStatus,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update payload for a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub class_name: String,
    pub status: StudentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenseType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub point_value: u32,
    #[serde(default)]
    pub suggested_punishments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenseTypeInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub point_value: u32,
    pub suggested_punishments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Punishment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points_required: u32,
    #[serde(default)]
    pub duration_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PunishmentInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points_required: u32,
    pub duration_days: u32,
}

/// Anything carrying its own `_id`, for normalising [`Ref`]s to a key.
pub trait Identified {
    fn entity_id(&self) -> &str;
}

/// A referenced document: either populated by the server or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Embedded(T),
    Id(String),
}

impl<T> Ref<T> {
    pub fn embedded(&self) -> Option<&T> {
        match self {
            Ref::Embedded(value) => Some(value),
            Ref::Id(_) => None,
        }
    }
}

impl<T: Identified> Ref<T> {
    /// Normalised string key, `None` when no identifier is present.
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Ref::Embedded(value) => value.entity_id(),
            Ref::Id(id) => id.as_str(),
        };
        (!id.is_empty()).then_some(id)
    }
}

/// Student payload embedded in a case (a partial projection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudent {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl Identified for CaseStudent {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Offense-type payload embedded in a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOffense {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub point_value: u32,
}

impl Identified for CaseOffense {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Punishment payload embedded in a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePunishment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Identified for CasePunishment {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Minimal user projection on cases and audit-log entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
}

impl Identified for UserSummary {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle status of a case: pending → approved → resolved, with
/// admin-only reversals (unapprove, unresolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    #[default]
    Pending,
    Approved,
    Resolved,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::Approved => "approved",
            CaseStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(rename = "_id")]
    pub id: String,
    pub student: Ref<CaseStudent>,
    #[serde(default)]
    pub offense_type: Option<Ref<CaseOffense>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub suggested_punishment: Option<Ref<CasePunishment>>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub reporter: Option<Ref<UserSummary>>,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Case {
    /// Points this case contributes; a missing or unpopulated offense type
    /// contributes 0.
    pub fn point_value(&self) -> u32 {
        self.offense_type
            .as_ref()
            .and_then(|offense| offense.embedded())
            .map(|offense| offense.point_value)
            .unwrap_or(0)
    }

    pub fn offense_name(&self) -> Option<&str> {
        self.offense_type
            .as_ref()
            .and_then(|offense| offense.embedded())
            .map(|offense| offense.name.as_str())
    }

    pub fn reporter_id(&self) -> Option<&str> {
        self.reporter.as_ref().and_then(|reporter| reporter.id())
    }

    pub fn reporter_name(&self) -> Option<&str> {
        self.reporter
            .as_ref()
            .and_then(|reporter| reporter.embedded())
            .map(|reporter| reporter.full_name.as_str())
    }

    pub fn student_name(&self) -> Option<String> {
        let student = self.student.embedded()?;
        let name = format!("{} {}", student.first_name, student.last_name);
        let name = name.trim().to_string();
        (!name.is_empty()).then_some(name)
    }

    /// Admins edit anything; reporters may edit their own cases while still
    /// pending.
    pub fn editable_by(&self, user: &Profile) -> bool {
        user.role.is_admin()
            || (self.reporter_id() == Some(user.id.as_str()) && self.status == CaseStatus::Pending)
    }

    /// Admins resolve anything; reporters resolve their own cases.
    pub fn resolvable_by(&self, user: &Profile) -> bool {
        user.role.is_admin() || self.reporter_id() == Some(user.id.as_str())
    }
}

/// Report/update payload for a case; references are sent as bare ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInput {
    pub student: String,
    pub offense_type: String,
    pub description: String,
    pub event_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_punishment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Suspended => "suspended",
        }
    }
}

/// Login-account projection nested on a member record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberUser {
    #[serde(default)]
    pub role: Option<store::Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub user: Option<MemberUser>,
    #[serde(default)]
    pub status: MemberStatus,
}

impl Member {
    pub fn role(&self) -> store::Role {
        self.user
            .as_ref()
            .and_then(|user| user.role)
            .unwrap_or(store::Role::Committee)
    }
}

/// Create/update payload for a member; an empty password on update keeps
/// the existing one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInput {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: store::Role,
    pub status: MemberStatus,
}

impl Default for MemberInput {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: None,
            role: store::Role::Committee,
            status: MemberStatus::Active,
        }
    }
}

/// Append-only, server-owned audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub user: Option<Ref<UserSummary>>,
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub target_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn profile(id: &str, role: Role) -> Profile {
        Profile {
            id: id.into(),
            full_name: "Test User".into(),
            email: "t@school.test".into(),
            role,
        }
    }

    #[test]
    fn student_status_accepts_legacy_vocabulary() {
        let day: StudentStatus = serde_json::from_str(r#""Day""#).unwrap();
        assert_eq!(day, StudentStatus::Day);
        let boarder: StudentStatus = serde_json::from_str(r#""Boarder""#).unwrap();
        assert_eq!(boarder, StudentStatus::Boarder);

        // legacy records migrate to Day
        let legacy: StudentStatus = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(legacy, StudentStatus::Day);
        let legacy: StudentStatus = serde_json::from_str(r#""inactive""#).unwrap();
        assert_eq!(legacy, StudentStatus::Day);

        assert!(serde_json::from_str::<StudentStatus>(r#""weekly""#).is_err());
        // writes always use the canonical vocabulary
        assert_eq!(serde_json::to_string(&StudentStatus::Day).unwrap(), r#""Day""#);
    }

    #[test]
    fn case_ref_decodes_embedded_and_bare_id() {
        let raw = r#"{
            "_id": "c1",
            "student": { "_id": "s1", "firstName": "Ama", "lastName": "Mensah" },
            "offenseType": { "_id": "o1", "name": "Lateness", "pointValue": 5 },
            "status": "pending",
            "createdAt": "2024-03-01T08:30:00Z"
        }"#;
        let case: Case = serde_json::from_str(raw).unwrap();
        assert_eq!(case.student.id(), Some("s1"));
        assert_eq!(case.student_name().as_deref(), Some("Ama Mensah"));
        assert_eq!(case.point_value(), 5);
        assert_eq!(case.status, CaseStatus::Pending);

        let raw = r#"{
            "_id": "c2",
            "student": "s2",
            "status": "approved",
            "createdAt": "2024-03-02T08:30:00Z"
        }"#;
        let case: Case = serde_json::from_str(raw).unwrap();
        assert_eq!(case.student.id(), Some("s2"));
        assert!(case.student.embedded().is_none());
        // bare reference means no offense details: contributes 0 points
        assert_eq!(case.point_value(), 0);
    }

    #[test]
    fn case_capabilities_are_role_and_reporter_gated() {
        let raw = r#"{
            "_id": "c1",
            "student": "s1",
            "reporter": { "_id": "u2", "fullName": "Kojo" },
            "status": "pending",
            "createdAt": "2024-03-01T08:30:00Z"
        }"#;
        let mut case: Case = serde_json::from_str(raw).unwrap();

        let admin = profile("u9", Role::Admin);
        let reporter = profile("u2", Role::Committee);
        let other = profile("u3", Role::Committee);

        assert!(case.editable_by(&admin));
        assert!(case.editable_by(&reporter));
        assert!(!case.editable_by(&other));

        // once approved, only admins may still edit
        case.status = CaseStatus::Approved;
        assert!(case.editable_by(&admin));
        assert!(!case.editable_by(&reporter));
        // but the reporter may still resolve their own case
        assert!(case.resolvable_by(&reporter));
        assert!(!case.resolvable_by(&other));
    }

    #[test]
    fn member_role_defaults_to_committee() {
        let raw = r#"{"_id": "m1", "fullName": "Akua", "email": "a@school.test"}"#;
        let member: Member = serde_json::from_str(raw).unwrap();
        assert_eq!(member.role(), Role::Committee);
        assert_eq!(member.status, MemberStatus::Active);

        let raw = r#"{"_id": "m2", "fullName": "Yaw", "email": "y@school.test",
                      "user": {"role": "admin"}, "status": "suspended"}"#;
        let member: Member = serde_json::from_str(raw).unwrap();
        assert_eq!(member.role(), Role::Admin);
        assert_eq!(member.status, MemberStatus::Suspended);
    }

    #[test]
    fn case_input_omits_empty_optionals() {
        let input = CaseInput {
            student: "s1".into(),
            offense_type: "o1".into(),
            description: "Late to assembly".into(),
            event_date: "2024-03-01".into(),
            location: None,
            suggested_punishment: None,
        };
        let raw = serde_json::to_string(&input).unwrap();
        assert!(raw.contains(r#""offenseType":"o1""#));
        assert!(!raw.contains("location"));
        assert!(!raw.contains("suggestedPunishment"));
    }
}
