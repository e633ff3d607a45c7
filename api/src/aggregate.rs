//! Pure transforms from raw API collections into view-ready groupings.
//! Nothing here touches the network or mutates its inputs.

use std::collections::HashMap;

use crate::models::{Case, CaseStatus, CaseStudent, Student};

/// Per-student rollup of a case collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCaseGroup {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub class_name: Option<String>,
    pub total_cases: usize,
    pub pending_cases: usize,
    pub total_points: u32,
    pub latest_case: Case,
}

impl StudentCaseGroup {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Group cases by resolved student id, accumulating counts and point totals.
///
/// The student roster resolves display details; a case whose student is only
/// a bare reference still groups (falling back to the embedded payload, then
/// to an "Unknown Student" placeholder). Cases carrying no student id at all
/// are skipped rather than invented a key for. Output order follows first
/// appearance in the input; callers wanting a name order must sort.
pub fn group_cases_by_student(cases: &[Case], students: &[Student]) -> Vec<StudentCaseGroup> {
    let roster: HashMap<&str, &Student> = students
        .iter()
        .map(|student| (student.id.as_str(), student))
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, StudentCaseGroup> = HashMap::new();

    for case in cases {
        let Some(student_id) = case.student.id() else {
            continue;
        };

        let entry = groups.entry(student_id.to_string()).or_insert_with(|| {
            order.push(student_id.to_string());
            let embedded = case.student.embedded();
            let (first_name, last_name, class_name) = match roster.get(student_id) {
                Some(student) => (
                    student.first_name.clone(),
                    student.last_name.clone(),
                    (!student.class_name.is_empty()).then(|| student.class_name.clone()),
                ),
                None => match embedded {
                    Some(CaseStudent {
                        first_name,
                        last_name,
                        class_name,
                        ..
                    }) if !first_name.is_empty() || !last_name.is_empty() => {
                        (first_name.clone(), last_name.clone(), class_name.clone())
                    }
                    _ => ("Unknown".to_string(), "Student".to_string(), None),
                },
            };
            StudentCaseGroup {
                student_id: student_id.to_string(),
                first_name,
                last_name,
                class_name,
                total_cases: 0,
                pending_cases: 0,
                total_points: 0,
                latest_case: case.clone(),
            }
        });

        entry.total_cases += 1;
        if case.status == CaseStatus::Pending {
            entry.pending_cases += 1;
        }
        entry.total_points += case.point_value();
        // strictly-greater keeps the first-encountered case on timestamp ties
        if case.created_at > entry.latest_case.created_at {
            entry.latest_case = case.clone();
        }
    }

    order
        .into_iter()
        .filter_map(|id| groups.remove(&id))
        .collect()
}

/// Dashboard headline numbers over the full case collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_cases: usize,
    pub pending_count: usize,
    pub resolved_count: usize,
    pub recent_cases: Vec<Case>,
}

pub fn dashboard_stats(cases: &[Case], recent: usize) -> DashboardStats {
    DashboardStats {
        total_cases: cases.len(),
        pending_count: cases
            .iter()
            .filter(|case| case.status == CaseStatus::Pending)
            .count(),
        resolved_count: cases
            .iter()
            .filter(|case| case.status == CaseStatus::Resolved)
            .count(),
        recent_cases: recent_cases(cases, recent),
    }
}

/// The `n` newest cases by `createdAt`, descending. The sort is stable, so
/// equal timestamps keep their input order.
pub fn recent_cases(cases: &[Case], n: usize) -> Vec<Case> {
    let mut sorted: Vec<Case> = cases.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseOffense, Ref};
    use chrono::{TimeZone, Utc};

    fn case(id: &str, student: Ref<CaseStudent>, status: CaseStatus, points: u32, day: u32) -> Case {
        Case {
            id: id.to_string(),
            student,
            offense_type: Some(Ref::Embedded(CaseOffense {
                id: format!("o-{id}"),
                name: "Offense".to_string(),
                description: None,
                point_value: points,
            })),
            description: String::new(),
            event_date: None,
            location: None,
            suggested_punishment: None,
            status,
            reporter: None,
            is_resolved: status == CaseStatus::Resolved,
            resolution_notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
        }
    }

    fn student(id: &str, first: &str, last: &str) -> Student {
        Student {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            student_id: format!("S-{id}"),
            class_name: "2B".to_string(),
            status: Default::default(),
        }
    }

    #[test]
    fn groups_accumulate_counts_and_points() {
        let cases = vec![
            case("c1", Ref::Id("s1".into()), CaseStatus::Pending, 5, 1),
            case("c2", Ref::Id("s1".into()), CaseStatus::Approved, 3, 2),
        ];
        let students = vec![student("s1", "Ama", "Mensah")];

        let groups = group_cases_by_student(&cases, &students);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.total_cases, 2);
        assert_eq!(group.pending_cases, 1);
        assert_eq!(group.total_points, 8);
        assert_eq!(group.display_name(), "Ama Mensah");
        assert_eq!(group.latest_case.id, "c2");
    }

    #[test]
    fn group_cardinality_matches_distinct_students() {
        let cases = vec![
            case("c1", Ref::Id("s1".into()), CaseStatus::Pending, 1, 1),
            case("c2", Ref::Id("s2".into()), CaseStatus::Pending, 1, 1),
            case("c3", Ref::Id("s1".into()), CaseStatus::Pending, 1, 2),
            // no student id: skipped, never duplicated into another group
            case("c4", Ref::Id(String::new()), CaseStatus::Pending, 1, 2),
        ];
        let groups = group_cases_by_student(&cases, &[]);
        assert_eq!(groups.len(), 2);
        let total: usize = groups.iter().map(|g| g.total_cases).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn unresolved_student_details_fall_back_to_placeholder() {
        let embedded = Ref::Embedded(CaseStudent {
            id: "s9".to_string(),
            first_name: "Kojo".to_string(),
            last_name: "Asante".to_string(),
            student_id: None,
            class_name: None,
        });
        let cases = vec![
            case("c1", embedded, CaseStatus::Pending, 2, 1),
            case("c2", Ref::Id("s-missing".into()), CaseStatus::Pending, 2, 1),
        ];
        let groups = group_cases_by_student(&cases, &[]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].display_name(), "Kojo Asante");
        assert_eq!(groups[1].display_name(), "Unknown Student");
    }

    #[test]
    fn roster_wins_over_embedded_payload() {
        let embedded = Ref::Embedded(CaseStudent {
            id: "s1".to_string(),
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            student_id: None,
            class_name: None,
        });
        let students = vec![student("s1", "Ama", "Mensah")];
        let groups = group_cases_by_student(&[case("c1", embedded, CaseStatus::Pending, 0, 1)], &students);
        assert_eq!(groups[0].display_name(), "Ama Mensah");
        assert_eq!(groups[0].class_name.as_deref(), Some("2B"));
    }

    #[test]
    fn latest_case_tie_keeps_first_encountered() {
        let cases = vec![
            case("c1", Ref::Id("s1".into()), CaseStatus::Pending, 0, 5),
            case("c2", Ref::Id("s1".into()), CaseStatus::Pending, 0, 5),
        ];
        let groups = group_cases_by_student(&cases, &[]);
        assert_eq!(groups[0].latest_case.id, "c1");
    }

    #[test]
    fn inputs_are_not_mutated() {
        let cases = vec![case("c1", Ref::Id("s1".into()), CaseStatus::Pending, 4, 1)];
        let snapshot = cases.clone();
        let first = group_cases_by_student(&cases, &[]);
        let second = group_cases_by_student(&cases, &[]);
        assert_eq!(cases, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn recent_cases_returns_newest_first() {
        let cases: Vec<Case> = (1..=5)
            .map(|day| case(&format!("c{day}"), Ref::Id("s1".into()), CaseStatus::Pending, 0, day))
            .collect();
        let recent = recent_cases(&cases, 3);
        let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c5", "c4", "c3"]);

        let stats = dashboard_stats(&cases, 3);
        assert_eq!(stats.total_cases, 5);
        assert_eq!(stats.pending_count, 5);
        assert_eq!(stats.resolved_count, 0);
        assert_eq!(stats.recent_cases.len(), 3);
    }

    #[test]
    fn recent_cases_is_stable_on_equal_timestamps() {
        let cases = vec![
            case("c1", Ref::Id("s1".into()), CaseStatus::Pending, 0, 2),
            case("c2", Ref::Id("s1".into()), CaseStatus::Pending, 0, 2),
            case("c3", Ref::Id("s1".into()), CaseStatus::Pending, 0, 1),
        ];
        let recent = recent_cases(&cases, 2);
        let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2"]);
    }
}
