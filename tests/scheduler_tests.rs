use chrono::{DateTime, TimeZone, Utc};
use project_scheduler::config::{EmptyAssigneePolicy, SchedulerConfig, UndatedPolicy};
use project_scheduler::scheduler::{schedule, Assignee, Project, Scheduler};
use project_scheduler::SchedulerError;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 23, 59, 0).unwrap()
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(1, "Project Alpha", 5).with_deadline(at(2022, 12, 31)),
        Project::new(2, "Project Beta", 2).with_deadline(at(2022, 11, 30)),
        Project::new(3, "Project Gamma", 3).with_deadline(at(2022, 12, 15)),
        Project::new(4, "Project Delta", 1).with_deadline(at(2022, 12, 10)),
        Project::new(5, "Project Epsilon", 4).with_deadline(at(2022, 12, 20)),
    ]
}

fn sample_assignees() -> Vec<Assignee> {
    vec![
        Assignee::new(1, "Alice"),
        Assignee::new(2, "Bob"),
        Assignee::new(3, "Charlie"),
    ]
}

#[test]
fn test_no_projects() {
    let assignments = schedule(&[], &sample_assignees()).unwrap();
    assert!(assignments.is_empty());
}

#[test]
fn test_no_projects_and_no_assignees() {
    let assignments = schedule(&[], &[]).unwrap();
    assert!(assignments.is_empty());
}

#[test]
fn test_no_assignees() {
    let err = schedule(&sample_projects(), &[]).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidInput(_)));
}

#[test]
fn test_no_assignees_left_unassigned_when_configured() {
    let config = SchedulerConfig::new().with_empty_assignees(EmptyAssigneePolicy::LeaveUnassigned);
    let plan = Scheduler::new(config).plan(&sample_projects(), &[]).unwrap();

    assert!(plan.assignments.is_empty());
    assert!(plan.workloads.is_empty());
    let priorities: Vec<i64> = plan.unassigned.iter().map(|p| p.priority).collect();
    assert_eq!(priorities, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_single_project_single_assignee() {
    let projects = vec![Project::new(1, "Project Alpha", 5).with_deadline(at(2022, 12, 31))];
    let assignees = vec![Assignee::new(1, "Alice")];

    let assignments = schedule(&projects, &assignees).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].project.name, "Project Alpha");
    assert_eq!(assignments[0].assignee.name, "Alice");
}

#[test]
fn test_sample_scenario() {
    let assignments = schedule(&sample_projects(), &sample_assignees()).unwrap();

    let order: Vec<i64> = assignments.iter().map(|a| a.project.priority).collect();
    assert_eq!(order, vec![5, 4, 3, 2, 1]);

    let pairs: Vec<(&str, &str)> = assignments
        .iter()
        .map(|a| (a.assignee.name.as_str(), a.project.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Alice", "Project Alpha"),
            ("Bob", "Project Epsilon"),
            ("Charlie", "Project Gamma"),
            ("Alice", "Project Beta"),
            ("Bob", "Project Delta"),
        ]
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let projects = sample_projects();
    let assignees = sample_assignees();
    schedule(&projects, &assignees).unwrap();
    assert_eq!(projects, sample_projects());
    assert_eq!(assignees, sample_assignees());
}

#[test]
fn test_multiple_projects_same_priority_deadline() {
    let projects = vec![
        Project::new(1, "Project Alpha", 5).with_deadline(at(2022, 12, 31)),
        Project::new(2, "Project Beta", 5).with_deadline(at(2022, 12, 31)),
    ];

    let assignments = schedule(&projects, &sample_assignees()).unwrap();
    assert_eq!(assignments.len(), 2);
    // Equal keys keep input order
    assert_eq!(assignments[0].project.id, 1);
    assert_eq!(assignments[1].project.id, 2);
    assert_eq!(assignments[0].assignee.name, "Alice");
    assert_eq!(assignments[1].assignee.name, "Bob");
}

#[test]
fn test_more_projects_than_assignees() {
    let projects = vec![
        Project::new(1, "Project Alpha", 5).with_deadline(at(2022, 12, 31)),
        Project::new(2, "Project Beta", 4).with_deadline(at(2022, 12, 30)),
        Project::new(3, "Project Gamma", 3).with_deadline(at(2022, 12, 29)),
        Project::new(4, "Project Delta", 2).with_deadline(at(2022, 12, 28)),
    ];

    let assignments = schedule(&projects, &sample_assignees()).unwrap();
    let names: Vec<&str> = assignments.iter().map(|a| a.assignee.name.as_str()).collect();
    // Fourth project wraps around to the first assignee
    assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Alice"]);
}

#[test]
fn test_more_assignees_than_projects() {
    let mut assignees = sample_assignees();
    assignees.push(Assignee::new(4, "David"));

    let assignments = schedule(&sample_projects(), &assignees).unwrap();
    assert_eq!(assignments.len(), 5);
    for name in ["Alice", "Bob", "Charlie", "David"] {
        assert!(assignments.iter().any(|a| a.assignee.name == name));
    }
}

#[test]
fn test_one_project_many_assignees() {
    let projects = vec![Project::new(1, "Project Alpha", 5)];
    let assignees = vec![
        Assignee::new(1, "Alice"),
        Assignee::new(2, "Bob"),
        Assignee::new(3, "Charlie"),
        Assignee::new(4, "Diana"),
    ];

    let assignments = schedule(&projects, &assignees).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].assignee.name, "Alice");
}

#[test]
fn test_undated_projects_sort_after_dated() {
    let projects = vec![
        Project::new(1, "Undated", 3),
        Project::new(2, "Dated", 3).with_deadline(at(2022, 12, 1)),
    ];

    let assignments = schedule(&projects, &sample_assignees()).unwrap();
    assert_eq!(assignments[0].project.id, 2);
    assert_eq!(assignments[1].project.id, 1);

    let config = SchedulerConfig::new().with_undated(UndatedPolicy::First);
    let assignments = Scheduler::new(config)
        .schedule(&projects, &sample_assignees())
        .unwrap();
    assert_eq!(assignments[0].project.id, 1);
}

#[test]
fn test_schedule_is_deterministic() {
    let first = schedule(&sample_projects(), &sample_assignees()).unwrap();
    let second = schedule(&sample_projects(), &sample_assignees()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_assignment_serializes_to_json() {
    let assignments = schedule(&sample_projects()[..1], &sample_assignees()).unwrap();
    let json = serde_json::to_value(&assignments[0]).unwrap();
    assert_eq!(json["project"]["name"], "Project Alpha");
    assert_eq!(json["project"]["deadline"], "2022-12-31T23:59:00Z");
    assert_eq!(json["assignee"]["name"], "Alice");
}

#[test]
fn test_assignment_display_matches_console_format() {
    let assignments = schedule(&sample_projects(), &sample_assignees()).unwrap();
    let lines: Vec<String> = assignments.iter().map(|a| a.to_string()).collect();
    assert_eq!(
        lines[0],
        "Project Alpha (Priority: 5) Assigned To Alice - Deadline: 2022-12-31 23:59:00"
    );
    assert_eq!(
        lines[4],
        "Project Delta (Priority: 1) Assigned To Bob - Deadline: 2022-12-10 23:59:00"
    );
}
