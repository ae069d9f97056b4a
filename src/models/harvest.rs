use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// Response structs for the Harvest v2 API. Only the fields the filler uses
// are modelled; serde ignores the rest.

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectAssignmentsResponse {
    pub project_assignments: Vec<ProjectAssignment>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_entries: Option<u32>,
}

impl fmt::Display for ProjectAssignmentsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project assignments:")?;
        for assignment in &self.project_assignments {
            writeln!(
                f,
                "  [{}] {} ({})",
                if assignment.is_active { "x" } else { " " },
                assignment.project.name,
                assignment.project.id
            )?;
            for task in &assignment.task_assignments {
                writeln!(
                    f,
                    "      [{}] {} ({})",
                    if task.is_active { "x" } else { " " },
                    task.task.name,
                    task.task.id
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectAssignment {
    pub is_active: bool,
    pub project: ProjectRef,
    #[serde(default)]
    pub task_assignments: Vec<TaskAssignment>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectRef {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TaskAssignment {
    pub is_active: bool,
    pub task: TaskRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TaskRef {
    pub id: u64,
    pub name: String,
}

/// Form body for `POST time_entries`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeEntryRequest {
    pub user_id: u64,
    pub project_id: u64,
    pub task_id: u64,
    pub spent_date: NaiveDate,
    pub hours: f64,
}

/// The entry Harvest echoes back after creating it.
#[derive(Deserialize, Debug, Clone)]
pub struct TimeEntry {
    pub id: u64,
    pub spent_date: NaiveDate,
    pub hours: f64,
}
