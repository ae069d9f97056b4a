//! Looking up the current user and turning project/task names into ids.

use tracing::{debug, info, warn};

use crate::error::{ResolutionNotFound, Result};
use crate::helpers::harvest::HarvestApi;
use crate::models::harvest::{ProjectAssignment, ProjectAssignmentsResponse, TaskAssignment, User};

/// The ids a time entry is booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub user_id: u64,
    pub project_id: u64,
    pub task_id: u64,
}

pub async fn get_user_id(api: &HarvestApi) -> Result<u64> {
    let user: User = api.get("users/me.json").await?;
    info!("Authenticated as user {}", user.id);
    Ok(user.id)
}

/// The first page of the current user's project assignments.
pub async fn get_project_assignments(api: &HarvestApi) -> Result<Vec<ProjectAssignment>> {
    let response: ProjectAssignmentsResponse = api.get("users/me/project_assignments").await?;
    if response.total_pages.is_some_and(|pages| pages > 1) {
        warn!(
            "Only the first page of {:?} project assignments was read",
            response.total_entries
        );
    }
    debug!("{}", response);
    Ok(response.project_assignments)
}

pub fn find_project<'a>(
    assignments: &'a [ProjectAssignment],
    name: &str,
) -> Option<&'a ProjectAssignment> {
    assignments
        .iter()
        .find(|p| p.is_active && p.project.name == name)
}

pub fn find_task<'a>(project: &'a ProjectAssignment, name: &str) -> Option<&'a TaskAssignment> {
    project
        .task_assignments
        .iter()
        .find(|t| t.is_active && t.task.name == name)
}

pub fn active_project_names(assignments: &[ProjectAssignment]) -> Vec<String> {
    assignments
        .iter()
        .filter(|p| p.is_active)
        .map(|p| p.project.name.clone())
        .collect()
}

pub fn active_task_names(project: &ProjectAssignment) -> Vec<String> {
    project
        .task_assignments
        .iter()
        .filter(|t| t.is_active)
        .map(|t| t.task.name.clone())
        .collect()
}

/// Resolve `project_name` and then `task_name` within it.
pub fn resolve_target(
    user_id: u64,
    assignments: &[ProjectAssignment],
    project_name: &str,
    task_name: &str,
) -> std::result::Result<Target, ResolutionNotFound> {
    let project =
        find_project(assignments, project_name).ok_or_else(|| ResolutionNotFound::Project {
            name: project_name.to_string(),
            available: active_project_names(assignments),
        })?;

    let task = find_task(project, task_name).ok_or_else(|| ResolutionNotFound::Task {
        project: project_name.to_string(),
        name: task_name.to_string(),
        available: active_task_names(project),
    })?;

    Ok(Target {
        user_id,
        project_id: project.project.id,
        task_id: task.task.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::harvest::{ProjectRef, TaskRef};

    fn task(id: u64, name: &str, is_active: bool) -> TaskAssignment {
        TaskAssignment {
            is_active,
            task: TaskRef {
                id,
                name: name.to_string(),
            },
        }
    }

    fn project(
        id: u64,
        name: &str,
        is_active: bool,
        tasks: Vec<TaskAssignment>,
    ) -> ProjectAssignment {
        ProjectAssignment {
            is_active,
            project: ProjectRef {
                id,
                name: name.to_string(),
            },
            task_assignments: tasks,
        }
    }

    fn assignments() -> Vec<ProjectAssignment> {
        vec![
            project(1, "Website", false, vec![task(10, "Design", true)]),
            project(
                2,
                "Website",
                true,
                vec![
                    task(20, "Design", false),
                    task(21, "Design", true),
                    task(22, "Development", true),
                ],
            ),
            project(3, "Internal", true, vec![task(30, "Meetings", true)]),
        ]
    }

    #[test]
    fn inactive_project_with_matching_name_is_skipped() {
        let assignments = assignments();
        let found = find_project(&assignments, "Website").unwrap();
        assert_eq!(found.project.id, 2);
    }

    #[test]
    fn only_inactive_match_resolves_to_none() {
        let assignments = vec![project(1, "Archive", false, vec![])];
        assert!(find_project(&assignments, "Archive").is_none());
    }

    #[test]
    fn project_names_are_case_sensitive() {
        let assignments = assignments();
        assert!(find_project(&assignments, "website").is_none());
        assert!(find_project(&assignments, "Website ").is_none());
    }

    #[test]
    fn task_lookup_is_active_only() {
        let assignments = assignments();
        let website = find_project(&assignments, "Website").unwrap();
        assert_eq!(find_task(website, "Design").unwrap().task.id, 21);
        assert!(find_task(website, "Meetings").is_none());
    }

    #[test]
    fn resolves_full_target() {
        let target = resolve_target(7, &assignments(), "Website", "Development").unwrap();
        assert_eq!(
            target,
            Target {
                user_id: 7,
                project_id: 2,
                task_id: 22
            }
        );
    }

    #[test]
    fn missing_project_lists_active_projects() {
        let err = resolve_target(7, &assignments(), "Nope", "Design").unwrap_err();
        assert_eq!(
            err,
            ResolutionNotFound::Project {
                name: "Nope".into(),
                available: vec!["Website".into(), "Internal".into()],
            }
        );
    }

    #[test]
    fn missing_task_lists_active_tasks() {
        let err = resolve_target(7, &assignments(), "Website", "Testing").unwrap_err();
        assert_eq!(
            err,
            ResolutionNotFound::Task {
                project: "Website".into(),
                name: "Testing".into(),
                available: vec!["Design".into(), "Development".into()],
            }
        );
    }
}
