use tracing::{debug, error, info};

use crate::{
    config::HarvestConfig,
    error::{ResolutionNotFound, Result},
    helpers::{harvest::HarvestApi, weeks},
    models::harvest::{TimeEntry, TimeEntryRequest},
    resolver::{self, Target},
};

/// What the user asked for on the command line.
#[derive(Debug, Clone)]
pub struct FillRequest {
    pub weekly_hours: u32,
    pub project_name: String,
    pub task_name: String,
    pub start_week: u32,
    pub end_week: u32,
}

/// How a run ended when no fatal error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Filled { entries: usize },
    NotFound(ResolutionNotFound),
}

/// Resolves a project/task and books hours against it week by week.
#[derive(Clone)]
pub struct FillerService {
    pub api: HarvestApi,
    pub year: i32,
}

impl FillerService {
    pub fn new(api: HarvestApi, year: i32) -> Self {
        info!("Creating new FillerService for year {}", year);
        Self { api, year }
    }

    pub fn from_config(config: &HarvestConfig) -> Result<Self> {
        Ok(Self::new(HarvestApi::new(config)?, config.year))
    }

    /// Resolve the names in `request` and fill its week range.
    ///
    /// An unknown project or task is not an error: it is logged together
    /// with the active alternatives and reported as [`RunOutcome::NotFound`].
    pub async fn run(&self, request: &FillRequest) -> Result<RunOutcome> {
        let user_id = resolver::get_user_id(&self.api).await?;
        let assignments = resolver::get_project_assignments(&self.api).await?;

        let target = match resolver::resolve_target(
            user_id,
            &assignments,
            &request.project_name,
            &request.task_name,
        ) {
            Ok(target) => target,
            Err(not_found) => {
                error!("{}", not_found);
                return Ok(RunOutcome::NotFound(not_found));
            }
        };

        let entries = self
            .fill_weeks(
                target,
                request.start_week,
                request.end_week,
                request.weekly_hours,
            )
            .await?;
        Ok(RunOutcome::Filled { entries })
    }

    /// Fill every week in `start_week..=end_week`, in order.
    ///
    /// Every week is checked against the year before the first entry is
    /// sent. Returns the number of entries created.
    pub async fn fill_weeks(
        &self,
        target: Target,
        start_week: u32,
        end_week: u32,
        weekly_hours: u32,
    ) -> Result<usize> {
        info!("filling weeks {} to {}", start_week, end_week);
        for week in start_week..=end_week {
            weeks::week_start(self.year, week)?;
        }

        let mut created = 0;
        for week in start_week..=end_week {
            created += self.fill_week(target, week, weekly_hours).await?.len();
        }
        Ok(created)
    }

    /// Book `weekly_hours` evenly over Monday to Friday of `week`.
    pub async fn fill_week(
        &self,
        target: Target,
        week: u32,
        weekly_hours: u32,
    ) -> Result<Vec<TimeEntry>> {
        info!("filling week {} with {} hours", week, weekly_hours);
        let hours = weeks::daily_hours(weekly_hours);

        let mut entries = Vec::with_capacity(weeks::WORKDAYS_PER_WEEK as usize);
        for spent_date in weeks::workdays(self.year, week)? {
            let body = TimeEntryRequest {
                user_id: target.user_id,
                project_id: target.project_id,
                task_id: target.task_id,
                spent_date,
                hours,
            };
            info!("sending {} hours for date {}", body.hours, body.spent_date);
            let entry: TimeEntry = self.api.post("time_entries", &body).await?;
            debug!("Created time entry {} on {}", entry.id, entry.spent_date);
            entries.push(entry);
        }
        Ok(entries)
    }
}
