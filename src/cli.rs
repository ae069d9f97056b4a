use clap::Parser;

use crate::service::FillRequest;

/// Fill Harvest timesheets for a range of ISO weeks
///
/// Splits WEEKLY_HOURS evenly over Monday to Friday and creates one time
/// entry per day for every week from START_WEEK to END_WEEK of the current
/// year. Credentials are read from ACCOUNT_ID and API_TOKEN (a .env file in
/// the working directory is loaded first).
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Arguments {
    /// hours to book per week
    pub weekly_hours: u32,

    /// exact name of an active project assignment
    pub project_name: String,

    /// exact name of an active task within the project
    pub task_name: String,

    /// first ISO week to fill
    pub start_week: u32,

    /// last ISO week to fill (inclusive)
    pub end_week: u32,
}

impl From<Arguments> for FillRequest {
    fn from(args: Arguments) -> Self {
        FillRequest {
            weekly_hours: args.weekly_hours,
            project_name: args.project_name,
            task_name: args.task_name,
            start_week: args.start_week,
            end_week: args.end_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_five_positionals() {
        let args = Arguments::try_parse_from([
            "harvest-week-filler",
            "40",
            "Website",
            "Design",
            "3",
            "5",
        ])
        .unwrap();
        let request = FillRequest::from(args);
        assert_eq!(request.weekly_hours, 40);
        assert_eq!(request.project_name, "Website");
        assert_eq!(request.task_name, "Design");
        assert_eq!(request.start_week, 3);
        assert_eq!(request.end_week, 5);
    }

    #[test]
    fn all_arguments_are_required() {
        let args = ["harvest-week-filler", "40", "Website", "Design", "3"];
        assert!(Arguments::try_parse_from(args).is_err());
    }

    #[test]
    fn hours_must_be_an_integer() {
        let args = ["harvest-week-filler", "eight", "Website", "Design", "1", "1"];
        assert!(Arguments::try_parse_from(args).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Arguments::command().debug_assert();
    }
}
