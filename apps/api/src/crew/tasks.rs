//! The six task descriptors, built per run from the user's inputs.

use chrono::{Days, NaiveDate};

use super::agents::{AgentPersona, AGENTS};

/// Days from today before a listed job's deadline may fall.
const DEADLINE_LEAD_DAYS: u64 = 3;

pub const DEFAULT_FIELD: &str = "General";
pub const DEFAULT_COUNTRY: &str = "Any";

#[derive(Debug)]
pub struct TaskDescriptor {
    pub description: String,
    pub expected_output: &'static str,
    pub agent: &'static AgentPersona,
}

/// Earliest acceptable application deadline, e.g. 2024-01-01 → "04 January 2024".
pub fn min_deadline(today: NaiveDate) -> String {
    let deadline = today
        .checked_add_days(Days::new(DEADLINE_LEAD_DAYS))
        .unwrap_or(today);
    deadline.format("%d %B %Y").to_string()
}

/// Trims user input, substituting `default` when nothing is left.
pub fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Builds the six tasks in execution order, the n-th task going to the n-th
/// agent of [`AGENTS`].
pub fn build_tasks(
    professional_field: &str,
    country: &str,
    min_deadline: &str,
) -> Vec<TaskDescriptor> {
    let briefs: [(String, &'static str); 6] = [
        (
            "Evaluate the resume, rate it out of 10, and provide detailed feedback in markdown."
                .to_string(),
            "Score should be in a range of (0–10) and feedback in markdown format spotting key \
             issues for improvement by the resume advisor.",
        ),
        (
            "Rewrite the resume in markdown format based on the feedback aimed at improving the \
             candidate's suitability to open jobs. Ensure the original resume facts about the \
             owner employment records maintained (no adding unrealistic information) for \
             genuinity and trustworthy."
                .to_string(),
            "Improved resume in markdown format.",
        ),
        (
            format!(
                "Find the top 5 jobs in {country} matching {professional_field} with deadlines \
                 on or after {min_deadline}, and output in markdown."
            ),
            "Markdown list of up to 3 job postings with details.",
        ),
        (
            "Customize the improved resume for each of the 3 job postings.".to_string(),
            "Tailored resumes for each job in markdown format ensuring the original career \
             history records not changed, rather improved for suitability to the jobs.",
        ),
        (
            "Write tailored cover letters for each of the 3 job postings.".to_string(),
            "Cover letters for each job in markdown format bolding the suitability of the \
             candidacy to open jobs, well customized for a good fit.",
        ),
        (
            "Prepare interview questions and answers based on the tailored resumes and jobs in \
             markdown."
                .to_string(),
            "Interview preparation guiding questions and respective answers in markdown format \
             comprehensively detailed as possible.",
        ),
    ];

    briefs
        .into_iter()
        .zip(AGENTS)
        .map(|((description, expected_output), agent)| TaskDescriptor {
            description,
            expected_output,
            agent,
        })
        .collect()
}

/// Query the job researcher's search tool runs for a given field and country.
pub fn job_search_query(professional_field: &str, country: &str) -> String {
    format!("{professional_field} jobs in {country}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::agents::{JOB_RESEARCHER, RESUME_FEEDBACK};

    #[test]
    fn test_min_deadline_reference_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(min_deadline(today), "04 January 2024");
    }

    #[test]
    fn test_min_deadline_crosses_year_end() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        assert_eq!(min_deadline(today), "02 January 2024");
    }

    #[test]
    fn test_min_deadline_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(min_deadline(today), "01 March 2024");
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default("  Data Science ", DEFAULT_FIELD), "Data Science");
        assert_eq!(or_default("   ", DEFAULT_FIELD), "General");
        assert_eq!(or_default("", DEFAULT_COUNTRY), "Any");
    }

    #[test]
    fn test_tasks_follow_agent_order() {
        let tasks = build_tasks("Data Science", "Tanzania", "04 January 2024");
        assert_eq!(tasks.len(), 6);
        for (task, agent) in tasks.iter().zip(AGENTS.iter()) {
            assert_eq!(task.agent.name, agent.name);
        }
        assert_eq!(tasks[0].agent.name, RESUME_FEEDBACK.name);
        assert_eq!(tasks[2].agent.name, JOB_RESEARCHER.name);
        assert_eq!(tasks[1].expected_output, "Improved resume in markdown format.");
    }

    #[test]
    fn test_job_task_interpolates_inputs() {
        let tasks = build_tasks("Data Science", "Tanzania", "04 January 2024");
        assert_eq!(
            tasks[2].description,
            "Find the top 5 jobs in Tanzania matching Data Science with deadlines on or after \
             04 January 2024, and output in markdown."
        );
    }

    #[test]
    fn test_other_tasks_are_fixed() {
        let a = build_tasks("Nursing", "Kenya", "01 March 2024");
        let b = build_tasks("Law", "Chile", "09 May 2025");
        for i in [0, 1, 3, 4, 5] {
            assert_eq!(a[i].description, b[i].description);
        }
        assert!(!a[1].description.contains("  "));
    }

    #[test]
    fn test_job_search_query() {
        assert_eq!(job_search_query("Data Science", "Tanzania"), "Data Science jobs in Tanzania");
    }
}
