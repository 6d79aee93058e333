//! The advisor crew: six personas, six sequential tasks, and the seam at which
//! an orchestrator runs them.
//!
//! Flow: build_tasks → Orchestrator::kickoff → Vec<TaskResult> (one per task, in order).
//! `AppState` carries an `Arc<dyn Orchestrator>`; the default is `SequentialCrew`.

pub mod agents;
pub mod prompts;
pub mod sequential;
pub mod tasks;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

pub use sequential::SequentialCrew;
pub use tasks::TaskDescriptor;

#[derive(Debug, Error)]
pub enum CrewError {
    #[error("Task {index} ({agent}) failed: {source}")]
    Task {
        index: usize,
        agent: &'static str,
        #[source]
        source: LlmError,
    },
}

/// Values every task sees besides its own description.
#[derive(Debug, Clone)]
pub struct AdviceInputs {
    pub resume_text: String,
    pub professional_field: String,
    pub country: String,
    pub min_deadline: String,
}

/// Structured output of a single task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
}

/// What an orchestrator hands back per task. Orchestrators are not held to one
/// shape, so a bare string or any other JSON value is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskResult {
    Output(TaskOutput),
    Text(String),
    Other(serde_json::Value),
}

/// Runs the tasks strictly in order; later tasks see earlier outputs.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn kickoff(
        &self,
        tasks: &[TaskDescriptor],
        inputs: &AdviceInputs,
    ) -> Result<Vec<TaskResult>, CrewError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_result_shapes_deserialize() {
        let results: Vec<TaskResult> = serde_json::from_value(json!([
            {"raw": "from raw", "agent": "Resume Feedback Agent"},
            {"content": "from content"},
            "plain string",
            42
        ]))
        .unwrap();

        assert!(matches!(&results[0], TaskResult::Output(o) if o.raw.as_deref() == Some("from raw")));
        assert!(matches!(&results[1], TaskResult::Output(o) if o.content.as_deref() == Some("from content")));
        assert_eq!(results[2], TaskResult::Text("plain string".into()));
        assert_eq!(results[3], TaskResult::Other(json!(42)));
    }
}
