//! Default orchestrator: one chat completion per task, strictly in order.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::crew::agents::AgentTool;
use crate::crew::prompts::{build_task_prompt, PriorOutput};
use crate::crew::tasks::{job_search_query, TaskDescriptor};
use crate::crew::{AdviceInputs, CrewError, Orchestrator, TaskOutput, TaskResult};
use crate::llm_client::LlmClient;
use crate::search::{format_hits, SearchClient};

/// Runs task 1, then 2, … then the last. Each agent sees the resume, the
/// user's inputs and every earlier task's output. A failed task aborts the run.
pub struct SequentialCrew {
    llm: LlmClient,
    /// `None` when no search key is configured.
    search: Option<SearchClient>,
}

impl SequentialCrew {
    pub fn new(llm: LlmClient, search: Option<SearchClient>) -> Self {
        Self { llm, search }
    }

    /// Runs the search tool for an agent that carries it. Search failures
    /// degrade to a prompt without results rather than failing the task.
    async fn tool_context(&self, task: &TaskDescriptor, inputs: &AdviceInputs) -> Option<String> {
        if !task.agent.has_tool(AgentTool::WebSearch) {
            return None;
        }
        let Some(search) = &self.search else {
            warn!("{} has no search credentials; running without web results", task.agent.name);
            return None;
        };

        let query = job_search_query(&inputs.professional_field, &inputs.country);
        match search.search(&query).await {
            Ok(hits) => {
                info!("{} found {} search hits for '{}'", task.agent.name, hits.len(), query);
                Some(format_hits(&hits))
            }
            Err(e) => {
                warn!("Search for '{}' failed: {e}", query);
                None
            }
        }
    }
}

#[async_trait]
impl Orchestrator for SequentialCrew {
    async fn kickoff(
        &self,
        tasks: &[TaskDescriptor],
        inputs: &AdviceInputs,
    ) -> Result<Vec<TaskResult>, CrewError> {
        let mut outputs: Vec<(&'static str, String)> = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let agent = task.agent;
            info!("Task {}/{} started by {}", index + 1, tasks.len(), agent.name);

            let tool_context = self.tool_context(task, inputs).await;
            let prompt = {
                let prior: Vec<PriorOutput<'_>> = outputs
                    .iter()
                    .map(|(agent, text)| PriorOutput { agent, text })
                    .collect();
                build_task_prompt(task, inputs, &prior, tool_context.as_deref())
            };

            let text = self
                .llm
                .complete(agent.model, &agent.system_prompt(), &prompt)
                .await
                .map_err(|source| CrewError::Task {
                    index: index + 1,
                    agent: agent.name,
                    source,
                })?;

            info!(
                "Task {}/{} completed by {} ({} chars)",
                index + 1,
                tasks.len(),
                agent.name,
                text.len()
            );
            outputs.push((agent.name, text));
        }

        Ok(outputs
            .into_iter()
            .map(|(agent, raw)| {
                TaskResult::Output(TaskOutput {
                    raw: Some(raw),
                    content: None,
                    agent: Some(agent.to_string()),
                })
            })
            .collect())
    }
}
