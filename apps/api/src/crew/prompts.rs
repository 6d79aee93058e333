// Prompt assembly for a single agent turn.
// Persona wording lives in agents.rs, task wording in tasks.rs.

use crate::crew::tasks::TaskDescriptor;
use crate::crew::AdviceInputs;
use crate::llm_client::prompts::FACTUALITY_INSTRUCTION;

/// An earlier task's output, passed forward as context.
pub struct PriorOutput<'a> {
    pub agent: &'a str,
    pub text: &'a str,
}

/// Builds the user prompt for one task.
/// `search_results` is only set for agents that ran the web-search tool.
pub fn build_task_prompt(
    task: &TaskDescriptor,
    inputs: &AdviceInputs,
    prior: &[PriorOutput<'_>],
    search_results: Option<&str>,
) -> String {
    let mut prompt = format!(
        "## Task\n{description}\n\n\
         ## Expected output\n{expected}\n\n\
         ## Ground rules\n{FACTUALITY_INSTRUCTION}\n\n\
         ## Inputs\n\
         - Professional field: {field}\n\
         - Country: {country}\n\
         - Earliest acceptable application deadline: {deadline}\n\n\
         ## Candidate resume\n{resume}\n",
        description = task.description,
        expected = task.expected_output,
        field = inputs.professional_field,
        country = inputs.country,
        deadline = inputs.min_deadline,
        resume = inputs.resume_text,
    );

    if let Some(results) = search_results {
        prompt.push_str("\n## Web search results\n");
        prompt.push_str(results);
        prompt.push('\n');
    }

    if !prior.is_empty() {
        prompt.push_str("\n## Context from earlier tasks\n");
        for output in prior {
            prompt.push_str(&format!("\n### {}\n{}\n", output.agent, output.text));
        }
    }

    prompt
}
