//! Output rendering — turns orchestrator results into headed markdown/HTML sections.
//!
//! No schema validation of model output and no sanitization: raw HTML in the
//! markdown is passed through to the page.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use tracing::warn;

use crate::crew::TaskResult;

/// Section headings, one per task, in pipeline order.
pub const SECTION_HEADINGS: [&str; 6] = [
    "Resume Feedback & Rating",
    "Improved Resume",
    "Top 5 Current Job Openings",
    "Tailored Resumes",
    "Sample Cover Letters",
    "Interview Preparation Guide",
];

const FENCE: &str = "```";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    pub markdown: String,
    pub html: String,
}

/// Text carried by a result: non-empty `raw`, then non-empty `content`, then a
/// bare string, else the value's JSON form.
pub fn result_text(result: &TaskResult) -> String {
    match result {
        TaskResult::Output(output) => output
            .raw
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| output.content.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| serde_json::to_string(output).unwrap_or_default()),
        TaskResult::Text(text) => text.clone(),
        TaskResult::Other(value) => value.to_string(),
    }
}

/// Unescapes literal `\n`/`\t` and strips an accidental code fence wrapping
/// the whole answer.
pub fn clean_output(text: &str) -> String {
    let cleaned = text.replace("\\n", "\n").replace("\\t", "\t");
    if cleaned.starts_with(FENCE) && cleaned.ends_with(FENCE) {
        cleaned.trim_matches('`').trim().to_string()
    } else {
        cleaned
    }
}

/// Markdown → HTML with tables, strikethrough and task lists enabled.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}

/// Pairs results with headings in order. Extra results are dropped; missing
/// ones simply yield fewer sections.
pub fn render_sections(results: &[TaskResult]) -> Vec<Section> {
    if results.len() != SECTION_HEADINGS.len() {
        warn!(
            "Expected {} task results, got {}",
            SECTION_HEADINGS.len(),
            results.len()
        );
    }

    SECTION_HEADINGS
        .iter()
        .copied()
        .zip(results)
        .map(|(heading, result)| {
            let markdown = clean_output(&result_text(result));
            Section {
                heading,
                html: markdown_to_html(&markdown),
                markdown,
            }
        })
        .collect()
}
