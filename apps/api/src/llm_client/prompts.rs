// Shared prompt fragments used by every agent turn.
// Per-task wording lives with the task descriptors in crew::tasks.

/// Appended to every agent's system prompt.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
    Respond in GitHub-flavored markdown. \
    Do NOT wrap the whole answer in a code fence. \
    Do NOT escape newlines.";

/// Guard against invented employment history, shared by the resume-writing agents.
pub const FACTUALITY_INSTRUCTION: &str = "\
    Keep every fact about the candidate's employment, education and achievements \
    exactly as stated in the resume. Improve wording and emphasis only; \
    never add unrealistic or unverifiable information.";
