//! One advisor run: extract → build tasks → kickoff → render.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::crew::tasks::{build_tasks, min_deadline, or_default, DEFAULT_COUNTRY, DEFAULT_FIELD};
use crate::crew::{AdviceInputs, Orchestrator};
use crate::errors::AppError;
use crate::extract::{extract_resume_text, ResumeUpload};
use crate::render::{render_sections, Section};

pub const MISSING_RESUME_MESSAGE: &str = "Please upload your resume before running the advisor.";

/// Form fields of a single run, as submitted from the page.
#[derive(Debug, Default)]
pub struct AdviseRequest {
    pub upload: Option<ResumeUpload>,
    pub professional_field: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct AdviseResponse {
    pub run_id: Uuid,
    pub professional_field: String,
    pub country: String,
    pub min_deadline: String,
    pub sections: Vec<Section>,
}

/// Runs the full pipeline for one request. `today` anchors the deadline.
///
/// No upload → `Validation` and no crew run. Unreadable upload →
/// `UnprocessableEntity`. Orchestrator failure → `Llm`.
pub async fn run_advisor(
    orchestrator: &dyn Orchestrator,
    request: AdviseRequest,
    today: NaiveDate,
) -> Result<AdviseResponse, AppError> {
    let upload = request
        .upload
        .ok_or_else(|| AppError::Validation(MISSING_RESUME_MESSAGE.to_string()))?;

    let run_id = Uuid::new_v4();
    info!(%run_id, "Reading resume '{}'", upload.file_name);
    let resume_text = extract_resume_text(upload).await?;

    let inputs = AdviceInputs {
        resume_text,
        professional_field: or_default(&request.professional_field, DEFAULT_FIELD),
        country: or_default(&request.country, DEFAULT_COUNTRY),
        min_deadline: min_deadline(today),
    };
    let tasks = build_tasks(&inputs.professional_field, &inputs.country, &inputs.min_deadline);

    info!(
        %run_id,
        "Agents working: field='{}' country='{}' deadline='{}' resume_chars={}",
        inputs.professional_field,
        inputs.country,
        inputs.min_deadline,
        inputs.resume_text.chars().count()
    );
    let results = orchestrator.kickoff(&tasks, &inputs).await?;
    let sections = render_sections(&results);
    info!(%run_id, "Run finished with {} sections", sections.len());

    Ok(AdviseResponse {
        run_id,
        professional_field: inputs.professional_field,
        country: inputs.country,
        min_deadline: inputs.min_deadline,
        sections,
    })
}
