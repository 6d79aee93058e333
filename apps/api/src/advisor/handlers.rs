use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use chrono::Local;

use crate::advisor::pipeline::{run_advisor, AdviseRequest, AdviseResponse};
use crate::errors::AppError;
use crate::extract::ResumeUpload;
use crate::state::AppState;

/// POST /api/v1/advise
/// Multipart fields: `resume` (file), `professional_field`, `country`.
pub async fn handle_advise(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AdviseResponse>, AppError> {
    let request = read_form(multipart).await?;
    let today = Local::now().date_naive();
    let response = run_advisor(state.orchestrator.as_ref(), request, today).await?;
    Ok(Json(response))
}

async fn read_form(mut multipart: Multipart) -> Result<AdviseRequest, AppError> {
    let mut request = AdviseRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(form_error)?;
                // browsers send an empty, unnamed part when no file was chosen
                if !file_name.is_empty() || !bytes.is_empty() {
                    request.upload = Some(ResumeUpload { file_name, bytes });
                }
            }
            Some("professional_field") => {
                request.professional_field = field.text().await.map_err(form_error)?;
            }
            Some("country") => {
                request.country = field.text().await.map_err(form_error)?;
            }
            _ => {}
        }
    }

    Ok(request)
}

fn form_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid form data: {}", e.body_text()))
}
