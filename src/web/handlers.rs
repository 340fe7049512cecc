//! Request handlers for the upload form and the analysis page

use crate::input::staging::StagingArea;
use crate::web::errors::AppError;
use crate::web::pages::{self, IndexPage, ResultsPage};
use crate::web::server::AppState;
use axum::extract::{Multipart, State};
use axum::response::Html;
use log::{info, warn};

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUMES_FIELD: &str = "resumes";

/// GET /
pub async fn index() -> Result<Html<String>, AppError> {
    Ok(pages::render(&IndexPage::new())?)
}

/// POST /analyze
///
/// Uploads live in a staging directory that is removed before the page is
/// rendered.
pub async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Result<Html<String>, AppError> {
    let staging = StagingArea::new()?;
    let mut job_description = String::new();
    let mut staged = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => job_description = field.text().await?,
            Some(RESUMES_FIELD) => {
                // browsers send an unnamed empty part when no file was picked
                let file_name = match field.file_name() {
                    Some(n) if !n.is_empty() => n.to_string(),
                    _ => continue,
                };
                let bytes = field.bytes().await?;
                staged.push(staging.stage(&file_name, &bytes).await?);
            }
            _ => {}
        }
    }

    if job_description.trim().is_empty() {
        return Err(AppError::BadRequest("Please paste a job description.".to_string()));
    }
    if staged.is_empty() {
        return Err(AppError::BadRequest(
            "Please upload at least one resume (PDF or DOCX).".to_string(),
        ));
    }

    info!("Analysing {} uploaded file(s)", staged.len());
    let batch = state.ranker.rank(&staged, &job_description).await;

    if let Err(e) = staging.close() {
        warn!("Failed to remove staging directory: {}", e);
    }

    Ok(pages::render(&ResultsPage::from_batch(&batch))?)
}
