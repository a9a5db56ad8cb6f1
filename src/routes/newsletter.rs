use crate::domain::{NewsletterDocument, NewsletterDocumentData};
use crate::render;
use crate::telemetry::spawn_blocking_with_tracing;
use crate::utils::{build_error_response, error_chain_fmt};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use serde::Serialize;

#[derive(thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid newsletter configuration: {0}")]
    BadRequest(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GenerateError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            GenerateError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GenerateError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        build_error_response(status_code, self.to_string())
    }
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub html: String,
    pub filename: String,
    pub warnings: Vec<String>,
}

/// Convert, then assemble on a blocking thread: image re-encoding is the one
/// CPU-bound step in the request.
async fn assemble_document(
    data: NewsletterDocumentData,
) -> Result<(String, String, Vec<String>), GenerateError> {
    let document = NewsletterDocument::try_from(data).map_err(GenerateError::BadRequest)?;

    let rendered = spawn_blocking_with_tracing(move || {
        let filename = document.subject.export_filename();
        let (html, warnings) = render::assemble_with_warnings(&document);
        let warnings = warnings.into_iter().map(|w| w.to_string()).collect();
        (html, filename, warnings)
    })
    .await
    .context("Failed to run the newsletter assembly task")?;

    Ok(rendered)
}

#[tracing::instrument(skip_all, fields(subject = %payload.subject))]
pub async fn preview_newsletter(
    payload: web::Json<NewsletterDocumentData>,
) -> Result<HttpResponse, GenerateError> {
    let (html, filename, warnings) = assemble_document(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PreviewResponse {
        html,
        filename,
        warnings,
    }))
}

#[tracing::instrument(skip_all, fields(subject = %payload.subject))]
pub async fn generate_newsletter(
    payload: web::Json<NewsletterDocumentData>,
) -> Result<HttpResponse, GenerateError> {
    let (html, filename, warnings) = assemble_document(payload.into_inner()).await?;

    for warning in &warnings {
        tracing::warn!(%warning, "An image degraded during export");
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(html))
}
