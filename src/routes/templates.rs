use crate::domain::NewsletterDocumentData;
use crate::repository::{TemplateName, TemplateStore};
use crate::utils::{build_error_response, error_chain_fmt};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;

#[derive(thiserror::Error)]
pub enum TemplateError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Template not found")]
    NotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for TemplateError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            TemplateError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TemplateError::NotFound => StatusCode::NOT_FOUND,
            TemplateError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        build_error_response(status_code, self.to_string())
    }
}

#[derive(Serialize)]
pub struct TemplateNames {
    pub names: Vec<String>,
}

#[tracing::instrument(skip(payload, store))]
pub async fn upsert_template(
    name: web::Path<String>,
    payload: web::Json<NewsletterDocumentData>,
    store: web::Data<TemplateStore>,
) -> Result<HttpResponse, TemplateError> {
    let name = TemplateName::parse(name.into_inner()).map_err(TemplateError::BadRequest)?;
    store.save(&name, &payload)?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(store))]
pub async fn list_templates(
    store: web::Data<TemplateStore>,
) -> Result<HttpResponse, TemplateError> {
    let names = store.list_names()?;
    Ok(HttpResponse::Ok().json(TemplateNames { names }))
}

#[tracing::instrument(skip(store))]
pub async fn get_template(
    name: web::Path<String>,
    store: web::Data<TemplateStore>,
) -> Result<HttpResponse, TemplateError> {
    let name = TemplateName::parse(name.into_inner()).map_err(TemplateError::BadRequest)?;
    match store.load(&name)? {
        Some(document) => Ok(HttpResponse::Ok().json(document)),
        None => Err(TemplateError::NotFound),
    }
}

#[tracing::instrument(skip(store))]
pub async fn delete_template(
    name: web::Path<String>,
    store: web::Data<TemplateStore>,
) -> Result<HttpResponse, TemplateError> {
    let name = TemplateName::parse(name.into_inner()).map_err(TemplateError::BadRequest)?;
    if store.delete(&name)? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(TemplateError::NotFound)
    }
}
