use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::totals::models::TotalsRequest;
use crate::modules::totals::services::TotalsService;

/// Calculate rounded totals for an invoice or quote
/// POST /totals
#[tracing::instrument(skip_all, fields(document_kind = %request.document_kind, items = request.items.len()))]
pub async fn calculate_totals(
    service: web::Data<TotalsService>,
    request: web::Json<TotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let totals = service.calculate(&request)?;

    Ok(HttpResponse::Ok().json(totals))
}

/// Totals plus currency-formatted strings for the preview and PDF renderers
/// POST /totals/preview
#[tracing::instrument(skip_all, fields(document_kind = %request.document_kind, items = request.items.len()))]
pub async fn preview_totals(
    service: web::Data<TotalsService>,
    request: web::Json<TotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let preview = service.preview(&request)?;

    Ok(HttpResponse::Ok().json(preview))
}

/// Configure totals routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/totals")
            .route("", web::post().to(calculate_totals))
            .route("/preview", web::post().to(preview_totals)),
    );
}
