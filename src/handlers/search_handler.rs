use actix_web::{delete, error::JsonPayloadError, get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::ConfidenceLevel,
        dto::{request::SearchRequest, response::ResultView},
    },
};

/// Body extractor config that answers unreadable JSON with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!(
        "Rejected request body [{}]: {}",
        get_request_id(req).unwrap_or_default(),
        err
    );
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

#[post("/api/search")]
pub async fn search_company(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let result = state
        .search_service
        .run(request.into_inner())
        .await
        .map_err(|e| {
            log::warn!("Search failed [{}]: {}", request_id, e);
            e
        })?;
    let view = ResultView::new(&result, &state.config.verification_aliases);
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/search/state")]
pub async fn get_search_state(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.search_service.state().await)
}

#[delete("/api/search/state")]
pub async fn reset_search_state(state: web::Data<AppState>) -> HttpResponse {
    state.search_service.reset().await;
    HttpResponse::NoContent().finish()
}

#[get("/api/confidence-levels")]
pub async fn get_confidence_levels() -> HttpResponse {
    HttpResponse::Ok().json(ConfidenceLevel::table())
}
