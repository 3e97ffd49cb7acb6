//! 루트 경로와 매칭되지 않는 경로

use actix_web::HttpResponse;
use crate::core::errors::AppError;
use crate::handlers::redirect;

/// `GET /`
pub async fn root() -> HttpResponse {
    redirect("/listings")
}

/// 기본 서비스: 모든 미등록 경로
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Page Not Found".to_string()))
}
