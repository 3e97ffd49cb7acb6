//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 추출 → 서비스 호출 → 플래시 메시지 기록 → 페이지 렌더링 또는
//! 리다이렉트 순서로 동작하며, 실패는 `AppError`로 반환되어
//! [`ResponseError`](actix_web::ResponseError) 구현이 에러 페이지로 변환합니다.
//!
//! ```text
//! ┌──────────────┐   ┌────────────┐   ┌──────────────┐
//! │   Handlers   │ → │  Services  │ → │ Repositories │
//! └──────────────┘   └────────────┘   └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Views     │ ← HTML 렌더링
//! └──────────────┘
//! ```
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`listings`] | `/listings`, `/listings/{id}`, `/listings/new`, `/listings/{id}/edit` |
//! | [`reviews`] | `/listings/{id}/reviews`, `/listings/{id}/reviews/{review_id}` |
//! | [`auth`] | `/signup`, `/login`, `/logout` |
//! | [`errors`] | `/`, 매칭되지 않는 모든 경로 |

pub mod auth;
pub mod errors;
pub mod listings;
pub mod reviews;

use actix_web::http::header;
use actix_web::HttpResponse;
use crate::core::errors::AppError;
use crate::session::RequestContext;

/// 302 Found 리다이렉트 응답
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 소유권 검사 실패는 에러 페이지 대신 플래시 메시지와 리다이렉트로 처리합니다.
/// 다른 에러는 그대로 반환합니다.
pub(crate) fn redirect_if_forbidden(
    result: Result<HttpResponse, AppError>,
    ctx: &RequestContext,
    location: &str,
) -> Result<HttpResponse, AppError> {
    match result {
        Err(AppError::AuthorizationError(message)) => {
            ctx.flash_error(message)?;
            Ok(redirect(location))
        }
        other => other,
    }
}
