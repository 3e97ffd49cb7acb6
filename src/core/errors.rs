//! # Application Error Handling System
//!
//! Wanderlust 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, `?` 연산자로 전파된 에러는
//! 단 한 곳(`ResponseError` 구현)에서 에러 페이지로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 폼 검증 실패, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 숙소/리뷰 없음, 매칭되지 않는 경로 |
//! | `ConflictError` | 409 Conflict | 중복 사용자명/이메일 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 로그인 정보 |
//! | `AuthorizationError` | 403 Forbidden | 소유자가 아닌 사용자의 수정 시도 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 세션 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 에러는 서버 로그에 원본 메시지를 남기고, 클라이언트에는
//! 일반 메시지("Something went wrong!")만 노출합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn edit_form(path: web::Path<String>) -> Result<HttpResponse, AppError> {
//!     let listing = repo.find_by_id(&id).await?
//!         .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;
//!     Ok(render(listing))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use thiserror::Error;
use crate::views;

/// 내부 오류 시 사용자에게 보여지는 기본 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 HTTP 상태 코드와 1:1로 대응합니다.
/// `thiserror`로 `Error`를 구현하고, `actix_web::ResponseError`를 구현하여
/// 에러 페이지로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&listing).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 저장소 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 폼 검증 실패 시 위반된 모든 제약 조건의 메시지를 쉼표로 이어 붙여 담습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 로그인 핸들러는 이 에러를 페이지로 렌더링하지 않고 플래시 메시지로 바꿉니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    ///
    /// 숙소 소유자나 리뷰 작성자가 아닌 사용자의 변경 시도입니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자에게 보여줄 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원본 메시지를 그대로, 5xx 에러는 일반 메시지를 반환합니다.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg,
            AppError::DatabaseError(_)
            | AppError::RedisError(_)
            | AppError::InternalError(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 페이지를 생성합니다.
    ///
    /// 애플리케이션에서 에러 응답을 만드는 유일한 지점입니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status.as_u16(), self);
        } else {
            log::debug!("요청 거부 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(views::errors::error_page(status, self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let listings = self.listings.read().context("listing store lock poisoned")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_text(response: actix_web::HttpResponse) -> String {
        let bytes = response.into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("title is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).contains("title is required"));
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Page Not Found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).contains("Page Not Found"));
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("not the owner".to_string());

        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = AppError::DatabaseError("connection refused on 10.0.0.3".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response);
        assert!(body.contains(GENERIC_ERROR_MESSAGE));
        assert!(!body.contains("10.0.0.3"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
