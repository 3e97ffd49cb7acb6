//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 미들웨어와 추출자입니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 미들웨어 (session_middleware)
//! - `actix-session`의 `SessionMiddleware`를 세션 설정에 맞춰 구성
//! - 핸들러는 `RequestContext`로 세션을 사용
//!
//! ### 2. 로그인 필수 미들웨어 (LoginRequired)
//! - 세션에 로그인 사용자가 없으면 플래시 메시지와 함께 `/login`으로 리다이렉트
//! - GET 요청은 원래 경로를 기록해 로그인 후 되돌아감
//! - 로그인 사용자는 `AuthenticatedUser`로 request extension에 저장
//!
//! ### 3. 메서드 오버라이드 (MethodOverride)
//! - HTML 폼의 `POST ...?_method=PUT|PATCH|DELETE`를 해당 메서드로 변경
//!
//! ### 4. 폼 검증 추출자 (ValidatedForm)
//! - 폼 본문을 DTO로 역직렬화하고 `validator`로 검증, 실패 시 400
//!
//! # 적용 순서
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state.clone()))
//!     .wrap(session_middleware(CookieSessionStore::default(), key, &state.session_config))
//!     .wrap(MethodOverride)          // 마지막에 등록한 미들웨어가 먼저 실행됨
//!     .route("/listings/new", web::get().to(new_form).wrap(LoginRequired))
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod method_override;
pub mod session;
pub mod validation;

// 미들웨어 재export
pub use auth_middleware::{LoginRequired, LOGIN_REQUIRED_MESSAGE};
pub use method_override::MethodOverride;
pub use session::session_middleware;
pub use validation::{format_validation_errors, ValidatedForm};
