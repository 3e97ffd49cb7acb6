//! # Session Module
//!
//! `actix-session` 위에서 동작하는 요청 단위 세션 핸들입니다.
//!
//! ```text
//! 요청 ─▶ SessionMiddleware (actix-session, 쿠키 또는 Redis 저장소)
//!              │
//!              ▼  Session을 request extensions에 둠
//!          RequestContext (flash, login, logout, return_to)
//!              │
//!              ▼  변경된 경우에만 저장 + Set-Cookie, 비워진 세션은 삭제
//!            응답
//! ```
//!
//! - [`data`] - 세션에 저장되는 값 (로그인 사용자, 플래시 메시지)
//! - [`context`] - `RequestContext` (`FromRequest` 구현)
//!
//! 미들웨어 구성은 [`crate::middlewares::session_middleware`]에 있습니다.

pub mod context;
pub mod data;

pub use context::RequestContext;
pub use data::{FlashKind, FlashMessage, SessionUser};
