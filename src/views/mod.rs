//! # Views
//!
//! 서버에서 렌더링하는 HTML 페이지입니다. 템플릿 엔진 없이 `format!`으로
//! 조립하며, 사용자 입력은 모두 [`escape_html`](crate::utils::string_utils::escape_html)을 거칩니다.
//!
//! - [`layout`] - 공통 레이아웃 (네비게이션 바, 플래시 메시지 영역)
//! - [`listings`] - 숙소 목록/상세/등록/수정 페이지
//! - [`auth`] - 로그인/회원가입 페이지
//! - [`errors`] - 에러 페이지

pub mod auth;
pub mod errors;
pub mod layout;
pub mod listings;

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use crate::domain::models::AuthenticatedUser;
use crate::session::{FlashMessage, RequestContext};

/// 페이지 공통 정보
///
/// 만들 때 세션의 플래시 메시지를 꺼내므로, 메시지는 한 번만 표시됩니다.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub user: Option<AuthenticatedUser>,
    pub flashes: Vec<FlashMessage>,
}

impl PageContext {
    pub fn from_session(ctx: &RequestContext) -> Self {
        Self {
            user: ctx.user(),
            flashes: ctx.take_flashes(),
        }
    }
}

/// 200 OK HTML 응답
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
