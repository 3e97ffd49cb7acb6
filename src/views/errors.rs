//! 에러 페이지

use actix_web::http::StatusCode;
use crate::utils::string_utils::escape_html;
use crate::views::{layout, PageContext};

/// 상태 코드와 메시지를 보여주는 에러 페이지
///
/// 에러 응답은 세션에 접근하지 않으므로 빈 페이지 컨텍스트로 렌더링합니다.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<div class="error">
<h2>{code} {reason}</h2>
<p class="error-message">{message}</p>
<a href="/listings">Back to listings</a>
</div>"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape_html(message),
    );

    layout::render("Error", &PageContext::default(), &body)
}
