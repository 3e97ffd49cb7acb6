//! 세션 미들웨어 구성
//!
//! `actix-session`의 `SessionMiddleware`를 [`SessionConfig`]에 맞춰 만듭니다.
//! 저장소는 호출하는 쪽이 고릅니다 (`CookieSessionStore` 또는 `RedisSessionStore`).

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::SessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use crate::config::SessionConfig;

/// 세션 쿠키: `HttpOnly`, `SameSite=Lax`, `Path=/`, 유효 기간만큼의 `Max-Age`
///
/// ```rust,ignore
/// App::new()
///     .wrap(session_middleware(CookieSessionStore::default(), key.clone(), &config))
/// ```
pub fn session_middleware<S: SessionStore>(
    store: S,
    key: Key,
    config: &SessionConfig,
) -> SessionMiddleware<S> {
    SessionMiddleware::builder(store, key)
        .cookie_name(config.cookie_name.clone())
        .cookie_path("/".to_string())
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_secure(config.secure)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::days(config.ttl_days)),
        )
        .build()
}
