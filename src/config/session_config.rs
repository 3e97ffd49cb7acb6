//! 세션 설정 관리 모듈
//!
//! 세션 쿠키 속성, 쿠키 서명/암호화 키, 세션 저장소 백엔드를 환경 변수에서 읽어옵니다.

use std::env;
use std::ops::RangeInclusive;
use actix_web::cookie::Key;
use crate::config::Environment;

/// 세션 쿠키 기본 이름
pub const DEFAULT_COOKIE_NAME: &str = "wanderlust.sid";

/// 세션 기본 유효 기간 (일)
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// `SESSION_TTL_DAYS`로 설정할 수 있는 범위
pub const TTL_DAYS_RANGE: RangeInclusive<i64> = 1..=365;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// 세션 데이터를 보관할 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    /// 암호화된 쿠키 자체에 세션을 담습니다 (기본값, 서버 측 상태 없음)
    Cookie,
    /// Redis (`REDIS_URL`), 쿠키에는 세션 키만 담김
    Redis,
}

impl SessionBackend {
    /// `SESSION_STORE` 값을 해석합니다. 알 수 없는 값은 `Cookie`로 처리합니다.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "redis" => SessionBackend::Redis,
            _ => SessionBackend::Cookie,
        }
    }
}

/// 세션 쿠키 및 만료 설정
///
/// # Environment Variables
///
/// - `SESSION_STORE`: `cookie` | `redis` (기본값: cookie)
/// - `REDIS_URL`: Redis 저장소 주소
/// - `SESSION_COOKIE_NAME`: 쿠키 이름 (기본값: "wanderlust.sid")
/// - `SESSION_TTL_DAYS`: 세션 유효 기간, 1-365일로 제한 (기본값: 7)
/// - `SESSION_COOKIE_SECURE`: `Secure` 속성 (기본값: 프로덕션에서만 true)
/// - `SESSION_SECRET`: 쿠키 키 원본, 64바이트 이상 ([`load_session_key`])
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub redis_url: String,
    pub cookie_name: String,
    pub ttl_days: i64,
    pub secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let backend = env::var("SESSION_STORE")
            .map(|value| SessionBackend::parse(&value))
            .unwrap_or(SessionBackend::Cookie);

        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let ttl_days = parse_ttl_days(env::var("SESSION_TTL_DAYS").ok().as_deref());

        let secure = env::var("SESSION_COOKIE_SECURE")
            .ok()
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or_else(|| Environment::current().is_production());

        Self {
            backend,
            redis_url,
            cookie_name,
            ttl_days,
            secure,
        }
    }
}

impl Default for SessionConfig {
    /// 쿠키 저장소, 7일 만료, `Secure` 미적용 (테스트 및 로컬 개발용)
    fn default() -> Self {
        Self {
            backend: SessionBackend::Cookie,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            ttl_days: DEFAULT_TTL_DAYS,
            secure: false,
        }
    }
}

/// 숫자가 아니면 기본값, 범위를 벗어나면 가장 가까운 경계값
pub fn parse_ttl_days(raw: Option<&str>) -> i64 {
    match raw.map(|value| value.trim().parse::<i64>()) {
        Some(Ok(days)) => {
            let clamped = days.clamp(*TTL_DAYS_RANGE.start(), *TTL_DAYS_RANGE.end());
            if clamped != days {
                log::warn!("SESSION_TTL_DAYS={} 범위 초과, {}일로 조정합니다", days, clamped);
            }
            clamped
        }
        Some(Err(_)) => {
            log::warn!("SESSION_TTL_DAYS 파싱 실패. 기본값 {}일 사용", DEFAULT_TTL_DAYS);
            DEFAULT_TTL_DAYS
        }
        None => DEFAULT_TTL_DAYS,
    }
}

/// 세션 쿠키를 서명/암호화할 키
///
/// `SESSION_SECRET`이 64바이트 이상이면 그 값으로 만듭니다. 없거나 짧으면
/// 임의의 키를 생성하며, 이 경우 재시작하면 기존 세션은 모두 무효가 됩니다.
pub fn load_session_key() -> Key {
    match env::var("SESSION_SECRET") {
        Ok(secret) => Key::try_from(secret.as_bytes()).unwrap_or_else(|_| {
            log::warn!("⚠️ SESSION_SECRET은 64바이트 이상이어야 합니다. 임시 키를 생성합니다");
            Key::generate()
        }),
        Err(_) => {
            log::warn!("⚠️ SESSION_SECRET 미설정: 임시 키를 생성합니다");
            Key::generate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_backend_parsing() {
        assert_eq!(SessionBackend::parse("redis"), SessionBackend::Redis);
        assert_eq!(SessionBackend::parse(" Redis "), SessionBackend::Redis);
        assert_eq!(SessionBackend::parse("cookie"), SessionBackend::Cookie);
        assert_eq!(SessionBackend::parse("memcached"), SessionBackend::Cookie);
    }

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();

        assert_eq!(config.backend, SessionBackend::Cookie);
        assert_eq!(config.cookie_name, "wanderlust.sid");
        assert_eq!(config.ttl_days, 7);
        assert!(!config.secure);
    }

    #[test]
    fn test_ttl_days_is_clamped() {
        assert_eq!(parse_ttl_days(None), 7);
        assert_eq!(parse_ttl_days(Some("30")), 30);
        assert_eq!(parse_ttl_days(Some("0")), 1);
        assert_eq!(parse_ttl_days(Some("-5")), 1);
        assert_eq!(parse_ttl_days(Some("106751991167300")), 365);
        assert_eq!(parse_ttl_days(Some(&i64::MAX.to_string())), 365);
        assert_eq!(parse_ttl_days(Some("a week")), 7);
    }
}
