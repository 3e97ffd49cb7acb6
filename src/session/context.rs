//! 요청 단위 세션 핸들
//!
//! `actix_session::Session`을 감싸 로그인 사용자, 플래시 메시지, 로그인 후
//! 돌아갈 경로를 다룹니다. 저장과 쿠키 발급은 `SessionMiddleware`가 맡고,
//! 세션이 바뀐 요청에서만 일어납니다.
//!
//! | 키 | 값 |
//! |----|----|
//! | `user` | [`SessionUser`] |
//! | `flash` | `Vec<FlashMessage>` |
//! | `return_to` | 경로 + 쿼리 |
//!
//! # Examples
//!
//! ```rust,ignore
//! async fn logout(ctx: RequestContext) -> Result<HttpResponse, AppError> {
//!     ctx.logout();
//!     ctx.flash_success("You are logged out!")?;
//!     Ok(redirect("/listings"))
//! }
//! ```

use std::future::{ready, Ready};
use actix_session::{Session, SessionExt};
use actix_web::dev::{Payload, ServiceRequest};
use actix_web::{FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::errors::AppError;
use crate::domain::models::AuthenticatedUser;
use crate::session::data::{FlashKind, FlashMessage, SessionUser};

const USER_KEY: &str = "user";
const FLASH_KEY: &str = "flash";
const RETURN_TO_KEY: &str = "return_to";

#[derive(Clone)]
pub struct RequestContext {
    session: Session,
}

impl RequestContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// 미들웨어에서 라우팅 전에 세션 핸들을 얻습니다.
    pub fn from_service_request(req: &ServiceRequest) -> Self {
        Self::new(req.get_session())
    }

    /// 세션에 로그인된 사용자
    pub fn user(&self) -> Option<AuthenticatedUser> {
        match self.session.get::<SessionUser>(USER_KEY) {
            Ok(user) => user.as_ref().and_then(SessionUser::to_authenticated),
            Err(e) => {
                log::warn!("세션 사용자 정보 손상: {}", e);
                None
            }
        }
    }

    pub fn flash(&self, kind: FlashKind, message: impl Into<String>) -> Result<(), AppError> {
        let mut flashes = self
            .session
            .get::<Vec<FlashMessage>>(FLASH_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        flashes.push(FlashMessage {
            kind,
            message: message.into(),
        });
        self.insert(FLASH_KEY, flashes)
    }

    pub fn flash_success(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.flash(FlashKind::Success, message)
    }

    pub fn flash_error(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.flash(FlashKind::Error, message)
    }

    /// 쌓인 플래시 메시지를 꺼냅니다. 꺼낸 메시지는 세션에서 사라집니다.
    pub fn take_flashes(&self) -> Vec<FlashMessage> {
        self.take(FLASH_KEY).unwrap_or_default()
    }

    /// 로그인 사용자를 기록하고 세션 키를 새로 발급합니다.
    pub fn login(&self, user: &AuthenticatedUser) -> Result<(), AppError> {
        self.session.renew();
        self.insert(USER_KEY, SessionUser::from(user))
    }

    /// 로그인 사용자만 지우고 세션 키를 새로 발급합니다.
    /// 이후에 남기는 플래시 메시지는 다음 페이지까지 유지됩니다.
    pub fn logout(&self) {
        self.session.remove(USER_KEY);
        self.session.renew();
    }

    /// 로그인 후 돌아갈 경로를 기록합니다.
    pub fn set_return_to(&self, path: impl Into<String>) -> Result<(), AppError> {
        self.insert(RETURN_TO_KEY, path.into())
    }

    /// 기록된 경로를 꺼냅니다. 한 번 꺼내면 사라집니다.
    pub fn take_return_to(&self) -> Option<String> {
        self.take(RETURN_TO_KEY)
    }

    fn insert<T: Serialize>(&self, key: &str, value: T) -> Result<(), AppError> {
        self.session
            .insert(key, value)
            .map_err(|e| AppError::InternalError(format!("세션 저장 실패: {}", e)))
    }

    /// 키가 있을 때만 꺼냅니다. 없는 키를 지우면 세션이 변경된 것으로 표시되어
    /// 단순 조회 요청에도 쿠키가 발급됩니다.
    ///
    /// 꺼낸 뒤 세션이 비었으면 세션을 폐기해 저장소 항목과 쿠키를 지웁니다.
    fn take<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let present = self.session.entries().contains_key(key);
        if !present {
            return None;
        }

        let value = match self.session.remove_as::<T>(key)? {
            Ok(value) => Some(value),
            Err(raw) => {
                log::warn!("세션 값 손상 ({}): {}", key, raw);
                None
            }
        };

        let now_empty = self.session.entries().is_empty();
        if now_empty {
            log::debug!("빈 세션 폐기");
            self.session.purge();
        }

        value
    }
}

impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::new(req.get_session())))
    }
}
