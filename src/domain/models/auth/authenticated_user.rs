use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::User;

/// 세션에서 확인된 로그인 사용자
///
/// `LoginRequired` 미들웨어가 request extensions에 넣어 두며,
/// 보호된 핸들러는 인자로 받아 바로 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,

    /// 사용자명 (네비게이션 바 표시용)
    pub username: String,
}

impl TryFrom<&User> for AuthenticatedUser {
    type Error = AppError;

    /// 저장된 사용자로부터 세션 사용자를 만듭니다. 저장 전(ID 없음) 사용자는 거부합니다.
    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let user_id = user.id
            .ok_or_else(|| AppError::InternalError("user has not been persisted".to_string()))?;

        Ok(Self {
            user_id,
            username: user.username.clone(),
        })
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "You must be logged in to do that!"
            ))),
        }
    }
}
