//! 세션에 직렬화되는 값
//!
//! `actix_session::Session`에 키별 JSON으로 저장됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::AuthenticatedUser;

/// 세션에 저장되는 로그인 사용자
///
/// `ObjectId`는 16진수 문자열로 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
}

impl From<&AuthenticatedUser> for SessionUser {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_hex(),
            username: user.username.clone(),
        }
    }
}

impl SessionUser {
    /// 세션 값을 요청 주체로 되돌립니다. ID가 손상되었으면 `None`입니다.
    pub fn to_authenticated(&self) -> Option<AuthenticatedUser> {
        mongodb::bson::oid::ObjectId::parse_str(&self.id)
            .ok()
            .map(|user_id| AuthenticatedUser {
                user_id,
                username: self.username.clone(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// 다음 페이지 렌더링에서 한 번만 표시되는 메시지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}
