//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::validators::not_blank;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}
