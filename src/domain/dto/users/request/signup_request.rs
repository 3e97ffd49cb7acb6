//! 회원가입 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 3, max = 30, message = "must be 3-30 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(ValidationError::new("invalid_username")
            .with_message("may only contain letters, numbers, '-' and '_'".into()));
    }
    Ok(())
}
