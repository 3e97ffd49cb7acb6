//! 리뷰 작성 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::validators::{not_blank, rating_in_range};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReviewRequest {
    #[serde(rename = "review[rating]", default)]
    #[validate(custom(function = "rating_in_range"))]
    pub rating: String,

    #[serde(rename = "review[comment]", default)]
    #[validate(custom(function = "not_blank"))]
    pub comment: String,
}

impl ReviewRequest {
    /// 검증을 통과한 요청에서 (comment, rating)을 꺼냅니다.
    pub fn into_parts(self) -> Result<(String, u8), AppError> {
        let rating = self.rating.trim().parse::<u8>()
            .map_err(|_| AppError::ValidationError("rating must be an integer between 1 and 5".to_string()))?;

        Ok((self.comment.trim().to_string(), rating))
    }
}
