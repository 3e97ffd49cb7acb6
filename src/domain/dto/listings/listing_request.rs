//! 숙소 생성/수정 요청 DTO
//!
//! 새 숙소 폼과 수정 폼이 같은 필드(`listing[...]`)를 제출합니다.

use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::validators::{non_negative_number, not_blank, optional_url};
use crate::domain::entities::{ListingFields, ListingImage};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListingRequest {
    #[serde(rename = "listing[title]", default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(rename = "listing[description]", default)]
    #[validate(custom(function = "not_blank"))]
    pub description: String,

    /// 선택 항목, 비어 있으면 기본 이미지(생성) 또는 기존 이미지(수정)
    #[serde(rename = "listing[image]", default)]
    #[validate(custom(function = "optional_url"))]
    pub image: String,

    #[serde(rename = "listing[price]", default)]
    #[validate(custom(function = "non_negative_number"))]
    pub price: String,

    #[serde(rename = "listing[location]", default)]
    #[validate(custom(function = "not_blank"))]
    pub location: String,

    #[serde(rename = "listing[country]", default)]
    #[validate(custom(function = "not_blank"))]
    pub country: String,
}

impl ListingRequest {
    /// 검증을 통과한 요청을 엔티티 필드로 변환합니다.
    pub fn into_fields(self) -> Result<ListingFields, AppError> {
        let price = self.price.trim().parse::<f64>()
            .map_err(|_| AppError::ValidationError("price must be a number".to_string()))?;

        Ok(ListingFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: ListingImage::from_url(Some(&self.image)),
            price,
            location: self.location.trim().to_string(),
            country: self.country.trim().to_string(),
        })
    }
}
