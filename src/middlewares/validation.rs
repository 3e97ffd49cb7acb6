//! 폼 검증 추출자
//!
//! `web::Form<T>`로 본문을 역직렬화한 뒤 `validator::Validate`로 검증합니다.
//! 핸들러는 검증을 통과한 값만 받습니다.
//!
//! ```rust,ignore
//! async fn create(ValidatedForm(form): ValidatedForm<ListingRequest>) -> Result<HttpResponse, AppError> {
//!     let fields = form.into_fields()?;
//!     ...
//! }
//! ```
//!
//! | 실패 원인 | 응답 |
//! |-----------|------|
//! | 본문 디코딩 실패 | 400, 디코딩 에러 메시지 |
//! | 제약 조건 위반 | 400, 위반 메시지를 `, `로 연결 (필드명 순) |

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};
use crate::core::errors::AppError;

/// 검증된 폼 본문
#[derive(Debug)]
pub struct ValidatedForm<T>(pub T);

impl<T> ValidatedForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedForm<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let form = web::Form::<T>::from_request(req, payload);

        Box::pin(async move {
            let web::Form(value) = form
                .await
                .map_err(|e| AppError::ValidationError(e.to_string()))?;

            value
                .validate()
                .map_err(|e| AppError::ValidationError(format_validation_errors(&e)))?;

            Ok(ValidatedForm(value))
        })
    }
}

/// 검증 에러를 사람이 읽을 수 있는 한 줄 메시지로 만듭니다.
///
/// 각 항목은 `<필드> <메시지>` 형식이며 필드명 순으로 정렬됩니다.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{} {}", field, message),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::{ListingRequest, ReviewRequest};

    #[test]
    fn test_messages_are_sorted_and_joined() {
        let request = ReviewRequest {
            rating: "9".to_string(),
            comment: String::new(),
        };

        let message = format_validation_errors(&request.validate().unwrap_err());

        assert_eq!(message, "comment is required, rating must be an integer between 1 and 5");
    }

    #[test]
    fn test_listing_messages() {
        let request = ListingRequest {
            title: "Tent".to_string(),
            description: "Under the stars".to_string(),
            image: String::new(),
            price: "-1".to_string(),
            location: "Moab".to_string(),
            country: String::new(),
        };

        let message = format_validation_errors(&request.validate().unwrap_err());

        assert_eq!(message, "country is required, price must be greater than or equal to 0");
    }
}
