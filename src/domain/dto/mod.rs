//! # Request DTOs
//!
//! HTML 폼(`application/x-www-form-urlencoded`)으로 들어오는 요청 데이터입니다.
//! 숙소/리뷰 폼은 `listing[title]`, `review[rating]`처럼 중첩 키 이름을 사용하므로
//! 각 필드에 `#[serde(rename = ...)]`로 폼 키를 지정합니다.
//!
//! 모든 DTO는 `validator::Validate`를 구현하며, 핸들러에 도달하기 전
//! [`crate::middlewares::validation::ValidatedForm`] 추출자에서 검증됩니다.
//! 폼 값은 모두 문자열로 받고, 숫자 변환은 검증을 통과한 뒤 수행합니다.

pub mod listings;
pub mod reviews;
pub mod users;
pub mod validators;

pub use listings::listing_request::ListingRequest;
pub use reviews::review_request::ReviewRequest;
pub use users::request::*;
