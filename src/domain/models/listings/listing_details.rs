//! 숙소 상세 페이지 모델
//!
//! 숙소 문서의 `owner`와 `reviews` 참조를 실제 문서로 채운 결과입니다.

use crate::domain::entities::{Listing, Review, User};

/// 작성자 정보가 채워진 리뷰
#[derive(Debug, Clone)]
pub struct ReviewDetails {
    pub review: Review,
    pub author: Option<User>,
}

/// 소유자와 리뷰가 채워진 숙소
///
/// `reviews`는 숙소 문서의 참조 순서를 따르며, 문서가 사라진 참조는 건너뜁니다.
#[derive(Debug, Clone)]
pub struct ListingDetails {
    pub listing: Listing,
    pub owner: Option<User>,
    pub reviews: Vec<ReviewDetails>,
}
