//! 조합 모델 모듈
//!
//! 저장소 문서를 직접 노출하지 않고 뷰/핸들러가 필요로 하는 형태로 묶은 모델입니다.

pub mod auth;
pub mod listings;

pub use auth::authenticated_user::AuthenticatedUser;
pub use listings::listing_details::{ListingDetails, ReviewDetails};
