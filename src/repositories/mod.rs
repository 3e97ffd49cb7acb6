//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 각 컬렉션마다 `async_trait` 기반 트레이트와
//! 두 가지 구현을 제공합니다.
//!
//! | 트레이트 | MongoDB 구현 | 메모리 구현 |
//! |----------|--------------|-------------|
//! | [`ListingRepository`] | [`MongoListingRepository`] | [`InMemoryListingRepository`] |
//! | [`ReviewRepository`] | [`MongoReviewRepository`] | [`InMemoryReviewRepository`] |
//! | [`UserRepository`] | [`MongoUserRepository`] | [`InMemoryUserRepository`] |
//!
//! 서비스는 `Arc<dyn ...Repository>`만 알기 때문에 통합 테스트는
//! 메모리 구현으로 전체 HTTP 흐름을 검증할 수 있습니다.
//!
//! 모든 메서드는 이미 파싱된 `ObjectId`를 받습니다. 식별자 형식 검증은
//! 저장소 호출 이전 단계([`crate::domain::parse_object_id`])에서 끝납니다.

pub mod listings;
pub mod reviews;
pub mod users;
pub mod memory;

pub use listings::listing_repo::{ListingRepository, MongoListingRepository};
pub use reviews::review_repo::{MongoReviewRepository, ReviewRepository};
pub use users::user_repo::{MongoUserRepository, UserRepository};
pub use memory::{InMemoryListingRepository, InMemoryReviewRepository, InMemoryUserRepository};
