//! 영속 엔티티 모듈
//!
//! MongoDB 컬렉션과 1:1로 대응하는 도메인 객체들입니다.

pub mod listings;
pub mod reviews;
pub mod users;

pub use listings::listing::{Listing, ListingFields, ListingImage};
pub use reviews::review::Review;
pub use users::user::User;
