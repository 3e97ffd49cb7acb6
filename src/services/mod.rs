//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 서비스는 리포지토리 트레이트 객체만 의존하며,
//! [`crate::core::state::AppState`]가 생성 시점에 주입합니다.
//!
//! - [`ListingService`] - 숙소 조회/생성/수정/삭제와 소유자 확인
//! - [`ReviewService`] - 리뷰 작성/삭제와 숙소 참조 동기화
//! - [`UserService`] - 회원가입(bcrypt 해싱)과 로그인 검증

pub mod listings;
pub mod reviews;
pub mod users;

pub use listings::listing_service::ListingService;
pub use reviews::review_service::ReviewService;
pub use users::user_service::UserService;
