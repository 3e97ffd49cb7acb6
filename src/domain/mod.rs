//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities   - MongoDB에 저장되는 영속 객체 (Listing, Review, User)
//! ├── DTOs       - HTML 폼으로 들어오는 요청 데이터 (validator 검증)
//! └── Models     - 뷰와 요청 컨텍스트에서 쓰이는 조합 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 관계
//!
//! ```text
//! User 1 ──< owner ── Listing 1 ──< reviews[] ── Review >── author ── 1 User
//! ```
//!
//! 참조는 모두 `ObjectId`로 저장되며 외래 키 제약은 없습니다.
//! 숙소 삭제는 리뷰로 전파되지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 경로에서 받은 식별자를 `ObjectId`로 변환합니다.
///
/// 앞뒤 공백은 제거하며, 형식이 올바르지 않으면 저장소 호출 없이
/// `ValidationError`(400)를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let id = parse_object_id(" 64b7f0c2a1b2c3d4e5f60718 ")?;
/// assert!(parse_object_id("not-an-id").is_err());
/// ```
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| AppError::ValidationError("Invalid ID format".to_string()))
}
