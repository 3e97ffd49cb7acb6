//! # 리뷰 서비스 구현
//!
//! 리뷰 문서와 숙소의 리뷰 참조 배열을 함께 관리합니다.
//!
//! ## 두 번의 독립적인 쓰기
//!
//! 트랜잭션 없이 두 컬렉션을 순서대로 갱신합니다. 중간에 실패하면
//! 참조되지 않는 리뷰 문서가 남을 수는 있지만, 존재하지 않는 리뷰를
//! 가리키는 참조는 남지 않도록 순서를 정했습니다.
//!
//! | 작업 | 1단계 | 2단계 |
//! |------|-------|-------|
//! | 작성 | 리뷰 문서 저장 | 숙소에 참조 추가 (`$addToSet`) |
//! | 삭제 | 숙소에서 참조 제거 (`$pull`) | 리뷰 문서 삭제 |

use std::sync::Arc;
use crate::{
    core::errors::AppError,
    domain::{
        entities::Review,
        models::AuthenticatedUser,
        parse_object_id,
    },
    repositories::{ListingRepository, ReviewRepository},
    services::listings::listing_service::LISTING_NOT_FOUND,
};

pub const REVIEW_NOT_FOUND: &str = "Review not found";
pub const NOT_REVIEW_AUTHOR: &str = "You are not the author of this review";

pub struct ReviewService {
    listings: Arc<dyn ListingRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(listings: Arc<dyn ListingRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { listings, reviews }
    }

    /// 숙소에 새 리뷰를 작성합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 숙소 식별자 형식 오류
    /// * `NotFound` - 숙소가 없는 경우
    pub async fn create(
        &self,
        raw_listing_id: &str,
        comment: String,
        rating: u8,
        author: &AuthenticatedUser,
    ) -> Result<Review, AppError> {
        let listing_id = parse_object_id(raw_listing_id)?;

        if self.listings.find_by_id(&listing_id).await?.is_none() {
            return Err(AppError::NotFound(LISTING_NOT_FOUND.to_string()));
        }

        let review = self.reviews.insert(Review::new(comment, rating, author.user_id)).await?;
        let review_id = review.id
            .ok_or_else(|| AppError::InternalError("saved review has no id".to_string()))?;

        if !self.listings.push_review(&listing_id, &review_id).await? {
            log::warn!("리뷰 {} 저장 후 숙소 {}가 사라져 참조를 추가하지 못했습니다", review_id, listing_id);
            return Err(AppError::NotFound(LISTING_NOT_FOUND.to_string()));
        }

        log::info!("새 리뷰 등록: {} → 숙소 {} (작성자: {})", review_id, listing_id, author.username);
        Ok(review)
    }

    /// 리뷰를 삭제합니다.
    ///
    /// 숙소에 해당 참조가 없어도(다른 숙소의 리뷰이거나 숙소가 삭제된 경우)
    /// 리뷰 문서는 삭제되며, 숙소의 리뷰 목록은 바뀌지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 식별자 형식 오류
    /// * `NotFound` - 리뷰가 없는 경우
    /// * `AuthorizationError` - 작성자가 아닌 경우
    pub async fn delete(
        &self,
        raw_listing_id: &str,
        raw_review_id: &str,
        user: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let listing_id = parse_object_id(raw_listing_id)?;
        let review_id = parse_object_id(raw_review_id)?;

        let review = self.reviews
            .find_by_id(&review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(REVIEW_NOT_FOUND.to_string()))?;

        if !review.is_written_by(&user.user_id) {
            log::warn!("작성자가 아닌 사용자의 리뷰 삭제 시도: {} (사용자: {})", review_id, user.username);
            return Err(AppError::AuthorizationError(NOT_REVIEW_AUTHOR.to_string()));
        }

        if !self.listings.pull_review(&listing_id, &review_id).await? {
            log::debug!("리뷰 {} 삭제: 숙소 {}가 없어 참조 제거를 건너뜁니다", review_id, listing_id);
        }

        if !self.reviews.delete(&review_id).await? {
            log::warn!("리뷰 {} 참조 제거 후 문서가 이미 삭제되어 있었습니다", review_id);
        }

        log::info!("리뷰 삭제: {} (숙소 {})", review_id, listing_id);
        Ok(())
    }
}
