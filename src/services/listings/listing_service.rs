//! # 숙소 서비스 구현
//!
//! 숙소 CRUD와 상세 페이지 조합(소유자, 리뷰, 리뷰 작성자)을 담당합니다.
//!
//! ## 식별자 처리
//!
//! 모든 메서드는 경로에서 받은 원본 문자열을 받아 먼저 [`parse_object_id`]로
//! 변환합니다. 형식이 잘못된 식별자는 저장소를 호출하기 전에 400으로 끝납니다.
//!
//! ## 소유자 확인
//!
//! 수정 폼, 수정, 삭제는 존재 확인(404) 후 소유자 확인(`AuthorizationError`)
//! 순서로 진행됩니다.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::AppError,
    domain::{
        entities::{Listing, ListingFields},
        models::{AuthenticatedUser, ListingDetails, ReviewDetails},
        parse_object_id,
    },
    repositories::{ListingRepository, ReviewRepository, UserRepository},
};

pub const LISTING_NOT_FOUND: &str = "Listing not found";
pub const NOT_LISTING_OWNER: &str = "You are not the owner of this listing";

pub struct ListingService {
    listings: Arc<dyn ListingRepository>,
    reviews: Arc<dyn ReviewRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListingService {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        reviews: Arc<dyn ReviewRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self { listings, reviews, users }
    }

    /// 모든 숙소를 삽입 순서대로 반환합니다.
    pub async fn list(&self) -> Result<Vec<Listing>, AppError> {
        self.listings.find_all().await
    }

    /// 숙소 상세 정보를 조회합니다.
    ///
    /// 리뷰는 숙소 문서의 참조 순서대로 채워지며, 문서가 없는 참조는 건너뜁니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ListingDetails))` - 숙소가 있는 경우
    /// * `Ok(None)` - 숙소가 없는 경우 (핸들러가 플래시 후 목록으로 리다이렉트)
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 식별자 형식 오류 (저장소 호출 없음)
    pub async fn show(&self, raw_id: &str) -> Result<Option<ListingDetails>, AppError> {
        let id = parse_object_id(raw_id)?;

        let Some(listing) = self.listings.find_by_id(&id).await? else {
            return Ok(None);
        };

        let owner = match listing.owner.as_ref() {
            Some(owner_id) => self.users.find_by_id(owner_id).await?,
            None => None,
        };

        let mut found: HashMap<ObjectId, _> = self.reviews
            .find_many(&listing.reviews)
            .await?
            .into_iter()
            .filter_map(|review| review.id.map(|id| (id, review)))
            .collect();

        let ordered: Vec<_> = listing.reviews
            .iter()
            .filter_map(|id| found.remove(id))
            .collect();

        if ordered.len() < listing.reviews.len() {
            log::debug!(
                "숙소 {}의 리뷰 참조 {}개가 존재하지 않는 문서를 가리킵니다",
                id,
                listing.reviews.len() - ordered.len()
            );
        }

        let author_ids: Vec<ObjectId> = ordered
            .iter()
            .filter_map(|review| review.author)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let authors: HashMap<ObjectId, _> = self.users
            .find_many(&author_ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        let reviews = ordered
            .into_iter()
            .map(|review| {
                let author = review.author.and_then(|author_id| authors.get(&author_id).cloned());
                ReviewDetails { review, author }
            })
            .collect();

        Ok(Some(ListingDetails { listing, owner, reviews }))
    }

    /// 수정 폼에 채울 숙소를 조회합니다.
    pub async fn find_for_edit(&self, raw_id: &str, user: &AuthenticatedUser) -> Result<Listing, AppError> {
        let id = parse_object_id(raw_id)?;
        self.find_owned(&id, user).await
    }

    /// 현재 사용자를 소유자로 하는 새 숙소를 저장합니다.
    pub async fn create(&self, fields: ListingFields, owner: &AuthenticatedUser) -> Result<Listing, AppError> {
        let listing = self.listings.insert(Listing::new(fields, owner.user_id)).await?;

        log::info!("새 숙소 등록: {:?} (소유자: {})", listing.id, owner.username);
        Ok(listing)
    }

    /// 숙소의 모든 수정 가능 필드를 덮어씁니다. 소유자와 리뷰 목록은 유지됩니다.
    pub async fn update(&self, raw_id: &str, fields: ListingFields, user: &AuthenticatedUser) -> Result<Listing, AppError> {
        let id = parse_object_id(raw_id)?;
        self.find_owned(&id, user).await?;

        self.listings
            .update_fields(&id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound(LISTING_NOT_FOUND.to_string()))
    }

    /// 숙소를 삭제합니다. 리뷰 문서는 함께 삭제되지 않습니다.
    pub async fn delete(&self, raw_id: &str, user: &AuthenticatedUser) -> Result<Listing, AppError> {
        let id = parse_object_id(raw_id)?;
        let listing = self.find_owned(&id, user).await?;

        if !self.listings.delete(&id).await? {
            return Err(AppError::NotFound(LISTING_NOT_FOUND.to_string()));
        }

        log::info!("숙소 삭제: {} (리뷰 참조 {}개는 유지)", id, listing.reviews.len());
        Ok(listing)
    }

    async fn find_owned(&self, id: &ObjectId, user: &AuthenticatedUser) -> Result<Listing, AppError> {
        let listing = self.listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(LISTING_NOT_FOUND.to_string()))?;

        if !listing.is_owned_by(&user.user_id) {
            log::warn!("소유자가 아닌 사용자의 숙소 변경 시도: {} (사용자: {})", id, user.username);
            return Err(AppError::AuthorizationError(NOT_LISTING_OWNER.to_string()));
        }

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Review, User};
    use crate::repositories::{InMemoryListingRepository, InMemoryReviewRepository, InMemoryUserRepository};

    struct Fixture {
        service: ListingService,
        listings: Arc<InMemoryListingRepository>,
        reviews: Arc<InMemoryReviewRepository>,
        users: Arc<InMemoryUserRepository>,
    }

    fn fixture() -> Fixture {
        let listings = Arc::new(InMemoryListingRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let service = ListingService::new(listings.clone(), reviews.clone(), users.clone());
        Fixture { service, listings, reviews, users }
    }

    fn fields(title: &str) -> ListingFields {
        ListingFields {
            title: title.to_string(),
            description: "Quiet and bright".to_string(),
            image: None,
            price: 99.0,
            location: "Kyoto".to_string(),
            country: "Japan".to_string(),
        }
    }

    async fn user(fixture: &Fixture, name: &str) -> AuthenticatedUser {
        let user = fixture.users
            .insert(User::new(name.to_string(), format!("{}@example.com", name), "hash".to_string()))
            .await
            .unwrap();
        AuthenticatedUser { user_id: user.id.unwrap(), username: user.username }
    }

    #[actix_web::test]
    async fn test_show_rejects_malformed_id() {
        let fixture = fixture();

        let result = fixture.service.show("not-an-object-id").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_show_missing_listing_is_none() {
        let fixture = fixture();

        let result = fixture.service.show(&ObjectId::new().to_hex()).await.unwrap();

        assert!(result.is_none());
    }

    #[actix_web::test]
    async fn test_show_populates_reviews_in_reference_order_and_skips_dangling() {
        let fixture = fixture();
        let owner = user(&fixture, "owner").await;
        let critic = user(&fixture, "critic").await;
        let listing = fixture.service.create(fields("Machiya"), &owner).await.unwrap();
        let listing_id = listing.id.unwrap();

        let first = fixture.reviews.insert(Review::new("great".into(), 5, critic.user_id)).await.unwrap();
        let second = fixture.reviews.insert(Review::new("fine".into(), 3, critic.user_id)).await.unwrap();
        fixture.listings.push_review(&listing_id, &second.id.unwrap()).await.unwrap();
        fixture.listings.push_review(&listing_id, &ObjectId::new()).await.unwrap();
        fixture.listings.push_review(&listing_id, &first.id.unwrap()).await.unwrap();

        let details = fixture.service.show(&format!(" {} ", listing_id.to_hex())).await.unwrap().unwrap();

        let comments: Vec<&str> = details.reviews.iter().map(|r| r.review.comment.as_str()).collect();
        assert_eq!(comments, vec!["fine", "great"]);
        assert_eq!(details.owner.unwrap().username, "owner");
        assert_eq!(details.reviews[0].author.as_ref().unwrap().username, "critic");
    }

    #[actix_web::test]
    async fn test_update_and_delete_require_owner() {
        let fixture = fixture();
        let owner = user(&fixture, "owner").await;
        let stranger = user(&fixture, "stranger").await;
        let listing = fixture.service.create(fields("Loft"), &owner).await.unwrap();
        let id = listing.id_string().unwrap();

        let update = fixture.service.update(&id, fields("Hijacked"), &stranger).await;
        assert!(matches!(update, Err(AppError::AuthorizationError(_))));

        let delete = fixture.service.delete(&id, &stranger).await;
        assert!(matches!(delete, Err(AppError::AuthorizationError(_))));

        let updated = fixture.service.update(&id, fields("Renovated Loft"), &owner).await.unwrap();
        assert_eq!(updated.title, "Renovated Loft");
        assert_eq!(updated.owner, Some(owner.user_id));
    }

    #[actix_web::test]
    async fn test_missing_listing_is_not_found() {
        let fixture = fixture();
        let owner = user(&fixture, "owner").await;
        let missing = ObjectId::new().to_hex();

        assert!(matches!(fixture.service.find_for_edit(&missing, &owner).await, Err(AppError::NotFound(_))));
        assert!(matches!(fixture.service.update(&missing, fields("x"), &owner).await, Err(AppError::NotFound(_))));
        assert!(matches!(fixture.service.delete(&missing, &owner).await, Err(AppError::NotFound(_))));
    }
}
