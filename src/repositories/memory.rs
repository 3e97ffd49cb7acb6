//! 메모리 기반 리포지토리
//!
//! MongoDB 없이 전체 애플리케이션을 구동하기 위한 구현입니다.
//! 통합 테스트와 로컬 개발에서 사용하며, 성능 최적화는 고려하지 않습니다.
//! 각 컬렉션은 삽입 순서를 유지하는 `RwLock<Vec<_>>`입니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, ErrorContext},
    domain::entities::{Listing, ListingFields, Review, User},
    repositories::{ListingRepository, ReviewRepository, UserRepository},
};

const LOCK_POISONED: &str = "in-memory store lock poisoned";

#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    listings: RwLock<Vec<Listing>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        Ok(self.listings.read().context(LOCK_POISONED)?.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>, AppError> {
        let listings = self.listings.read().context(LOCK_POISONED)?;
        Ok(listings.iter().find(|listing| listing.id.as_ref() == Some(id)).cloned())
    }

    async fn insert(&self, mut listing: Listing) -> Result<Listing, AppError> {
        listing.id = Some(ObjectId::new());
        self.listings.write().context(LOCK_POISONED)?.push(listing.clone());
        Ok(listing)
    }

    async fn update_fields(&self, id: &ObjectId, fields: ListingFields) -> Result<Option<Listing>, AppError> {
        let mut listings = self.listings.write().context(LOCK_POISONED)?;

        Ok(listings
            .iter_mut()
            .find(|listing| listing.id.as_ref() == Some(id))
            .map(|listing| {
                listing.apply(fields);
                listing.clone()
            }))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut listings = self.listings.write().context(LOCK_POISONED)?;
        let before = listings.len();
        listings.retain(|listing| listing.id.as_ref() != Some(id));
        Ok(listings.len() < before)
    }

    async fn push_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        let mut listings = self.listings.write().context(LOCK_POISONED)?;

        match listings.iter_mut().find(|listing| listing.id.as_ref() == Some(listing_id)) {
            Some(listing) => {
                if !listing.reviews.contains(review_id) {
                    listing.reviews.push(*review_id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        let mut listings = self.listings.write().context(LOCK_POISONED)?;

        match listings.iter_mut().find(|listing| listing.id.as_ref() == Some(listing_id)) {
            Some(listing) => {
                listing.reviews.retain(|id| id != review_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 리뷰 수
    pub fn count(&self) -> Result<usize, AppError> {
        Ok(self.reviews.read().context(LOCK_POISONED)?.len())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, mut review: Review) -> Result<Review, AppError> {
        review.id = Some(ObjectId::new());
        self.reviews.write().context(LOCK_POISONED)?.push(review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>, AppError> {
        let reviews = self.reviews.read().context(LOCK_POISONED)?;
        Ok(reviews.iter().find(|review| review.id.as_ref() == Some(id)).cloned())
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews.read().context(LOCK_POISONED)?;
        Ok(reviews
            .iter()
            .filter(|review| review.id.as_ref().is_some_and(|id| ids.contains(id)))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut reviews = self.reviews.write().context(LOCK_POISONED)?;
        let before = reviews.len();
        reviews.retain(|review| review.id.as_ref() != Some(id));
        Ok(reviews.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users
            .iter()
            .filter(|user| user.id.as_ref().is_some_and(|id| ids.contains(id)))
            .cloned()
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().context(LOCK_POISONED)?;

        if users.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::ConflictError("A user with the given username is already registered".to_string()));
        }
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("A user with the given email is already registered".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ListingImage;

    fn fields(title: &str) -> ListingFields {
        ListingFields {
            title: title.to_string(),
            description: "desc".to_string(),
            image: None,
            price: 10.0,
            location: "Lisbon".to_string(),
            country: "Portugal".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_listing_insert_keeps_order() {
        let repo = InMemoryListingRepository::new();
        let owner = ObjectId::new();

        for title in ["first", "second", "third"] {
            repo.insert(Listing::new(fields(title), owner)).await.unwrap();
        }

        let titles: Vec<String> = repo.find_all().await.unwrap()
            .into_iter()
            .map(|listing| listing.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[actix_web::test]
    async fn test_push_review_is_idempotent() {
        let repo = InMemoryListingRepository::new();
        let listing = repo.insert(Listing::new(fields("cabin"), ObjectId::new())).await.unwrap();
        let listing_id = listing.id.unwrap();
        let review_id = ObjectId::new();

        assert!(repo.push_review(&listing_id, &review_id).await.unwrap());
        assert!(repo.push_review(&listing_id, &review_id).await.unwrap());
        assert!(!repo.push_review(&ObjectId::new(), &review_id).await.unwrap());

        let stored = repo.find_by_id(&listing_id).await.unwrap().unwrap();
        assert_eq!(stored.reviews, vec![review_id]);

        assert!(repo.pull_review(&listing_id, &review_id).await.unwrap());
        let stored = repo.find_by_id(&listing_id).await.unwrap().unwrap();
        assert!(stored.reviews.is_empty());
    }

    #[actix_web::test]
    async fn test_update_fields_keeps_image_when_not_given() {
        let repo = InMemoryListingRepository::new();
        let mut initial = fields("cabin");
        initial.image = ListingImage::from_url(Some("https://img.example/cabin.jpg"));
        let listing = repo.insert(Listing::new(initial, ObjectId::new())).await.unwrap();
        let id = listing.id.unwrap();

        let updated = repo.update_fields(&id, fields("lodge")).await.unwrap().unwrap();

        assert_eq!(updated.title, "lodge");
        assert_eq!(updated.image.url, "https://img.example/cabin.jpg");
        assert!(repo.update_fields(&ObjectId::new(), fields("x")).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_user_insert_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("amy".into(), "amy@example.com".into(), "hash".into())).await.unwrap();

        let same_name = repo.insert(User::new("amy".into(), "other@example.com".into(), "hash".into())).await;
        assert!(matches!(same_name, Err(AppError::ConflictError(_))));

        let same_email = repo.insert(User::new("bob".into(), "amy@example.com".into(), "hash".into())).await;
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
    }
}
