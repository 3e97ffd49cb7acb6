//! # 숙소 리포지토리 구현
//!
//! `listings` 컬렉션에 대한 데이터 액세스입니다.
//! 리뷰 참조 배열은 `$addToSet`/`$pull` 연산으로만 변경하여
//! 숙소의 다른 필드와 독립적으로 갱신됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::{Listing, ListingFields},
};

/// 숙소 컬렉션 이름
pub const LISTINGS_COLLECTION: &str = "listings";

/// 숙소 데이터 액세스 트레이트
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// 모든 숙소를 삽입 순서대로 조회합니다.
    async fn find_all(&self) -> Result<Vec<Listing>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>, AppError>;

    /// 새 숙소를 저장하고 ID가 채워진 숙소를 반환합니다.
    async fn insert(&self, listing: Listing) -> Result<Listing, AppError>;

    /// 수정 가능한 필드만 덮어씁니다. 숙소가 없으면 `None`입니다.
    async fn update_fields(&self, id: &ObjectId, fields: ListingFields) -> Result<Option<Listing>, AppError>;

    /// 숙소를 삭제합니다. 삭제된 문서가 있으면 `true`입니다.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 리뷰 참조를 추가합니다(이미 있으면 무시). 숙소가 있으면 `true`입니다.
    async fn push_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError>;

    /// 리뷰 참조를 제거합니다(없으면 무시). 숙소가 있으면 `true`입니다.
    async fn pull_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB 기반 숙소 리포지토리
#[derive(Clone)]
pub struct MongoListingRepository {
    collection: Collection<Listing>,
}

impl MongoListingRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Listing>(LISTINGS_COLLECTION),
        }
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        // ObjectId는 생성 시각 순으로 증가하므로 _id 정렬이 곧 삽입 순서
        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut listing: Listing) -> Result<Listing, AppError> {
        let result = self.collection
            .insert_one(&listing)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted listing has no ObjectId".to_string()))?;
        listing.id = Some(id);

        Ok(listing)
    }

    async fn update_fields(&self, id: &ObjectId, fields: ListingFields) -> Result<Option<Listing>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": fields.to_set_document() },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn push_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .update_one(
                doc! { "_id": *listing_id },
                doc! { "$addToSet": { "reviews": *review_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn pull_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .update_one(
                doc! { "_id": *listing_id },
                doc! { "$pull": { "reviews": *review_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}
