//! # 리뷰 리포지토리 구현
//!
//! `reviews` 컬렉션에 대한 데이터 액세스입니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::Review,
};

/// 리뷰 컬렉션 이름
pub const REVIEWS_COLLECTION: &str = "reviews";

/// 리뷰 데이터 액세스 트레이트
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: Review) -> Result<Review, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>, AppError>;

    /// 주어진 ID에 해당하는 리뷰를 조회합니다. 결과 순서는 보장하지 않으며
    /// 존재하지 않는 ID는 결과에서 빠집니다.
    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>, AppError>;

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB 기반 리뷰 리포지토리
#[derive(Clone)]
pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Review>(REVIEWS_COLLECTION),
        }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn insert(&self, mut review: Review) -> Result<Review, AppError> {
        let result = self.collection
            .insert_one(&review)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted review has no ObjectId".to_string()))?;
        review.id = Some(id);

        Ok(review)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Review>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<Review>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
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
}
