//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스입니다.
//!
//! ## 데이터 무결성
//!
//! - `username`, `email` 유니크 인덱스 (`create_indexes`)
//! - 저장 전 중복 확인 후, 경합으로 인한 duplicate key 에러도 `ConflictError`로 변환

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::User,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 트레이트
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 주어진 ID에 해당하는 사용자를 조회합니다. 순서는 보장하지 않습니다.
    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 사용자명 또는 이메일이 이미 사용 중인 경우
    async fn insert(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다. 서버 시작 시 한 번 호출됩니다.
    ///
    /// - `username_unique`: 사용자명 유니크 인덱스
    /// - `email_unique`: 이메일 유니크 인덱스
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
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

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("A user with the given username is already registered".to_string()));
        }

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("A user with the given email is already registered".to_string()));
        }

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("A user with the given username or email is already registered".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted user has no ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }
}
