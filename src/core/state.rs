//! 애플리케이션 공유 상태
//!
//! 서비스 인스턴스와 세션 설정을 한 곳에 모아 `web::Data`로 주입합니다.
//! 세션 저장소 자체는 `actix-session` 미들웨어가 가지며, 여기에는 쿠키 키와
//! 설정만 둡니다. 구성 방식은 세 가지입니다.
//!
//! | 생성자 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`AppState::from_env`] | MongoDB | 서버 실행 |
//! | [`AppState::in_memory`] | 메모리 리포지토리 | 테스트, 로컬 데모 |
//! | [`AppState::new`] | 임의의 리포지토리 조합 | 직접 조립 |

use std::sync::Arc;
use actix_web::cookie::Key;
use crate::{
    config::{load_session_key, ServerConfig, SessionConfig},
    core::errors::AppError,
    db::Database,
    repositories::{
        InMemoryListingRepository, InMemoryReviewRepository, InMemoryUserRepository,
        ListingRepository, MongoListingRepository, MongoReviewRepository, MongoUserRepository,
        ReviewRepository, UserRepository,
    },
    services::{ListingService, ReviewService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<ListingService>,
    pub reviews: Arc<ReviewService>,
    pub users: Arc<UserService>,
    pub session_config: SessionConfig,
    /// 세션 쿠키 서명/암호화 키. 모든 워커가 같은 키를 공유해야 합니다.
    pub session_key: Key,
}

impl AppState {
    pub fn new(
        listing_repo: Arc<dyn ListingRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        user_repo: Arc<dyn UserRepository>,
        session_config: SessionConfig,
        session_key: Key,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            listings: Arc::new(ListingService::new(
                listing_repo.clone(),
                review_repo.clone(),
                user_repo.clone(),
            )),
            reviews: Arc::new(ReviewService::new(listing_repo, review_repo)),
            users: Arc::new(UserService::new(user_repo, bcrypt_cost)),
            session_config,
            session_key,
        }
    }

    /// 메모리 저장소만으로 구성된 상태
    ///
    /// ```rust,ignore
    /// let app = test::init_service(build_app(AppState::in_memory(4))).await;
    /// ```
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(InMemoryListingRepository::new()),
            Arc::new(InMemoryReviewRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            SessionConfig::default(),
            Key::generate(),
            bcrypt_cost,
        )
    }

    /// 환경 변수 설정으로 MongoDB에 연결합니다.
    ///
    /// # Errors
    ///
    /// * `DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    pub async fn from_env(server: &ServerConfig) -> Result<Self, AppError> {
        log::info!("📡 데이터베이스 연결 중...");
        let database = Database::new()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let user_repo = MongoUserRepository::new(&database);
        user_repo.create_indexes().await?;

        Ok(Self::new(
            Arc::new(MongoListingRepository::new(&database)),
            Arc::new(MongoReviewRepository::new(&database)),
            Arc::new(user_repo),
            SessionConfig::from_env(),
            load_session_key(),
            server.bcrypt_cost,
        ))
    }
}
