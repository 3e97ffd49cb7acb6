//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 숙소(`listings`), 리뷰(`reviews`), 사용자(`users`) 컬렉션이 모두 이 연결을 공유합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI
//! export MONGODB_URI="mongodb://127.0.0.1:27017"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="wanderlust"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new().await?;
//! let listings = database.get_database().collection::<Listing>("listings");
//! ```

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

/// 기본 MongoDB 연결 URI
pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";

/// 기본 데이터베이스 이름
pub const DEFAULT_DATABASE_NAME: &str = "wanderlust";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 함께 보관하며,
/// 리포지토리 계층이 컬렉션 핸들을 얻는 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 연결 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 환경 변수에서 연결 정보를 읽어와 MongoDB 클라이언트를 초기화하고,
    /// `ping` 명령으로 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://127.0.0.1:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "wanderlust")
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        Self::connect(&mongodb_uri, &database_name).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결합니다.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // 애플리케이션 이름 설정 (서버 측 로그에서 식별용)
        client_options.app_name = Some("wanderlust".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let reviews = database.get_database().collection::<Review>("reviews");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
