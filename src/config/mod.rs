//! # Configuration Module
//!
//! Wanderlust 서버의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽어오며, `main`에서 `PROFILE`에 맞는
//! `.env.<profile>` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 서버 바인딩, 비밀번호 해싱 설정
//! - [`session_config`] - 세션 쿠키, 쿠키 키, 세션 저장소 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://127.0.0.1:27017"
//! export DATABASE_NAME="wanderlust"
//!
//! # 세션
//! export SESSION_STORE="redis"          # cookie (기본값) | redis
//! export REDIS_URL="redis://localhost:6379"
//! export SESSION_TTL_DAYS="7"            # 1-365
//! export SESSION_COOKIE_SECURE="true"
//! export SESSION_SECRET="..."            # 64바이트 이상
//!
//! # 보안
//! export BCRYPT_COST="12"               # 4-15 범위
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, SessionConfig};
//!
//! let bind_address = ServerConfig::from_env().bind_address();
//! let session = SessionConfig::from_env();
//! ```

pub mod server_config;
pub mod session_config;

pub use server_config::*;
pub use session_config::*;
