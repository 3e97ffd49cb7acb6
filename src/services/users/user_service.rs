//! # 사용자 서비스 구현
//!
//! 회원가입과 로그인 자격 증명 검증을 담당합니다.
//!
//! ## 보안 특징
//!
//! - **bcrypt 해싱**: 환경별 cost 설정 ([`crate::config::ServerConfig`])
//! - **솔트 자동 생성**: bcrypt가 해시마다 고유 솔트를 포함
//! - **동일한 실패 메시지**: 사용자명 없음과 비밀번호 불일치를 구분하지 않음

use std::sync::Arc;
use bcrypt::hash;
use crate::{
    core::errors::AppError,
    domain::{dto::SignupRequest, entities::User},
    repositories::UserRepository,
};

/// 로그인 실패 시 사용자에게 보여지는 메시지
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

pub struct UserService {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 사용자명 또는 이메일 중복
    /// * `InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: SignupRequest) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.username.trim().to_string(),
            request.email.trim().to_lowercase(),
            password_hash,
        );
        let user = self.users.insert(user).await?;

        log::info!("Total user registration took: {:?}", start_time.elapsed());
        log::info!("새 사용자 가입: {}", user.username);
        Ok(user)
    }

    /// 사용자명과 비밀번호를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 사용자가 없거나 비밀번호가 틀린 경우
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self.users
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}
