//! User Entity Implementation
//!
//! 사용자명/비밀번호 기반 로컬 계정입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 고유 사용자명
    pub username: String,
    /// 고유 이메일
    pub email: String,
    /// bcrypt 해시 (솔트 포함)
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
