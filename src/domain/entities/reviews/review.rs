//! Review Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 숙소 리뷰
///
/// 숙소 문서의 `reviews` 배열이 이 문서의 `_id`를 참조합니다.
/// 리뷰 쪽에는 숙소에 대한 역참조가 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub comment: String,
    /// 1..=5
    pub rating: u8,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<ObjectId>,
}

impl Review {
    pub fn new(comment: String, rating: u8, author: ObjectId) -> Self {
        Self {
            id: None,
            comment,
            rating,
            created_at: DateTime::now(),
            author: Some(author),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_written_by(&self, user_id: &ObjectId) -> bool {
        self.author.as_ref() == Some(user_id)
    }
}
