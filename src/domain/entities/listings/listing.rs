//! Listing Entity Implementation
//!
//! 숙소 엔티티입니다. `listings` 컬렉션에 저장되며,
//! 리뷰는 `reviews` 배열에 `ObjectId` 참조로만 보관합니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// 이미지 URL 없이 생성된 숙소에 저장되는 기본 파일명
pub const DEFAULT_IMAGE_FILENAME: &str = "listingimage";

/// 이미지 URL 없이 생성된 숙소에 저장되는 기본 이미지
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=800&q=60";

/// 숙소 대표 이미지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub filename: String,
    pub url: String,
}

impl Default for ListingImage {
    fn default() -> Self {
        Self {
            filename: DEFAULT_IMAGE_FILENAME.to_string(),
            url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl ListingImage {
    /// 사용자가 입력한 URL로 이미지를 만듭니다. 빈 값이면 `None`입니다.
    pub fn from_url(url: Option<&str>) -> Option<Self> {
        url.map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| Self {
                filename: DEFAULT_IMAGE_FILENAME.to_string(),
                url: url.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image: ListingImage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 리뷰 참조 목록 (삽입 순서 유지, 중복 없음)
    #[serde(default)]
    pub reviews: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ObjectId>,
}

/// 생성/수정 요청에서 사용자가 바꿀 수 있는 필드 묶음
///
/// `owner`와 `reviews`는 포함하지 않으므로 수정 요청으로 바뀌지 않습니다.
/// `image`가 `None`이면 생성 시에는 기본 이미지, 수정 시에는 기존 이미지가 유지됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub image: Option<ListingImage>,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl Listing {
    pub fn new(fields: ListingFields, owner: ObjectId) -> Self {
        Self {
            id: None,
            title: fields.title,
            description: Some(fields.description),
            image: fields.image.unwrap_or_default(),
            price: Some(fields.price),
            location: Some(fields.location),
            country: Some(fields.country),
            reviews: Vec::new(),
            owner: Some(owner),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 이 숙소의 소유자인지 확인합니다.
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.owner.as_ref() == Some(user_id)
    }

    /// 수정 가능한 필드를 덮어씁니다.
    pub fn apply(&mut self, fields: ListingFields) {
        self.title = fields.title;
        self.description = Some(fields.description);
        if let Some(image) = fields.image {
            self.image = image;
        }
        self.price = Some(fields.price);
        self.location = Some(fields.location);
        self.country = Some(fields.country);
    }
}

impl ListingFields {
    /// MongoDB `$set` 문서로 변환합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! {
            "title": self.title.as_str(),
            "description": self.description.as_str(),
            "price": self.price,
            "location": self.location.as_str(),
            "country": self.country.as_str(),
        };
        if let Some(image) = &self.image {
            set.insert("image", doc! { "filename": image.filename.as_str(), "url": image.url.as_str() });
        }
        set
    }
}
