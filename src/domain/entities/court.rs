use crate::domain::constants::{CURRENT_USER, REVIEW_MAX_CHARS};
use crate::domain::value_objects::{Coordinates, CourtId, CourtStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_indoor: bool,
    pub status: CourtStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Court {
    /// 登録フォームの内容から新しいコートを作成する。状態は常に `pending`
    pub fn create(draft: CourtDraft) -> Result<Self, String> {
        draft.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: CourtId::generate(),
            name: draft.name.trim().to_string(),
            address: draft.address.trim().to_string(),
            latitude: draft.latitude,
            longitude: draft.longitude,
            review: normalize_optional(draft.review),
            image_url: normalize_optional(draft.image_url),
            is_indoor: draft.is_indoor,
            status: CourtStatus::Pending,
            created_by: CURRENT_USER.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// 指定されたフィールドだけを上書きする（`updated_at` は変更しない）
    pub fn apply(&mut self, patch: &CourtPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(coordinates) = patch.coordinates {
            self.latitude = coordinates.latitude;
            self.longitude = coordinates.longitude;
        }
        if let Some(review) = &patch.review {
            self.review = review.clone();
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(is_indoor) = patch.is_indoor {
            self.is_indoor = is_indoor;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// 名前または住所に検索語を含むか（大文字小文字を区別しない）
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.address.to_lowercase().contains(&query)
    }
}

/// 登録フォームの入力値
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourtDraft {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_indoor: bool,
}

impl CourtDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("장소명을 입력해주세요".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("주소를 입력해주세요".to_string());
        }
        if let Some(review) = &self.review
            && review.chars().count() > REVIEW_MAX_CHARS
        {
            return Err(format!("리뷰는 {REVIEW_MAX_CHARS}자 이하로 입력해주세요"));
        }
        Coordinates::new(self.latitude, self.longitude)?;
        Ok(())
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// 部分更新。`Some(None)` はオプション項目の削除を表す
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub review: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub is_indoor: Option<bool>,
    pub status: Option<CourtStatus>,
}

impl CourtPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
