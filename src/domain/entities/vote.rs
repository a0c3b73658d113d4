use crate::domain::value_objects::{CourtId, VoteType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// コート承認に対する投票
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: String,
    pub court_id: CourtId,
    pub user_id: String,
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(court_id: CourtId, user_id: String, vote_type: VoteType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            court_id,
            user_id,
            vote_type,
            created_at: Utc::now(),
        }
    }
}
