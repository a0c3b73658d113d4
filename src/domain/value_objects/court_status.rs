use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 登録されたコートの承認状態。このクライアントは状態遷移を行わない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourtStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CourtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtStatus::Pending => "pending",
            CourtStatus::Approved => "approved",
            CourtStatus::Rejected => "rejected",
        }
    }

    /// 一覧・詳細で使う表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            CourtStatus::Approved => "승인",
            CourtStatus::Pending => "검토",
            CourtStatus::Rejected => "거부",
        }
    }
}

impl fmt::Display for CourtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourtStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CourtStatus::Pending),
            "approved" => Ok(CourtStatus::Approved),
            "rejected" => Ok(CourtStatus::Rejected),
            other => Err(format!("Unknown court status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CourtStatus::Approved).unwrap(),
            "\"approved\""
        );
        let parsed: CourtStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, CourtStatus::Rejected);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<CourtStatus>("\"archived\"").is_err());
        assert!("archived".parse::<CourtStatus>().is_err());
    }
}
