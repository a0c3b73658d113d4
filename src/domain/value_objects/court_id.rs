use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// 直近に発行したミリ秒値。同一ミリ秒内の連続発行でも ID が重複しないようにする
static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// バスケットコートの識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourtId(String);

impl CourtId {
    pub fn new(value: String) -> Result<Self, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Court ID cannot be empty".to_string());
        }
        if trimmed.contains('/') {
            return Err(format!("Court ID must not contain '/': {trimmed}"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 現在時刻（ミリ秒）から新しい ID を発行する。プロセス内で単調増加する
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
        loop {
            let next = if now > last { now } else { last + 1 };
            match LAST_ISSUED_MS.compare_exchange_weak(
                last,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CourtId> for String {
    fn from(id: CourtId) -> Self {
        id.0
    }
}

impl PartialEq<str> for CourtId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CourtId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_empty_and_slash() {
        assert!(CourtId::new("  ".to_string()).is_err());
        assert!(CourtId::new("a/b".to_string()).is_err());
        assert_eq!(CourtId::new(" 42 ".to_string()).unwrap().as_str(), "42");
    }

    #[test]
    fn generated_ids_are_unique_and_increasing() {
        let ids: Vec<CourtId> = (0..500).map(|_| CourtId::generate()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let numeric: Vec<i64> = ids.iter().map(|id| id.as_str().parse().unwrap()).collect();
        assert!(numeric.windows(2).all(|w| w[0] < w[1]));
    }
}
