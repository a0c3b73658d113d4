use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Clone)]
struct CacheEntry<V> {
    data: V,
    expires_at: Instant,
}

/// 期限付きのメモリキャッシュ
pub struct MemoryCache<K, V> {
    entries: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    default_ttl: Duration,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
        }
    }

    pub async fn set(&self, key: K, value: V) {
        self.set_with_ttl(key, value, self.default_ttl).await;
    }

    pub async fn set_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let entry = CacheEntry {
            data: value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// 期限切れのエントリは返さない
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.data.clone())
    }

    pub async fn delete(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn cleanup_expired(&self) {
        let now = Instant::now();
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.expires_at > now);
    }

    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("서울".to_string(), 1).await;
        assert_eq!(cache.get(&"서울".to_string()).await, Some(1));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(cache.get(&"서울".to_string()).await, None);

        assert_eq!(cache.size().await, 1);
        cache.cleanup_expired().await;
        assert_eq!(cache.size().await, 0);
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(1u32, "a").await;
        cache.set(2u32, "b").await;

        cache.delete(&1).await;
        assert_eq!(cache.get(&1).await, None);
        assert_eq!(cache.get(&2).await, Some("b"));

        cache.clear().await;
        assert_eq!(cache.size().await, 0);
    }
}
