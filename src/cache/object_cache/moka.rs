use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 进程内缓存，条目统一使用配置的 TTL
pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        if config.cache.default_ttl == 0 {
            return Err("cache.default_ttl must be greater than 0".to_string());
        }
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            Duration::from_secs(config.cache.default_ttl),
        ))
    }

    pub fn with_settings(max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, ttl: {:?}",
            max_capacity, ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // 单条 TTL 不生效，统一使用构建时的 TTL
        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL for key: {}", key);
        }
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_typed_round_trip_through_dyn_cache() {
        let cache: Box<dyn ObjectCache> =
            Box::new(MokaCacheWrapper::with_settings(100, Duration::from_secs(60)));

        cache.insert("user:1".to_string(), &vec![1, 2, 3], 0).await;
        assert_eq!(
            cache.get::<Vec<i32>>("user:1").await,
            CacheResult::Found(vec![1, 2, 3])
        );

        cache.remove("user:1").await;
        assert_eq!(cache.get::<Vec<i32>>("user:1").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_unparsable_value_is_reported() {
        let cache: Box<dyn ObjectCache> =
            Box::new(MokaCacheWrapper::with_settings(100, Duration::from_secs(60)));

        cache
            .insert_raw("broken".to_string(), "not json".to_string(), 0)
            .await;
        assert_eq!(
            cache.get::<Vec<i32>>("broken").await,
            CacheResult::ExistsButNoValue
        );
    }
}
