use crate::cache::{ObjectCache, get_object_cache_plugin, register_builtin_plugins};
use crate::config::AppConfig;
use crate::services::calendar::{CalendarClient, GoogleCalendarClient};
use crate::services::files::object_store::{ObjectStore, SignedUrlObjectStore};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub calendar: Arc<dyn CalendarClient>,
    pub object_store: Arc<dyn ObjectStore>,
}

/// 创建缓存实例，只有内存缓存一种后端
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    let constructor = get_object_cache_plugin(cache_type)
        .ok_or_else(|| format!("Cache backend '{cache_type}' not found in registry"))?;
    let cache = constructor().await?;
    warn!("Successfully created {} cache backend", cache_type);
    Ok(Arc::from(cache))
}

/// 创建外部日历客户端
fn create_calendar_client() -> Result<Arc<dyn CalendarClient>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let client = GoogleCalendarClient::new(&config.calendar)?;
    debug!("Calendar client targets {}", config.calendar.api_base_url);
    Ok(Arc::new(client))
}

/// 创建对象存储签名器
fn create_object_store() -> Result<Arc<dyn ObjectStore>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let store = SignedUrlObjectStore::new(&config.object_storage)?;
    Ok(Arc::new(store))
}

/// 准备服务器启动的上下文
/// 包括存储、缓存以及外部服务客户端
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    register_builtin_plugins();

    if cfg!(debug_assertions) {
        crate::cache::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    let calendar = create_calendar_client().expect("Failed to create calendar client");
    let object_store = create_object_store().expect("Failed to create object store signer");
    warn!("External service clients initialized");

    StartupContext {
        storage,
        cache,
        calendar,
        object_store,
    }
}
