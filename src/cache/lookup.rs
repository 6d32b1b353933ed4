use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;
use serde::Serialize;

use crate::models::{Lookup, LookupError, VariantRecord};

/// 进程内的 rsID 查询缓存，按最近最少使用淘汰
///
/// 错误结果同样会被缓存，重复查询一个不存在的变异不会再次请求上游。
/// 锁只在读写映射时持有，不会跨越上游请求的 await，
/// 因此并发查询同一个未缓存的 rsID 可能各自请求一次上游。
pub struct LookupCache {
    entries: Mutex<LruCache<String, Lookup>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl LookupCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// 命中时直接返回已缓存的结果，否则调用 `resolve` 并写入缓存
    pub async fn get_or_resolve<F, Fut>(&self, rsid: &str, resolve: F) -> Lookup
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<VariantRecord, LookupError>>,
    {
        if let Some(cached) = self.get(rsid) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Cache hit for {}", rsid);
            return cached;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let outcome = resolve().await.map(Arc::new);
        self.lock().put(rsid.to_string(), outcome.clone());
        outcome
    }

    /// 读取并刷新该条目的最近使用时间
    pub fn get(&self, rsid: &str) -> Option<Lookup> {
        self.lock().get(rsid).cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
        tracing::info!("Lookup cache cleared");
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Lookup>> {
        // 持锁期间不会 panic，中毒后数据仍然可用
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
