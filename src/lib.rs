use std::num::NonZeroUsize;
use std::sync::Arc;

use cache::LookupCache;
use config::{Config, ConfigError};
use error::StartupError;
use minijinja::Environment;
use models::Lookup;
use resolver::VariantResolver;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod resolver;
pub mod router;
pub mod routes;
pub mod utils;
pub mod view;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<LookupCache>,
    pub resolver: Arc<VariantResolver>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let capacity =
            NonZeroUsize::new(config.cache_capacity).ok_or_else(|| ConfigError::Invalid {
                key: "CACHE_CAPACITY",
                value: config.cache_capacity.to_string(),
            })?;
        let resolver = VariantResolver::from_config(&config)?;
        let templates = view::build_templates()?;

        Ok(Self {
            cache: Arc::new(LookupCache::new(capacity)),
            resolver: Arc::new(resolver),
            templates: Arc::new(templates),
            config,
        })
    }

    /// 经由缓存查询一个已校验的 rsID
    pub async fn lookup(&self, rsid: &str) -> Lookup {
        self.cache
            .get_or_resolve(rsid, || self.resolver.resolve(rsid))
            .await
    }
}
