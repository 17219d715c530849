use std::sync::Arc;

use sw_cache::{CacheStore, Keyspace};
use sw_core::Config;

use crate::fetch::PageFetcher;
use crate::pipeline::{Extractor, ExtractorManager};
use crate::profile::SiteProfile;

pub mod hailflorida;
pub mod sactownsports;
pub mod sicom;

pub use hailflorida::HAILFLORIDA;
pub use sactownsports::SACTOWNSPORTS;
pub use sicom::SICOM;

/// Every supported site, in routing order.
pub fn profiles() -> Vec<&'static SiteProfile> {
    vec![&SICOM, &SACTOWNSPORTS, &HAILFLORIDA]
}

/// Builds one extractor per site, each with its own cache namespace.
pub fn manager(
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<dyn CacheStore>,
    config: &Config,
) -> ExtractorManager {
    let extractors = profiles()
        .into_iter()
        .map(|profile| {
            let cache = Keyspace::new(
                store.clone(),
                format!("{}-{}-article", config.cache_prefix, profile.slug),
                config.article_cache_ttl,
                config.failure_cache_ttl,
            );
            Extractor::new(profile, fetcher.clone(), cache)
        })
        .collect();
    ExtractorManager::new(extractors)
}
