use std::sync::Arc;

use scraper::Html;
use sw_cache::Keyspace;
use sw_core::{ArticleResult, ExtractOutput, ExtractionMeta, Result};
use tracing::{debug, error, warn};

use crate::assemble;
use crate::blocks;
use crate::fetch::PageFetcher;
use crate::metadata;
use crate::profile::SiteProfile;
use crate::summary;

/// One per site: checks the cache, fetches and parses the page, runs the
/// site's classification rules and writes the outcome back to the cache.
///
/// `extract` never surfaces an error to the caller; failures become
/// `{error: 1, data: null}` results and are negatively cached so repeated
/// requests against a failing source short-circuit until the TTL expires.
pub struct Extractor {
    profile: &'static SiteProfile,
    fetcher: Arc<dyn PageFetcher>,
    cache: Keyspace,
}

impl Extractor {
    pub fn new(profile: &'static SiteProfile, fetcher: Arc<dyn PageFetcher>, cache: Keyspace) -> Self {
        Self {
            profile,
            fetcher,
            cache,
        }
    }

    pub fn slug(&self) -> &str {
        self.profile.slug
    }

    pub fn source(&self) -> &str {
        self.profile.source
    }

    pub fn can_handle(&self, url: &str) -> bool {
        self.profile.can_handle(url)
    }

    pub async fn extract(&self, url: &str) -> ExtractOutput {
        match self.cache.load::<ExtractOutput>(url).await {
            Ok(Some(cached)) => {
                debug!("{}: use article data from cache: {}", self.profile.slug, url);
                return cached;
            }
            Ok(None) => {}
            Err(err) => warn!("{}: cache read failed: {}", self.profile.slug, err),
        }

        debug!("{}: extract article data: {}", self.profile.slug, url);
        let output = match self.run(url).await {
            Ok(data) => {
                ExtractOutput::success(format!("{} article extracted", self.profile.source), data)
            }
            Err(err) => {
                error!("{}: extracting failed: \"{}\": {}", self.profile.slug, url, err);
                ExtractOutput::failure(err.to_string())
            }
        };

        let written = if output.is_failure() {
            self.cache.save_failure(url, &output).await
        } else {
            self.cache.save(url, &output).await
        };
        if let Err(err) = written {
            warn!("{}: cache write failed: {}", self.profile.slug, err);
        }

        output
    }

    async fn run(&self, url: &str) -> Result<ArticleResult> {
        let html = self.fetcher.fetch(url).await?;
        let doc = Html::parse_document(html.trim());

        let meta = metadata::resolve(&doc, self.profile.structural_image_first);
        let classified = blocks::classify(&doc, self.profile);

        let text = assemble::plain_text(&classified.blocks);
        Ok(ArticleResult {
            link: meta.url.trim().to_string(),
            title: meta.title.trim().to_string(),
            image: meta.image.trim().to_string(),
            summary: summary::summarize(&meta.description, &text),
            content: assemble::render_html(&classified.blocks),
            metadata: ExtractionMeta {
                embeds: classified.embeds,
            },
        })
    }
}

/// Routes extraction requests to the right site extractor.
pub struct ExtractorManager {
    extractors: Vec<Extractor>,
}

impl ExtractorManager {
    pub fn new(extractors: Vec<Extractor>) -> Self {
        Self { extractors }
    }

    pub fn get(&self, slug: &str) -> Option<&Extractor> {
        self.extractors.iter().find(|e| e.slug() == slug)
    }

    pub fn find_for_url(&self, url: &str) -> Option<&Extractor> {
        self.extractors.iter().find(|e| e.can_handle(url))
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.slug()).collect()
    }
}
