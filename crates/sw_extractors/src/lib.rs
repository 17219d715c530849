pub mod assemble;
pub mod blocks;
pub mod fetch;
pub mod metadata;
pub mod pipeline;
pub mod profile;
pub mod sites;
pub mod summary;

pub use fetch::{HttpFetcher, PageFetcher};
pub use pipeline::{Extractor, ExtractorManager};
pub use profile::SiteProfile;

pub mod prelude {
    pub use crate::fetch::PageFetcher;
    pub use crate::pipeline::{Extractor, ExtractorManager};
    pub use sw_core::{ArticleResult, Error, ExtractOutput, Result};
}
