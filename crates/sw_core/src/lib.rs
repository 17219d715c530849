pub mod config;
pub mod error;
pub mod models;
pub mod text;

pub use config::Config;
pub use error::Error;
pub use models::{ArticleResult, ExtractOutput, ExtractionMeta, SocialEmbed};

pub type Result<T> = std::result::Result<T, Error>;
