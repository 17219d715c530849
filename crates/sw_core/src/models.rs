use serde::{Deserialize, Serialize};

/// Normalized article record produced by every site extractor.
///
/// Plain value type with no external references, so it can be serialized
/// into the cache and compared field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    pub link: String,
    pub title: String,
    pub image: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub metadata: ExtractionMeta,
}

/// Extractor-specific extras that ride along with the article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMeta {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<SocialEmbed>,
}

/// A social post pulled out of the body and surfaced separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialEmbed {
    pub text: String,
    pub url: String,
}

/// Uniform outcome shape of `extract(url)`. Failures carry `error: 1` and
/// no data; both variants are cached under the source URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOutput {
    pub error: u8,
    pub message: String,
    pub data: Option<ArticleResult>,
}

impl ExtractOutput {
    pub fn success(message: impl Into<String>, data: ArticleResult) -> Self {
        Self {
            error: 0,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: 1,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error != 0
    }
}
