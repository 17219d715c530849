use scraper::{Html, Selector};
use sw_core::text::normalize_ws;

/// Document-level metadata pulled from head tags and prominent structural
/// elements. Every field defaults to `""` when nothing matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Probes a fixed cascade of selectors per field; the first non-empty match
/// wins and nothing is merged across sources. Sites populate wildly
/// different subsets of the standard tags, so every probe must tolerate
/// absence. `structural_image_first` flips the image cascade so an
/// `article img` beats the `og:image` tag.
pub fn resolve(doc: &Html, structural_image_first: bool) -> PageMeta {
    let meta_image = || meta_content(doc, &["og:image", "twitter:image", "image"]);
    let structural_image = || {
        first_attr(
            doc,
            &[
                "article img",
                "main img",
                "img[class*='hero']",
                "img[class*='featured']",
            ],
            "src",
        )
    };
    PageMeta {
        url: first_attr(doc, &["link[rel='canonical']"], "href")
            .or_else(|| meta_content(doc, &["og:url", "twitter:url"]))
            .unwrap_or_default(),
        title: first_text(doc, &["article h1", "main h1", "h1"])
            .or_else(|| meta_content(doc, &["og:title", "twitter:title", "title"]))
            .or_else(|| first_text(doc, &["title"]))
            .unwrap_or_default(),
        description: first_text(doc, &["article h1 + div"])
            .or_else(|| {
                meta_content(doc, &["og:description", "description", "twitter:description"])
            })
            .unwrap_or_default(),
        image: if structural_image_first {
            structural_image().or_else(meta_image)
        } else {
            meta_image().or_else(structural_image)
        }
        .unwrap_or_default(),
    }
}

/// Tries `meta[property=..]` then `meta[name=..]` for each name in order.
fn meta_content(doc: &Html, names: &[&str]) -> Option<String> {
    for name in names {
        for attr in ["property", "name"] {
            let selector = Selector::parse(&format!("meta[{}='{}']", attr, name)).ok()?;
            if let Some(content) = doc
                .select(&selector)
                .next()
                .and_then(|el| el.value().attr("content"))
            {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let selector = Selector::parse(raw).ok()?;
        if let Some(el) = doc.select(&selector).next() {
            let text = normalize_ws(&el.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn first_attr(doc: &Html, selectors: &[&str], attr: &str) -> Option<String> {
    for raw in selectors {
        let selector = Selector::parse(raw).ok()?;
        if let Some(value) = doc.select(&selector).next().and_then(|el| el.value().attr(attr)) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
