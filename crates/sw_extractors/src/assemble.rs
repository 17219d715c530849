use crate::blocks::{ContentBlock, EmbedRef};

/// Regenerates sanitized markup from the ordered block stream. Each
/// fragment is independently renderable.
pub fn render_html(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Text(text) => format!("<p class=\"text\">{}</p>", text),
            ContentBlock::Heading { level, text } => format!("<h{0}>{1}</h{0}>", level, text),
            ContentBlock::Media(EmbedRef::Url(url)) => format!("<p class=\"media\">{}</p>", url),
            ContentBlock::Media(EmbedRef::Html(html)) => format!("<p class=\"media\">{}</p>", html),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flat plain-text rendition used for summarization. Media contributes
/// nothing here.
pub fn plain_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) | ContentBlock::Heading { text, .. } => Some(text.as_str()),
            ContentBlock::Media(_) => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
