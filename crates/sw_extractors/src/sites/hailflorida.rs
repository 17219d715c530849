use crate::profile::{EmbedAction, EmbedKind, EmbedRule, NodeScope, SiteProfile, StopScope};

/// hailfloridahail.com renders the story inside `main` with `data-mm-id`
/// markers on paragraphs and subheadings. Tweets are excluded from the body
/// and surfaced in the article metadata instead; the markup is noisy enough
/// that the lenient fallback matters here.
pub const HAILFLORIDA: SiteProfile = SiteProfile {
    slug: "hailflorida",
    source: "hailfloridahail.com",
    hosts: &["hailfloridahail.com"],
    container: "main",
    scope: NodeScope::Marked("p[data-mm-id], h2[data-mm-id], h3[data-mm-id], h4[data-mm-id]"),
    block_list: &[
        "would you like me to modify",
        "for more information",
        "follow along",
        "stay tuned",
        "more coverage",
        "this story will be updated",
        "read more:",
        "related:",
        "you might also like",
    ],
    allow_list: &[],
    stop_prefixes: &[],
    stop_scope: StopScope::Headings,
    min_chars: 10,
    min_words: 1,
    reject_link_only: false,
    keep_headings: true,
    filter_chrome: true,
    structural_image_first: true,
    embeds: &[
        EmbedRule {
            selector: "blockquote.twitter-tweet",
            action: EmbedAction::Collect(EmbedKind::SocialLink {
                markers: &["/status/"],
            }),
        },
        EmbedRule {
            selector: "iframe[src*='twitter']",
            action: EmbedAction::Strip,
        },
        EmbedRule {
            selector: "[data-tweet-id]",
            action: EmbedAction::Strip,
        },
    ],
};
