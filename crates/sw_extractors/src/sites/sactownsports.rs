use crate::profile::{EmbedAction, EmbedKind, EmbedRule, NodeScope, SiteProfile, StopScope};

/// sactownsports.com keeps the whole story under `div.story_body` as flat
/// paragraph children. Video embeds ship as `noscript` fallbacks holding
/// the player iframe, and the article proper ends at a "read more below"
/// teaser line.
pub const SACTOWNSPORTS: SiteProfile = SiteProfile {
    slug: "sactownsports",
    source: "sactownsports.com",
    hosts: &["sactownsports.com"],
    container: "div.story_body",
    scope: NodeScope::Children,
    block_list: &[],
    allow_list: &[],
    stop_prefixes: &["read more below"],
    stop_scope: StopScope::AnyNode,
    min_chars: 1,
    min_words: 1,
    reject_link_only: false,
    keep_headings: false,
    filter_chrome: false,
    structural_image_first: false,
    embeds: &[EmbedRule {
        selector: "noscript",
        action: EmbedAction::Inline(EmbedKind::VideoFrame {
            hosts: &["youtube.com", "youtube-nocookie.com", "player.vimeo.com"],
        }),
    }],
};
