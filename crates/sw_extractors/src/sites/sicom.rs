use crate::profile::{EmbedAction, EmbedKind, EmbedRule, NodeScope, SiteProfile, StopScope};

/// si.com tags every editorial node with `data-mm-id`. Paragraphs must be
/// real sentences (not bare link captions), traversal ends at the "How to
/// watch" / "More ..." section headings, and tweets arrive as figures
/// wrapping a `/status/` link with a `ref_src` tracking suffix.
pub const SICOM: SiteProfile = SiteProfile {
    slug: "sicom",
    source: "si.com",
    hosts: &["si.com"],
    container: "body",
    scope: NodeScope::Marked("[data-mm-id]"),
    block_list: &[
        "don't miss out on any news",
        "more of the latest",
        "please let us know",
        "ensure you follow",
        "follow along to keep track",
        "this story will be updated",
        "for more coverage of",
    ],
    allow_list: &["coverage from"],
    stop_prefixes: &["how to", "more"],
    stop_scope: StopScope::Headings,
    min_chars: 0,
    min_words: 4,
    reject_link_only: true,
    keep_headings: false,
    filter_chrome: false,
    structural_image_first: false,
    embeds: &[EmbedRule {
        selector: "figure",
        action: EmbedAction::Inline(EmbedKind::SocialLink {
            markers: &["/status/"],
        }),
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{classify, ContentBlock, EmbedRef};
    use scraper::Html;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn test_tweet_figures_interleave_with_text() {
        let doc = page(
            r#"<p data-mm-id="1">The quarterback threw for four hundred yards on Sunday.</p>
            <figure data-mm-id="2">
              <a href="https://twitter.com/team/status/1234?ref_src=twsrc">tweet</a>
            </figure>
            <p data-mm-id="3">The defense forced three turnovers in the second half.</p>"#,
        );
        let classified = classify(&doc, &SICOM);
        assert_eq!(classified.blocks.len(), 3);
        assert_eq!(
            classified.blocks[1],
            ContentBlock::Media(EmbedRef::Url(
                "https://twitter.com/team/status/1234".to_string()
            ))
        );
    }

    #[test]
    fn test_how_to_heading_stops_traversal() {
        let doc = page(
            r#"<p data-mm-id="1">A full recap of the game follows below.</p>
            <h2 data-mm-id="2">How to Watch Next Week</h2>
            <p data-mm-id="3">This paragraph belongs to the watch guide.</p>"#,
        );
        let classified = classify(&doc, &SICOM);
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "A full recap of the game follows below.".to_string()
            )]
        );
    }

    #[test]
    fn test_link_caption_paragraphs_are_dropped() {
        let doc = page(
            r#"<p data-mm-id="1"><a href="https://si.com/x">Read the full injury report here now</a></p>
            <p data-mm-id="2">Actual reporting with several sentences of detail.</p>"#,
        );
        let classified = classify(&doc, &SICOM);
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "Actual reporting with several sentences of detail.".to_string()
            )]
        );
    }

    #[test]
    fn test_boilerplate_phrases_are_dropped() {
        let doc = page(
            r#"<p data-mm-id="1">Don't miss out on any news from training camp.</p>
            <p data-mm-id="2">The starters return to practice on Wednesday.</p>"#,
        );
        let classified = classify(&doc, &SICOM);
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "The starters return to practice on Wednesday.".to_string()
            )]
        );
    }
}
