use scraper::{ElementRef, Html, Selector};
use sw_core::text::{is_valid_http_url, normalize_ws};
use sw_core::SocialEmbed;

use crate::profile::{EmbedAction, EmbedKind, NodeScope, SiteProfile, StopScope};

/// Canonical reference to an embedded media item. Whatever the shape, the
/// underlying link was validated as an absolute http(s) URL.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedRef {
    Url(String),
    Html(String),
}

/// One typed fragment of the story body, in document order. The ordering is
/// load-bearing: media renders interleaved with the surrounding text.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    /// Retained subheading; `level` is the source tag's rank (2 for h2, ...)
    /// so rendering can reproduce the original hierarchy.
    Heading { level: u8, text: String },
    Media(EmbedRef),
}

#[derive(Debug, Default)]
pub struct Classified {
    pub blocks: Vec<ContentBlock>,
    /// Embeds pulled out of the body by `Collect` rules.
    pub embeds: Vec<SocialEmbed>,
}

/// Paragraphs this short are UI chrome, not prose.
const FALLBACK_MIN_CHARS: usize = 10;

const CHROME_MARKERS: &[&str] = &["share", "related", "next:", "previous:"];

/// Walks the story body of `doc` according to the site profile and returns
/// ordered content blocks plus any collected embeds.
///
/// A missing container is not an error: the page simply has no extractable
/// body and the result is empty.
pub fn classify(doc: &Html, profile: &SiteProfile) -> Classified {
    let mut out = Classified::default();

    let container_sel = match Selector::parse(profile.container) {
        Ok(sel) => sel,
        Err(_) => return out,
    };
    let Some(container) = doc.select(&container_sel).next() else {
        return out;
    };

    let rules: Vec<(Selector, EmbedAction)> = profile
        .embeds
        .iter()
        .filter_map(|rule| Selector::parse(rule.selector).ok().map(|sel| (sel, rule.action)))
        .collect();

    // Collected carriers leave the body entirely and surface as metadata.
    for (sel, action) in &rules {
        if let EmbedAction::Collect(kind) = action {
            for carrier in container.select(sel) {
                if let Some(embed) = collect_social(&carrier, *kind) {
                    out.embeds.push(embed);
                }
            }
        }
    }

    let nodes: Vec<ElementRef> = match profile.scope {
        NodeScope::Children => container.children().filter_map(ElementRef::wrap).collect(),
        NodeScope::Marked(marker) => match Selector::parse(marker) {
            Ok(sel) => container.select(&sel).collect(),
            Err(_) => Vec::new(),
        },
    };

    let mut paragraphs: Vec<String> = Vec::new();

    for el in &nodes {
        let tag = el.value().name();
        let text = normalize_ws(&el.text().collect::<String>());
        let lower = text.to_lowercase();

        let stop_applies = match profile.stop_scope {
            StopScope::Headings => heading_level(tag).is_some(),
            StopScope::AnyNode => true,
        };
        if stop_applies
            && profile
                .stop_prefixes
                .iter()
                .any(|prefix| lower.starts_with(prefix))
        {
            // Everything after the stop point is discarded.
            break;
        }

        if let Some(rule) = rules.iter().find(|(sel, _)| sel.matches(el)) {
            if let (_, EmbedAction::Inline(kind)) = rule {
                if let Some(embed) = extract_embed(el, *kind) {
                    flush(&mut paragraphs, &mut out.blocks);
                    out.blocks.push(ContentBlock::Media(embed));
                }
                // An invalid or unparsable carrier is skipped, not an error.
            }
            continue;
        }

        if inside_carrier(el, &rules) {
            continue;
        }

        if let Some(level) = heading_level(tag) {
            if profile.keep_headings && accepts(&text, &lower, profile) {
                flush(&mut paragraphs, &mut out.blocks);
                out.blocks.push(ContentBlock::Heading { level, text });
            }
            continue;
        }

        if tag == "p" {
            if !accepts(&text, &lower, profile) {
                continue;
            }
            if profile.reject_link_only && link_only(el, &text) {
                continue;
            }
            paragraphs.push(text);
        }
    }
    flush(&mut paragraphs, &mut out.blocks);

    // Lenient fallback: the strict pass retained nothing, so re-scan every
    // paragraph in the container with only the length and block-list checks.
    if out.blocks.is_empty() {
        let p_sel = Selector::parse("p").expect("static selector");
        for p in container.select(&p_sel) {
            if inside_carrier(&p, &rules) {
                continue;
            }
            let text = normalize_ws(&p.text().collect::<String>());
            let lower = text.to_lowercase();
            if text.chars().count() >= FALLBACK_MIN_CHARS && !blocked(&lower, profile) {
                out.blocks.push(ContentBlock::Text(text));
            }
        }
    }

    out
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        _ => None,
    }
}

fn flush(paragraphs: &mut Vec<String>, blocks: &mut Vec<ContentBlock>) {
    if !paragraphs.is_empty() {
        blocks.push(ContentBlock::Text(paragraphs.join(" ")));
        paragraphs.clear();
    }
}

fn blocked(lower: &str, profile: &SiteProfile) -> bool {
    let hit = profile.block_list.iter().any(|phrase| lower.contains(phrase));
    // An allow phrase co-occurring re-admits legitimate content.
    hit && !profile.allow_list.iter().any(|phrase| lower.contains(phrase))
}

fn accepts(text: &str, lower: &str, profile: &SiteProfile) -> bool {
    if text.chars().count() < profile.min_chars {
        return false;
    }
    if text.split_whitespace().count() < profile.min_words {
        return false;
    }
    if blocked(lower, profile) {
        return false;
    }
    if profile.filter_chrome && CHROME_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return false;
    }
    true
}

/// True when the node lives inside any embed carrier, so its text must not
/// leak into the block stream.
fn inside_carrier(el: &ElementRef, rules: &[(Selector, EmbedAction)]) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| rules.iter().any(|(sel, _)| sel.matches(&ancestor)))
}

/// A paragraph whose whole text is its first link's text is navigation, not
/// prose.
fn link_only(el: &ElementRef, text: &str) -> bool {
    let a_sel = Selector::parse("a").expect("static selector");
    el.select(&a_sel)
        .next()
        .map(|a| normalize_ws(&a.text().collect::<String>()) == text)
        .unwrap_or(false)
}

fn extract_embed(el: &ElementRef, kind: EmbedKind) -> Option<EmbedRef> {
    match kind {
        EmbedKind::SocialLink { markers } => last_marked_link(el, markers).map(EmbedRef::Url),
        // The parser keeps noscript content as raw text, so the payload has
        // to be re-parsed before the iframe can be selected.
        EmbedKind::VideoFrame { hosts } => {
            let iframe_sel = Selector::parse("iframe").expect("static selector");
            for payload in [el.text().collect::<String>(), el.inner_html()] {
                let fragment = Html::parse_fragment(payload.trim());
                let iframe = fragment.select(&iframe_sel).find(|frame| {
                    frame
                        .value()
                        .attr("src")
                        .map_or(false, |src| hosts.iter().any(|host| src.contains(host)))
                });
                if let Some(iframe) = iframe {
                    let src = iframe.value().attr("src")?;
                    if !is_valid_http_url(src) {
                        return None;
                    }
                    return Some(EmbedRef::Html(iframe.html()));
                }
            }
            None
        }
    }
}

/// Last matching link wins: embed carriers usually end with the canonical
/// post URL. Tracking query parameters are stripped before validation.
fn last_marked_link(el: &ElementRef, markers: &[&str]) -> Option<String> {
    let a_sel = Selector::parse("a").expect("static selector");
    let mut found = None;
    for a in el.select(&a_sel) {
        if let Some(href) = a.value().attr("href") {
            if markers.iter().any(|marker| href.contains(marker)) {
                found = Some(href);
            }
        }
    }
    let href = found?;
    let clean = href.split('?').next().unwrap_or(href);
    if !is_valid_http_url(clean) {
        return None;
    }
    Some(clean.to_string())
}

fn collect_social(carrier: &ElementRef, kind: EmbedKind) -> Option<SocialEmbed> {
    let EmbedKind::SocialLink { markers } = kind else {
        return None;
    };
    let p_sel = Selector::parse("p").expect("static selector");
    let text = normalize_ws(&carrier.select(&p_sel).next()?.text().collect::<String>());
    if text.is_empty() {
        return None;
    }
    Some(SocialEmbed {
        text,
        url: last_marked_link(carrier, markers).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EmbedRule;

    const TEST_PROFILE: SiteProfile = SiteProfile {
        slug: "test",
        source: "test.example.com",
        hosts: &["test.example.com"],
        container: "main",
        scope: NodeScope::Children,
        block_list: &["follow us", "click here for"],
        allow_list: &["coverage from"],
        stop_prefixes: &["how to watch"],
        stop_scope: StopScope::AnyNode,
        min_chars: 10,
        min_words: 1,
        reject_link_only: false,
        keep_headings: true,
        filter_chrome: true,
        structural_image_first: false,
        embeds: &[EmbedRule {
            selector: "figure",
            action: EmbedAction::Inline(EmbedKind::SocialLink {
                markers: &["/status/"],
            }),
        }],
    };

    fn classify_body(body: &str) -> Classified {
        let doc = Html::parse_document(&format!("<html><body><main>{}</main></body></html>", body));
        classify(&doc, &TEST_PROFILE)
    }

    #[test]
    fn test_media_preserves_document_order() {
        let classified = classify_body(
            r#"<p>Opening paragraph text.</p>
               <figure><a href="https://x.com/u/status/123?ref_src=tw">tweet</a></figure>
               <p>Closing paragraph text.</p>"#,
        );
        assert_eq!(
            classified.blocks,
            vec![
                ContentBlock::Text("Opening paragraph text.".to_string()),
                ContentBlock::Media(EmbedRef::Url("https://x.com/u/status/123".to_string())),
                ContentBlock::Text("Closing paragraph text.".to_string()),
            ]
        );
    }

    #[test]
    fn test_consecutive_paragraphs_join_into_one_block() {
        let classified = classify_body(
            "<p>First sentence here.</p><p>Second sentence here.</p><p>Third sentence here.</p>",
        );
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "First sentence here. Second sentence here. Third sentence here.".to_string()
            )]
        );
    }

    #[test]
    fn test_stop_condition_discards_everything_after() {
        let classified = classify_body(
            r#"<p>Kept paragraph text.</p>
               <h2>How to watch the game tonight</h2>
               <p>Discarded paragraph text.</p>
               <figure><a href="https://x.com/u/status/9">t</a></figure>"#,
        );
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text("Kept paragraph text.".to_string())]
        );
    }

    #[test]
    fn test_block_list_drops_boilerplate() {
        let classified = classify_body(
            "<p>Real story content here.</p><p>Please follow us on social media.</p>",
        );
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text("Real story content here.".to_string())]
        );
    }

    #[test]
    fn test_allow_list_overrides_block_match() {
        let classified = classify_body(
            "<p>Follow us for continued coverage from the stadium tonight.</p>",
        );
        assert_eq!(classified.blocks.len(), 1);
    }

    #[test]
    fn test_chrome_text_is_rejected() {
        let classified = classify_body(
            "<p>Genuine story paragraph.</p><p>Next: the best moments of the week</p>",
        );
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text("Genuine story paragraph.".to_string())]
        );
    }

    #[test]
    fn test_invalid_embed_urls_are_dropped() {
        let classified = classify_body(
            r#"<p>Some intro paragraph.</p>
               <figure><a href="javascript:alert(1)/status/">x</a></figure>
               <figure><a href="/status/456">x</a></figure>
               <p>Some outro paragraph.</p>"#,
        );
        assert!(classified
            .blocks
            .iter()
            .all(|b| !matches!(b, ContentBlock::Media(_))));
        // The two text runs merge because no media interrupted them.
        assert_eq!(classified.blocks.len(), 1);
    }

    #[test]
    fn test_fallback_activates_when_strict_pass_is_empty() {
        // Every paragraph trips the chrome filter, which the fallback does
        // not apply.
        let classified = classify_body(
            "<p>They share a locker room and a long history.</p>\
             <p>Related players grew up in the same town.</p>",
        );
        assert_eq!(classified.blocks.len(), 2);
        assert!(matches!(classified.blocks[0], ContentBlock::Text(_)));
    }

    #[test]
    fn test_fallback_still_honors_block_list() {
        let classified = classify_body(
            "<p>They share a decade of rivalry together.</p><p>Please follow us on the app.</p>",
        );
        assert_eq!(classified.blocks.len(), 1);
    }

    #[test]
    fn test_missing_container_yields_empty_result() {
        let doc = Html::parse_document("<html><body><div><p>No main here at all.</p></div></body></html>");
        let classified = classify(&doc, &TEST_PROFILE);
        assert!(classified.blocks.is_empty());
        assert!(classified.embeds.is_empty());
    }

    #[test]
    fn test_short_text_is_dropped() {
        let classified = classify_body("<p>tiny</p><p>A paragraph long enough to keep.</p>");
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "A paragraph long enough to keep.".to_string()
            )]
        );
    }

    #[test]
    fn test_collect_rule_surfaces_embeds_without_tokens() {
        const COLLECTING: SiteProfile = SiteProfile {
            embeds: &[EmbedRule {
                selector: "blockquote.twitter-tweet",
                action: EmbedAction::Collect(EmbedKind::SocialLink {
                    markers: &["/status/"],
                }),
            }],
            ..TEST_PROFILE
        };
        let doc = Html::parse_document(
            r#"<html><body><main>
            <p>Article paragraph around the tweet.</p>
            <blockquote class="twitter-tweet">
              <p>The tweet text itself.</p>
              <a href="https://twitter.com/a/status/42?ref_src=x">link</a>
            </blockquote>
            <p>More article text afterwards.</p>
            </main></body></html>"#,
        );
        let classified = classify(&doc, &COLLECTING);
        assert_eq!(classified.embeds.len(), 1);
        assert_eq!(classified.embeds[0].text, "The tweet text itself.");
        assert_eq!(classified.embeds[0].url, "https://twitter.com/a/status/42");
        // No ordering token, and no tweet text leaking into the body.
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text(
                "Article paragraph around the tweet. More article text afterwards.".to_string()
            )]
        );
    }

    #[test]
    fn test_strip_rule_removes_carrier_entirely() {
        const STRIPPING: SiteProfile = SiteProfile {
            embeds: &[EmbedRule {
                selector: "figure",
                action: EmbedAction::Strip,
            }],
            ..TEST_PROFILE
        };
        let doc = Html::parse_document(
            r#"<html><body><main>
            <p>Surviving paragraph text.</p>
            <figure><a href="https://x.com/u/status/7">tweet</a></figure>
            </main></body></html>"#,
        );
        let classified = classify(&doc, &STRIPPING);
        assert_eq!(
            classified.blocks,
            vec![ContentBlock::Text("Surviving paragraph text.".to_string())]
        );
        assert!(classified.embeds.is_empty());
    }

    #[test]
    fn test_video_frame_embed() {
        const VIDEO: SiteProfile = SiteProfile {
            scope: NodeScope::Children,
            embeds: &[EmbedRule {
                selector: "noscript",
                action: EmbedAction::Inline(EmbedKind::VideoFrame {
                    hosts: &["youtube.com"],
                }),
            }],
            ..TEST_PROFILE
        };
        let doc = Html::parse_document(
            r#"<html><body><main>
            <p>Watch the highlight below.</p>
            <noscript><iframe src="https://www.youtube.com/embed/abc"></iframe></noscript>
            </main></body></html>"#,
        );
        let classified = classify(&doc, &VIDEO);
        assert_eq!(classified.blocks.len(), 2);
        match &classified.blocks[1] {
            ContentBlock::Media(EmbedRef::Html(html)) => {
                assert!(html.contains("youtube.com/embed/abc"));
            }
            other => panic!("expected media block, got {:?}", other),
        }
    }
}
