/// Which descendants of the story container the classifier visits.
#[derive(Debug, Clone, Copy)]
pub enum NodeScope {
    /// Direct element children of the container, in document order.
    Children,
    /// Descendants matching a marker selector (e.g. `[data-mm-id]`).
    Marked(&'static str),
}

/// Which nodes a stop prefix is checked against.
#[derive(Debug, Clone, Copy)]
pub enum StopScope {
    Headings,
    AnyNode,
}

/// How to pull a canonical reference out of an embed carrier.
#[derive(Debug, Clone, Copy)]
pub enum EmbedKind {
    /// Last `<a href>` whose path contains one of the markers wins; the
    /// query string is stripped before validation.
    SocialLink { markers: &'static [&'static str] },
    /// First `<iframe>` whose `src` matches one of the hosts; the iframe
    /// markup itself becomes the embed.
    VideoFrame { hosts: &'static [&'static str] },
}

/// What happens to a matched carrier.
#[derive(Debug, Clone, Copy)]
pub enum EmbedAction {
    /// Emit a media block at the detection point, preserving interleaving.
    Inline(EmbedKind),
    /// Remove from the body and record in the article metadata instead.
    Collect(EmbedKind),
    /// Boilerplate: remove entirely, no block, no text contribution.
    Strip,
}

#[derive(Debug, Clone, Copy)]
pub struct EmbedRule {
    /// CSS selector identifying the carrier element.
    pub selector: &'static str,
    pub action: EmbedAction,
}

/// Site-specific ruleset driving the shared classifier engine.
///
/// Each supported site supplies one of these instead of a separate code
/// path; the engine in [`crate::blocks`] is the only traversal.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    pub slug: &'static str,
    pub source: &'static str,
    /// Host fragments used by `can_handle`.
    pub hosts: &'static [&'static str],
    /// CSS selector for the story body container.
    pub container: &'static str,
    pub scope: NodeScope,
    /// Lowercase phrases that mark boilerplate/CTA paragraphs.
    pub block_list: &'static [&'static str],
    /// Lowercase phrases that re-admit a block-listed paragraph.
    pub allow_list: &'static [&'static str],
    /// Lowercase prefixes that terminate traversal.
    pub stop_prefixes: &'static [&'static str],
    pub stop_scope: StopScope,
    /// Paragraphs and headings shorter than this are dropped.
    pub min_chars: usize,
    /// Paragraphs with fewer words than this are dropped.
    pub min_words: usize,
    /// Drop paragraphs whose whole text is a single link's text.
    pub reject_link_only: bool,
    /// Keep h2/h3/h4 text as heading blocks (otherwise headings only feed
    /// the stop check).
    pub keep_headings: bool,
    /// Drop share-button/navigation chrome ("share", "related", "next:").
    pub filter_chrome: bool,
    /// Probe `article img` before the `og:image`/`twitter:image` tags. Most
    /// sites only populate the meta tags, but some put the real hero image
    /// in the article body and stale promo art in the head.
    pub structural_image_first: bool,
    pub embeds: &'static [EmbedRule],
}

impl SiteProfile {
    pub fn can_handle(&self, url: &str) -> bool {
        self.hosts.iter().any(|host| url.contains(host))
    }
}
