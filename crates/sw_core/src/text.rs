use url::Url;

/// True when `input` parses as an absolute http(s) URL. Relative paths and
/// other schemes (`javascript:`, `data:`) are rejected.
pub fn is_valid_http_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Collapses all whitespace runs (including newlines) to single spaces.
pub fn normalize_ws(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes anything that looks like a markup tag.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Strips markup, flattens newlines and truncates to at most `max`
/// characters at a word boundary.
pub fn textify(input: &str, max: usize) -> String {
    truncate_words(&normalize_ws(&strip_tags(input)), max)
}

fn truncate_words(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        return input.to_string();
    }
    let mut cut: String = input.chars().take(max.saturating_sub(3)).collect();
    if let Some(pos) = cut.rfind(' ') {
        cut.truncate(pos);
    }
    let mut out = cut.trim_end().to_string();
    out.push_str("...");
    out
}
