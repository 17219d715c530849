use sw_core::config::{SUMMARY_MAX, SUMMARY_MIN};
use sw_core::text::textify;

/// Editorial descriptions are usually the best summary when they fall in an
/// acceptable length window; outside it (missing, too short, too long) the
/// summary is derived from the assembled body text instead.
pub fn summarize(description: &str, text: &str) -> String {
    let description = description.trim();
    let len = description.chars().count();
    if len > SUMMARY_MIN && len < SUMMARY_MAX {
        description.to_string()
    } else {
        textify(text, SUMMARY_MAX)
    }
}
