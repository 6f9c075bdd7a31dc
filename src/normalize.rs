//! Markup normalization.
//!
//! Everything the analyzers know about markup goes through this module:
//! `normalize` turns editor markup into plain text and paragraphs, and the
//! helpers pull out the first paragraph and heading text. Matching is
//! regex-based and tolerant of malformed markup; unbalanced tags may
//! under- or over-match but never fail.

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static BLOCK_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</(?:p|h[1-6]|li|div|blockquote|pre|ul|ol|table|tr)\s*>|<(?:br|hr)\s*/?>")
        .unwrap()
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

static FIRST_P_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap());

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([23])(?:\s[^>]*)?>(.*?)</h[23]\s*>").unwrap());

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Plain-text view of a piece of markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    pub plain_text: String,
    pub paragraphs: Vec<String>,
}

impl Normalized {
    pub fn word_count(&self) -> usize {
        self.plain_text.split_whitespace().count()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn normalize(markup: &str) -> Normalized {
    let plain_text = strip_tags(markup);
    let paragraphs = split_paragraphs(&plain_text);
    Normalized {
        plain_text,
        paragraphs,
    }
}

/// Remove tags and decode the common entities. Block-level closers become
/// blank lines so each editor block stays its own paragraph.
pub fn strip_tags(markup: &str) -> String {
    let with_breaks = BLOCK_BOUNDARY_RE.replace_all(markup, "\n\n");
    let stripped = TAG_RE.replace_all(&with_breaks, "");
    decode_entities(&stripped).trim().to_string()
}

/// Whitespace-delimited tokens; empty tokens never appear.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on one or more blank lines, trimming each fragment and dropping
/// the empty ones.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    BLANK_LINE_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text of the first non-empty `<p>` element, falling back to the first
/// normalized paragraph for markup without paragraph tags.
pub fn first_paragraph(markup: &str) -> String {
    if let Some(inner) = FIRST_P_RE
        .captures_iter(markup)
        .map(|caps| strip_tags(&caps[1]))
        .find(|inner| !inner.is_empty())
    {
        return inner;
    }
    normalize(markup)
        .paragraphs
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Plain text of every level-2 and level-3 heading, in document order.
pub fn heading_texts(markup: &str) -> Vec<String> {
    HEADING_RE
        .captures_iter(markup)
        .map(|caps| strip_tags(&caps[2]))
        .filter(|t| !t.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    // &amp; last so "&amp;lt;" decodes to "&lt;" rather than "<"
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
