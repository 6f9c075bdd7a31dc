//! Heading counts and nesting order.
//!
//! The hierarchy check is order-based: an `<h3>` seen before any `<h2>`
//! breaks it. Deeper outline problems (an `<h4>` under an `<h2>`, for
//! instance) are not looked at.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

static HEADING_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h([23])(?:\s[^>]*)?>").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStructureResult {
    pub h2_count: usize,
    pub h3_count: usize,
    pub has_proper_hierarchy: bool,
}

pub(crate) fn analyze(markup: &str) -> ContentStructureResult {
    let mut result = ContentStructureResult {
        has_proper_hierarchy: true,
        ..Default::default()
    };

    for caps in HEADING_OPEN_RE.captures_iter(markup) {
        match &caps[1] {
            "2" => result.h2_count += 1,
            _ => {
                if result.h2_count == 0 {
                    result.has_proper_hierarchy = false;
                }
                result.h3_count += 1;
            }
        }
    }

    debug!(
        h2 = result.h2_count,
        h3 = result.h3_count,
        proper = result.has_proper_hierarchy,
        "content structure analyzed"
    );
    result
}
