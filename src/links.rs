//! Internal/external hyperlink counts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;
use url::Url;

static ANCHOR_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Raw counts; the same target linked twice counts twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Internal,
    External,
}

pub(crate) fn count(markup: &str, site_domain: Option<&str>) -> LinkCounts {
    let site = site_domain.map(site_host).filter(|h| !h.is_empty());
    let mut counts = LinkCounts::default();

    for caps in ANCHOR_HREF_RE.captures_iter(markup) {
        let href = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        match classify(href, site.as_deref()) {
            Some(LinkKind::Internal) => counts.internal += 1,
            Some(LinkKind::External) => counts.external += 1,
            None => {}
        }
    }

    debug!(
        internal = counts.internal,
        external = counts.external,
        "links counted"
    );
    counts
}

/// Root-relative paths and same-site URLs are internal; absolute http(s)
/// URLs elsewhere are external. Anything else (fragments, mailto:, bare
/// relative paths, unparseable targets) is not counted.
fn classify(href: &str, site: Option<&str>) -> Option<LinkKind> {
    if href.starts_with('/') && !href.starts_with("//") {
        return Some(LinkKind::Internal);
    }

    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };
    let url = Url::parse(&absolute).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    let host = canonical_host(url.host_str()?);

    match site {
        Some(site) if host == site => Some(LinkKind::Internal),
        _ => Some(LinkKind::External),
    }
}

/// Accepts either a bare host ("example.com") or a site URL.
fn site_host(site: &str) -> String {
    Url::parse(site)
        .ok()
        .and_then(|url| url.host_str().map(canonical_host))
        .unwrap_or_else(|| canonical_host(site))
}

fn canonical_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}
