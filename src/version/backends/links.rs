//! Anchor extraction for served directory pages
//!
//! Only `<a href="...">text</a>` anchors are understood; anything else in the
//! page is ignored. Artifactory, nginx/Apache autoindex and PyPI "simple"
//! pages all list their entries this way.

use regex::Regex;

/// A hyperlink found on a directory page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Target type of a forward link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Directory,
    File,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    /// Links ending in `/` point at directories
    pub fn kind(&self) -> LinkKind {
        if self.href.ends_with('/') {
            LinkKind::Directory
        } else {
            LinkKind::File
        }
    }
}

/// Extracts anchors from HTML and filters out links that lead backwards
pub struct LinkExtractor {
    /// Regex for a whole anchor: attributes and inner content
    anchor_re: Regex,
    /// Regex for the href attribute (double, single or unquoted)
    href_re: Regex,
    /// Regex for nested tags inside anchor text
    tag_re: Regex,
    /// Parent references, bare roots, pure queries and fragments
    non_forward_re: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            anchor_re: Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").unwrap(),
            href_re: Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
                .unwrap(),
            tag_re: Regex::new(r"(?s)<[^>]*>").unwrap(),
            non_forward_re: Regex::new(r"^(\.\./.*|/*|\?.*|#.*)$").unwrap(),
        }
    }

    /// Extract every anchor that carries an href, in page order
    pub fn extract(&self, html: &str) -> Vec<Link> {
        self.anchor_re
            .captures_iter(html)
            .filter_map(|caps| {
                let attributes = caps.get(1)?.as_str();
                let inner = caps.get(2).map_or("", |m| m.as_str());

                let href_caps = self.href_re.captures(attributes)?;
                let href = href_caps
                    .get(1)
                    .or_else(|| href_caps.get(2))
                    .or_else(|| href_caps.get(3))?
                    .as_str();

                let text = self.tag_re.replace_all(inner, "");
                Some(Link::new(
                    decode_entities(href.trim()),
                    decode_entities(text.trim()),
                ))
            })
            .collect()
    }

    /// Extract anchors and drop links that would walk upwards or nowhere
    pub fn extract_forward(&self, html: &str) -> Vec<Link> {
        self.extract(html)
            .into_iter()
            .filter(|link| !self.is_non_forward(&link.href))
            .collect()
    }

    pub fn is_non_forward(&self, href: &str) -> bool {
        self.non_forward_re.is_match(href)
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
