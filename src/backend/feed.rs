// ABOUTME: Feed retrieval - the FeedSource trait and an RSS/Atom implementation.
// ABOUTME: Returns headline records in document order.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// A single headline-like record from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: Option<String>,
}

impl FeedItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
        }
    }
}

/// A source of feed items for a topic.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch items related to `topic`, in source order.
    async fn fetch(&self, topic: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Fetches an RSS 2.0 or Atom document over HTTP.
pub struct RssFeed {
    client: reqwest::Client,
    url_template: String,
}

impl RssFeed {
    /// Create a feed client from configuration.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(client, config.url_template.clone()))
    }

    /// Create with a custom reqwest client. `{topic}` in the template is
    /// replaced by the percent-encoded topic.
    pub fn with_client(client: reqwest::Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    /// The URL fetched for `topic`.
    pub fn feed_url(&self, topic: &str) -> String {
        self.url_template
            .replace("{topic}", &urlencoding::encode(topic))
    }

    /// Extract items from an RSS or Atom document.
    pub fn parse_items(xml: &str) -> Vec<FeedItem> {
        let items = Self::blocks(xml, "item");
        let blocks = if items.is_empty() {
            Self::blocks(xml, "entry")
        } else {
            items
        };

        blocks
            .into_iter()
            .filter_map(|block| {
                let title = Self::tag_text(block, "title")?;
                if title.is_empty() {
                    return None;
                }
                Some(FeedItem {
                    title,
                    link: Self::tag_text(block, "link").filter(|l| !l.is_empty()),
                })
            })
            .collect()
    }

    /// Find the start of `<tag>` or `<tag ...>`, skipping longer tag names.
    fn find_open(haystack: &str, tag: &str) -> Option<usize> {
        let needle = format!("<{}", tag);
        let mut offset = 0;
        while let Some(pos) = haystack[offset..].find(&needle) {
            let start = offset + pos;
            let next = haystack[start + needle.len()..].chars().next();
            match next {
                Some(c) if c == '>' || c == '/' || c.is_whitespace() => return Some(start),
                Some(_) => offset = start + needle.len(),
                None => return None,
            }
        }
        None
    }

    /// Contents of every `<tag>...</tag>` block, in order.
    fn blocks<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
        let close = format!("</{}>", tag);
        let mut found = Vec::new();
        let mut remaining = xml;

        while let Some(start) = Self::find_open(remaining, tag) {
            let after = &remaining[start..];
            let Some(end) = after.find(&close) else {
                break;
            };
            found.push(&after[..end]);
            remaining = &after[end + close.len()..];
        }

        found
    }

    /// Decoded text of the first `<tag>` in `block`. Self-closing tags yield None.
    fn tag_text(block: &str, tag: &str) -> Option<String> {
        let start = Self::find_open(block, tag)?;
        let after_open = &block[start..];
        let gt = after_open.find('>')?;
        if after_open[..gt].ends_with('/') {
            return None;
        }
        let body = &after_open[gt + 1..];
        let end = body.find(&format!("</{}>", tag))?;
        let raw = body[..end].trim();

        let text = match raw
            .strip_prefix("<![CDATA[")
            .and_then(|s| s.strip_suffix("]]>"))
        {
            Some(cdata) => cdata.to_string(),
            None => Self::decode_entities(raw),
        };
        Some(text.trim().to_string())
    }

    fn decode_entities(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }
}

#[async_trait]
impl FeedSource for RssFeed {
    async fn fetch(&self, topic: &str) -> Result<Vec<FeedItem>, FeedError> {
        let url = self.feed_url(topic);
        debug!(%url, "fetching feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let items = Self::parse_items(&body);
        debug!(count = items.len(), "parsed feed items");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Search results</title>
  <item>
    <title>Rust 2024 edition ships</title>
    <link>https://example.com/a</link>
  </item>
  <item>
    <title><![CDATA[Markets <rally> again]]></title>
  </item>
  <item>
    <title>Tom &amp; Jerry &quot;return&quot;</title>
    <link>https://example.com/c</link>
  </item>
</channel></rss>"#;

    #[test]
    fn test_parse_rss_items_in_order() {
        let items = RssFeed::parse_items(RSS);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Rust 2024 edition ships",
                "Markets <rally> again",
                "Tom & Jerry \"return\""
            ]
        );
        assert_eq!(items[0].link.as_deref(), Some("https://example.com/a"));
        assert_eq!(items[1].link, None);
    }

    #[test]
    fn test_channel_title_is_not_an_item() {
        let items = RssFeed::parse_items(RSS);
        assert!(items.iter().all(|i| i.title != "Search results"));
    }

    #[test]
    fn test_parse_atom_entries() {
        let atom = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Feed</title>
  <entry><title type="text">First</title><link href="https://example.com/1"/></entry>
  <entry><title>Second</title></entry>
</feed>"#;
        let items = RssFeed::parse_items(atom);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First");
        assert_eq!(items[0].link, None);
        assert_eq!(items[1].title, "Second");
    }

    #[test]
    fn test_parse_empty_feed() {
        assert!(RssFeed::parse_items("<rss><channel></channel></rss>").is_empty());
        assert!(RssFeed::parse_items("not xml at all").is_empty());
    }

    #[test]
    fn test_feed_url_encodes_topic() {
        let feed = RssFeed::with_client(
            reqwest::Client::new(),
            "https://news.example.com/rss?q={topic}",
        );
        assert_eq!(
            feed.feed_url("rust & go"),
            "https://news.example.com/rss?q=rust%20%26%20go"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let feed = RssFeed::with_client(reqwest::Client::new(), "http://127.0.0.1:1/rss?q={topic}");
        assert!(matches!(feed.fetch("rust").await, Err(FeedError::Http(_))));
    }
}
