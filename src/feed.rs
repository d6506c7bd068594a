use atom_syndication::Feed;

use crate::{error::MalformedFeed, Result};

/// The one entry the widget displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link_href: String,
}

impl FeedEntry {
    /// Read entry 0 of `feed`, later entries are never looked at.
    pub fn latest(feed: &Feed) -> Result<Self, MalformedFeed> {
        let entry = feed.entries().first().ok_or(MalformedFeed::NoEntries)?;
        let title = entry.title().value.as_str();
        if title.is_empty() {
            return Err(MalformedFeed::MissingTitle);
        }
        let link_href = entry
            .links()
            .first()
            .map(|l| l.href())
            .filter(|href| !href.is_empty())
            .ok_or(MalformedFeed::MissingLink)?;
        Ok(Self {
            title: title.to_string(),
            link_href: link_href.to_string(),
        })
    }
}

pub fn parse_feed(raw_feed: &str) -> Result<Feed> {
    Ok(Feed::read_from(raw_feed.as_bytes()).inspect_err(|e| {
        log::warn!("Failed to deserialize feed: {e}\n`{raw_feed}`");
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latest(xml: &str) -> Result<FeedEntry, MalformedFeed> {
        FeedEntry::latest(&parse_feed(xml).unwrap())
    }

    #[test]
    fn reads_only_the_first_entry() {
        let entry = latest(
            r#"<feed xmlns="http://www.w3.org/2005/Atom">
                <entry><title>Newest</title><link href="https://x/2"/><link href="https://x/other"/></entry>
                <entry><title>Older</title><link href="https://x/1"/></entry>
            </feed>"#,
        )
        .unwrap();
        assert_eq!(
            entry,
            FeedEntry {
                title: "Newest".to_string(),
                link_href: "https://x/2".to_string(),
            }
        );
    }

    #[test]
    fn no_entries() {
        let err = latest(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#)
            .unwrap_err();
        assert!(matches!(err, MalformedFeed::NoEntries));
    }

    #[test]
    fn missing_title() {
        let err = latest(r#"<feed><entry><link href="https://x/1"/></entry></feed>"#).unwrap_err();
        assert!(matches!(err, MalformedFeed::MissingTitle));
    }

    #[test]
    fn missing_link() {
        let err = latest(r#"<feed><entry><title>Hi</title></entry></feed>"#).unwrap_err();
        assert!(matches!(err, MalformedFeed::MissingLink));
    }

    #[test]
    fn empty_href_is_missing_link() {
        let err = latest(r#"<feed><entry><title>Hi</title><link href=""/></entry></feed>"#)
            .unwrap_err();
        assert!(matches!(err, MalformedFeed::MissingLink));
    }

    #[test]
    fn rejects_non_atom_documents() {
        let err = parse_feed("<rss><channel></channel></rss>").unwrap_err();
        assert!(err.is_malformed());
    }
}
