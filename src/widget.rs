use atom_syndication::Feed;
use reqwest::Client;

use crate::{
    dom::{Element, Node},
    FeedEntry, Result, WidgetConfig,
};

pub const ICON_STYLE: &[&str] = &["float:right"];

pub const CONTAINER_STYLE: &[&str] = &[
    "border:1px",
    "border-style:solid",
    "min-width:350px",
    "max-width:600px",
    "float:right",
    "padding:2px",
    "background-color:linen",
];

/// Renders the latest entry of a feed into a host owned container.
///
/// The container is passed in rather than looked up, the widget only ever
/// appends to it and overwrites its inline style.
#[derive(Debug, Clone)]
pub struct FeedWidget {
    client: Client,
    config: WidgetConfig,
}

impl FeedWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: WidgetConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The container this widget expects the host to provide
    pub fn container(&self) -> Element {
        Element::new("div").with_attribute("id", self.config.container_id.as_str())
    }

    /// Fetch the feed once and render it. On any error `container` is left
    /// exactly as it was.
    pub async fn initialize(&self, container: &mut Element) -> Result<FeedEntry> {
        let feed = self.fetch().await.inspect_err(|e| {
            log::warn!("Feed box not rendered, fetch failed: {e}");
        })?;
        self.render(&feed, container).inspect_err(|e| {
            log::warn!("Feed box not rendered: {e}");
        })
    }

    pub async fn fetch(&self) -> Result<Feed> {
        crate::fetch_feed(&self.client, &self.config.feed_url).await
    }

    /// Append a title link and an icon link for the latest entry of `feed`.
    ///
    /// Calling this twice appends twice.
    pub fn render(&self, feed: &Feed, container: &mut Element) -> Result<FeedEntry> {
        let entry = FeedEntry::latest(feed)?;

        let title_node = Element::new("a")
            .with_attribute("href", entry.link_href.as_str())
            .with_child(Node::text(entry.title.as_str()));

        let mut rss_icon = Element::new("img").with_attribute("src", self.config.icon_src.as_str());
        rss_icon.set_css(ICON_STYLE);

        let rss_link = Element::new("a")
            .with_attribute("href", self.config.feed_url.as_str())
            .with_child(rss_icon);

        container.append_child(title_node);
        container.append_child(rss_link);
        container.set_css(CONTAINER_STYLE);
        log::info!("Rendered latest entry `{}`", entry.title);
        Ok(entry)
    }
}
