use core::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use url::Url;

pub const DEFAULT_FEED_URL: &str = "https://dataplatformadmin.lyft.net/announcements.atom";
pub const DEFAULT_ICON_SRC: &str = "../static/rss-logo.png";
pub const DEFAULT_CONTAINER_ID: &str = "rss-entries";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct WidgetConfig {
    /// Where the feed is fetched from, also the target of the icon link
    #[builder(default = default_feed_url())]
    pub feed_url: Url,
    /// Image shown inside the icon link, relative to the hosting page
    #[builder(default = DEFAULT_ICON_SRC.to_string(), setter(into))]
    pub icon_src: String,
    #[builder(default = DEFAULT_CONTAINER_ID.to_string(), setter(into))]
    pub container_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&toml_str)
    }
}

fn default_feed_url() -> Url {
    Url::parse(DEFAULT_FEED_URL).expect("DEFAULT_FEED_URL is a valid url")
}
