use std::path::{Path, PathBuf};

use atom_syndication::Feed;
use reqwest::Client;
use url::Url;

mod config;
pub mod dom;
mod error;
mod feed;
mod widget;

pub use config::{WidgetConfig, DEFAULT_CONTAINER_ID, DEFAULT_FEED_URL, DEFAULT_ICON_SRC};
pub use error::{Error, MalformedFeed};
pub use feed::{parse_feed, FeedEntry};
pub use widget::{FeedWidget, CONTAINER_STYLE, ICON_STYLE};

pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

pub async fn fetch_feed(client: &Client, url: &Url) -> Result<Feed> {
    match url.scheme() {
        "http" | "https" => fetch_feed_reqwest(client, url).await,
        "file" => fetch_feed_fs(url).await,
        scheme => {
            log::warn!("bad scheme in url: {url}");
            Err(Error::UnknownScheme(scheme.to_string()))
        }
    }
}

async fn fetch_feed_reqwest(client: &Client, url: &Url) -> Result<Feed> {
    log::info!("Fetching feed {url}");
    let raw_feed = client
        .get(url.clone())
        .send()
        .await
        .inspect_err(|e| log::warn!("Error fetching {url}: {e}"))?
        .error_for_status()
        .inspect_err(|e| {
            log::warn!("Error fetching url: {e}");
        })?
        .text()
        .await
        .inspect_err(|e| log::warn!("Fetching feed failed to read as text: {e}"))?;
    parse_feed(&raw_feed)
}

async fn fetch_feed_fs(url: &Url) -> Result<Feed> {
    let path = url.to_file_path().map_err(|_| {
        log::warn!("cannot convert url to file path: {url}");
        Error::InvalidFileUrl(url.clone())
    })?;
    let raw_feed = tokio::fs::read_to_string(&path)
        .await
        .inspect_err(|e| log::warn!("Error reading path `{}`: {e}", path.display()))?;
    parse_feed(&raw_feed)
}

pub async fn load_config(path: impl AsRef<Path>) -> Result<WidgetConfig> {
    let path = path.as_ref();
    let toml_str = tokio::fs::read_to_string(path).await.inspect_err(|e| {
        log::warn!("failed to read config at path `{}`: {e}", path.display());
    })?;
    Ok(toml::from_str(&toml_str).inspect_err(|e| {
        log::warn!("Bad toml in config: {e} \n`{toml_str}`");
    })?)
}

/// Load the config from the default location, a missing file means all
/// defaults
pub async fn get_config() -> Result<WidgetConfig> {
    match get_config_path(None) {
        Some(path) if path.exists() => load_config(path).await,
        _ => Ok(WidgetConfig::default()),
    }
}

pub fn get_config_path(base_path: impl Into<Option<PathBuf>>) -> Option<PathBuf> {
    base_path
        .into()
        .or_else(get_project_dir)
        .map(|dir| dir.join("config.toml"))
}

pub fn get_project_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "feedbox", "feedbox")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn fetches_file_urls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"<feed><entry><title>Local</title><link href="https://x/l"/></entry></feed>"#)
            .unwrap();
        let url = Url::from_file_path(file.path()).unwrap();
        let feed = fetch_feed(&Client::new(), &url).await.unwrap();
        assert_eq!(FeedEntry::latest(&feed).unwrap().title, "Local");
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("nope.atom")).unwrap();
        let err = fetch_feed(&Client::new(), &url).await.unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn unknown_scheme() {
        let url: Url = "ftp://example.com/feed.atom".parse().unwrap();
        let err = fetch_feed(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, Error::UnknownScheme(s) if s == "ftp"));
    }

    #[tokio::test]
    async fn loads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"icon_src = \"/img/rss.png\"\ncontainer_id = \"news\"\n")
            .unwrap();
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.icon_src, "/img/rss.png");
        assert_eq!(config.container_id, "news");
        assert_eq!(config.feed_url.as_str(), DEFAULT_FEED_URL);
    }

    #[test]
    fn config_path_uses_base() {
        let path = get_config_path(PathBuf::from("/tmp/feedbox")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/feedbox/config.toml"));
    }
}
