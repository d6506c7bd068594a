#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Fetching feed failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Malformed feed document: {0}")]
    Malformed(#[from] MalformedFeed),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Converting a rendered fragment to Markdown failed
    #[error("Markdown conversion failed: {0}")]
    Markdown(#[source] std::io::Error),
    #[error(transparent)]
    TomlD(#[from] toml::de::Error),
    #[error(transparent)]
    TomlS(#[from] toml::ser::Error),

    /// An unknown url scheme was provided, the scheme should be
    /// the associated value
    #[error("Unknown url scheme `{0}`")]
    UnknownScheme(String),
    #[error("Invalid file URL: `{0}`")]
    InvalidFileUrl(url::Url),
}

impl Error {
    /// The feed could not be retrieved at all, nothing was parsed
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::Io(_) | Self::UnknownScheme(_) | Self::InvalidFileUrl(_)
        )
    }

    /// The feed was retrieved but does not have the shape the widget needs
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MalformedFeed {
    #[error(transparent)]
    Xml(#[from] atom_syndication::Error),
    #[error("feed has no entries")]
    NoEntries,
    #[error("latest entry has no title")]
    MissingTitle,
    #[error("latest entry has no link with an href")]
    MissingLink,
}

impl From<atom_syndication::Error> for Error {
    fn from(e: atom_syndication::Error) -> Self {
        Self::Malformed(MalformedFeed::Xml(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_outcomes() {
        let malformed = Error::from(MalformedFeed::NoEntries);
        assert!(malformed.is_malformed());
        assert!(!malformed.is_fetch_failure());

        let scheme = Error::UnknownScheme("ftp".to_string());
        assert!(scheme.is_fetch_failure());
        assert!(!scheme.is_malformed());

        let io = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(io.is_fetch_failure());

        let markdown = Error::Markdown(std::io::Error::from(std::io::ErrorKind::InvalidData));
        assert!(!markdown.is_fetch_failure());
        assert!(!markdown.is_malformed());
    }

    #[test]
    fn xml_errors_are_malformed() {
        let err = atom_syndication::Feed::read_from("not xml at all".as_bytes()).unwrap_err();
        assert!(Error::from(err).is_malformed());
    }
}
