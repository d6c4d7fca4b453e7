//! Content items and their source platforms.
//!
//! A [`ContentItem`] is the unit every scoring pipeline consumes. Items are
//! owned by the caller and never mutated by a scorer; pipelines only read
//! them and produce fresh result collections referencing their ids.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Platform a content item originated from.
///
/// The well-known platforms carry scoring adjustments; everything else is
/// preserved verbatim in [`Source::Other`].
///
/// # Examples
/// ```
/// use curator_core::Source;
///
/// assert_eq!(Source::HackerNews.as_str(), "hackernews");
/// assert_eq!(Source::from("mastodon"), Source::Other("mastodon".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Source {
    /// Hacker News submissions.
    HackerNews,
    /// Reddit posts.
    Reddit,
    /// Twitter posts.
    Twitter,
    /// Any other platform, preserved as its raw tag.
    Other(String),
}

impl Source {
    /// Return the source as its canonical lowercase tag.
    ///
    /// # Examples
    /// ```
    /// use curator_core::Source;
    ///
    /// assert_eq!(Source::Reddit.as_str(), "reddit");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HackerNews => "hackernews",
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Source {
    fn from(tag: &str) -> Self {
        match tag {
            "hackernews" => Self::HackerNews,
            "reddit" => Self::Reddit,
            "twitter" => Self::Twitter,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Source {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "hackernews" => Self::HackerNews,
            "reddit" => Self::Reddit,
            "twitter" => Self::Twitter,
            _ => Self::Other(tag),
        }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        match source {
            Source::Other(tag) => tag,
            other => other.as_str().to_owned(),
        }
    }
}

/// A single piece of scored content.
///
/// Identity is the opaque `id`, unique within a batch. The optional
/// `author` and `url` fields are carried through untouched; no pipeline
/// consults them.
///
/// # Examples
/// ```
/// use curator_core::{ContentItem, Source};
///
/// let item = ContentItem::new("hn-1", "Rust 2.0", "A thorough look", Source::HackerNews)
///     .with_author("grace");
/// assert_eq!(item.id, "hn-1");
/// assert_eq!(item.author.as_deref(), Some("grace"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentItem {
    /// Opaque identifier, unique within a batch.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Platform the item came from.
    pub source: Source,
    /// Optional author handle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: Option<String>,
    /// Optional canonical URL.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
}

impl ContentItem {
    /// Construct an item without author or URL metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            source,
            author: None,
            url: None,
        }
    }

    /// Attach an author handle while returning `self` for chaining.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Attach a canonical URL while returning `self` for chaining.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Lower-cased concatenation of title and body.
    ///
    /// This is the text every keyword-based scorer scans. The title and
    /// body are joined with a single space so a keyword spanning the
    /// boundary does not match.
    ///
    /// # Examples
    /// ```
    /// use curator_core::{ContentItem, Source};
    ///
    /// let item = ContentItem::new("1", "New AI", "Research update", Source::Reddit);
    /// assert_eq!(item.searchable_text(), "new ai research update");
    /// ```
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.content.len() + 1);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.content);
        text.to_lowercase()
    }
}
