//! Interest topics derived from a user's reading history.
//!
//! The enum offers compile-time safety for profile lookups; each variant's
//! canonical string doubles as the keyword matched against candidate text.
//!
//! # Examples
//! ```
//! use curator_core::Topic;
//!
//! assert_eq!(Topic::Ai.as_str(), "ai");
//! assert_eq!(Topic::Startups.to_string(), "startups");
//! ```

use thiserror::Error;

/// Broad interest category inferred from content history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topic {
    /// Artificial intelligence and machine learning.
    Ai,
    /// Technology at large.
    Technology,
    /// Startup companies and founders.
    Startups,
}

impl Topic {
    /// Return the topic as its lowercase keyword.
    ///
    /// # Examples
    /// ```
    /// use curator_core::Topic;
    ///
    /// assert_eq!(Topic::Technology.as_str(), "technology");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Technology => "technology",
            Self::Startups => "startups",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown topic string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown topic '{0}'")]
pub struct ParseTopicError(pub String);

impl std::str::FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(Self::Ai),
            "technology" => Ok(Self::Technology),
            "startups" => Ok(Self::Startups),
            _ => Err(ParseTopicError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ai", Topic::Ai)]
    #[case("Technology", Topic::Technology)]
    #[case("STARTUPS", Topic::Startups)]
    fn parses_known_topics_case_insensitively(#[case] input: &str, #[case] expected: Topic) {
        assert_eq!(input.parse::<Topic>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_topic() {
        let err = "gardening".parse::<Topic>().expect_err("unknown topic");
        assert_eq!(err, ParseTopicError("gardening".into()));
    }
}
