//! Interest profiles: boolean topic membership derived from history.
//!
//! Unlike a weighted profile, membership here is a presence flag; a topic
//! either interests the user or it does not. The recommender derives a
//! profile from content history and scores candidates against it.

use std::collections::HashSet;

use crate::Topic;

/// A user's inferred interests.
///
/// # Examples
/// ```
/// use curator_core::{InterestProfile, Topic};
///
/// let profile = InterestProfile::new()
///     .with_topic(Topic::Ai)
///     .with_topic(Topic::Technology);
/// assert!(profile.contains(Topic::Ai));
/// assert!(!profile.contains(Topic::Startups));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterestProfile {
    topics: HashSet<Topic>,
}

impl InterestProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether the profile contains a topic.
    #[must_use]
    pub fn contains(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    /// Mark a topic as interesting to the user.
    ///
    /// Inserting an already-present topic is a no-op; membership is a
    /// boolean flag, not a count.
    pub fn insert(&mut self, topic: Topic) {
        self.topics.insert(topic);
    }

    /// Add a topic while returning `self` for chaining.
    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.insert(topic);
        self
    }

    /// Report whether no topics are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Number of topics in the profile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Iterate over the profile's topics in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Topic> + '_ {
        self.topics.iter().copied()
    }
}
