//! Defines the [`Post`] and [`Update`] domain values. Both are constructed
//! once by the loader ([`crate::load`]) and read-only thereafter; the
//! generator ([`crate::write`]) only borrows them.

use chrono::{DateTime, Utc};

/// One blog entry: metadata plus raw Markdown content. The `slug` is the base
/// name of the post's source directory and doubles as the output directory
/// name under `posts/`.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub title: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub slug: String,
    pub content: String,
    pub updates: Vec<Update>,
}

/// A dated revision note attached to a [`Post`].
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub date: DateTime<Utc>,
    pub description: String,
}

impl Post {
    /// Returns the post's updates sorted by date descending, independent of
    /// storage order.
    pub fn sorted_updates(&self) -> Vec<&Update> {
        let mut updates: Vec<&Update> = self.updates.iter().collect();
        updates.sort_by(|a, b| b.date.cmp(&a.date));
        updates
    }

    /// Returns the most recent update, if any.
    pub fn latest_update(&self) -> Option<&Update> {
        self.updates.iter().max_by_key(|u| u.date)
    }
}
