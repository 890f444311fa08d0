//! Core domain types for post series.
//!
//! Posts and series terms are owned by the host platform; these types are the
//! read-only view of them that the renderer works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text domain used for every translatable string.
pub const TEXT_DOMAIN: &str = "post-series-manager";

/// Taxonomy name used when no configuration overrides it.
pub const DEFAULT_TAXONOMY: &str = "post-series";

// ---------------------------------------------------------------------------
// PostId
// ---------------------------------------------------------------------------

/// Host-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A published post as seen by the series renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Host identifier.
    pub id: PostId,
    /// Display title, already formatted by the host.
    pub title: String,
    /// Absolute URL of the post.
    pub permalink: String,
    /// Publish timestamp; series order follows it.
    pub published_at: DateTime<Utc>,
    /// Names of the series this post belongs to, in host order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<String>,
}

impl Post {
    /// Whether this post is a member of the named series.
    pub fn in_series(&self, name: &str) -> bool {
        self.series.iter().any(|s| s == name)
    }
}

// ---------------------------------------------------------------------------
// SeriesTerm
// ---------------------------------------------------------------------------

/// A series term. The name doubles as the slug in taxonomy queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTerm {
    /// Display name and query slug.
    pub name: String,
    /// Canonical archive URL for the series.
    pub link: String,
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Direction of a listing or taxonomy query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first (the usual blog default).
    #[default]
    Desc,
}

// ---------------------------------------------------------------------------
// ViewContext
// ---------------------------------------------------------------------------

/// What the host is currently rendering.
///
/// Passed explicitly to every render call instead of being read from
/// request-global state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewContext {
    /// The post whose content is being rendered.
    pub current_post: Option<PostId>,
    /// True when the request shows a single post.
    pub is_single: bool,
    /// Taxonomy of the archive being shown, if the request is a term archive.
    pub archive_taxonomy: Option<String>,
}

impl ViewContext {
    /// View of a single post.
    pub fn single(post: PostId) -> Self {
        Self {
            current_post: Some(post),
            is_single: true,
            archive_taxonomy: None,
        }
    }

    /// A post rendered inside a listing (home page, archive, feed).
    pub fn listing(post: PostId) -> Self {
        Self {
            current_post: Some(post),
            is_single: false,
            archive_taxonomy: None,
        }
    }

    /// A term archive for the given taxonomy.
    pub fn taxonomy_archive(taxonomy: impl Into<String>) -> Self {
        Self {
            current_post: None,
            is_single: false,
            archive_taxonomy: Some(taxonomy.into()),
        }
    }

    /// Whether this view is an archive of `taxonomy`.
    pub fn is_archive_of(&self, taxonomy: &str) -> bool {
        self.archive_taxonomy.as_deref() == Some(taxonomy)
    }
}
