//! In-memory host backed by a JSON site snapshot.
//!
//! Stands in for the content store when rendering from the command line or
//! in tests. The snapshot lists posts and the series terms they reference:
//!
//! ```json
//! {
//!   "series": [{ "name": "rust-basics", "link": "https://blog.example.com/post-series/rust-basics/" }],
//!   "posts": [{
//!     "id": 1,
//!     "title": "Ownership",
//!     "permalink": "https://blog.example.com/ownership/",
//!     "published_at": "2024-01-02T09:00:00Z",
//!     "series": ["rust-basics"]
//!   }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use postseries_shared::{Post, PostId, PostSeriesError, Result, SeriesTerm, SortOrder};

use crate::host::{AdjacentPosts, PostAccessor, TaxonomyQuery, TermResolver};

/// On-disk site snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSnapshot {
    /// Series terms referenced by posts.
    #[serde(default)]
    pub series: Vec<SeriesTerm>,
    /// Published posts, in any order.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Host implementation over a validated [`SiteSnapshot`].
#[derive(Debug, Clone)]
pub struct MemoryHost {
    taxonomy: String,
    terms: Vec<SeriesTerm>,
    /// Sorted by `(published_at, id)`.
    posts: Vec<Post>,
}

impl MemoryHost {
    /// Build a host serving `snapshot` under the `taxonomy` name.
    ///
    /// Rejects duplicate post ids or series names, non-http(s) permalinks,
    /// and posts that reference a series twice or one missing from
    /// `snapshot.series`.
    pub fn new(taxonomy: impl Into<String>, snapshot: SiteSnapshot) -> Result<Self> {
        let SiteSnapshot { series, mut posts } = snapshot;

        validate_posts(&series, &posts)?;
        posts.sort_by(|a, b| (a.published_at, a.id).cmp(&(b.published_at, b.id)));
        debug!(posts = posts.len(), series = series.len(), "memory host ready");

        Ok(Self {
            taxonomy: taxonomy.into(),
            terms: series,
            posts,
        })
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(taxonomy: impl Into<String>, json: &str) -> Result<Self> {
        Self::new(taxonomy, parse_snapshot("<inline>", json)?)
    }

    /// Load a snapshot from a JSON file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(taxonomy: impl Into<String>, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PostSeriesError::io(path, e))?;
        let snapshot = parse_snapshot(path.display().to_string(), &content)?;
        Self::new(taxonomy, snapshot)
    }

    /// All posts in ascending publish order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    fn serves(&self, taxonomy: &str) -> bool {
        self.taxonomy == taxonomy
    }
}

fn parse_snapshot(origin: impl Into<String>, json: &str) -> Result<SiteSnapshot> {
    serde_json::from_str(json).map_err(|e| PostSeriesError::snapshot(origin, e))
}

fn validate_posts(series: &[SeriesTerm], posts: &[Post]) -> Result<()> {
    let mut known = HashSet::new();
    for term in series {
        if !known.insert(term.name.as_str()) {
            return Err(PostSeriesError::validation(format!(
                "series '{}' is listed more than once",
                term.name
            )));
        }
    }

    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.id) {
            return Err(PostSeriesError::validation(format!(
                "duplicate post id {}",
                post.id
            )));
        }
        validate_permalink(post)?;

        // A post is in a series at most once; duplicates would render the
        // series block twice.
        let mut memberships = HashSet::new();
        for name in &post.series {
            if !known.contains(name.as_str()) {
                return Err(PostSeriesError::validation(format!(
                    "post {} references unknown series '{name}'",
                    post.id
                )));
            }
            if !memberships.insert(name.as_str()) {
                return Err(PostSeriesError::validation(format!(
                    "post {} lists series '{name}' more than once",
                    post.id
                )));
            }
        }
    }
    Ok(())
}

fn validate_permalink(post: &Post) -> Result<()> {
    let url = Url::parse(&post.permalink).map_err(|e| {
        PostSeriesError::validation(format!(
            "post {} has invalid permalink '{}': {e}",
            post.id, post.permalink
        ))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(PostSeriesError::validation(format!(
            "post {} permalink uses unsupported scheme '{scheme}'",
            post.id
        ))),
    }
}

impl TaxonomyQuery for MemoryHost {
    fn series_posts(&self, taxonomy: &str, slug: &str, order: SortOrder) -> Vec<Post> {
        if !self.serves(taxonomy) {
            return Vec::new();
        }
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.in_series(slug))
            .cloned()
            .collect();
        if order == SortOrder::Desc {
            posts.reverse();
        }
        posts
    }
}

impl TermResolver for MemoryHost {
    fn post_terms(&self, post: PostId, taxonomy: &str) -> Vec<SeriesTerm> {
        if !self.serves(taxonomy) {
            return Vec::new();
        }
        let Some(post) = self.posts.iter().find(|p| p.id == post) else {
            return Vec::new();
        };
        post.series
            .iter()
            .filter_map(|name| self.terms.iter().find(|t| &t.name == name))
            .cloned()
            .collect()
    }

    fn term(&self, taxonomy: &str, name: &str) -> Option<SeriesTerm> {
        if !self.serves(taxonomy) {
            return None;
        }
        self.terms.iter().find(|t| t.name == name).cloned()
    }
}

impl PostAccessor for MemoryHost {
    fn post(&self, id: PostId) -> Option<Post> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }
}

impl AdjacentPosts for MemoryHost {
    fn next_in_same_term(&self, post: PostId, taxonomy: &str) -> Option<PostId> {
        if !self.serves(taxonomy) {
            return None;
        }
        let index = self.posts.iter().position(|p| p.id == post)?;
        let current = &self.posts[index];
        self.posts[index + 1..]
            .iter()
            .find(|candidate| current.series.iter().any(|s| candidate.in_series(s)))
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r#"{
        "series": [
            { "name": "rust-basics", "link": "https://blog.example.com/post-series/rust-basics/" },
            { "name": "async", "link": "https://blog.example.com/post-series/async/" }
        ],
        "posts": [
            { "id": 3, "title": "Borrowing", "permalink": "https://blog.example.com/borrowing/",
              "published_at": "2024-01-03T09:00:00Z", "series": ["rust-basics"] },
            { "id": 1, "title": "Ownership", "permalink": "https://blog.example.com/ownership/",
              "published_at": "2024-01-01T09:00:00Z", "series": ["rust-basics"] },
            { "id": 2, "title": "Off topic", "permalink": "https://blog.example.com/off-topic/",
              "published_at": "2024-01-02T09:00:00Z" },
            { "id": 4, "title": "Futures", "permalink": "https://blog.example.com/futures/",
              "published_at": "2024-01-04T09:00:00Z", "series": ["async", "rust-basics"] },
            { "id": 5, "title": "Executors", "permalink": "https://blog.example.com/executors/",
              "published_at": "2024-01-05T09:00:00Z", "series": ["async"] }
        ]
    }"#;

    fn host() -> MemoryHost {
        MemoryHost::from_json_str("post-series", SITE).expect("valid site")
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn series_posts_follow_publish_order() {
        let host = host();
        let asc = host.series_posts("post-series", "rust-basics", SortOrder::Asc);
        assert_eq!(ids(&asc), vec![1, 3, 4]);
        let desc = host.series_posts("post-series", "rust-basics", SortOrder::Desc);
        assert_eq!(ids(&desc), vec![4, 3, 1]);
    }

    #[test]
    fn other_taxonomies_are_empty() {
        let host = host();
        assert!(host.series_posts("category", "rust-basics", SortOrder::Asc).is_empty());
        assert!(host.post_terms(PostId(1), "category").is_empty());
        assert_eq!(host.term("category", "async"), None);
    }

    #[test]
    fn post_terms_keep_post_order() {
        let terms = host().post_terms(PostId(4), "post-series");
        let names: Vec<_> = terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["async", "rust-basics"]);
        assert!(host().post_terms(PostId(2), "post-series").is_empty());
        assert!(host().post_terms(PostId(42), "post-series").is_empty());
    }

    #[test]
    fn next_post_shares_a_term() {
        let host = host();
        // Post 2 is newer than 1 but not in any series.
        assert_eq!(host.next_in_same_term(PostId(1), "post-series"), Some(PostId(3)));
        assert_eq!(host.next_in_same_term(PostId(3), "post-series"), Some(PostId(4)));
        assert_eq!(host.next_in_same_term(PostId(4), "post-series"), Some(PostId(5)));
        assert_eq!(host.next_in_same_term(PostId(5), "post-series"), None);
        assert_eq!(host.next_in_same_term(PostId(2), "post-series"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{ "posts": [
            { "id": 1, "title": "A", "permalink": "https://x.test/a", "published_at": "2024-01-01T00:00:00Z" },
            { "id": 1, "title": "B", "permalink": "https://x.test/b", "published_at": "2024-01-02T00:00:00Z" }
        ] }"#;
        let err = MemoryHost::from_json_str("post-series", json).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate post id 1"));
    }

    #[test]
    fn rejects_bad_permalinks_and_unknown_series() {
        let json = r#"{ "posts": [
            { "id": 1, "title": "A", "permalink": "/relative", "published_at": "2024-01-01T00:00:00Z" }
        ] }"#;
        assert!(MemoryHost::from_json_str("post-series", json).is_err());

        let json = r#"{ "posts": [
            { "id": 1, "title": "A", "permalink": "ftp://x.test/a", "published_at": "2024-01-01T00:00:00Z" }
        ] }"#;
        let err = MemoryHost::from_json_str("post-series", json).expect_err("scheme");
        assert!(err.to_string().contains("ftp"));

        let json = r#"{ "posts": [
            { "id": 1, "title": "A", "permalink": "https://x.test/a",
              "published_at": "2024-01-01T00:00:00Z", "series": ["ghost"] }
        ] }"#;
        let err = MemoryHost::from_json_str("post-series", json).expect_err("unknown series");
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn rejects_duplicate_membership() {
        let json = r#"{
            "series": [{ "name": "s", "link": "https://x.test/post-series/s/" }],
            "posts": [
                { "id": 1, "title": "A", "permalink": "https://x.test/a",
                  "published_at": "2024-01-01T00:00:00Z", "series": ["s", "s"] },
                { "id": 2, "title": "B", "permalink": "https://x.test/b",
                  "published_at": "2024-01-02T00:00:00Z", "series": ["s"] }
            ]
        }"#;
        let err = MemoryHost::from_json_str("post-series", json).expect_err("duplicate membership");
        assert!(err.to_string().contains("post 1 lists series 's' more than once"));
    }

    #[test]
    fn rejects_duplicate_series_terms() {
        let json = r#"{
            "series": [
                { "name": "s", "link": "https://x.test/post-series/s/" },
                { "name": "s", "link": "https://x.test/other/s/" }
            ],
            "posts": []
        }"#;
        let err = MemoryHost::from_json_str("post-series", json).expect_err("duplicate term");
        assert!(err.to_string().contains("series 's' is listed more than once"));
    }

    #[test]
    fn malformed_json_names_its_origin() {
        let result = MemoryHost::from_json_str("post-series", "{ not json");
        match result {
            Err(PostSeriesError::Snapshot { origin, .. }) => assert_eq!(origin, "<inline>"),
            other => panic!("expected snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn site_fixture_loads() {
        let host = MemoryHost::load(
            "post-series",
            Path::new("../../../fixtures/json/site.fixture.json"),
        )
        .expect("load fixture");
        assert_eq!(host.posts().len(), 9);
        assert_eq!(
            host.series_posts("post-series", "rust-basics", SortOrder::Asc).len(),
            7
        );
    }
}
