//! Host platform services consumed by the series renderer.
//!
//! The content store owns posts, terms, ordering and permalinks. Each trait
//! here is one narrow contract; [`Host`] bundles them for callers that need
//! everything. Lookups never fail: missing data comes back empty or `None`.

use postseries_shared::{Post, PostId, SeriesTerm, SortOrder};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Fetches the member posts of a taxonomy term.
pub trait TaxonomyQuery: Send + Sync {
    /// All published posts tagged with `slug` in `taxonomy`, sorted by
    /// publish order in the requested direction.
    fn series_posts(&self, taxonomy: &str, slug: &str, order: SortOrder) -> Vec<Post>;
}

/// Resolves series terms and their canonical links.
pub trait TermResolver: Send + Sync {
    /// Terms of `taxonomy` assigned to a post, in host order.
    fn post_terms(&self, post: PostId, taxonomy: &str) -> Vec<SeriesTerm>;

    /// A single term by name, with its archive link.
    fn term(&self, taxonomy: &str, name: &str) -> Option<SeriesTerm>;
}

/// Reads a single post.
pub trait PostAccessor: Send + Sync {
    /// The post with this id, if it exists and is visible.
    fn post(&self, id: PostId) -> Option<Post>;
}

/// Finds the next post in publish order sharing a term with the current one.
pub trait AdjacentPosts: Send + Sync {
    /// Id of the next post after `post` that shares at least one `taxonomy`
    /// term with it.
    fn next_in_same_term(&self, post: PostId, taxonomy: &str) -> Option<PostId>;
}

/// Everything the series renderer needs from the host.
pub trait Host: TaxonomyQuery + TermResolver + PostAccessor + AdjacentPosts {}

impl<T> Host for T where T: TaxonomyQuery + TermResolver + PostAccessor + AdjacentPosts {}

/// Position of `current` within a fetched series list.
///
/// Matching is by post id; `None` means the host filtered the post out.
pub fn locate_post(posts: &[Post], current: PostId) -> Option<usize> {
    posts.iter().position(|p| p.id == current)
}
