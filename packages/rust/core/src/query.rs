//! Listing order for series archives.
//!
//! Blogs list newest first, but a series reads from part 1, so the main query
//! of a series archive is switched to ascending order.

use tracing::debug;

use postseries_shared::{SortOrder, ViewContext};

use crate::host::Host;
use crate::manager::SeriesManager;

/// The host's listing query, as far as ordering is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    /// True for the request's main query, false for secondary loops.
    pub is_main: bool,
    /// Requested direction.
    pub order: SortOrder,
}

impl ListingQuery {
    /// The request's main query with the host's default order.
    pub fn main() -> Self {
        Self {
            is_main: true,
            order: SortOrder::default(),
        }
    }

    /// A secondary loop (widgets, related posts) with the host's default order.
    pub fn secondary() -> Self {
        Self {
            is_main: false,
            order: SortOrder::default(),
        }
    }
}

/// Force ascending order on the main query of a `taxonomy` archive.
///
/// Returns whether the query was changed.
pub fn adjust_listing_order(query: &mut ListingQuery, view: &ViewContext, taxonomy: &str) -> bool {
    if !query.is_main || !view.is_archive_of(taxonomy) {
        return false;
    }
    debug!(taxonomy, from = ?query.order, "series archive listed oldest first");
    query.order = SortOrder::Asc;
    true
}

impl<H: Host> SeriesManager<H> {
    /// [`adjust_listing_order`] for this manager's taxonomy.
    pub fn adjust_listing_order(&self, query: &mut ListingQuery, view: &ViewContext) -> bool {
        adjust_listing_order(query, view, self.taxonomy())
    }
}
