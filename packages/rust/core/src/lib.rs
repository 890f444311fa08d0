//! Series rendering for Post Series.
//!
//! The heart of this crate is the windowed series list ([`window`], [`list`]).
//! Around it sit the per-request entry points on [`SeriesManager`]: summary
//! block, continue-reading navigation, content filter, shortcodes and archive
//! ordering. Host platform services are reached through the traits in
//! [`host`]; [`memory::MemoryHost`] implements them over a JSON snapshot.

mod block;
mod content;
pub mod filters;
pub mod host;
pub mod i18n;
pub mod list;
pub mod manager;
pub mod markup;
pub mod memory;
mod nav;
pub mod query;
pub mod shortcode;
pub mod taxonomy;
pub mod window;

pub use filters::{Fragment, RenderFilters};
pub use host::Host;
pub use i18n::Catalog;
pub use list::SeriesListBuilder;
pub use manager::SeriesManager;
pub use memory::{MemoryHost, SiteSnapshot};
pub use query::ListingQuery;
pub use window::{DisplayWindow, WINDOW_RADIUS, build_window};
