//! The series manager: host services, configuration and fragment filters
//! bundled for the per-request render entry points.
//!
//! The render entry points themselves live next to their markup:
//! [`series_block`](SeriesManager::series_block) in `block`,
//! [`series_nav`](SeriesManager::series_nav) in `nav`,
//! [`filter_content`](SeriesManager::filter_content) in `content`.

use tracing::instrument;

use postseries_shared::{AppConfig, PostId, SeriesTerm, SortOrder};

use crate::filters::RenderFilters;
use crate::host::Host;
use crate::i18n::Catalog;
use crate::list::SeriesListBuilder;

/// Renders series blocks for posts served by `H`.
#[derive(Debug)]
pub struct SeriesManager<H> {
    host: H,
    config: AppConfig,
    catalog: Catalog,
    filters: RenderFilters,
}

impl<H: Host> SeriesManager<H> {
    /// Manager with the catalog from `config` and no fragment filters.
    pub fn new(host: H, config: AppConfig) -> Self {
        let catalog = Catalog::from_config(&config);
        Self {
            host,
            config,
            catalog,
            filters: RenderFilters::new(),
        }
    }

    /// Replace the fragment filters.
    pub fn with_filters(mut self, filters: RenderFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn filters(&self) -> &RenderFilters {
        &self.filters
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Taxonomy the series terms live under.
    pub fn taxonomy(&self) -> &str {
        &self.config.taxonomy.name
    }

    /// List builder sharing this manager's labels, catalog and filters.
    pub fn list_builder(&self) -> SeriesListBuilder<'_> {
        SeriesListBuilder::new(&self.config.labels, &self.catalog, &self.filters)
    }

    /// Fetch `term`'s posts oldest first and render the window around
    /// `current`. `None` when the series has fewer than two posts.
    #[instrument(skip(self, term), fields(series = %term.name))]
    pub fn series_list(&self, term: &SeriesTerm, current: PostId) -> Option<String> {
        let posts = self
            .host
            .series_posts(self.taxonomy(), &term.name, SortOrder::Asc);
        self.list_builder().build(&posts, current)
    }
}
