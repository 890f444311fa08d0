//! Post content filter: summary block before the body, navigation after.

use tracing::instrument;

use postseries_shared::ViewContext;

use crate::host::Host;
use crate::manager::SeriesManager;

impl<H: Host> SeriesManager<H> {
    /// Wrap `content` with the series block and navigation.
    ///
    /// Only single-post views are touched; any other view gets `content`
    /// back unchanged.
    #[instrument(skip_all, fields(current = ?view.current_post, len = content.len()))]
    pub fn filter_content(&self, content: &str, view: &ViewContext) -> String {
        if !view.is_single {
            return content.to_string();
        }
        let before = self.series_block(view);
        let after = self.series_nav(view);
        format!("{before}{content}{after}")
    }
}
