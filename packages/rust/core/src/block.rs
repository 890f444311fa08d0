//! Series summary block: "This post is part of the series …" plus the
//! windowed list, once per series the post belongs to.

use tracing::{debug, instrument};

use postseries_shared::ViewContext;

use crate::filters::Fragment;
use crate::host::Host;
use crate::manager::SeriesManager;
use crate::markup::escape_attr;

impl<H: Host> SeriesManager<H> {
    /// Summary blocks for every series of the current post, in host order.
    ///
    /// The list part is only rendered on single-post views; elsewhere each
    /// block carries just the series link. Empty when the view has no
    /// current post or the post is in no series.
    #[instrument(skip_all, fields(current = ?view.current_post, single = view.is_single))]
    pub fn series_block(&self, view: &ViewContext) -> String {
        let Some(current) = view.current_post else {
            return String::new();
        };

        let terms = self.host().post_terms(current, self.taxonomy());
        if terms.is_empty() {
            return String::new();
        }
        debug!(series = terms.len(), "rendering series blocks");

        let series_text = self.filters().apply(
            Fragment::SeriesText,
            self.catalog().translate(&self.config().labels.series_text),
        );

        let mut html = String::new();
        for term in &terms {
            let link = format!(r#"<a href="{}">{}</a>"#, escape_attr(&term.link), term.name);
            let list = if view.is_single {
                self.series_list(term, current).unwrap_or_default()
            } else {
                String::new()
            };
            html.push_str(&format!(
                r#"<div class="post-series-manager-block"><p>{series_text} {link}</p>{list}</div>"#
            ));
        }
        html
    }
}
