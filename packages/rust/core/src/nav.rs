//! "Continue reading" navigation to the next post in the same series.

use tracing::{debug, instrument};

use postseries_shared::ViewContext;

use crate::filters::Fragment;
use crate::host::Host;
use crate::manager::SeriesManager;
use crate::markup::escape_attr;

impl<H: Host> SeriesManager<H> {
    /// Link to the next post sharing a series with the current one.
    ///
    /// Empty unless the view is a single post, the post belongs to a series
    /// and a newer post in one of its series exists.
    #[instrument(skip_all, fields(current = ?view.current_post))]
    pub fn series_nav(&self, view: &ViewContext) -> String {
        if !view.is_single {
            return String::new();
        }
        let Some(current) = view.current_post else {
            return String::new();
        };
        if self.host().post_terms(current, self.taxonomy()).is_empty() {
            return String::new();
        }

        let Some(next) = self
            .host()
            .next_in_same_term(current, self.taxonomy())
            .and_then(|id| self.host().post(id))
        else {
            debug!("no next post in series");
            return String::new();
        };

        let next_text = self.filters().apply(
            Fragment::NextText,
            self.catalog().translate(&self.config().labels.next_text),
        );
        let link = format!(
            r#"<a href="{}" rel="next">{}</a>"#,
            escape_attr(&next.permalink),
            next.title
        );
        format!(r#"<div class="post-series-nav"><p>{next_text}<br /> {link}</p></div>"#)
    }
}
