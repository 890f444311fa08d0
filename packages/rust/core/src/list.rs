//! Series list builder.
//!
//! Turns a fetched series (ascending publish order) into an ordered list of
//! the posts around the current one. Numbering follows the true series
//! position, and the current post is shown as plain text with a marker
//! instead of a link.

use std::fmt::Write as _;

use tracing::{debug, instrument};

use postseries_shared::{LabelsConfig, Post, PostId};

use crate::filters::{Fragment, RenderFilters};
use crate::host::locate_post;
use crate::i18n::Catalog;
use crate::markup::escape_attr;
use crate::window::{DisplayWindow, build_window};

/// Renders the windowed list for one series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesListBuilder<'a> {
    labels: &'a LabelsConfig,
    catalog: &'a Catalog,
    filters: &'a RenderFilters,
}

impl<'a> SeriesListBuilder<'a> {
    pub fn new(labels: &'a LabelsConfig, catalog: &'a Catalog, filters: &'a RenderFilters) -> Self {
        Self {
            labels,
            catalog,
            filters,
        }
    }

    /// Window and render `posts` around `current`.
    ///
    /// Returns `None` for series with fewer than two posts.
    #[instrument(skip_all, fields(series_len = posts.len(), current = %current))]
    pub fn build(&self, posts: &[Post], current: PostId) -> Option<String> {
        let index = locate_post(posts, current);
        let window = build_window(posts.len(), index)?;
        debug!(?index, entries = window.len(), "rendering series list");
        Some(self.render_list(posts, window, current))
    }

    /// Render the entries of `window` as an ordered list.
    ///
    /// `window` must lie within `posts`; indices past the end are skipped.
    pub fn render_list(&self, posts: &[Post], window: DisplayWindow, current: PostId) -> String {
        let intro = self.filters.apply(
            Fragment::ListIntro,
            format!("<p>{}</p>", self.catalog.translate(&self.labels.list_intro)),
        );
        let opening = self.filters.apply(
            Fragment::ListOpening,
            format!(
                r#"<ol class="post-series-manager-post-list" start="{}">"#,
                window.start_number()
            ),
        );
        let marker = self.filters.apply(
            Fragment::CurrentText,
            self.catalog.translate(&self.labels.current_text),
        );
        let ending = self.filters.apply(Fragment::ListEnding, "</ol>".to_string());

        let mut html = intro;
        html.push_str(&opening);

        for post in window.indices().filter_map(|i| posts.get(i)) {
            let title = if post.id == current {
                format!("{} {marker}", post.title)
            } else {
                format!("<a href='{}'>{}</a>", escape_attr(&post.permalink), post.title)
            };
            let _ = write!(html, "<li class='post-series-manager-post'>{title}</li>");
        }

        html.push_str(&ending);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(len: u64) -> Vec<Post> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        (1..=len)
            .map(|n| Post {
                id: PostId(n),
                title: format!("Part {n}"),
                permalink: format!("https://blog.example.com/part-{n}/"),
                published_at: base + Duration::days(n as i64),
                series: vec!["guide".into()],
            })
            .collect()
    }

    fn render(posts: &[Post], current: u64, filters: &RenderFilters) -> Option<String> {
        let labels = LabelsConfig::default();
        let catalog = Catalog::default();
        SeriesListBuilder::new(&labels, &catalog, filters).build(posts, PostId(current))
    }

    #[test]
    fn single_post_series_renders_nothing() {
        let filters = RenderFilters::new();
        assert_eq!(render(&series(1), 1, &filters), None);
        assert_eq!(render(&[], 1, &filters), None);
    }

    #[test]
    fn renders_exact_markup() {
        let html = render(&series(3), 2, &RenderFilters::new()).expect("list");
        assert_eq!(
            html,
            "<p>Other posts in this series:</p>\
             <ol class=\"post-series-manager-post-list\" start=\"1\">\
             <li class='post-series-manager-post'><a href='https://blog.example.com/part-1/'>Part 1</a></li>\
             <li class='post-series-manager-post'>Part 2 (Current)</li>\
             <li class='post-series-manager-post'><a href='https://blog.example.com/part-3/'>Part 3</a></li>\
             </ol>"
        );
    }

    #[test]
    fn start_attribute_reflects_series_position() {
        let html = render(&series(10), 6, &RenderFilters::new()).expect("list");
        assert!(html.contains(r#"start="4""#));
        assert_eq!(html.matches("<li").count(), 5);
        assert!(html.contains("Part 4"));
        assert!(html.contains("Part 8"));
        assert!(!html.contains("Part 3<"));
        assert!(!html.contains("Part 9"));
    }

    #[test]
    fn only_current_entry_is_unlinked() {
        let posts = series(7);
        let html = render(&posts, 4, &RenderFilters::new()).expect("list");
        assert!(!html.contains("part-4/'"));
        assert!(html.contains("Part 4 (Current)"));
        for n in [2, 3, 5, 6] {
            assert!(html.contains(&format!(
                "<a href='https://blog.example.com/part-{n}/'>Part {n}</a>"
            )));
        }
        assert_eq!(html.matches("<a href=").count(), 4);
    }

    #[test]
    fn last_post_gets_clamped_window() {
        let html = render(&series(10), 10, &RenderFilters::new()).expect("list");
        assert!(html.contains(r#"start="8""#));
        assert_eq!(html.matches("<li").count(), 3);
    }

    // Historical fallback: a current post missing from the list anchors the
    // window at the start and no entry is marked current.
    #[test]
    fn missing_current_post_anchors_at_start() {
        let html = render(&series(10), 99, &RenderFilters::new()).expect("list");
        assert!(html.contains(r#"start="1""#));
        assert_eq!(html.matches("<li").count(), 3);
        assert!(!html.contains("(Current)"));
        assert_eq!(html.matches("<a href=").count(), 3);
    }

    #[test]
    fn fragments_can_be_overridden() {
        let filters = RenderFilters::new()
            .with_value(Fragment::ListIntro, "<h4>More</h4>")
            .with(Fragment::ListOpening, |s| s.replace("<ol", "<ol data-series"))
            .with_value(Fragment::ListEnding, "</ol><!-- end -->")
            .with_value(Fragment::CurrentText, "&larr; you are here");
        let html = render(&series(3), 1, &filters).expect("list");
        assert!(html.starts_with("<h4>More</h4><ol data-series class="));
        assert!(html.contains("Part 1 &larr; you are here"));
        assert!(html.ends_with("</ol><!-- end -->"));
    }

    #[test]
    fn translated_labels_are_used() {
        let labels = LabelsConfig::default();
        let catalog = Catalog::new(
            [
                ("(Current)".to_string(), "(Aktuell)".to_string()),
                (
                    "Other posts in this series:".to_string(),
                    "Weitere Artikel dieser Serie:".to_string(),
                ),
            ]
            .into_iter()
            .collect(),
        );
        let filters = RenderFilters::new();
        let html = SeriesListBuilder::new(&labels, &catalog, &filters)
            .build(&series(2), PostId(2))
            .expect("list");
        assert!(html.starts_with("<p>Weitere Artikel dieser Serie:</p>"));
        assert!(html.contains("Part 2 (Aktuell)"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let posts = series(9);
        let filters = RenderFilters::new();
        let first = render(&posts, 5, &filters);
        let second = render(&posts, 5, &filters);
        assert_eq!(first, second);
    }
}
