//! `[post_series_block]` and `[post_series_nav]` shortcodes.
//!
//! Authors can place either block anywhere in a post body, self-closing
//! (`[post_series_nav]`, `[post_series_nav /]`) or enclosing
//! (`[post_series_nav]...[/post_series_nav]`). An enclosing pair is replaced
//! as a whole and its inner content is dropped. Doubled brackets
//! (`[[post_series_nav]]`) print the shortcode literally. Other shortcodes
//! are left for the host.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use postseries_shared::ViewContext;

use crate::host::Host;
use crate::manager::SeriesManager;

/// Opening tag; group 2 is set for the self-closing form.
static OPENING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(post_series_block|post_series_nav)\s*(/)?\]").expect("valid shortcode regex")
});

/// Shortcodes handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcode {
    /// Series summary block.
    Block,
    /// Continue-reading navigation.
    Nav,
}

impl Shortcode {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Block => "post_series_block",
            Self::Nav => "post_series_nav",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "post_series_block" => Some(Self::Block),
            "post_series_nav" => Some(Self::Nav),
            _ => None,
        }
    }
}

/// Replace each series shortcode in `content` with `render(shortcode)`.
pub fn expand_with<F>(content: &str, mut render: F) -> String
where
    F: FnMut(Shortcode) -> String,
{
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for caps in OPENING_TAG_RE.captures_iter(content) {
        let Some(opening) = caps.get(0) else {
            continue;
        };
        // Openers inside an already consumed enclosing pair are dropped with it.
        if opening.start() < cursor {
            continue;
        }
        let tag = &caps[1];
        let Some(code) = Shortcode::from_tag(tag) else {
            continue;
        };

        let mut end = opening.end();
        if caps.get(2).is_none() {
            let closing = format!("[/{tag}]");
            if let Some(offset) = content[end..].find(&closing) {
                end += offset + closing.len();
            }
        }

        let escaped = opening.start() > cursor
            && content[..opening.start()].ends_with('[')
            && content[end..].starts_with(']');
        if escaped {
            out.push_str(&content[cursor..opening.start() - 1]);
            out.push_str(&content[opening.start()..end]);
            cursor = end + 1;
        } else {
            out.push_str(&content[cursor..opening.start()]);
            out.push_str(&render(code));
            cursor = end;
        }
    }

    out.push_str(&content[cursor..]);
    out
}

impl<H: Host> SeriesManager<H> {
    /// Render the series shortcodes found in `content` for `view`.
    pub fn expand_shortcodes(&self, content: &str, view: &ViewContext) -> String {
        expand_with(content, |code| {
            debug!(tag = code.tag(), "expanding shortcode");
            match code {
                Shortcode::Block => self.series_block(view),
                Shortcode::Nav => self.series_nav(view),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postseries_shared::PostId;

    use crate::manager::test_support::fixture_manager;

    fn tags(content: &str) -> String {
        expand_with(content, |code| format!("<{}>", code.tag()))
    }

    #[test]
    fn expands_known_tags() {
        assert_eq!(
            tags("a [post_series_block] b [post_series_nav /] c"),
            "a <post_series_block> b <post_series_nav> c"
        );
    }

    #[test]
    fn leaves_other_shortcodes() {
        assert_eq!(tags("[gallery ids=\"1,2\"] [post_series]"), "[gallery ids=\"1,2\"] [post_series]");
    }

    #[test]
    fn doubled_brackets_escape() {
        assert_eq!(tags("use [[post_series_nav]] to"), "use [post_series_nav] to");
    }

    #[test]
    fn single_stray_bracket_is_kept() {
        assert_eq!(tags("[[post_series_block]"), "[<post_series_block>");
    }

    #[test]
    fn enclosing_form_is_replaced_whole() {
        assert_eq!(
            tags("x[post_series_nav]inner[/post_series_nav]y"),
            "x<post_series_nav>y"
        );
        assert_eq!(
            tags("[post_series_block]a [post_series_nav] b[/post_series_block]!"),
            "<post_series_block>!"
        );
    }

    #[test]
    fn self_closing_form_keeps_later_closing_tag() {
        assert_eq!(
            tags("[post_series_nav /] a [/post_series_nav]"),
            "<post_series_nav> a [/post_series_nav]"
        );
    }

    #[test]
    fn escaped_enclosing_pair_prints_literally() {
        assert_eq!(
            tags("[[post_series_nav]x[/post_series_nav]]"),
            "[post_series_nav]x[/post_series_nav]"
        );
    }

    #[test]
    fn manager_renders_blocks_in_place() {
        let manager = fixture_manager();
        let view = ViewContext::single(PostId(1));
        let html = manager.expand_shortcodes("<p>Intro</p>[post_series_nav]", &view);
        assert_eq!(html, format!("<p>Intro</p>{}", manager.series_nav(&view)));
        assert!(html.contains("rel=\"next\""));

        let html = manager.expand_shortcodes("[post_series_block]", &ViewContext::single(PostId(8)));
        assert_eq!(html, "");
    }
}
