//! Overridable markup fragments.
//!
//! Each [`Fragment`] has a built-in default. Callers register filters that
//! receive the current value and return a replacement; filters for the same
//! fragment run in registration order, each seeing the previous output.

use std::collections::HashMap;

/// A named piece of markup that callers may rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Lead-in before the series link in the summary block.
    SeriesText,
    /// Marker appended to the current post's title.
    CurrentText,
    /// Paragraph introducing the list.
    ListIntro,
    /// Opening `<ol>` tag, including the `start` attribute.
    ListOpening,
    /// Closing tag of the list.
    ListEnding,
    /// Lead-in for the continue-reading link.
    NextText,
}

impl Fragment {
    /// Extension point name the fragment is known by on the host.
    pub fn hook_name(self) -> &'static str {
        match self {
            Self::SeriesText => "post-series-manager-series-text",
            Self::CurrentText => "post-series-manager-current-text",
            Self::ListIntro => "post-series-list-intro-text",
            Self::ListOpening => "post-series-list-opening-tags",
            Self::ListEnding => "post-series-list-ending-tags",
            Self::NextText => "post-series-manager-next-text",
        }
    }
}

/// A fragment rewrite.
pub type FragmentFilter = Box<dyn Fn(String) -> String + Send + Sync>;

/// Registered fragment filters.
#[derive(Default)]
pub struct RenderFilters {
    filters: HashMap<Fragment, Vec<FragmentFilter>>,
}

impl RenderFilters {
    /// No filters; every fragment renders its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter for `fragment`.
    pub fn add<F>(&mut self, fragment: Fragment, filter: F) -> &mut Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.filters.entry(fragment).or_default().push(Box::new(filter));
        self
    }

    /// Builder-style [`add`](Self::add).
    pub fn with<F>(mut self, fragment: Fragment, filter: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.add(fragment, filter);
        self
    }

    /// Register a filter that always yields `value`.
    pub fn with_value(self, fragment: Fragment, value: impl Into<String>) -> Self {
        let value = value.into();
        self.with(fragment, move |_| value.clone())
    }

    /// Run the filters registered for `fragment` over its default value.
    pub fn apply(&self, fragment: Fragment, default: String) -> String {
        match self.filters.get(&fragment) {
            Some(chain) => chain.iter().fold(default, |value, filter| filter(value)),
            None => default,
        }
    }
}

impl std::fmt::Debug for RenderFilters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<_> = self
            .filters
            .iter()
            .map(|(fragment, chain)| (fragment.hook_name(), chain.len()))
            .collect();
        counts.sort();
        f.debug_struct("RenderFilters").field("filters", &counts).finish()
    }
}
