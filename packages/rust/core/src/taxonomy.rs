//! Taxonomy registration descriptor handed to the host.
//!
//! The host owns term storage and rewrite rules; this module only describes
//! the taxonomy (name, slug, localized admin labels) so the host can register
//! it.

use serde::{Deserialize, Serialize};

use postseries_shared::AppConfig;

use crate::i18n::Catalog;

/// Post type the series taxonomy attaches to.
pub const OBJECT_TYPE: &str = "post";

/// Everything the host needs to register the series taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    pub name: String,
    pub object_type: String,
    pub label: String,
    pub rewrite: Rewrite,
    pub labels: TaxonomyLabels,
    pub show_in_rest: bool,
    /// Text domain the labels were translated in.
    pub text_domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    pub slug: String,
}

/// Admin screen labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyLabels {
    pub name: String,
    pub singular_name: String,
    pub all_items: String,
    pub edit_item: String,
    pub view_item: String,
    pub update_item: String,
    pub add_new_item: String,
    pub new_item_name: String,
    pub search_items: String,
    pub popular_items: String,
    pub separate_items_with_commas: String,
    pub add_or_remove_items: String,
    pub choose_from_most_used: String,
    pub not_found: String,
}

impl TaxonomyLabels {
    fn localized(catalog: &Catalog) -> Self {
        let t = |msgid: &str| catalog.translate(msgid);
        Self {
            name: t("Post Series"),
            singular_name: t("Post Series"),
            all_items: t("All Post Series"),
            edit_item: t("Edit Post Series"),
            view_item: t("View Post Series"),
            update_item: t("Update Post Series"),
            add_new_item: t("Add New Post Series"),
            new_item_name: t("New Post Series Name"),
            search_items: t("Search Post Series"),
            popular_items: t("Popular Post Series"),
            separate_items_with_commas: t("Separate post series with commas"),
            add_or_remove_items: t("Add or remove post series"),
            choose_from_most_used: t("Choose from most used post series"),
            not_found: t("No post series found"),
        }
    }
}

/// Describe the series taxonomy for `config`, labels run through `catalog`.
pub fn taxonomy_definition(config: &AppConfig, catalog: &Catalog) -> TaxonomyDefinition {
    let labels = TaxonomyLabels::localized(catalog);
    TaxonomyDefinition {
        name: config.taxonomy.name.clone(),
        object_type: OBJECT_TYPE.to_string(),
        label: labels.name.clone(),
        rewrite: Rewrite {
            slug: config.taxonomy.rewrite_slug.clone(),
        },
        labels,
        show_in_rest: config.taxonomy.show_in_rest,
        text_domain: catalog.domain().to_string(),
    }
}
